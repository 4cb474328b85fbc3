// Activity wire types exchanged with the host channel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Activity type discriminator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    Message,
    ConversationUpdate,
    Invoke,
    /// Any other type, or none at all
    #[default]
    #[serde(other)]
    Unknown,
}

/// A user or bot account in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChannelAccount {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_type: Option<String>,
}

/// One inbound or outbound activity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members_added: Vec<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Activity {
    /// Build a text reply addressed back to the sender of `incoming`
    pub fn reply_text(incoming: &Activity, text: &str) -> Self {
        Self {
            activity_type: ActivityType::Message,
            id: None,
            timestamp: Some(Utc::now()),
            service_url: incoming.service_url.clone(),
            channel_id: incoming.channel_id.clone(),
            from: incoming.recipient.clone(),
            recipient: incoming.from.clone(),
            conversation: incoming.conversation.clone(),
            reply_to_id: incoming.id.clone(),
            text: Some(text.to_string()),
            members_added: Vec::new(),
            name: None,
            value: None,
            locale: incoming.locale.clone(),
        }
    }

    /// Id of the bot account this activity was delivered to
    pub fn recipient_id(&self) -> Option<&str> {
        self.recipient.as_ref().map(|r| r.id.as_str())
    }
}

/// Identifier returned by the channel after a send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceResponse {
    #[serde(default)]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_type_is_unknown() {
        let activity: Activity = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(activity.activity_type, ActivityType::Unknown);
    }

    #[test]
    fn test_unknown_activity_type() {
        let activity: Activity = serde_json::from_str(r#"{"type": "typing"}"#).unwrap();
        assert_eq!(activity.activity_type, ActivityType::Unknown);
    }

    #[test]
    fn test_reply_swaps_accounts() {
        let incoming = Activity {
            activity_type: ActivityType::Message,
            id: Some("act-1".to_string()),
            service_url: Some("http://channel".to_string()),
            from: Some(ChannelAccount::new("user")),
            recipient: Some(ChannelAccount::new("bot")),
            conversation: Some(ConversationAccount {
                id: "conv".to_string(),
                ..Default::default()
            }),
            text: Some("hi".to_string()),
            ..Default::default()
        };

        let reply = Activity::reply_text(&incoming, "Echo: hi");
        assert_eq!(reply.from.unwrap().id, "bot");
        assert_eq!(reply.recipient.unwrap().id, "user");
        assert_eq!(reply.reply_to_id.as_deref(), Some("act-1"));
        assert_eq!(reply.conversation.unwrap().id, "conv");
        assert!(reply.timestamp.is_some());
    }
}
