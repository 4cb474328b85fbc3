// Card and attachment wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HERO_CONTENT_TYPE: &str = "application/vnd.microsoft.card.hero";
pub const THUMBNAIL_CONTENT_TYPE: &str = "application/vnd.microsoft.card.thumbnail";

/// Card action types used by this bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "invoke")]
    Invoke,
    #[serde(rename = "openUrl")]
    OpenUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Body shared by hero and thumbnail cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BasicCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<CardImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

impl BasicCard {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: BasicCard,
}

impl Attachment {
    pub fn hero(card: BasicCard) -> Self {
        Self {
            content_type: HERO_CONTENT_TYPE.to_string(),
            content: card,
        }
    }

    pub fn thumbnail(card: BasicCard) -> Self {
        Self {
            content_type: THUMBNAIL_CONTENT_TYPE.to_string(),
            content: card,
        }
    }
}
