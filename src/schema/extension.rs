// Messaging extension request/response wire types

use super::card::{Attachment, BasicCard};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MessagingExtensionParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl MessagingExtensionParameter {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Inbound `composeExtension/query` value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessagingExtensionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<MessagingExtensionParameter>>,
}

/// One result entry: the card inserted on selection plus an optional preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingExtensionAttachment {
    pub content_type: String,
    pub content: BasicCard,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Attachment>,
}

impl From<Attachment> for MessagingExtensionAttachment {
    fn from(attachment: Attachment) -> Self {
        Self {
            content_type: attachment.content_type,
            content: attachment.content,
            preview: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingExtensionResult {
    #[serde(rename = "type")]
    pub result_type: String,
    pub attachment_layout: String,
    pub attachments: Vec<MessagingExtensionAttachment>,
}

impl MessagingExtensionResult {
    /// A `result`-typed list of attachments
    pub fn list(attachments: Vec<MessagingExtensionAttachment>) -> Self {
        Self {
            result_type: "result".to_string(),
            attachment_layout: "list".to_string(),
            attachments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingExtensionResponse {
    pub compose_extension: MessagingExtensionResult,
}

impl MessagingExtensionResponse {
    pub fn new(result: MessagingExtensionResult) -> Self {
        Self {
            compose_extension: result,
        }
    }

    pub fn attachments(&self) -> &[MessagingExtensionAttachment] {
        &self.compose_extension.attachments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_without_parameters() {
        let query: MessagingExtensionQuery =
            serde_json::from_value(json!({"commandId": "searchCmd"})).unwrap();
        assert!(query.parameters.is_none());
    }

    #[test]
    fn test_response_wire_shape() {
        let response = MessagingExtensionResponse::new(MessagingExtensionResult::list(vec![]));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["composeExtension"]["type"], "result");
        assert_eq!(value["composeExtension"]["attachmentLayout"], "list");
        assert!(value["composeExtension"]["attachments"].as_array().unwrap().is_empty());
    }
}
