// Result card building and selection rendering

use crate::error::{BotError, Result};
use crate::schema::{
    ActionType, Attachment, BasicCard, CardAction, CardImage, MessagingExtensionAttachment,
    MessagingExtensionResponse, MessagingExtensionResult,
};
use crate::search::SearchResultRow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ICON_ALT: &str = "Icon";
const PROJECT_BUTTON_TITLE: &str = "Project";
const PAYLOAD_FIELDS: usize = 5;

/// Data carried in a preview card's tap action.
///
/// On the wire it is `{"data": [name, version, description, projectUrl, iconUrl]}`;
/// the host hands it back untouched when the user picks the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPayload {
    pub row: SearchResultRow,
}

#[derive(Serialize, Deserialize)]
struct TapValue {
    data: Vec<String>,
}

impl PreviewPayload {
    pub fn new(row: SearchResultRow) -> Self {
        Self { row }
    }

    /// Positional encoding stored in the tap action
    pub fn to_value(&self) -> Value {
        let row = &self.row;
        serde_json::json!({
            "data": [
                row.name,
                row.version,
                row.description,
                row.project_url,
                row.icon_url,
            ]
        })
    }

    /// Decode a payload returned by the host.
    ///
    /// Accepts the `{"data": [...]}` object or a JSON string holding it.
    pub fn from_value(value: &Value) -> Result<Self> {
        let tap: TapValue = match value {
            Value::String(encoded) => serde_json::from_str(encoded)
                .map_err(|e| BotError::MalformedPayload(e.to_string()))?,
            other => serde_json::from_value(other.clone())
                .map_err(|e| BotError::MalformedPayload(e.to_string()))?,
        };

        if tap.data.len() < PAYLOAD_FIELDS {
            return Err(BotError::MalformedPayload(format!(
                "expected {} fields, got {}",
                PAYLOAD_FIELDS,
                tap.data.len()
            )));
        }

        let mut fields = tap.data.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        Ok(Self::new(SearchResultRow {
            name: next(),
            version: next(),
            description: next(),
            project_url: next(),
            icon_url: next(),
        }))
    }
}

fn icon_image(url: &str) -> CardImage {
    CardImage {
        url: url.to_string(),
        alt: Some(ICON_ALT.to_string()),
    }
}

/// One preview/detail pair per row, in row order
pub fn build_result_attachments(rows: &[SearchResultRow]) -> Result<Vec<MessagingExtensionAttachment>> {
    rows.iter().map(build_result_attachment).collect()
}

fn build_result_attachment(row: &SearchResultRow) -> Result<MessagingExtensionAttachment> {
    let payload = PreviewPayload::new(row.clone());

    let mut preview = BasicCard::titled(&row.name);
    preview.tap = Some(CardAction {
        action_type: ActionType::Invoke,
        title: None,
        value: Value::String(serde_json::to_string(&payload.to_value())?),
    });
    if !row.icon_url.is_empty() {
        preview.images = vec![icon_image(&row.icon_url)];
    }

    let detail = Attachment::hero(BasicCard::titled(&row.name));

    Ok(MessagingExtensionAttachment {
        content_type: detail.content_type,
        content: detail.content,
        preview: Some(Attachment::thumbnail(preview)),
    })
}

/// Wrap the result attachments in the host's list response
pub fn build_query_response(rows: &[SearchResultRow]) -> Result<MessagingExtensionResponse> {
    let attachments = build_result_attachments(rows)?;
    Ok(MessagingExtensionResponse::new(MessagingExtensionResult::list(attachments)))
}

/// Detail card for a selected preview
pub fn render_selection_card(payload: &PreviewPayload) -> Attachment {
    let row = &payload.row;

    let mut card = BasicCard::titled(&row.name);
    card.subtitle = Some(row.description.clone());
    card.buttons = vec![CardAction {
        action_type: ActionType::OpenUrl,
        title: Some(PROJECT_BUTTON_TITLE.to_string()),
        value: Value::String(row.project_url.clone()),
    }];
    if !row.icon_url.trim().is_empty() {
        card.images = vec![icon_image(&row.icon_url)];
    }

    Attachment::thumbnail(card)
}

/// Single-item response for `composeExtension/selectItem`
pub fn render_selection(payload: &PreviewPayload) -> MessagingExtensionResponse {
    let attachment: MessagingExtensionAttachment = render_selection_card(payload).into();
    MessagingExtensionResponse::new(MessagingExtensionResult::list(vec![attachment]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_accepts_string_encoding() {
        let value = Value::String(r#"{"data":["Foo","1.0","d","http://p",""]}"#.to_string());
        let payload = PreviewPayload::from_value(&value).unwrap();
        assert_eq!(payload.row.name, "Foo");
        assert_eq!(payload.row.project_url, "http://p");
    }

    #[test]
    fn test_payload_too_short() {
        let err = PreviewPayload::from_value(&json!({"data": ["Foo", "1.0"]})).unwrap_err();
        assert!(matches!(err, BotError::MalformedPayload(_)));
    }

    #[test]
    fn test_payload_missing_data() {
        let err = PreviewPayload::from_value(&json!({"name": "Foo"})).unwrap_err();
        assert!(matches!(err, BotError::MalformedPayload(_)));
    }

    #[test]
    fn test_payload_extra_fields_ignored() {
        let value = json!({"data": ["Foo", "1.0", "d", "http://p", "http://i", "extra"]});
        let payload = PreviewPayload::from_value(&value).unwrap();
        assert_eq!(payload.row.icon_url, "http://i");
    }

    #[test]
    fn test_blank_icon_has_no_image() {
        let value = json!({"data": ["Foo", "1.0", "d", "http://p", "   "]});
        let payload = PreviewPayload::from_value(&value).unwrap();
        assert!(render_selection_card(&payload).content.images.is_empty());
    }
}
