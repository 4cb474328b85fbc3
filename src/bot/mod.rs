// Activity handlers: echo, greeting and the package search extension

pub mod connector;
pub mod query;

pub use connector::{ActivitySender, ConnectorClient};
pub use query::{extract_query_text, EMPTY_QUERY, SEARCH_QUERY_PARAM};

use crate::cards::{self, PreviewPayload};
use crate::error::{BotError, Result};
use crate::schema::{Activity, ActivityType, MessagingExtensionQuery, MessagingExtensionResponse};
use crate::search::PackageSearchClient;
use futures::future::try_join_all;
use serde_json::Value;

pub const ECHO_PREFIX: &str = "Echo: ";
pub const WELCOME_TEXT: &str = "Hello and welcome!";

pub const QUERY_INVOKE: &str = "composeExtension/query";
pub const SELECT_ITEM_INVOKE: &str = "composeExtension/selectItem";

/// What the host should answer for one turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnResponse {
    /// Handled; nothing to return in the HTTP body
    Accepted,
    /// Invoke result returned synchronously to the host
    Invoke(MessagingExtensionResponse),
}

/// Stateless bot; one instance serves every turn
#[derive(Debug, Clone)]
pub struct SearchBot {
    search: PackageSearchClient,
}

impl SearchBot {
    pub fn new(search: PackageSearchClient) -> Self {
        Self { search }
    }

    /// Route one inbound activity to its handler
    pub async fn on_turn<S: ActivitySender>(&self, sender: &S, activity: &Activity) -> Result<TurnResponse> {
        match activity.activity_type {
            ActivityType::Message => {
                self.on_message(sender, activity).await?;
                Ok(TurnResponse::Accepted)
            }
            ActivityType::ConversationUpdate => {
                if !activity.members_added.is_empty() {
                    self.on_members_added(sender, activity).await?;
                }
                Ok(TurnResponse::Accepted)
            }
            ActivityType::Invoke => self.on_invoke(activity).await.map(TurnResponse::Invoke),
            ActivityType::Unknown => {
                tracing::debug!("Ignoring unsupported activity type");
                Ok(TurnResponse::Accepted)
            }
        }
    }

    async fn on_invoke(&self, activity: &Activity) -> Result<MessagingExtensionResponse> {
        match activity.name.as_deref() {
            Some(QUERY_INVOKE) => {
                let query = match &activity.value {
                    Some(value) => match serde_json::from_value::<MessagingExtensionQuery>(value.clone()) {
                        Ok(query) => Some(query),
                        Err(e) => {
                            tracing::debug!("Unreadable extension query: {}", e);
                            None
                        }
                    },
                    None => None,
                };
                self.on_extension_query(query.as_ref()).await
            }
            Some(SELECT_ITEM_INVOKE) => {
                let value = activity
                    .value
                    .as_ref()
                    .ok_or_else(|| BotError::MalformedPayload("selectItem without value".to_string()))?;
                self.on_extension_select_item(value)
            }
            other => Err(BotError::UnsupportedInvoke(other.unwrap_or("<none>").to_string())),
        }
    }

    /// Reply with the received text prefixed by `Echo: `
    pub async fn on_message<S: ActivitySender>(&self, sender: &S, activity: &Activity) -> Result<()> {
        let text = format!("{}{}", ECHO_PREFIX, activity.text.as_deref().unwrap_or_default());
        sender.send_activity(&Activity::reply_text(activity, &text)).await?;
        Ok(())
    }

    /// Greet every added member except the bot itself.
    ///
    /// Sends run concurrently; the first failure fails the whole greeting.
    /// Returns the number of greetings sent.
    pub async fn on_members_added<S: ActivitySender>(&self, sender: &S, activity: &Activity) -> Result<usize> {
        let bot_id = activity.recipient_id();

        let greetings: Vec<Activity> = activity
            .members_added
            .iter()
            .filter(|member| Some(member.id.as_str()) != bot_id)
            .map(|_| Activity::reply_text(activity, WELCOME_TEXT))
            .collect();

        let sent = try_join_all(greetings.iter().map(|greeting| sender.send_activity(greeting))).await?;
        Ok(sent.len())
    }

    /// Search the registry and list one card per package
    pub async fn on_extension_query(
        &self,
        query: Option<&MessagingExtensionQuery>,
    ) -> Result<MessagingExtensionResponse> {
        let text = extract_query_text(query);

        let rows = self.search.search(&text).await.map_err(|source| {
            tracing::error!(query = %text, error = %source, "Package search failed");
            BotError::Search {
                query: text.clone(),
                source,
            }
        })?;

        cards::build_query_response(&rows)
    }

    /// Render the detail card for a previously returned preview
    pub fn on_extension_select_item(&self, value: &Value) -> Result<MessagingExtensionResponse> {
        let payload = PreviewPayload::from_value(value)?;
        Ok(cards::render_selection(&payload))
    }
}
