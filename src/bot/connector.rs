// Outbound reply channel

use crate::config::ConnectorConfig;
use crate::error::{BotError, Result};
use crate::schema::{Activity, ResourceResponse};
use std::future::Future;

/// Sends activities back into a conversation
pub trait ActivitySender: Send + Sync {
    fn send_activity(&self, activity: &Activity) -> impl Future<Output = Result<ResourceResponse>> + Send;
}

/// Posts replies to the channel's connector service (`serviceUrl`)
#[derive(Debug, Clone)]
pub struct ConnectorClient {
    http: reqwest::Client,
    bearer_token: Option<String>,
}

impl ConnectorClient {
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BotError::Connector(e.to_string()))?;

        Ok(Self {
            http,
            bearer_token: config.bearer_token.clone(),
        })
    }

    /// Endpoint for `activity`: a reply when `replyToId` is set, else a new conversation message
    pub fn activity_url(activity: &Activity) -> Result<String> {
        let service_url = activity
            .service_url
            .as_deref()
            .ok_or_else(|| BotError::Connector("activity has no serviceUrl".to_string()))?;
        let conversation_id = activity
            .conversation
            .as_ref()
            .map(|c| c.id.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| BotError::Connector("activity has no conversation id".to_string()))?;

        let base = format!(
            "{}/v3/conversations/{}/activities",
            service_url.trim_end_matches('/'),
            urlencoding::encode(conversation_id)
        );

        Ok(match &activity.reply_to_id {
            Some(reply_to) => format!("{}/{}", base, urlencoding::encode(reply_to)),
            None => base,
        })
    }
}

impl ActivitySender for ConnectorClient {
    async fn send_activity(&self, activity: &Activity) -> Result<ResourceResponse> {
        let url = Self::activity_url(activity)?;

        let mut request = self.http.post(&url).json(activity);
        if let Some(ref token) = self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BotError::Connector(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Connector(format!("{} returned HTTP {}", url, status.as_u16())));
        }

        // Some channels answer with an empty body
        let body = response
            .text()
            .await
            .map_err(|e| BotError::Connector(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(ResourceResponse::default());
        }
        Ok(serde_json::from_str(&body)?)
    }
}
