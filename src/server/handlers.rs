// HTTP request handlers

use crate::bot::{TurnResponse, QUERY_INVOKE, SELECT_ITEM_INVOKE};
use crate::error::BotError;
use crate::schema::{Activity, ActivityType};
use crate::server::observability::RequestId;
use crate::server::ServerState;
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

// ── Request/Response types ───────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let status = match &self {
            BotError::Search { .. } | BotError::Connector(_) => StatusCode::BAD_GATEWAY,
            BotError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            BotError::UnsupportedInvoke(_) => StatusCode::NOT_IMPLEMENTED,
            BotError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(error)).into_response()
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(response)
}

/// Inbound activity endpoint
pub async fn messages(
    State(state): State<ServerState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Json(activity): Json<Activity>,
) -> Response {
    state.metrics.inc_turns();
    record_turn_kind(&state, &activity);

    tracing::info!(
        request_id = %request_id,
        activity_type = ?activity.activity_type,
        name = activity.name.as_deref().unwrap_or(""),
        "Handling activity"
    );

    match state.bot.on_turn(state.connector.as_ref(), &activity).await {
        Ok(TurnResponse::Accepted) => StatusCode::OK.into_response(),
        Ok(TurnResponse::Invoke(response)) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            state.metrics.inc_errors();
            if matches!(e, BotError::Search { .. }) {
                // Already logged at error level by the bot
                state.metrics.inc_search_errors();
                tracing::debug!(request_id = %request_id, code = e.code(), "Turn failed: {}", e);
            } else {
                tracing::error!(request_id = %request_id, code = e.code(), "Turn failed: {}", e);
            }
            e.into_response()
        }
    }
}

fn record_turn_kind(state: &ServerState, activity: &Activity) {
    match activity.activity_type {
        ActivityType::Message => state.metrics.inc_messages(),
        ActivityType::ConversationUpdate if !activity.members_added.is_empty() => {
            state.metrics.inc_greetings()
        }
        ActivityType::Invoke => match activity.name.as_deref() {
            Some(QUERY_INVOKE) => state.metrics.inc_queries(),
            Some(SELECT_ITEM_INVOKE) => state.metrics.inc_selections(),
            _ => {}
        },
        _ => {}
    }
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<ServerState>) -> impl IntoResponse {
    let output = state.metrics.render_prometheus();
    (StatusCode::OK, [("Content-Type", "text/plain; version=0.0.4")], output)
}
