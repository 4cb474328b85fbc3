// Bot error types

use crate::search::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Package search failed for '{query}': {source}")]
    Search {
        query: String,
        #[source]
        source: SearchError,
    },

    #[error("Malformed selection payload: {0}")]
    MalformedPayload(String),

    #[error("Unsupported invoke: {0}")]
    UnsupportedInvoke(String),

    #[error("Connector request failed: {0}")]
    Connector(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BotError {
    /// Stable machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::Search { .. } => "SEARCH_FAILED",
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Self::UnsupportedInvoke(_) => "NOT_IMPLEMENTED",
            Self::Connector(_) => "CONNECTOR_FAILED",
            Self::Serialization(_) => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
