// Search term extraction from messaging extension queries

use crate::schema::MessagingExtensionQuery;
use serde_json::Value;

/// Returned when no usable search term is present
pub const EMPTY_QUERY: &str = "Empty query";

/// Reserved parameter name carrying the user's search text
pub const SEARCH_QUERY_PARAM: &str = "searchQuery";

/// Pull the search text out of an extension query.
///
/// Only the first parameter is inspected, and only when it is named
/// `searchQuery`. Everything else falls back to [`EMPTY_QUERY`].
pub fn extract_query_text(query: Option<&MessagingExtensionQuery>) -> String {
    let first = query
        .and_then(|q| q.parameters.as_ref())
        .and_then(|params| params.first());

    match first {
        Some(param) if param.name == SEARCH_QUERY_PARAM => match &param.value {
            Value::String(s) => s.clone(),
            Value::Null => EMPTY_QUERY.to_string(),
            other => other.to_string(),
        },
        _ => EMPTY_QUERY.to_string(),
    }
}
