// Request correlation for the bot host

use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generate a new request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Request ID attached to each request's extensions by the tracing middleware
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Initialize logging for the server and CLI; output goes to stderr
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pkgsearch_bot=info,tower_http=warn,axum=warn".into());

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
