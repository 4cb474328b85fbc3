// Observability for the bot host
// Provides counters, logging setup and request correlation

pub mod metrics;
pub mod tracing_mod;

pub use metrics::Metrics;
pub use tracing_mod::{generate_request_id, init_logging, RequestId, REQUEST_ID_HEADER};
