// Counters for the bot HTTP host

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for the bot host
#[derive(Clone)]
pub struct Metrics {
    // Request metrics
    requests_total: Arc<AtomicU64>,
    requests_in_flight: Arc<AtomicU64>,
    request_duration_sum: Arc<AtomicU64>,
    request_duration_count: Arc<AtomicU64>,

    // Turn metrics
    turns_total: Arc<AtomicU64>,
    messages_total: Arc<AtomicU64>,
    greetings_total: Arc<AtomicU64>,
    queries_total: Arc<AtomicU64>,
    selections_total: Arc<AtomicU64>,

    // Error metrics
    errors_total: Arc<AtomicU64>,
    search_errors_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            requests_in_flight: Arc::new(AtomicU64::new(0)),
            request_duration_sum: Arc::new(AtomicU64::new(0)),
            request_duration_count: Arc::new(AtomicU64::new(0)),
            turns_total: Arc::new(AtomicU64::new(0)),
            messages_total: Arc::new(AtomicU64::new(0)),
            greetings_total: Arc::new(AtomicU64::new(0)),
            queries_total: Arc::new(AtomicU64::new(0)),
            selections_total: Arc::new(AtomicU64::new(0)),
            errors_total: Arc::new(AtomicU64::new(0)),
            search_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn inc_requests_total(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_requests_in_flight(&self) {
        self.requests_in_flight.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dec_requests_in_flight(&self) {
        self.requests_in_flight.fetch_sub(1, Ordering::Relaxed);
    }

    /// Record request duration (in milliseconds)
    pub fn record_request_duration(&self, duration_ms: u64) {
        self.request_duration_sum.fetch_add(duration_ms, Ordering::Relaxed);
        self.request_duration_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_request_duration_avg_ms(&self) -> f64 {
        let sum = self.request_duration_sum.load(Ordering::Relaxed);
        let count = self.request_duration_count.load(Ordering::Relaxed);
        if count > 0 {
            sum as f64 / count as f64
        } else {
            0.0
        }
    }

    pub fn inc_turns(&self) {
        self.turns_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_messages(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_greetings(&self) {
        self.greetings_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_queries(&self) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_selections(&self) {
        self.selections_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_errors(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_search_errors(&self) {
        self.search_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn get_requests_in_flight(&self) -> u64 {
        self.requests_in_flight.load(Ordering::Relaxed)
    }

    pub fn get_turns_total(&self) -> u64 {
        self.turns_total.load(Ordering::Relaxed)
    }

    pub fn get_messages_total(&self) -> u64 {
        self.messages_total.load(Ordering::Relaxed)
    }

    pub fn get_greetings_total(&self) -> u64 {
        self.greetings_total.load(Ordering::Relaxed)
    }

    pub fn get_queries_total(&self) -> u64 {
        self.queries_total.load(Ordering::Relaxed)
    }

    pub fn get_selections_total(&self) -> u64 {
        self.selections_total.load(Ordering::Relaxed)
    }

    pub fn get_errors_total(&self) -> u64 {
        self.errors_total.load(Ordering::Relaxed)
    }

    pub fn get_search_errors_total(&self) -> u64 {
        self.search_errors_total.load(Ordering::Relaxed)
    }

    /// Prometheus text exposition
    pub fn render_prometheus(&self) -> String {
        format!(
r#"# HELP pkgsearch_http_requests_total Total HTTP requests received
# TYPE pkgsearch_http_requests_total counter
pkgsearch_http_requests_total {}

# HELP pkgsearch_http_requests_in_flight Requests currently being processed
# TYPE pkgsearch_http_requests_in_flight gauge
pkgsearch_http_requests_in_flight {}

# HELP pkgsearch_http_request_duration_avg_ms Mean request latency in milliseconds
# TYPE pkgsearch_http_request_duration_avg_ms gauge
pkgsearch_http_request_duration_avg_ms {:.3}

# HELP pkgsearch_turns_total Activities handled
# TYPE pkgsearch_turns_total counter
pkgsearch_turns_total {}

# HELP pkgsearch_messages_total Messages echoed
# TYPE pkgsearch_messages_total counter
pkgsearch_messages_total {}

# HELP pkgsearch_greetings_total Member-added events greeted
# TYPE pkgsearch_greetings_total counter
pkgsearch_greetings_total {}

# HELP pkgsearch_queries_total Extension queries handled
# TYPE pkgsearch_queries_total counter
pkgsearch_queries_total {}

# HELP pkgsearch_selections_total Extension item selections handled
# TYPE pkgsearch_selections_total counter
pkgsearch_selections_total {}

# HELP pkgsearch_errors_total Failed turns
# TYPE pkgsearch_errors_total counter
pkgsearch_errors_total {}

# HELP pkgsearch_search_errors_total Failed registry searches
# TYPE pkgsearch_search_errors_total counter
pkgsearch_search_errors_total {}
"#,
            self.get_requests_total(),
            self.get_requests_in_flight(),
            self.get_request_duration_avg_ms(),
            self.get_turns_total(),
            self.get_messages_total(),
            self.get_greetings_total(),
            self.get_queries_total(),
            self.get_selections_total(),
            self.get_errors_total(),
            self.get_search_errors_total(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
