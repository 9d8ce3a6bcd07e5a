//! Client configuration

use crate::client::NetworkHttpClient;
use crate::state::ArrivalPolicy;
use crate::ClientResult;

/// Default employee service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/employees";

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STAFF_API_URL | http://localhost:8080/employees | employee service base address |
/// | STAFF_REQUEST_TIMEOUT_SECS | 30 | transport timeout (seconds) |
/// | STAFF_DISCARD_STALE | false | drop responses superseded by a newer request |
/// | STAFF_LOG_LEVEL | info | log level of the console binary |
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Service base URL (e.g., "http://localhost:8080/employees")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// How overlapping requests of one workflow are settled
    pub arrival: ArrivalPolicy,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl ConsoleConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            arrival: ArrivalPolicy::default(),
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let discard_stale = std::env::var("STAFF_DISCARD_STALE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            base_url: std::env::var("STAFF_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout: std::env::var("STAFF_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            arrival: if discard_stale {
                ArrivalPolicy::LatestIssued
            } else {
                ArrivalPolicy::LastArrival
            },
            log_level: std::env::var("STAFF_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the arrival policy
    pub fn with_arrival(mut self, arrival: ArrivalPolicy) -> Self {
        self.arrival = arrival;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
