use std::env;
use std::time::Duration;

/// Contact submission configuration.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// URL of the external contact endpoint.
    pub endpoint: String,
    /// Per-request timeout; a timeout is reported as a generic failure.
    pub timeout: Duration,
}

impl ContactConfig {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let endpoint =
            env::var("CONTACT_ENDPOINT").unwrap_or_else(|_| "/api/contact".to_string());
        let timeout_secs = env::var("CONTACT_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(15);
        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
