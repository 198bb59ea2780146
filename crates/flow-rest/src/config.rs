//! Client configuration.

use crate::error::FlowError;
use common::FlowEnvironment;
use std::time::Duration;

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "FLOW_BASE_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "FLOW_TIMEOUT_SECS";

/// Default request timeout for Flow API calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration owned by a single `FlowClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Client-wide request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration for one of the two fixed environments.
    pub fn for_environment(environment: FlowEnvironment) -> Self {
        Self {
            base_url: environment.rest_base_url().to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Configuration for an explicit base URL (mock servers, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replace the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from the environment.
    ///
    /// `FLOW_BASE_URL` wins over `FLOW_ENVIRONMENT`; `FLOW_TIMEOUT_SECS`
    /// replaces the default timeout.
    ///
    /// # Errors
    /// Returns `FlowError::Config` if `FLOW_TIMEOUT_SECS` is not a positive
    /// integer.
    pub fn from_env() -> Result<Self, FlowError> {
        let mut config = match std::env::var(BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::for_environment(FlowEnvironment::from_env()),
        };

        if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    FlowError::Config(format!(
                        "{TIMEOUT_VAR} must be a positive integer, got '{raw}'"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Reject base URLs that cannot work.
    pub(crate) fn validate(&self) -> Result<(), FlowError> {
        let url = self.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(FlowError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(FlowError::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(FlowEnvironment::default())
    }
}

impl From<FlowEnvironment> for ClientConfig {
    fn from(environment: FlowEnvironment) -> Self {
        Self::for_environment(environment)
    }
}

impl From<&str> for ClientConfig {
    fn from(base_url: &str) -> Self {
        Self::with_base_url(base_url)
    }
}

impl From<String> for ClientConfig {
    fn from(base_url: String) -> Self {
        Self::with_base_url(base_url)
    }
}
