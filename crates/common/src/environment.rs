//! Flow environment configuration.
//!
//! Supports sandbox and production environments with their fixed base URLs.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the environment.
pub const ENVIRONMENT_VAR: &str = "FLOW_ENVIRONMENT";

/// Flow environment (sandbox or production).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowEnvironment {
    /// Sandbox environment (no real money moves).
    #[default]
    Sandbox,
    /// Production environment (real money).
    Production,
}

impl FlowEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox.flow.cl/api",
            Self::Production => "https://www.flow.cl/api",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns true if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }

    /// Load environment from `FLOW_ENVIRONMENT` env var.
    ///
    /// Returns `Sandbox` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for FlowEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for FlowEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" | "live" => Ok(Self::Production),
            "sandbox" | "test" | "testnet" => Ok(Self::Sandbox),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'sandbox' or 'production'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_url() {
        let env = FlowEnvironment::Sandbox;
        assert_eq!(env.rest_base_url(), "https://sandbox.flow.cl/api");
        assert!(env.is_sandbox());
        assert!(!env.is_production());
    }

    #[test]
    fn test_production_url() {
        let env = FlowEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://www.flow.cl/api");
        assert!(env.is_production());
        assert!(!env.is_sandbox());
    }

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<FlowEnvironment>().unwrap(),
            FlowEnvironment::Production
        );
        assert_eq!(
            "PROD".parse::<FlowEnvironment>().unwrap(),
            FlowEnvironment::Production
        );
        assert_eq!(
            " live ".parse::<FlowEnvironment>().unwrap(),
            FlowEnvironment::Production
        );
    }

    #[test]
    fn test_parse_sandbox() {
        assert_eq!(
            "sandbox".parse::<FlowEnvironment>().unwrap(),
            FlowEnvironment::Sandbox
        );
        assert_eq!(
            "Test".parse::<FlowEnvironment>().unwrap(),
            FlowEnvironment::Sandbox
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = "staging".parse::<FlowEnvironment>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_default_is_sandbox() {
        assert_eq!(FlowEnvironment::default(), FlowEnvironment::Sandbox);
    }

    #[test]
    fn test_display() {
        assert_eq!(FlowEnvironment::Sandbox.to_string(), "sandbox");
        assert_eq!(FlowEnvironment::Production.to_string(), "production");
    }
}
