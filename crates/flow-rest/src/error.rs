//! Flow client error types.

use crate::operation::Operation;
use auth::AuthError;
use rest_client::RestError;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the Flow REST API.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Missing or empty credentials. Raised before any client exists.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response with a structured error body.
    #[error("Flow API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Flow application error code, when the body carried one.
        code: Option<i64>,
        /// Message reported by Flow.
        message: String,
    },

    /// The operation failed without a usable API error: network failure,
    /// timeout, cancellation, malformed body.
    #[error("Failed to {operation}: {source}")]
    Operation {
        /// The operation that failed.
        operation: Operation,
        /// Underlying cause.
        #[source]
        source: RestError,
    },

    /// A date argument could not be read as a calendar date.
    #[error("Failed to {operation}: invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The operation that was refused.
        operation: Operation,
        /// The rejected input.
        input: String,
    },

    /// A request argument failed local validation.
    #[error("Failed to {operation}: {message}")]
    InvalidRequest {
        /// The operation that was refused.
        operation: Operation,
        /// What was wrong.
        message: String,
    },
}

/// Error body returned by Flow: `{"code": 105, "message": "..."}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

impl FlowError {
    /// Classify a failed REST call made on behalf of `operation`.
    ///
    /// A non-2xx response whose body parses as a Flow error becomes `Api`;
    /// every other failure becomes `Operation`.
    pub fn from_rest(operation: Operation, err: RestError) -> Self {
        match err {
            RestError::HttpError { status, body } => match Self::parse_api_body(&body) {
                Some(parsed) => Self::Api {
                    status,
                    code: parsed.code,
                    message: parsed.message,
                },
                None => Self::Operation {
                    operation,
                    source: RestError::HttpError { status, body },
                },
            },
            other => Self::Operation {
                operation,
                source: other,
            },
        }
    }

    fn parse_api_body(body: &str) -> Option<ApiErrorBody> {
        serde_json::from_str::<ApiErrorBody>(body).ok()
    }

    /// HTTP status, if the server answered with an error response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Operation { source, .. } => source.status(),
            _ => None,
        }
    }

    /// The operation this error belongs to, if it came from a call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Operation { operation, .. }
            | Self::InvalidDate { operation, .. }
            | Self::InvalidRequest { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// True for failures raised locally before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::InvalidRequest { .. })
    }

    /// True when the call timed out or was cancelled.
    pub fn is_timeout_or_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Operation {
                source: RestError::Timeout | RestError::Cancelled,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_becomes_api_error() {
        let err = FlowError::from_rest(
            Operation::GetPlan,
            RestError::HttpError {
                status: 400,
                body: r#"{"code":1620,"message":"Plan not found"}"#.into(),
            },
        );

        match err {
            FlowError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(1620));
                assert_eq!(message, "Plan not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_message_without_code() {
        let err = FlowError::from_rest(
            Operation::GetPlan,
            RestError::HttpError {
                status: 500,
                body: r#"{"message":"Internal"}"#.into(),
            },
        );
        assert!(matches!(err, FlowError::Api { code: None, .. }));
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn test_unstructured_body_becomes_operation_error() {
        let err = FlowError::from_rest(
            Operation::ListPlans,
            RestError::HttpError {
                status: 502,
                body: "<html>Bad Gateway</html>".into(),
            },
        );

        assert_eq!(err.operation(), Some(Operation::ListPlans));
        assert_eq!(err.http_status(), Some(502));
        assert!(err.to_string().starts_with("Failed to list plans"));
    }

    #[test]
    fn test_transport_failure_becomes_operation_error() {
        let err = FlowError::from_rest(
            Operation::CreatePayment,
            RestError::Connection("connection refused".into()),
        );

        assert_eq!(err.operation(), Some(Operation::CreatePayment));
        assert_eq!(err.http_status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_timeout_flag() {
        let err = FlowError::from_rest(Operation::GetPaymentStatus, RestError::Timeout);
        assert!(err.is_timeout_or_cancelled());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_date_message() {
        let err = FlowError::InvalidDate {
            operation: Operation::ListPayments,
            input: "15/03/2024".into(),
        };
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Failed to list payments: invalid date '15/03/2024', expected YYYY-MM-DD"
        );
    }
}
