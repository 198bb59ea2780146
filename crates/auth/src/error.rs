use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The API key is empty.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The secret key is empty.
    #[error("Secret key must not be empty")]
    EmptySecretKey,
}
