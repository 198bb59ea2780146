//! Flow API credentials.
//!
//! The shared secret lives in a `SecretString`: it never shows up in `Debug`
//! output and is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the public API key.
pub const API_KEY_VAR: &str = "FLOW_API_KEY";

/// Environment variable holding the shared secret.
pub const SECRET_KEY_VAR: &str = "FLOW_SECRET_KEY";

/// API key and shared secret of one Flow merchant account.
///
/// Construction rejects an empty key or secret, so any value of this type
/// can sign requests.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

/// Read one variable, trimming the line ending a `.env` file may leave.
fn read_var(name: &str) -> Result<String, AuthError> {
    std::env::var(name)
        .map(|value| value.trim().to_string())
        .map_err(|_| AuthError::MissingEnvVar(name.to_string()))
}

impl ApiCredentials {
    /// Load `FLOW_API_KEY` and `FLOW_SECRET_KEY`, reading `.env` first when
    /// one exists.
    ///
    /// # Errors
    /// `AuthError::MissingEnvVar` names the first unset variable; a variable
    /// set to an empty value fails like `new` does.
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let api_key = read_var(API_KEY_VAR)?;
        let secret_key = read_var(SECRET_KEY_VAR)?;

        Self::new(api_key, secret_key)
    }

    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::EmptyApiKey` or `AuthError::EmptySecretKey` when
    /// either value is empty.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self, AuthError> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();

        if api_key.is_empty() {
            return Err(AuthError::EmptyApiKey);
        }
        if secret_key.is_empty() {
            return Err(AuthError::EmptySecretKey);
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// The public API key, sent as `apiKey` with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The shared secret. Only the signer should read it.
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
