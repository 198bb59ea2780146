//! Authentication and signing for the Flow payment API.
//!
//! This crate provides secure credential management and the canonical
//! parameter encoding every Flow request is signed with.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop. Empty keys are
//!   rejected at construction.
//! - **Canonical Signing**: Parameters are sorted by name, concatenated as
//!   `name + value` pairs and signed with HMAC-SHA256 under the shared secret.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, ParamSet, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let params = ParamSet::new().with("token", "AJ089FF5467367");
//! let signed = signer.sign_request(&params);
//! let form = signed.into_pairs(); // includes apiKey and s
//! ```

mod credentials;
mod error;
mod params;
mod signer;

pub use credentials::{ApiCredentials, API_KEY_VAR, SECRET_KEY_VAR};
pub use error::AuthError;
pub use params::{ParamSet, ParamValue};
pub use signer::{canonical_string, RequestSigner, SignedParams, API_KEY_PARAM, SIGNATURE_PARAM};
