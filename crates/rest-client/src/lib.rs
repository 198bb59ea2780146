//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - GET with URL-encoded query strings, POST with form-encoded bodies
//! - JSON response deserialization
//! - Per-call timeouts and cancellation through a `watch` channel
//! - Non-2xx responses captured with their raw body
//!
//! No request is ever retried; each call issues at most one HTTP request.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{CallOptions, RestClient};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Status {
//!     status: i64,
//! }
//!
//! let client = RestClient::with_default_timeout("https://sandbox.flow.cl/api")?;
//! let params = vec![("token".to_string(), "abc".to_string())];
//! let status: Status = client
//!     .get("/payment/getStatus", &params, &CallOptions::default())
//!     .await?;
//! ```

mod client;
mod error;
mod options;

pub use client::{HttpMethod, RestClient, DEFAULT_TIMEOUT};
pub use error::RestError;
pub use options::CallOptions;
