//! Flow payment REST API client.
//!
//! This crate provides a typed async client for the Flow payment gateway with:
//!
//! - **Signed requests**: Every call carries `apiKey` and an HMAC-SHA256
//!   signature over the canonical parameter string
//! - **Operation catalog**: Each remote call is an `Operation` with a fixed
//!   endpoint and HTTP method
//! - **Status normalization**: Numeric payment states become `PaymentStatus`
//! - **Date canonicalization**: Date arguments are sent as `YYYY-MM-DD`
//! - **Error handling**: Typed errors tagged with the failing operation
//!
//! # Example
//!
//! ```rust,ignore
//! use flow_rest::{CreatePaymentRequest, FlowClient, FlowEnvironment};
//! use rust_decimal_macros::dec;
//!
//! let client = FlowClient::new("api-key", "secret", FlowEnvironment::Sandbox)?;
//!
//! let request = CreatePaymentRequest::new(
//!     "ORD-1",
//!     "Order 1",
//!     dec!(1000),
//!     "payer@example.com",
//!     "https://shop.example/confirm",
//!     "https://shop.example/return",
//! );
//! let created = client.payments().create(&request).await?;
//! println!("send the payer to {}", created.redirect_url());
//!
//! let status = client.payments().get_status(&created.token).await?;
//! println!("{}", status.status);
//! ```

mod client;
mod config;
mod de;
mod error;
mod operation;
mod pagination;
mod resources;
mod status;

pub use client::FlowClient;
pub use config::{ClientConfig, BASE_URL_VAR, DEFAULT_REQUEST_TIMEOUT, TIMEOUT_VAR};
pub use error::FlowError;
pub use operation::Operation;
pub use pagination::{ListQuery, PaginatedList, RecordStatus};
pub use resources::*;
pub use status::PaymentStatus;

pub use common::{canonicalize_date, DateInput, FlowEnvironment};
pub use rest_client::{CallOptions, RestError};
