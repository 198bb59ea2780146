//! Flow REST API client and request dispatcher.

use crate::config::ClientConfig;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::resources::{
    Coupons, Invoices, Merchants, Payments, Plans, Refunds, Settlements, SubscriptionItems,
    Subscriptions,
};
use auth::{ApiCredentials, ParamSet, RequestSigner};
use common::{canonicalize_date, DateInput};
use rest_client::{CallOptions, RestClient};
use serde::de::DeserializeOwned;

/// Flow REST API client with authentication support.
///
/// Holds the credentials and a connection pool. Cloning is cheap; clones
/// share the pool. Every call is signed and sent independently, so one
/// client can serve any number of concurrent calls.
#[derive(Clone)]
pub struct FlowClient {
    client: RestClient,
    credentials: ApiCredentials,
    config: ClientConfig,
    options: CallOptions,
}

impl FlowClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `api_key` - Public API key
    /// * `secret_key` - Shared secret used for signing
    /// * `config` - An environment, a base URL, or a full `ClientConfig`
    ///
    /// # Errors
    /// Returns `FlowError::Auth` if either credential is empty, before any
    /// network activity, and `FlowError::Config` for an unusable config.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        config: impl Into<ClientConfig>,
    ) -> Result<Self, FlowError> {
        let credentials = ApiCredentials::new(api_key, secret_key)?;
        Self::with_credentials(credentials, config)
    }

    /// Create a client from already-validated credentials.
    pub fn with_credentials(
        credentials: ApiCredentials,
        config: impl Into<ClientConfig>,
    ) -> Result<Self, FlowError> {
        let config = config.into();
        config.validate()?;

        let client = RestClient::new(&config.base_url, config.timeout)
            .map_err(|e| FlowError::Config(e.to_string()))?;

        Ok(Self {
            client,
            credentials,
            config,
            options: CallOptions::default(),
        })
    }

    /// Create a client from `FLOW_*` environment variables (and `.env`).
    pub fn from_env() -> Result<Self, FlowError> {
        let credentials = ApiCredentials::from_env()?;
        Self::with_credentials(credentials, ClientConfig::from_env()?)
    }

    /// A view of this client whose calls use `options`.
    ///
    /// The view shares the connection pool and credentials.
    pub fn with_call_options(&self, options: CallOptions) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(self)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    pub fn coupons(&self) -> Coupons<'_> {
        Coupons::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    pub fn subscription_items(&self) -> SubscriptionItems<'_> {
        SubscriptionItems::new(self)
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    pub fn merchants(&self) -> Merchants<'_> {
        Merchants::new(self)
    }

    pub fn settlements(&self) -> Settlements<'_> {
        Settlements::new(self)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Sign `params` and send them to the endpoint of `operation`.
    ///
    /// `apiKey` is injected and the signature is attached under `s`. GET
    /// operations carry the parameters in the query string, POST operations
    /// in a form body. Exactly one HTTP request is issued; nothing is
    /// retried. Successful bodies are decoded as `T` without further checks.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        params: ParamSet,
    ) -> Result<T, FlowError> {
        let signer = RequestSigner::new(&self.credentials);
        let pairs = signer.sign_request(&params).into_pairs();

        tracing::debug!(
            operation = %operation,
            method = %operation.method(),
            endpoint = operation.endpoint(),
            "Dispatching Flow request"
        );

        self.client
            .send(operation.method(), operation.endpoint(), &pairs, &self.options)
            .await
            .map_err(|e| {
                tracing::warn!(operation = %operation, error = %e, "Flow request failed");
                FlowError::from_rest(operation, e)
            })
    }

    /// Canonicalize a date argument or refuse the operation.
    pub(crate) fn require_date(
        operation: Operation,
        input: impl Into<DateInput>,
    ) -> Result<String, FlowError> {
        let input = input.into();
        canonicalize_date(input.clone()).ok_or_else(|| FlowError::InvalidDate {
            operation,
            input: input.describe(),
        })
    }
}

impl std::fmt::Debug for FlowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
