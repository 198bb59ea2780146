//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use crate::options::{cancelled, CallOptions};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP verbs used by form-encoded APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel as an `application/x-www-form-urlencoded` body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Generic REST client for making HTTP requests.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://www.flow.cl/api")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with the parameters URL-encoded in the query string.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        options: &CallOptions,
    ) -> Result<T, RestError> {
        self.send(HttpMethod::Get, path, params, options).await
    }

    /// Make a POST request with the parameters as a form-encoded body.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        options: &CallOptions,
    ) -> Result<T, RestError> {
        self.send(HttpMethod::Post, path, params, options).await
    }

    /// Issue exactly one request and decode the JSON body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(String, String)],
        options: &CallOptions,
    ) -> Result<T, RestError> {
        let url = self.build_url(path);
        tracing::debug!(method = %method, url = %url, params = params.len(), "Sending request");

        let request = match method {
            HttpMethod::Get => self.client.get(&url).query(params),
            HttpMethod::Post => self.client.post(&url).form(params),
        };
        let request = apply_timeout(request, options.timeout);

        let call = async {
            let response = request.send().await?;
            self.handle_response(response).await
        };

        match options.cancel.clone() {
            Some(mut cancel) => {
                tokio::select! {
                    biased;

                    _ = cancelled(&mut cancel) => {
                        tracing::debug!(method = %method, url = %url, "Request cancelled");
                        Err(RestError::Cancelled)
                    }

                    result = call => result,
                }
            }
            None => call.await,
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(body = %body, error = %e, "Failed to parse response");
                RestError::Parse(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();

            Err(RestError::HttpError {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn apply_timeout(request: RequestBuilder, timeout: Option<Duration>) -> RequestBuilder {
    match timeout {
        Some(t) => request.timeout(t),
        None => request,
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde::Deserialize;
    use tokio::sync::watch;

    #[derive(Debug, Deserialize)]
    struct Echo {
        ok: bool,
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_url() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("/payment/getStatus"),
            "https://api.example.com/payment/getStatus"
        );
        assert_eq!(
            client.build_url("payment/getStatus"),
            "https://api.example.com/payment/getStatus"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://api.example.com/api/").unwrap();
        assert_eq!(
            client.build_url("/plans/list"),
            "https://api.example.com/api/plans/list"
        );
    }

    #[tokio::test]
    async fn test_get_encodes_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/payment/getStatus")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("token".into(), "a b&c".into()),
                Matcher::UrlEncoded("s".into(), "sig".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = RestClient::with_default_timeout(&server.url()).unwrap();
        let echo: Echo = client
            .get(
                "/payment/getStatus",
                &pairs(&[("token", "a b&c"), ("s", "sig")]),
                &CallOptions::default(),
            )
            .await
            .unwrap();

        assert!(echo.ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_form_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/payment/create")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("email".into(), "a@b.com".into()),
                Matcher::UrlEncoded("subject".into(), "Café".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = RestClient::with_default_timeout(&server.url()).unwrap();
        let echo: Echo = client
            .post_form(
                "/payment/create",
                &pairs(&[("email", "a@b.com"), ("subject", "Café")]),
                &CallOptions::default(),
            )
            .await
            .unwrap();

        assert!(echo.ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_keeps_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/plans/get")
            .with_status(400)
            .with_body(r#"{"code":1620,"message":"Plan not found"}"#)
            .create_async()
            .await;

        let client = RestClient::with_default_timeout(&server.url()).unwrap();
        let err = client
            .get::<Echo>("/plans/get", &[], &CallOptions::default())
            .await
            .unwrap_err();

        match err {
            RestError::HttpError { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Plan not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/plans/get")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let client = RestClient::with_default_timeout(&server.url()).unwrap();
        let err = client
            .get::<Echo>("/plans/get", &[], &CallOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RestError::Parse(_)));
    }

    #[tokio::test]
    async fn test_already_cancelled_short_circuits() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/plans/get")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .expect(0)
            .create_async()
            .await;

        let (tx, rx) = watch::channel(true);
        let client = RestClient::with_default_timeout(&server.url()).unwrap();
        let err = client
            .get::<Echo>("/plans/get", &[], &CallOptions::new().with_cancel(rx))
            .await
            .unwrap_err();

        assert!(matches!(err, RestError::Cancelled));
        mock.assert_async().await;
        drop(tx);
    }

    #[tokio::test]
    async fn test_dropped_cancel_sender_does_not_cancel() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/plans/get")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let (tx, rx) = watch::channel(false);
        drop(tx);

        let client = RestClient::with_default_timeout(&server.url()).unwrap();
        let echo: Echo = client
            .get("/plans/get", &[], &CallOptions::new().with_cancel(rx))
            .await
            .unwrap();
        assert!(echo.ok);
    }
}
