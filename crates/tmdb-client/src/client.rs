//! `Client` - TMDB API client and request executor.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::options::{Options, fmt_options};
use crate::types::ErrorResponse;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default request timeout when no custom transport is supplied.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of extra attempts after an HTTP 429 response.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Backoff base when the response carries no usable `Retry-After` header.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Upper bound for any single retry sleep.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Content type sent with every request.
const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

/// TMDB API client.
///
/// Configuration is fixed at [`ClientBuilder::build`]; the client is
/// usable behind `&self` from concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    /// HTTP transport.
    http_client: reqwest::Client,
    /// Base URL for API requests (no trailing slash).
    base_url: String,
    /// TMDB API key, passed as the `api_key` query parameter.
    api_key: String,
    /// Whether HTTP 429 responses are retried automatically.
    auto_retry: bool,
    /// Extra attempts allowed after the first 429.
    max_retries: u32,
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    auto_retry: bool,
    max_retries: Option<u32>,
}

impl ClientBuilder {
    /// Sets the API key (required, must be non-empty).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = Some(url.trim_end_matches('/').to_owned());
        self
    }

    /// Sets the request timeout (default: 10s). Ignored when a custom
    /// transport is supplied via [`Self::http_client`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies a pre-configured `reqwest::Client` transport.
    #[must_use]
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Enables automatic retry of rate-limited GET requests.
    #[must_use]
    pub const fn auto_retry(mut self, enabled: bool) -> Self {
        self.auto_retry = enabled;
        self
    }

    /// Sets the retry budget: extra attempts after the first 429 (default: 3).
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or is empty.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<Client> {
        let api_key = self.api_key.context("api_key is required")?;
        if api_key.is_empty() {
            bail!("api_key is empty");
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

        let http_client = match self.http_client {
            Some(http_client) => http_client,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .gzip(true)
                .build()
                .context("failed to build HTTP client")?,
        };

        Ok(Client {
            http_client,
            base_url,
            api_key,
            auto_retry: self.auto_retry,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        })
    }
}

impl Client {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Formats a full request URL: base URL + path + credential + options.
    pub(crate) fn fmt_url(&self, path: &str, options: Option<&Options>) -> String {
        format!(
            "{}{}?api_key={}{}",
            self.base_url,
            path,
            self.api_key,
            fmt_options(options),
        )
    }

    /// Sends a GET request and decodes the JSON response into `T`.
    ///
    /// HTTP 204 short-circuits to `T::default()`. HTTP 429 is retried
    /// within the configured budget when auto-retry is enabled; any other
    /// non-200 status is decoded as a TMDB error.
    #[instrument(skip_all)]
    pub(crate) async fn get<T: DeserializeOwned + Default>(&self, url: &str) -> Result<T> {
        if url.is_empty() {
            bail!("url field is empty");
        }

        // The query string carries the API key; log the path only.
        let path = url.split('?').next().unwrap_or(url);
        tracing::debug!(path, "TMDB API request");

        let mut attempt = 0u32;
        loop {
            let response = self
                .http_client
                .get(url)
                .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
                .send()
                .await
                .with_context(|| format!("request failed: {path}"))?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS && self.auto_retry {
                attempt = attempt.saturating_add(1);
                if attempt > self.max_retries {
                    bail!(
                        "rate limit retry budget exhausted after {} retries: {path}",
                        self.max_retries,
                    );
                }
                let delay = retry_delay(&response, attempt);
                tracing::warn!(
                    attempt,
                    max_retries = self.max_retries,
                    delay_secs = delay.as_secs(),
                    "TMDB API rate limited (429). Retrying...",
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            if status == StatusCode::NO_CONTENT {
                return Ok(T::default());
            }

            if status != StatusCode::OK {
                return Err(decode_error(response).await);
            }

            let body = response
                .bytes()
                .await
                .with_context(|| format!("could not read response body: {path}"))?;
            let parsed = serde_json::from_slice(&body)
                .with_context(|| format!("could not decode the data: {path}"))?;
            return Ok(parsed);
        }
    }

    /// Sends a POST request with a JSON body and decodes the response.
    ///
    /// Success is HTTP 201; anything else is decoded as a TMDB error.
    /// POST endpoints are not idempotent, so no retry is attempted here.
    #[instrument(skip_all)]
    pub(crate) async fn post<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        if url.is_empty() {
            bail!("url field is empty");
        }

        let path = url.split('?').next().unwrap_or(url);
        tracing::debug!(path, "TMDB API request");

        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .json(body)
            .send()
            .await
            .with_context(|| format!("request failed: {path}"))?;

        if response.status() != StatusCode::CREATED {
            return Err(decode_error(response).await);
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("could not read response body: {path}"))?;
        let parsed = serde_json::from_slice(&body)
            .with_context(|| format!("could not decode the data: {path}"))?;
        Ok(parsed)
    }
}

/// Computes the sleep before the next attempt after an HTTP 429.
///
/// Prefers the `Retry-After` header (integer seconds); falls back to an
/// exponential backoff starting at 5s. Either way the delay is capped.
fn retry_delay(response: &reqwest::Response, attempt: u32) -> Duration {
    if let Some(value) = response.headers().get(reqwest::header::RETRY_AFTER)
        && let Ok(text) = value.to_str()
        && let Ok(seconds) = text.parse::<u64>()
    {
        return Duration::from_secs(seconds).min(MAX_RETRY_DELAY);
    }
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    DEFAULT_RETRY_DELAY
        .saturating_mul(factor)
        .min(MAX_RETRY_DELAY)
}

/// Decodes a non-success response into an error.
///
/// An empty body produces a generic status-text error; a JSON body is
/// decoded into [`ErrorResponse`] (recoverable via `downcast_ref`); a body
/// that fails to parse yields a diagnostic with the raw payload.
async fn decode_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(source) => {
            return anyhow::Error::new(source).context("could not read body response");
        }
    };

    if body.is_empty() {
        return anyhow!(
            "[{}]: empty body {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
        );
    }

    match serde_json::from_slice::<ErrorResponse>(&body) {
        Ok(error_response) => anyhow::Error::new(error_response),
        Err(_) => anyhow!(
            "couldn't decode error: ({}) [{}]",
            body.len(),
            String::from_utf8_lossy(&body),
        ),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const NOT_FOUND_BODY: &str = r#"{"success":false,"status_code":34,"status_message":"The resource you requested could not be found."}"#;
    const INVALID_KEY_BODY: &str = r#"{"success":false,"status_code":7,"status_message":"Invalid API key: You must be granted a valid key."}"#;
    const RATE_LIMIT_BODY: &str = r#"{"success":false,"status_code":25,"status_message":"Your request count (41) is over the allowed limit of 40."}"#;

    fn test_client(server: &MockServer) -> Client {
        Client::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        // Arrange & Act
        let result = Client::builder().build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api_key is required")
        );
    }

    #[test]
    fn test_builder_rejects_empty_api_key() {
        // Arrange & Act
        let result = Client::builder().api_key("").build();

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api_key is empty"));
    }

    #[test]
    fn test_builder_with_api_key_succeeds() {
        // Arrange & Act
        let result = Client::builder().api_key("test-key").build();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_trims_base_url_trailing_slash() {
        // Arrange & Act
        let client = Client::builder()
            .api_key("test-key")
            .base_url("http://localhost:8080/3/")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url, "http://localhost:8080/3");
    }

    #[test]
    fn test_fmt_url_appends_credential_and_options() {
        // Arrange
        let client = Client::builder().api_key("test-key").build().unwrap();
        let mut options = Options::new();
        options.insert(String::from("language"), String::from("pt-BR"));

        // Act
        let url = client.fmt_url("/movie/550", Some(&options));

        // Assert
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/movie/550?api_key=test-key&language=pt-BR"
        );
    }

    #[tokio::test]
    async fn test_get_empty_url_fails() {
        // Arrange
        let client = Client::builder().api_key("test-key").build().unwrap();

        // Act
        let result: Result<serde_json::Value> = client.get("").await;

        // Assert
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "url field is empty");
    }

    #[tokio::test]
    async fn test_get_sends_json_content_type() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("content-type", "application/json;charset=utf-8"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/configuration", None);

        // Act & Assert (mock expect(1) verifies the header)
        let _value: serde_json::Value = client.get(&url).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_not_found_yields_remote_message() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/movie/0", None);

        // Act
        let result: Result<serde_json::Value> = client.get(&url).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "The resource you requested could not be found."
        );
        let remote = err.downcast_ref::<ErrorResponse>().unwrap();
        assert_eq!(remote.status_code, 34);
        assert!(!remote.success);
    }

    #[tokio::test]
    async fn test_get_invalid_key_yields_remote_message() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(INVALID_KEY_BODY))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/movie/550", None);

        // Act
        let result: Result<serde_json::Value> = client.get(&url).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid API key: You must be granted a valid key."
        );
    }

    #[tokio::test]
    async fn test_get_no_content_yields_default() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/movie/550", None);

        // Act
        let result: Result<ErrorResponse> = client.get(&url).await;

        // Assert
        assert_eq!(result.unwrap(), ErrorResponse::default());
    }

    #[tokio::test]
    async fn test_get_empty_error_body_yields_status_text() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/movie/550", None);

        // Act
        let result: Result<serde_json::Value> = client.get(&url).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "[500]: empty body Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_get_undecodable_error_body_yields_diagnostic() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/movie/550", None);

        // Act
        let result: Result<serde_json::Value> = client.get(&url).await;

        // Assert
        let err = result.unwrap_err().to_string();
        assert!(err.contains("couldn't decode error"));
        assert!(err.contains("<html>bad gateway</html>"));
        assert!(err.contains("(24)"));
    }

    #[tokio::test]
    async fn test_get_retries_after_429_then_succeeds() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "0")
                    .set_body_string(RATE_LIMIT_BODY),
            )
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"page":1}"#))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = Client::builder()
            .api_key("test-key")
            .base_url(mock_server.uri())
            .auto_retry(true)
            .build()
            .unwrap();
        let url = client.fmt_url("/movie/popular", None);

        // Act
        let value: serde_json::Value = client.get(&url).await.unwrap();

        // Assert
        assert_eq!(value["page"], 1);
    }

    #[tokio::test]
    async fn test_get_retry_budget_exhausted() {
        // Arrange
        let mock_server = MockServer::start().await;
        // All requests are rate limited: initial + 2 retries = 3.
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "0")
                    .set_body_string(RATE_LIMIT_BODY),
            )
            .expect(3)
            .mount(&mock_server)
            .await;
        let client = Client::builder()
            .api_key("test-key")
            .base_url(mock_server.uri())
            .auto_retry(true)
            .max_retries(2)
            .build()
            .unwrap();
        let url = client.fmt_url("/movie/popular", None);

        // Act
        let result: Result<serde_json::Value> = client.get(&url).await;

        // Assert
        let err = result.unwrap_err().to_string();
        assert!(err.contains("rate limit retry budget exhausted after 2 retries"));
    }

    #[tokio::test]
    async fn test_get_429_without_auto_retry_surfaces_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string(RATE_LIMIT_BODY))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/movie/popular", None);

        // Act
        let result: Result<serde_json::Value> = client.get(&url).await;

        // Assert
        let err = result.unwrap_err();
        let remote = err.downcast_ref::<ErrorResponse>().unwrap();
        assert_eq!(remote.status_code, 25);
    }

    #[tokio::test]
    async fn test_post_empty_url_fails() {
        // Arrange
        let client = Client::builder().api_key("test-key").build().unwrap();

        // Act
        let result: Result<serde_json::Value> =
            client.post("", &serde_json::json!({"name": "x"})).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "url field is empty");
    }

    #[tokio::test]
    async fn test_post_non_created_is_an_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/list"))
            .respond_with(ResponseTemplate::new(401).set_body_string(INVALID_KEY_BODY))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let url = client.fmt_url("/list", None);

        // Act
        let result: Result<serde_json::Value> =
            client.post(&url, &serde_json::json!({"name": "x"})).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid API key: You must be granted a valid key."
        );
    }

    #[test]
    fn test_retry_delay_backoff_grows_and_caps() {
        // Arrange & Act & Assert
        let factor = 2u32.saturating_pow(0);
        assert_eq!(DEFAULT_RETRY_DELAY.saturating_mul(factor), Duration::from_secs(5));
        let factor = 2u32.saturating_pow(3);
        assert_eq!(
            DEFAULT_RETRY_DELAY
                .saturating_mul(factor)
                .min(MAX_RETRY_DELAY),
            Duration::from_secs(40)
        );
        let factor = 2u32.saturating_pow(10);
        assert_eq!(
            DEFAULT_RETRY_DELAY
                .saturating_mul(factor)
                .min(MAX_RETRY_DELAY),
            MAX_RETRY_DELAY
        );
    }
}
