//! Core HTTP client implementation.

use crate::config::Config;
use crate::envelope::{ErrorEnvelope, PayloadShape, decode_payload};
use crate::error::{ApiError, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the PocketSomm API.
///
/// Holds one configured `reqwest::Client` that every endpoint goes
/// through, uploads included, so timeouts and connection pooling are
/// uniform. Construct it once at startup and hand it to the code that
/// needs it; cloning is cheap and shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] before any request is attempted when
    /// the base URL does not parse or uses a scheme other than `http` or
    /// `https`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pocketsomm_client::{Client, Config};
    ///
    /// let client = Client::new(Config::new("http://127.0.0.1:8000")).unwrap();
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("bad base URL {}: {e}", config.base_url)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported scheme {} in base URL {}",
                base_url.scheme(),
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .read_timeout(config.read_timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { base_url, http })
    }

    /// Create a client configured from the environment.
    ///
    /// See [`Config::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build a full URL for the given path, which may carry a query string.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Issue one request and return the status code and raw body bytes.
    ///
    /// No retries. Failures that never produced a status (DNS, refused
    /// connection, timeout) surface as [`ApiError::Transport`]; any
    /// response with a status is returned for classification.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "received response");

        Ok((status, bytes.to_vec()))
    }

    /// Classify a non-2xx response.
    ///
    /// A parseable error envelope wins and its message is kept verbatim;
    /// anything else becomes a status error carrying the raw body.
    fn classify_failure(status: StatusCode, bytes: &[u8]) -> ApiError {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(bytes) {
            tracing::warn!(
                status = status.as_u16(),
                code = envelope.error.code,
                message = %envelope.error.message,
                "server reported an error"
            );
            return ApiError::Server {
                code: envelope.error.code,
                message: envelope.error.message,
                details: envelope.error.details,
            };
        }

        tracing::warn!(status = status.as_u16(), "request failed without an error envelope");
        ApiError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Return the body of a 2xx response, or the classified error.
    fn check_status(status: StatusCode, bytes: Vec<u8>) -> Result<Vec<u8>> {
        if status.is_success() {
            Ok(bytes)
        } else {
            Err(Self::classify_failure(status, &bytes))
        }
    }

    /// GET `path` and return the raw body of a 2xx response.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Vec<u8>> {
        let (status, bytes) = self.send::<()>(Method::GET, path, None).await?;
        Self::check_status(status, bytes)
    }

    /// GET `path` and decode the payload with the declared shape.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        shape: PayloadShape,
    ) -> Result<T> {
        let bytes = self.get_raw(path).await?;
        decode_payload(&bytes, shape).map_err(ApiError::Decode)
    }

    /// POST a JSON body to `path` and decode the payload with the declared
    /// shape.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        shape: PayloadShape,
    ) -> Result<T> {
        let (status, bytes) = self.send(Method::POST, path, Some(body)).await?;
        let bytes = Self::check_status(status, bytes)?;
        decode_payload(&bytes, shape).map_err(ApiError::Decode)
    }

    /// POST a JSON body to `path` where any 2xx means success and the
    /// response body is ignored.
    pub(crate) async fn post_expect_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let (status, bytes) = self.send(Method::POST, path, Some(body)).await?;
        Self::check_status(status, bytes).map(|_| ())
    }
}
