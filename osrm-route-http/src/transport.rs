//! Fetching encoded route requests over HTTP.
//!
//! [`Transport`] is synchronous so callers without an async runtime can use
//! it directly. [`HttpTransport`] bridges to reqwest by blocking on a Tokio
//! runtime internally.

use log::debug;
use osrm_route_core::request::EncodedRequest;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::config::HttpTransportConfig;
use crate::error::{ClientBuildError, TransportError};

/// Raw answer of the route service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, expected to be JSON.
    pub body: Vec<u8>,
}

/// Something that can `GET` an encoded route request.
///
/// Status codes are passed through untouched: the route service reports
/// failures through the `code` field of the body, including on 4xx answers.
pub trait Transport {
    /// Send `request` and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response body was received.
    fn get(&self, request: &EncodedRequest) -> Result<TransportResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &EncodedRequest) -> Result<TransportResponse, TransportError> {
        (**self).get(request)
    }
}

/// HTTP transport backed by reqwest.
///
/// Owns a current-thread Tokio runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the stored runtime is used. Inside a
/// multi-threaded runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]) the caller's handle is used with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics.
///
/// Inside a `current_thread` runtime the transport falls back to its own
/// runtime. This avoids the `block_in_place` panic but may deadlock if the
/// caller's runtime drives IO this request depends on.
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpTransportConfig::new(base_url))
    }

    /// Create a transport with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Absolute URL for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] when the base URL and path do
    /// not form a valid URL.
    pub fn url_for(&self, request: &EncodedRequest) -> Result<Url, TransportError> {
        let raw = self.config.url_for(&request.path, &request.query_string());
        Url::parse(&raw).map_err(|err| TransportError::InvalidUrl {
            url: raw,
            message: err.to_string(),
        })
    }

    async fn fetch(&self, url: Url) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        debug!("GET {url} -> HTTP {status}, {} bytes", body.len());
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        TransportError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &EncodedRequest) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(request)?;
        let future = self.fetch(url);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime, or a current_thread one: use our own.
            _ => self.runtime.block_on(future),
        }
    }
}
