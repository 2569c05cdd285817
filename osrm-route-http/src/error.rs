//! Errors raised while fetching and decoding a route.

use osrm_route_core::request::EncodeError;
use osrm_route_core::response::DecodeError;
use thiserror::Error;

/// The transport could not deliver a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The base URL and encoded path do not form a valid URL.
    #[error("invalid request URL {url}: {message}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// Connection, TLS or body transfer failure.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying client message.
        message: String,
    },
}

/// Failure of the encode, fetch and decode pipeline.
///
/// A route service that answers with a code other than `Ok` is not an error
/// here; it arrives as [`RouteResponse::Failed`](osrm_route_core::RouteResponse::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The request was rejected before anything was sent.
    #[error("invalid route request")]
    InvalidRequest(#[source] EncodeError),
    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The body was not JSON.
    #[error("route service returned a malformed body (HTTP {status}): {message}")]
    MalformedBody {
        /// HTTP status of the response.
        status: u16,
        /// JSON parser message.
        message: String,
    },
    /// The JSON broke the route service contract.
    #[error("route service response violates the protocol")]
    Protocol(#[source] DecodeError),
}

impl From<EncodeError> for RoutingError {
    fn from(err: EncodeError) -> Self {
        Self::InvalidRequest(err)
    }
}

impl From<DecodeError> for RoutingError {
    fn from(err: DecodeError) -> Self {
        Self::Protocol(err)
    }
}

/// Error type for [`HttpTransport`](crate::HttpTransport) construction failures.
#[derive(Debug)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ClientBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}
