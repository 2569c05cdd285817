//! The encode, fetch and decode pipeline.

use log::{debug, warn};
use osrm_route_core::request::RouteRequest;
use osrm_route_core::response::{ResponseError, RouteResponse, decode_route_response_slice};

use crate::config::HttpTransportConfig;
use crate::error::{ClientBuildError, RoutingError};
use crate::transport::{HttpTransport, Transport};

/// Route service client over any [`Transport`].
///
/// # Example
///
/// ```no_run
/// use geo::Coord;
/// use osrm_route_core::request::RouteRequest;
/// use osrm_route_http::RoutingClient;
///
/// let client = RoutingClient::http("http://localhost:5000")?;
/// let request = RouteRequest::new(
///     "driving",
///     [
///         Coord { x: 13.388860, y: 52.517037 },
///         Coord { x: 13.385983, y: 52.496891 },
///     ],
/// )?
/// .with_steps(true);
///
/// let result = client.route(&request)?.into_result()?;
/// assert!(!result.routes.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RoutingClient<T> {
    transport: T,
}

impl<T: Transport> RoutingClient<T> {
    /// Wrap a transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode `request`, fetch it and decode the answer.
    ///
    /// A service failure such as `NoRoute` is returned as
    /// `Ok(RouteResponse::Failed(_))`.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidRequest`] before anything is sent,
    /// [`RoutingError::Transport`] when no body arrives,
    /// [`RoutingError::MalformedBody`] when the body is not JSON and
    /// [`RoutingError::Protocol`] when the JSON breaks the contract.
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResponse, RoutingError> {
        let encoded = request.encode()?;
        debug!("requesting {}", encoded.path);
        let response = self.transport.get(&encoded)?;
        decode_route_response_slice(&response.body).map_err(|err| match err {
            ResponseError::Syntax(source) => {
                warn!(
                    "route service returned a non-JSON body with HTTP {}",
                    response.status
                );
                RoutingError::MalformedBody {
                    status: response.status,
                    message: source.to_string(),
                }
            }
            ResponseError::Protocol(source) => RoutingError::Protocol(source),
        })
    }
}

impl RoutingClient<HttpTransport> {
    /// Client talking HTTP to `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn http(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        HttpTransport::new(base_url).map(Self::new)
    }

    /// Client talking HTTP with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self, ClientBuildError> {
        HttpTransport::with_config(config).map(Self::new)
    }
}
