//! HTTP transport and client for the OSRM route service.
//!
//! [`RoutingClient`] runs the full pipeline: it encodes a
//! [`RouteRequest`](osrm_route_core::RouteRequest), fetches it through a
//! [`Transport`] and decodes the body into a
//! [`RouteResponse`](osrm_route_core::RouteResponse). [`HttpTransport`] is
//! the reqwest-backed transport; tests use
//! [`test_support::StubTransport`].
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use osrm_route_http::{HttpTransportConfig, RoutingClient};
//!
//! let config = HttpTransportConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let client = RoutingClient::with_config(config)?;
//! # let _ = client;
//! # Ok::<(), osrm_route_http::ClientBuildError>(())
//! ```

mod client;
mod config;
mod error;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use client::RoutingClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpTransportConfig};
pub use error::{ClientBuildError, RoutingError, TransportError};
pub use transport::{HttpTransport, Transport, TransportResponse};
