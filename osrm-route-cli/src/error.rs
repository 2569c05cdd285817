//! Error type for the `osrm-route` CLI.

use std::sync::Arc;

use osrm_route_core::EncodeError;
use osrm_route_http::{ClientBuildError, RoutingError};
use thiserror::Error;

/// Errors emitted by the `osrm-route` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can provide it.
        env: &'static str,
    },
    /// The coordinates or options do not form a valid route request.
    #[error("invalid route request: {0}")]
    InvalidRequest(#[from] EncodeError),
    /// Constructing the HTTP transport failed.
    #[error("failed to build HTTP transport for {base_url:?}: {source}")]
    BuildTransport {
        /// Base URL the transport was configured with.
        base_url: String,
        /// Underlying failure.
        #[source]
        source: ClientBuildError,
    },
    /// The route call failed before a service answer was decoded.
    #[error("route call failed: {0}")]
    Routing(#[from] RoutingError),
    /// The service answered with a code other than `Ok`.
    #[error("route service returned {code}: {message}")]
    ServiceFailure {
        /// Service code such as `NoRoute`.
        code: String,
        /// Human-readable explanation from the service.
        message: String,
    },
    /// Serialising the route result failed.
    #[error("failed to serialise route result: {0}")]
    SerialiseRouteResult(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteRouteOutput(#[source] std::io::Error),
}
