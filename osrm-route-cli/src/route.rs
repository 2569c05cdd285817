//! Route command implementation for the `osrm-route` CLI.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use osrm_route_core::request::{RouteOptions, RouteRequest, parse_coordinates};
use osrm_route_core::response::RouteResult;
use osrm_route_http::{
    DEFAULT_BASE_URL, HttpTransport, HttpTransportConfig, RoutingClient, Transport,
};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ROUTE_ALTERNATIVES, ARG_ROUTE_ANNOTATIONS, ARG_ROUTE_BASE_URL, ARG_ROUTE_CONTINUE_STRAIGHT,
    ARG_ROUTE_COORDINATES, ARG_ROUTE_GEOMETRIES, ARG_ROUTE_OVERVIEW, ARG_ROUTE_PROFILE,
    ARG_ROUTE_STEPS, ARG_ROUTE_TIMEOUT, ARG_ROUTE_WAYPOINTS, CliError, ENV_ROUTE_COORDINATES,
};

/// Profile used when none is configured.
pub(crate) const DEFAULT_PROFILE: &str = "driving";

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute a route through the given coordinates by querying \
                 an OSRM route service. Coordinates are `lon,lat` pairs \
                 separated by `;`. Every option can also come from a \
                 configuration file or OSRM_ROUTE_* environment variables.",
    about = "Compute a route through two or more coordinates"
)]
#[ortho_config(prefix = "OSRM_ROUTE")]
pub(crate) struct RouteArgs {
    /// Coordinates to visit, e.g. "13.388860,52.517037;13.385983,52.496891".
    #[arg(value_name = "lon,lat;lon,lat")]
    #[serde(default)]
    pub(crate) coordinates: Option<String>,
    /// Routing profile (defaults to "driving").
    #[arg(long = ARG_ROUTE_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_ROUTE_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_ROUTE_TIMEOUT, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Alternative routes: "true", "false" or a count.
    #[arg(long = ARG_ROUTE_ALTERNATIVES, value_name = "value")]
    #[serde(default)]
    pub(crate) alternatives: Option<String>,
    /// Return turn-by-turn steps for each leg.
    #[arg(
        long = ARG_ROUTE_STEPS,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) steps: Option<bool>,
    /// Annotations: "true", "false" or a comma-separated list of kinds.
    #[arg(long = ARG_ROUTE_ANNOTATIONS, value_name = "value")]
    #[serde(default)]
    pub(crate) annotations: Option<String>,
    /// Geometry format: "polyline", "polyline6" or "geojson".
    #[arg(long = ARG_ROUTE_GEOMETRIES, value_name = "format")]
    #[serde(default)]
    pub(crate) geometries: Option<String>,
    /// Overview geometry: "simplified", "full" or "false".
    #[arg(long = ARG_ROUTE_OVERVIEW, value_name = "value")]
    #[serde(default)]
    pub(crate) overview: Option<String>,
    /// U-turn handling at waypoints: "default", "true" or "false".
    #[arg(long = ARG_ROUTE_CONTINUE_STRAIGHT, value_name = "value")]
    #[serde(default)]
    pub(crate) continue_straight: Option<String>,
    /// Coordinate indices treated as waypoints, e.g. "0;2".
    #[arg(long = ARG_ROUTE_WAYPOINTS, value_name = "i;j")]
    #[serde(default)]
    pub(crate) waypoints: Option<String>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }

    /// Option values in their wire form, keyed by query parameter.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let steps = self.steps.map(|steps| steps.to_string());
        [
            ("alternatives", self.alternatives.clone()),
            ("steps", steps),
            ("annotations", self.annotations.clone()),
            ("geometries", self.geometries.clone()),
            ("overview", self.overview.clone()),
            ("continue_straight", self.continue_straight.clone()),
            ("waypoints", self.waypoints.clone()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|text| (key, text)))
        .collect()
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Validated request to send.
    pub(crate) request: RouteRequest,
    /// Base URL of the OSRM server.
    pub(crate) base_url: String,
    /// Request timeout; the transport default when unset.
    pub(crate) timeout: Option<Duration>,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let options = RouteOptions::from_query(args.query_pairs())?;
        let raw_coordinates = args.coordinates.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_COORDINATES,
            env: ENV_ROUTE_COORDINATES,
        })?;
        let coordinates = parse_coordinates(&raw_coordinates)?;
        let profile = args.profile.unwrap_or_else(|| DEFAULT_PROFILE.to_owned());
        let request = RouteRequest::new(profile, coordinates)?.with_options(options);

        Ok(Self {
            request,
            base_url: args
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout: args.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Builds the transport for the current route invocation.
pub(super) trait RouteTransportBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Transport>, CliError>;
}

pub(super) struct DefaultRouteTransportBuilder;

impl RouteTransportBuilder for DefaultRouteTransportBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Transport>, CliError> {
        let mut transport_config = HttpTransportConfig::new(config.base_url.clone());
        if let Some(timeout) = config.timeout {
            transport_config = transport_config.with_timeout(timeout);
        }
        let transport = HttpTransport::with_config(transport_config).map_err(|source| {
            CliError::BuildTransport {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(transport))
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRouteTransportBuilder;
    run_route_with(args, &builder, &mut stdout)
}

pub(super) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteTransportBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let result = execute_route(&config, builder)?;
    write_route_result(writer, &result)
}

pub(super) fn execute_route(
    config: &RouteConfig,
    builder: &dyn RouteTransportBuilder,
) -> Result<RouteResult, CliError> {
    debug!(
        "routing {} coordinates with profile {} via {}",
        config.request.coordinates().len(),
        config.request.profile(),
        config.base_url
    );
    let transport = builder.build(config)?;
    let client = RoutingClient::new(transport.as_ref());
    client
        .route(&config.request)?
        .into_result()
        .map_err(|failure| CliError::ServiceFailure {
            message: failure
                .message
                .unwrap_or_else(|| "no message given".to_owned()),
            code: failure.code,
        })
}

fn write_route_result(writer: &mut dyn Write, result: &RouteResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerialiseRouteResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRouteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
