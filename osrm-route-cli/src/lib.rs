//! Command-line interface for querying an OSRM route service.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod route;

pub use error::CliError;

use route::{RouteArgs, run_route};

const ARG_ROUTE_COORDINATES: &str = "coordinates";
const ARG_ROUTE_PROFILE: &str = "profile";
const ARG_ROUTE_BASE_URL: &str = "base-url";
const ARG_ROUTE_TIMEOUT: &str = "timeout";
const ARG_ROUTE_ALTERNATIVES: &str = "alternatives";
const ARG_ROUTE_STEPS: &str = "steps";
const ARG_ROUTE_ANNOTATIONS: &str = "annotations";
const ARG_ROUTE_GEOMETRIES: &str = "geometries";
const ARG_ROUTE_OVERVIEW: &str = "overview";
const ARG_ROUTE_CONTINUE_STRAIGHT: &str = "continue-straight";
const ARG_ROUTE_WAYPOINTS: &str = "waypoints";
const ENV_ROUTE_COORDINATES: &str = "OSRM_ROUTE_CMDS_ROUTE_COORDINATES";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, the route
/// call or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "osrm-route",
    about = "Query the route service of an OSRM server",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a route through two or more coordinates.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
