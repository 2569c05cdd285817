//! Entry point for the `osrm-route` command-line interface.
#![forbid(unsafe_code)]

use osrm_route_cli::CliError;

fn main() {
    match osrm_route_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("osrm-route: {err}");
            std::process::exit(1);
        }
    }
}
