//! Test doubles shared by the CLI unit and behaviour tests.

use std::sync::Arc;

use clap::Parser;
use osrm_route_core::request::EncodedRequest;
use osrm_route_http::test_support::StubTransport;
use osrm_route_http::{Transport, TransportError, TransportResponse};

use crate::route::{RouteArgs, RouteConfig, RouteTransportBuilder};
use crate::{Cli, CliError, Command};

/// Two points in central Berlin.
pub(super) const BERLIN: &str = "13.38886,52.517037;13.385983,52.496891";

/// Hands out one shared stub so tests can inspect it after the run.
#[derive(Debug, Clone)]
pub(super) struct StubRouteTransportBuilder {
    pub(super) stub: Arc<StubTransport>,
}

impl StubRouteTransportBuilder {
    pub(super) fn new(stub: StubTransport) -> Self {
        Self {
            stub: Arc::new(stub),
        }
    }

    pub(super) fn requests(&self) -> Vec<EncodedRequest> {
        self.stub.requests()
    }
}

struct SharedStub(Arc<StubTransport>);

impl Transport for SharedStub {
    fn get(&self, request: &EncodedRequest) -> Result<TransportResponse, TransportError> {
        self.0.get(request)
    }
}

impl RouteTransportBuilder for StubRouteTransportBuilder {
    fn build(&self, _config: &RouteConfig) -> Result<Box<dyn Transport>, CliError> {
        Ok(Box::new(SharedStub(Arc::clone(&self.stub))))
    }
}

/// Parse `osrm-route route <extra..>` into [`RouteArgs`].
pub(super) fn parse_route_args(extra: &[&str]) -> Result<RouteArgs, CliError> {
    let argv = ["osrm-route", "route"].into_iter().chain(extra.iter().copied());
    let cli = Cli::try_parse_from(argv)?;
    match cli.command {
        Command::Route(args) => Ok(args),
    }
}
