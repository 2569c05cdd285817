//! Integration tests for [`HttpTransport`] against a mock route service.
//!
//! The transport is synchronous and owns a runtime, which must not be dropped
//! inside async code, so the async tests drive it from `spawn_blocking`.

use std::time::Duration;

use geo::Coord;
use osrm_route_core::RouteResponse;
use osrm_route_core::request::{Alternatives, RouteRequest};
use osrm_route_core::test_support::{minimal_response, no_route_response};
use osrm_route_http::{HttpTransportConfig, RoutingClient, RoutingError, TransportError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const ROUTE_PATH: &str = "/route/v1/driving/13.38886,52.517037;13.385983,52.496891";

fn berlin_request() -> RouteRequest {
    RouteRequest::new(
        "driving",
        [
            Coord {
                x: 13.388_860,
                y: 52.517_037,
            },
            Coord {
                x: 13.385_983,
                y: 52.496_891,
            },
        ],
    )
    .expect("valid request")
}

fn route_with(
    config: HttpTransportConfig,
    request: RouteRequest,
) -> Result<RouteResponse, RoutingError> {
    let client = RoutingClient::with_config(config).expect("client builds");
    client.route(&request)
}

async fn route_blocking(
    server: &MockServer,
    request: RouteRequest,
) -> Result<RouteResponse, RoutingError> {
    let config = HttpTransportConfig::new(server.uri());
    tokio::task::spawn_blocking(move || route_with(config, request))
        .await
        .expect("blocking task completes")
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_path_and_non_default_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ROUTE_PATH))
        .and(query_param("alternatives", "2"))
        .and(query_param("steps", "true"))
        .and(header("user-agent", "osrm-route/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(minimal_response()))
        .expect(1)
        .mount(&server)
        .await;

    let request = berlin_request()
        .with_alternatives(Alternatives::Count(2))
        .with_steps(true);
    let response = route_blocking(&server, request)
        .await
        .expect("route succeeds");

    let result = response.into_result().expect("service success");
    assert_eq!(result.routes.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn decodes_failure_bodies_on_client_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ROUTE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(no_route_response()))
        .mount(&server)
        .await;

    let response = route_blocking(&server, berlin_request())
        .await
        .expect("route succeeds");

    let failure = response.into_result().expect_err("service failure");
    assert!(failure.is_no_route());
}

#[tokio::test(flavor = "multi_thread")]
async fn reports_html_error_pages_as_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = route_blocking(&server, berlin_request())
        .await
        .expect_err("should fail");

    assert!(matches!(err, RoutingError::MalformedBody { status: 502, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_servers_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(minimal_response())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = HttpTransportConfig::new(server.uri()).with_timeout(Duration::from_secs(1));
    let err = tokio::task::spawn_blocking(move || route_with(config, berlin_request()))
        .await
        .expect("blocking task completes")
        .expect_err("should fail");

    assert!(
        matches!(
            err,
            RoutingError::Transport(TransportError::Timeout { timeout_secs: 1, .. })
        ),
        "unexpected error {err:?}"
    );
}

#[test]
fn works_without_an_ambient_runtime() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime builds");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(minimal_response()))
            .mount(&server)
            .await;
        server
    });

    let response = route_with(HttpTransportConfig::new(server.uri()), berlin_request())
        .expect("route succeeds");

    assert!(response.as_result().is_some());
}
