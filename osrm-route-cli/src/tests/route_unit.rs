//! Focused unit tests covering route CLI configuration and output.

use super::helpers::{BERLIN, StubRouteTransportBuilder, parse_route_args};
use super::*;
use crate::route::{DEFAULT_PROFILE, RouteArgs, RouteConfig, config_from_layers_for_test, execute_route};
use osrm_route_core::EncodeError;
use osrm_route_core::request::{Alternatives, ContinueStraight, Overview, RouteOptions};
use osrm_route_core::test_support::{minimal_response, no_route_response};
use osrm_route_http::DEFAULT_BASE_URL;
use osrm_route_http::test_support::StubTransport;
use rstest::rstest;
use std::time::Duration;

fn config_from_cli(extra: &[&str]) -> Result<RouteConfig, CliError> {
    let args = parse_route_args(extra)?;
    RouteConfig::try_from(args)
}

#[rstest]
fn converting_route_without_coordinates_errors() {
    let args = RouteArgs {
        coordinates: None,
        ..RouteArgs::default()
    };

    let err = RouteConfig::try_from(args).expect_err("missing coordinates should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ROUTE_COORDINATES);
            assert_eq!(env, ENV_ROUTE_COORDINATES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn route_config_applies_defaults() {
    let config = config_from_cli(&[BERLIN]).expect("config should build");

    assert_eq!(config.request.profile(), DEFAULT_PROFILE);
    assert_eq!(config.request.coordinates().len(), 2);
    assert_eq!(config.request.options(), &RouteOptions::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, None);
}

#[rstest]
fn route_config_reads_every_flag() {
    let config = config_from_cli(&[
        BERLIN,
        "--profile",
        "foot",
        "--base-url",
        "http://localhost:5000",
        "--timeout",
        "5",
        "--alternatives",
        "3",
        "--overview",
        "full",
        "--continue-straight",
        "false",
        "--waypoints",
        "0;1",
        "--steps",
    ])
    .expect("config should build");

    let options = config.request.options();
    assert_eq!(config.request.profile(), "foot");
    assert_eq!(config.base_url, "http://localhost:5000");
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(options.alternatives, Alternatives::Count(3));
    assert_eq!(options.overview, Overview::Full);
    assert_eq!(options.continue_straight, ContinueStraight::Disabled);
    assert_eq!(options.waypoints, Some(vec![0, 1]));
    assert!(options.steps);
}

#[rstest]
#[case::bare_flag(&["--steps"], true)]
#[case::explicit_true(&["--steps", "true"], true)]
#[case::explicit_false(&["--steps", "false"], false)]
#[case::absent(&[], false)]
fn steps_flag_accepts_optional_value(#[case] flags: &[&str], #[case] expected: bool) {
    let argv: Vec<&str> = std::iter::once(BERLIN).chain(flags.iter().copied()).collect();

    let config = config_from_cli(&argv).expect("config should build");

    assert_eq!(config.request.options().steps, expected);
}

#[rstest]
#[case::overview("--overview", "partial", "overview")]
#[case::geometries("--geometries", "wkt", "geometries")]
#[case::alternatives("--alternatives", "many", "alternatives")]
#[case::waypoints("--waypoints", "0;last", "waypoints")]
fn invalid_option_values_are_rejected(
    #[case] flag: &str,
    #[case] value: &str,
    #[case] parameter: &str,
) {
    let err = config_from_cli(&[BERLIN, flag, value]).expect_err("should fail");

    match err {
        CliError::InvalidRequest(EncodeError::InvalidParameter {
            parameter: rejected,
            ..
        }) => assert_eq!(rejected, parameter),
        other => panic!("expected InvalidParameter, found {other:?}"),
    }
}

#[rstest]
fn single_coordinate_is_rejected() {
    let err = config_from_cli(&["13.38886,52.517037"]).expect_err("should fail");

    assert!(
        matches!(
            err,
            CliError::InvalidRequest(EncodeError::TooFewCoordinates { count: 1 })
        ),
        "unexpected error {err:?}"
    );
}

#[rstest]
fn merge_layers_reports_invalid_types() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "timeout_secs": "soon" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "profile": "bike",
            "base_url": "http://from-file:5000",
            "overview": "false",
        }),
        None,
    );
    composer.push_environment(json!({
        "coordinates": BERLIN,
        "profile": "foot",
    }));
    composer.push_cli(json!({
        "profile": "driving",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request.profile(), "driving");
    assert_eq!(config.base_url, "http://from-file:5000");
    assert_eq!(config.request.options().overview, Overview::False);
    assert_eq!(config.request.coordinates().len(), 2);
}

#[rstest]
fn execute_route_returns_the_route_result() {
    let builder = StubRouteTransportBuilder::new(StubTransport::with_json(200, &minimal_response()));
    let config = config_from_cli(&[BERLIN, "--steps"]).expect("config should build");

    let result = execute_route(&config, &builder).expect("route succeeds");

    assert_eq!(result.routes.len(), 1);
    let requests = builder.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "/route/v1/driving/13.38886,52.517037;13.385983,52.496891"
    );
    assert_eq!(requests[0].query_string(), "steps=true");
}

#[rstest]
fn execute_route_turns_service_failures_into_errors() {
    let builder = StubRouteTransportBuilder::new(StubTransport::with_json(400, &no_route_response()));
    let config = config_from_cli(&[BERLIN]).expect("config should build");

    let err = execute_route(&config, &builder).expect_err("should fail");

    match err {
        CliError::ServiceFailure { code, message } => {
            assert_eq!(code, "NoRoute");
            assert_eq!(message, "Impossible route between points");
        }
        other => panic!("expected ServiceFailure, found {other:?}"),
    }
}

#[rstest]
fn execute_route_reports_malformed_bodies() {
    let builder =
        StubRouteTransportBuilder::new(StubTransport::with_body(502, b"Bad Gateway".to_vec()));
    let config = config_from_cli(&[BERLIN]).expect("config should build");

    let err = execute_route(&config, &builder).expect_err("should fail");

    assert!(
        matches!(
            err,
            CliError::Routing(osrm_route_http::RoutingError::MalformedBody { status: 502, .. })
        ),
        "unexpected error {err:?}"
    );
}

#[rstest]
fn missing_argument_message_names_flag_and_env() {
    let err = CliError::MissingArgument {
        field: ARG_ROUTE_COORDINATES,
        env: ENV_ROUTE_COORDINATES,
    };

    assert_eq!(
        err.to_string(),
        "missing coordinates (set --coordinates or OSRM_ROUTE_CMDS_ROUTE_COORDINATES)"
    );
}
