//! Behavioural tests for route request encoding.

use std::cell::RefCell;

use geo::Coord;
use osrm_route_core::request::{
    Alternatives, AnnotationKind, Annotations, EncodeError, EncodedRequest, RouteRequest,
    WaypointsError,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type RequestCell = RefCell<Option<RouteRequest>>;
type OutcomeCell = RefCell<Option<Result<EncodedRequest, EncodeError>>>;

#[fixture]
fn request() -> RequestCell {
    RefCell::new(None)
}

#[fixture]
fn outcome() -> OutcomeCell {
    RefCell::new(None)
}

fn update(request: &RequestCell, change: impl FnOnce(RouteRequest) -> RouteRequest) {
    let current = request.borrow_mut().take().expect("request must be initialised");
    *request.borrow_mut() = Some(change(current));
}

fn encoded(outcome: &OutcomeCell) -> EncodedRequest {
    let borrowed = outcome.borrow();
    match borrowed.as_ref().expect("request must be encoded") {
        Ok(encoded) => encoded.clone(),
        Err(err) => panic!("expected encoding to succeed, got {err}"),
    }
}

// --- Given steps ---

#[given("a driving request between two Berlin coordinates")]
fn driving_request(#[from(request)] request: &RequestCell) {
    let built = RouteRequest::new(
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
    .expect("valid request");
    *request.borrow_mut() = Some(built);
}

#[given("alternatives set to 2 with steps enabled")]
fn alternatives_and_steps(#[from(request)] request: &RequestCell) {
    update(request, |current| {
        current
            .with_alternatives(Alternatives::Count(2))
            .with_steps(true)
    });
}

#[given("annotations limited to distance and duration")]
fn limited_annotations(#[from(request)] request: &RequestCell) {
    update(request, |current| {
        current.with_annotations(Annotations::Only(vec![
            AnnotationKind::Distance,
            AnnotationKind::Duration,
        ]))
    });
}

#[given("waypoints limited to the first coordinate")]
fn first_waypoint_only(#[from(request)] request: &RequestCell) {
    update(request, |current| current.with_waypoints([0]));
}

// --- When steps ---

#[when("the request is encoded")]
fn encode_request(#[from(request)] request: &RequestCell, #[from(outcome)] outcome: &OutcomeCell) {
    let guard = request.borrow();
    let current = guard.as_ref().expect("request must be initialised");
    *outcome.borrow_mut() = Some(current.encode());
}

// --- Then steps ---

#[then("the path is {path}")]
fn then_path(path: String, #[from(outcome)] outcome: &OutcomeCell) {
    assert_eq!(encoded(outcome).path, path);
}

#[then("the query is empty")]
fn then_empty_query(#[from(outcome)] outcome: &OutcomeCell) {
    let result = encoded(outcome);
    assert!(result.is_default_query(), "unexpected query {:?}", result.query);
}

#[then("the query holds {key:word} set to {value}")]
fn then_query_holds(key: String, value: String, #[from(outcome)] outcome: &OutcomeCell) {
    let result = encoded(outcome);
    let found = result
        .query
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, found)| found.as_str());
    assert_eq!(found, Some(value.as_str()), "query was {:?}", result.query);
}

#[then("encoding fails with an invalid waypoints error")]
fn then_invalid_waypoints(#[from(outcome)] outcome: &OutcomeCell) {
    let borrowed = outcome.borrow();
    assert!(
        matches!(
            &*borrowed,
            Some(Err(EncodeError::InvalidWaypoints(
                WaypointsError::MissingEndpoints
            )))
        ),
        "expected InvalidWaypoints, got {borrowed:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/route_request.feature", name = $title)]
        fn $fn_name(request: RequestCell, outcome: OutcomeCell) {
            let _ = (request, outcome);
        }
    };
}

register_scenario!(
    encoding_default_options,
    "encoding a request with default options"
);
register_scenario!(encoding_non_default_options, "encoding non-default options");
register_scenario!(
    encoding_restricted_annotations,
    "encoding a restricted annotation list"
);
register_scenario!(
    rejecting_waypoints_without_destination,
    "rejecting waypoints that skip the destination"
);
