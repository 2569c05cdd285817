//! Typed route service responses.
//!
//! [`decode_route_response`] walks a parsed JSON tree top-down: the envelope,
//! then each [`Route`], its [`RouteLeg`]s, their [`RouteStep`]s with
//! [`StepManeuver`] and [`Intersection`]s, and finally [`Lane`]s and
//! [`Annotation`]s. The first violation aborts the whole decode and is
//! reported with the entity and its JSON path.
//!
//! Geometry is never decoded; see [`Geometry`].

mod annotation;
mod envelope;
mod error;
mod fields;
mod geometry;
mod intersection;
mod route;
mod step;
mod waypoint;

pub use annotation::Annotation;
pub use envelope::{
    CODE_OK, ResponseError, RouteResponse, RouteResult, ServiceFailure, decode_route_response,
    decode_route_response_slice,
};
pub use error::DecodeError;
pub use fields::{Decode, Fields, ROOT_PATH};
pub use geometry::Geometry;
pub use intersection::{Intersection, Lane, LaneIndication, MAX_BEARING};
pub use route::{Route, RouteLeg};
pub use step::{ManeuverType, RouteStep, StepManeuver};
pub use waypoint::Waypoint;

/// Serialise a location back to its `[longitude, latitude]` wire form.
#[cfg(feature = "serde")]
pub(crate) fn serialize_location<S>(location: &geo::Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serde::Serialize::serialize(&[location.x, location.y], serializer)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::test_support::full_response;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialised_result_uses_wire_names() {
        let result = decode_route_response(&full_response())
            .expect("decodes")
            .into_result()
            .expect("service success");

        let value = serde_json::to_value(&result).expect("serialises");

        assert_eq!(value["waypoints"][0]["location"], json!([13.388799, 52.517033]));
        let step = &value["routes"][0]["legs"][0]["steps"][0];
        assert_eq!(step["maneuver"]["type"], json!("depart"));
        assert_eq!(step["ref"], json!("B 96"));
        assert_eq!(step["intersections"][0]["out"], json!(0));
        assert!(step.get("rotary_name").is_none());
    }
}
