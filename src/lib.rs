//! Facade crate for the OSRM route service client.
//!
//! This crate re-exports the request and response contract types and, behind
//! the `http` feature, the reqwest-backed route client.
//!
//! ```
//! use osrm_route::{RouteRequest, parse_coordinates};
//!
//! let coordinates = parse_coordinates("13.38886,52.517037;13.385983,52.496891")?;
//! let encoded = RouteRequest::new("driving", coordinates)?.encode()?;
//!
//! assert_eq!(
//!     encoded.path,
//!     "/route/v1/driving/13.38886,52.517037;13.385983,52.496891"
//! );
//! assert!(encoded.is_default_query());
//! # Ok::<(), osrm_route::EncodeError>(())
//! ```

#![forbid(unsafe_code)]

pub use osrm_route_core::request::{
    Alternatives, AnnotationKind, Annotations, ContinueStraight, EncodeError, EncodedRequest,
    Geometries, Overview, RouteOptions, RouteRequest, WaypointsError, format_coordinates,
    parse_coordinates,
};
pub use osrm_route_core::response::{
    Annotation, DecodeError, Geometry, Intersection, Lane, LaneIndication, ManeuverType,
    ResponseError, Route, RouteLeg, RouteResponse, RouteResult, RouteStep, ServiceFailure,
    StepManeuver, Waypoint, decode_route_response, decode_route_response_slice,
};

#[cfg(feature = "http")]
pub use osrm_route_http::{
    ClientBuildError, HttpTransport, HttpTransportConfig, RoutingClient, RoutingError, Transport,
    TransportError, TransportResponse,
};
