//! Request encoding and response decoding for the OSRM route service.
//!
//! Responsibilities:
//! - Validate route requests and encode them into a path and query.
//! - Decode route responses into typed, immutable entities.
//! - Separate service failures (data) from protocol violations (errors).
//!
//! Boundaries:
//! - No I/O. Fetching is left to a transport such as `osrm-route-http`.
//! - Geometry stays opaque; polylines and GeoJSON are passed through.
//!
//! Invariants:
//! - Encoding and decoding are pure functions of their input.
//! - Decoding either yields a complete tree or the first violation found.

#![recursion_limit = "256"]
pub mod request;
pub mod response;

#[doc(hidden)]
pub mod test_support;

pub use request::{EncodeError, EncodedRequest, RouteOptions, RouteRequest};
pub use response::{
    DecodeError, RouteResponse, RouteResult, ServiceFailure, decode_route_response,
};
