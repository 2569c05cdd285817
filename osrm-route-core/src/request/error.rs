//! Validation errors raised before a route request is encoded.

use thiserror::Error;

/// Errors from [`RouteRequest::new`](super::RouteRequest::new),
/// [`RouteRequest::encode`](super::RouteRequest::encode) and the query
/// parsers.
///
/// Every variant is reported before any network interaction takes place and
/// is recoverable by correcting the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Fewer than two coordinates were supplied.
    ///
    /// The route service needs a start and an end; an empty list is reported
    /// through the same variant with `count == 0`.
    #[error("at least two coordinates are required, got {count}")]
    TooFewCoordinates {
        /// Number of coordinates supplied.
        count: usize,
    },
    /// A coordinate component was NaN or infinite.
    #[error("coordinate {index} has a non-finite component")]
    NonFiniteCoordinate {
        /// Position of the offending coordinate in the input list.
        index: usize,
    },
    /// A textual coordinate was not a `lon,lat` pair.
    #[error("coordinate {index} is not a `lon,lat` pair: {value:?}")]
    MalformedCoordinate {
        /// Position of the offending coordinate in the input list.
        index: usize,
        /// Raw text that failed to parse.
        value: String,
    },
    /// The profile cannot be used as a single path segment.
    #[error("profile {profile:?} is not a valid path segment")]
    InvalidProfile {
        /// Profile as supplied by the caller.
        profile: String,
    },
    /// [`Annotations::Only`](super::Annotations::Only) was given no kinds.
    #[error("annotations must name at least one kind")]
    EmptyAnnotationKinds,
    /// The waypoint index list does not fit the coordinate list.
    #[error("invalid waypoints: {0}")]
    InvalidWaypoints(#[from] WaypointsError),
    /// A query key is not one of the route service options.
    #[error("unknown query parameter {parameter:?}")]
    UnknownParameter {
        /// Key found in the query.
        parameter: String,
    },
    /// A value is outside the accepted set for its option.
    #[error("invalid value {value:?} for {parameter}")]
    InvalidParameter {
        /// Wire name of the option.
        parameter: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Reasons a `waypoints` index list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaypointsError {
    /// The list is empty; leave the option unset instead.
    #[error("the index list is empty")]
    Empty,
    /// An index points past the end of the coordinate list.
    #[error("index {index} is out of range for {count} coordinates")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Number of coordinates in the request.
        count: usize,
    },
    /// Indices must be strictly ascending.
    #[error("index {index} does not follow {previous}")]
    NotAscending {
        /// Index preceding the offending one.
        previous: usize,
        /// Offending index.
        index: usize,
    },
    /// The first and last coordinate must always be waypoints.
    #[error("the first and last coordinates must be waypoints")]
    MissingEndpoints,
}
