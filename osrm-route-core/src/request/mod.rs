//! Route requests and their encoding into a path and query.
//!
//! A [`RouteRequest`] holds a profile, the ordered coordinates to visit and
//! the [`RouteOptions`]. [`RouteRequest::encode`] turns it into an
//! [`EncodedRequest`] ready for a `GET` against the route service:
//!
//! ```text
//! /route/v1/{profile}/{lon},{lat};{lon},{lat}[?option=value&...]
//! ```
//!
//! Only options that differ from the service default appear in the query.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use osrm_route_core::request::{Alternatives, RouteRequest};
//!
//! let request = RouteRequest::new(
//!     "driving",
//!     [
//!         Coord { x: 13.388860, y: 52.517037 },
//!         Coord { x: 13.385983, y: 52.496891 },
//!     ],
//! )?
//! .with_alternatives(Alternatives::Count(2))
//! .with_steps(true);
//!
//! let encoded = request.encode()?;
//! assert_eq!(
//!     encoded.path,
//!     "/route/v1/driving/13.38886,52.517037;13.385983,52.496891"
//! );
//! assert_eq!(
//!     encoded.query,
//!     vec![("alternatives", "2".to_owned()), ("steps", "true".to_owned())]
//! );
//! # Ok::<(), osrm_route_core::request::EncodeError>(())
//! ```

mod coordinates;
mod encode;
mod error;
mod options;

use geo::Coord;

pub use coordinates::{format_coordinates, parse_coordinates};
pub use encode::EncodedRequest;
pub use error::{EncodeError, WaypointsError};
pub use options::{
    Alternatives, AnnotationKind, Annotations, ContinueStraight, Geometries, Overview,
    RouteOptions,
};

/// Minimum number of coordinates the route service accepts.
pub const MIN_COORDINATES: usize = 2;

/// A validated request for the route service.
///
/// Construction checks the profile and the coordinate list; option values
/// that depend on the coordinates (such as `waypoints`) are checked by
/// [`RouteRequest::encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    profile: String,
    coordinates: Vec<Coord<f64>>,
    options: RouteOptions,
}

impl RouteRequest {
    /// Validate and construct a request with default options.
    ///
    /// Coordinates are `x = longitude`, `y = latitude` and are visited in the
    /// given order.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidProfile`] when the profile is empty or
    /// contains path or query delimiters, [`EncodeError::TooFewCoordinates`]
    /// for fewer than two coordinates and
    /// [`EncodeError::NonFiniteCoordinate`] for NaN or infinite components.
    pub fn new(
        profile: impl Into<String>,
        coordinates: impl IntoIterator<Item = Coord<f64>>,
    ) -> Result<Self, EncodeError> {
        let profile = profile.into();
        let coordinates: Vec<Coord<f64>> = coordinates.into_iter().collect();
        validate_profile(&profile)?;
        validate_coordinates(&coordinates)?;
        Ok(Self {
            profile,
            coordinates,
            options: RouteOptions::default(),
        })
    }

    /// Routing profile, e.g. `"driving"`.
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Coordinates in visiting order.
    #[must_use]
    pub fn coordinates(&self) -> &[Coord<f64>] {
        &self.coordinates
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &RouteOptions {
        &self.options
    }

    /// Replace every option at once.
    #[must_use]
    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Set alternative route search.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: Alternatives) -> Self {
        self.options.alternatives = alternatives;
        self
    }

    /// Request turn-by-turn steps.
    #[must_use]
    pub const fn with_steps(mut self, steps: bool) -> Self {
        self.options.steps = steps;
        self
    }

    /// Set per-segment annotations.
    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.options.annotations = annotations;
        self
    }

    /// Set the geometry encoding.
    #[must_use]
    pub const fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.options.geometries = geometries;
        self
    }

    /// Set the overview detail level.
    #[must_use]
    pub const fn with_overview(mut self, overview: Overview) -> Self {
        self.options.overview = overview;
        self
    }

    /// Set U-turn handling at waypoints.
    #[must_use]
    pub const fn with_continue_straight(mut self, continue_straight: ContinueStraight) -> Self {
        self.options.continue_straight = continue_straight;
        self
    }

    /// Treat only the given coordinate indices as waypoints.
    #[must_use]
    pub fn with_waypoints(mut self, waypoints: impl Into<Vec<usize>>) -> Self {
        self.options.waypoints = Some(waypoints.into());
        self
    }
}

fn validate_profile(profile: &str) -> Result<(), EncodeError> {
    let reserved = |ch: char| matches!(ch, '/' | ';' | '?' | '&' | '#') || ch.is_whitespace();
    if profile.is_empty() || profile.contains(reserved) {
        return Err(EncodeError::InvalidProfile {
            profile: profile.to_owned(),
        });
    }
    Ok(())
}

fn validate_coordinates(coordinates: &[Coord<f64>]) -> Result<(), EncodeError> {
    if coordinates.len() < MIN_COORDINATES {
        return Err(EncodeError::TooFewCoordinates {
            count: coordinates.len(),
        });
    }
    match coordinates
        .iter()
        .position(|coord| !(coord.x.is_finite() && coord.y.is_finite()))
    {
        Some(index) => Err(EncodeError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
