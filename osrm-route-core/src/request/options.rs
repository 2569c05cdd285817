//! Route service options.
//!
//! Several options accept more than one shape on the wire (a boolean, a count
//! or a named value). Each is modelled as a closed enum so that only accepted
//! combinations are representable. `Display` and `FromStr` use the wire
//! spelling.

use std::fmt;
use std::str::FromStr;

use super::error::EncodeError;

pub(crate) const PARAM_ALTERNATIVES: &str = "alternatives";
pub(crate) const PARAM_STEPS: &str = "steps";
pub(crate) const PARAM_ANNOTATIONS: &str = "annotations";
pub(crate) const PARAM_GEOMETRIES: &str = "geometries";
pub(crate) const PARAM_OVERVIEW: &str = "overview";
pub(crate) const PARAM_CONTINUE_STRAIGHT: &str = "continue_straight";
pub(crate) const PARAM_WAYPOINTS: &str = "waypoints";

/// Search for alternative routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternatives {
    /// Return the fastest route only.
    #[default]
    Disabled,
    /// Let the service decide how many alternatives to search for.
    Enabled,
    /// Search for up to `n` alternatives.
    Count(u32),
}

impl fmt::Display for Alternatives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("false"),
            Self::Enabled => f.write_str("true"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for Alternatives {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "false" => Ok(Self::Disabled),
            "true" => Ok(Self::Enabled),
            other => other
                .parse()
                .map(Self::Count)
                .map_err(|_| invalid(PARAM_ALTERNATIVES, other)),
        }
    }
}

/// A per-segment metadata kind the service can attach to each leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnnotationKind {
    /// OSM node identifiers along the geometry.
    Nodes,
    /// Segment distances in metres.
    Distance,
    /// Segment durations in seconds.
    Duration,
    /// Speed datasource indices.
    Datasources,
    /// Segment weights.
    Weight,
    /// Segment speeds in metres per second.
    Speed,
}

impl AnnotationKind {
    /// Every kind, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Nodes,
        Self::Distance,
        Self::Duration,
        Self::Datasources,
        Self::Weight,
        Self::Speed,
    ];

    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Datasources => "datasources",
            Self::Weight => "weight",
            Self::Speed => "speed",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationKind {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| invalid(PARAM_ANNOTATIONS, value))
    }
}

/// Request per-segment metadata for every leg.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Annotations {
    /// No annotations.
    #[default]
    Disabled,
    /// Every annotation kind.
    All,
    /// Only the listed kinds, emitted comma-separated.
    Only(Vec<AnnotationKind>),
}

impl Annotations {
    /// Request a single annotation kind.
    #[must_use]
    pub fn kind(kind: AnnotationKind) -> Self {
        Self::Only(vec![kind])
    }
}

impl fmt::Display for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("false"),
            Self::All => f.write_str("true"),
            Self::Only(kinds) => {
                let names: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

impl FromStr for Annotations {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "false" => Ok(Self::Disabled),
            "true" => Ok(Self::All),
            "" => Err(invalid(PARAM_ANNOTATIONS, value)),
            list => list
                .split(',')
                .map(str::parse)
                .collect::<Result<Vec<AnnotationKind>, _>>()
                .map(Self::Only),
        }
    }
}

/// Encoding of returned route and step geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometries {
    /// Google polyline with precision 5.
    #[default]
    Polyline,
    /// Google polyline with precision 6.
    Polyline6,
    /// GeoJSON `LineString` objects.
    GeoJson,
}

impl Geometries {
    /// Wire name of the encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polyline => "polyline",
            Self::Polyline6 => "polyline6",
            Self::GeoJson => "geojson",
        }
    }
}

impl fmt::Display for Geometries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Geometries {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "polyline" => Ok(Self::Polyline),
            "polyline6" => Ok(Self::Polyline6),
            "geojson" => Ok(Self::GeoJson),
            other => Err(invalid(PARAM_GEOMETRIES, other)),
        }
    }
}

/// Detail level of the route-wide overview geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overview {
    /// Simplified for the highest zoom level the route fits on.
    #[default]
    Simplified,
    /// Full resolution.
    Full,
    /// No overview geometry.
    False,
}

impl Overview {
    /// Wire name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simplified => "simplified",
            Self::Full => "full",
            Self::False => "false",
        }
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overview {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "simplified" => Ok(Self::Simplified),
            "full" => Ok(Self::Full),
            "false" => Ok(Self::False),
            other => Err(invalid(PARAM_OVERVIEW, other)),
        }
    }
}

/// Whether the route must keep going straight at waypoints.
///
/// The service default depends on the profile, so [`ContinueStraight::Default`]
/// is distinct from both boolean states and is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinueStraight {
    /// Use the profile's default.
    #[default]
    Default,
    /// Forbid U-turns at waypoints.
    Enabled,
    /// Allow U-turns at waypoints.
    Disabled,
}

impl ContinueStraight {
    /// Wire name of the setting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Enabled => "true",
            Self::Disabled => "false",
        }
    }
}

impl From<bool> for ContinueStraight {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

impl fmt::Display for ContinueStraight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContinueStraight {
    type Err = EncodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "default" => Ok(Self::Default),
            "true" => Ok(Self::Enabled),
            "false" => Ok(Self::Disabled),
            other => Err(invalid(PARAM_CONTINUE_STRAIGHT, other)),
        }
    }
}

/// Options of a route request.
///
/// `RouteOptions::default()` matches the service defaults and encodes to an
/// empty query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteOptions {
    /// Alternative route search.
    pub alternatives: Alternatives,
    /// Return turn-by-turn steps for each leg.
    pub steps: bool,
    /// Per-segment metadata.
    pub annotations: Annotations,
    /// Geometry encoding.
    pub geometries: Geometries,
    /// Overview geometry detail.
    pub overview: Overview,
    /// U-turn handling at waypoints.
    pub continue_straight: ContinueStraight,
    /// Indices of the coordinates treated as waypoints; `None` for all.
    pub waypoints: Option<Vec<usize>>,
}

pub(crate) fn invalid(parameter: &'static str, value: &str) -> EncodeError {
    EncodeError::InvalidParameter {
        parameter,
        value: value.to_owned(),
    }
}
