//! Input coordinates snapped to the road network.

use geo::Coord;

use super::error::DecodeError;
use super::fields::{Decode, Fields};

/// An input coordinate as snapped by the service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Waypoint {
    /// Name of the street the coordinate snapped to.
    pub name: String,
    /// Snapped position, `x = longitude`, `y = latitude`.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::response::serialize_location")
    )]
    pub location: Coord<f64>,
    /// Opaque, engine-version-specific token for faster follow-up queries.
    pub hint: String,
    /// Distance in metres from the input coordinate to the snapped one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub distance: Option<f64>,
}

impl Decode for Waypoint {
    const ENTITY: &'static str = "Waypoint";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.required("name")?,
            location: fields.location("location")?,
            hint: fields.required("hint")?,
            distance: fields.optional("distance")?,
        })
    }
}
