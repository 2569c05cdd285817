//! Route steps and the maneuver that starts each of them.

use std::fmt;

use geo::Coord;
use serde_json::Value;

use super::error::DecodeError;
use super::fields::{Decode, Fields};
use super::geometry::Geometry;
use super::intersection::{Intersection, MAX_BEARING};

/// The kind of action a maneuver asks for.
///
/// Kept open: unknown types decode unchanged so newer servers do not break
/// older clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ManeuverType(String);

impl ManeuverType {
    /// A basic turn in the direction of the modifier.
    pub const TURN: &'static str = "turn";
    /// The road name changes without a turn.
    pub const NEW_NAME: &'static str = "new name";
    /// First maneuver of a leg.
    pub const DEPART: &'static str = "depart";
    /// Last maneuver of a leg.
    pub const ARRIVE: &'static str = "arrive";
    /// Merge onto a street.
    pub const MERGE: &'static str = "merge";
    /// Deprecated; replaced by `on ramp`.
    pub const RAMP: &'static str = "ramp";
    /// Take a ramp onto a highway.
    pub const ON_RAMP: &'static str = "on ramp";
    /// Take a ramp off a highway.
    pub const OFF_RAMP: &'static str = "off ramp";
    /// Keep left or right at a fork.
    pub const FORK: &'static str = "fork";
    /// The road ends in a T intersection.
    pub const END_OF_ROAD: &'static str = "end of road";
    /// Deprecated; lane information is attached to intersections.
    pub const USE_LANE: &'static str = "use lane";
    /// Continue on a street after a turn.
    pub const CONTINUE: &'static str = "continue";
    /// Traverse a roundabout.
    pub const ROUNDABOUT: &'static str = "roundabout";
    /// A larger, named roundabout.
    pub const ROTARY: &'static str = "rotary";
    /// A small roundabout treated as an intersection.
    pub const ROUNDABOUT_TURN: &'static str = "roundabout turn";
    /// A change of mode or similar with no turn.
    pub const NOTIFICATION: &'static str = "notification";
    /// Leave a roundabout.
    pub const EXIT_ROUNDABOUT: &'static str = "exit roundabout";
    /// Leave a rotary.
    pub const EXIT_ROTARY: &'static str = "exit rotary";

    /// Documented maneuver types.
    pub const KNOWN: [&'static str; 18] = [
        Self::TURN,
        Self::NEW_NAME,
        Self::DEPART,
        Self::ARRIVE,
        Self::MERGE,
        Self::RAMP,
        Self::ON_RAMP,
        Self::OFF_RAMP,
        Self::FORK,
        Self::END_OF_ROAD,
        Self::USE_LANE,
        Self::CONTINUE,
        Self::ROUNDABOUT,
        Self::ROTARY,
        Self::ROUNDABOUT_TURN,
        Self::NOTIFICATION,
        Self::EXIT_ROUNDABOUT,
        Self::EXIT_ROTARY,
    ];

    /// Wrap a maneuver type string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The type as sent by the service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for the documented maneuver types.
    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl PartialEq<&str> for ManeuverType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ManeuverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The action at the start of a step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepManeuver {
    /// Where the maneuver takes place, `x = longitude`, `y = latitude`.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::response::serialize_location")
    )]
    pub location: Coord<f64>,
    /// Bearing of travel immediately before the maneuver, 0-359.
    pub bearing_before: u16,
    /// Bearing of travel immediately after the maneuver, 0-359.
    pub bearing_after: u16,
    /// What kind of maneuver this is.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub maneuver_type: ManeuverType,
    /// Direction refinement, e.g. `left` or `slight right`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub modifier: Option<String>,
    /// Roundabout exit number, or the number of intersections passed.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub exit: Option<u32>,
}

impl Decode for StepManeuver {
    const ENTITY: &'static str = "StepManeuver";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            location: fields.location("location")?,
            bearing_before: bearing(fields, "bearing_before")?,
            bearing_after: bearing(fields, "bearing_after")?,
            maneuver_type: ManeuverType::new(fields.required::<String>("type")?),
            modifier: fields.optional("modifier")?,
            exit: fields.optional("exit")?,
        })
    }
}

fn bearing(fields: &Fields<'_>, key: &'static str) -> Result<u16, DecodeError> {
    let value: u16 = fields.required(key)?;
    if value > MAX_BEARING {
        return Err(fields.invalid(key, format!("bearing {value} exceeds 359")));
    }
    Ok(value)
}

/// One instruction along a leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteStep {
    /// Distance travelled in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Geometry of the step in the requested format.
    pub geometry: Geometry,
    /// Name of the way travelled.
    pub name: String,
    /// Mode of transport, e.g. `driving` or `ferry`.
    pub mode: String,
    /// The maneuver at the start of the step.
    pub maneuver: StepManeuver,
    /// Every intersection passed, starting with the maneuver location.
    pub intersections: Vec<Intersection>,
    /// Reference number or code of the way.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "ref", skip_serializing_if = "Option::is_none")
    )]
    pub reference: Option<String>,
    /// Pronunciation hint for the way name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pronunciation: Option<String>,
    /// Destinations signposted on the way.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub destinations: Option<String>,
    /// Exit numbers or names signposted on the way.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub exits: Option<String>,
    /// Name of the rotary, for rotary maneuvers.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rotary_name: Option<String>,
    /// Pronunciation of the rotary name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rotary_pronunciation: Option<String>,
    /// Side of the road traffic drives on, `left` or `right`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub driving_side: Option<String>,
}

impl Decode for RouteStep {
    const ENTITY: &'static str = "RouteStep";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            geometry: fields.required_with("geometry", |value| Ok(Geometry::new(value.clone())))?,
            name: fields.required("name")?,
            mode: fields.required("mode")?,
            maneuver: fields.entity_field("maneuver")?,
            intersections: fields.non_empty_entity_list("intersections")?,
            reference: fields.optional("ref")?,
            pronunciation: fields.optional("pronunciation")?,
            destinations: fields.optional("destinations")?,
            exits: fields.optional_with("exits", exits)?,
            rotary_name: fields.optional_any(&["rotary_name", "rotaryName"])?,
            rotary_pronunciation: fields
                .optional_any(&["rotary_pronunciation", "rotaryPronunciation"])?,
            driving_side: fields.optional_any(&["driving_side", "drivingSide"])?,
        })
    }
}

// Some profiles emit the exit number as a bare integer.
fn exits(value: &Value) -> Result<String, String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(format!("expected a string or number, found {other}")),
    }
}
