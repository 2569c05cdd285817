//! Intersections passed along a step and their turn lanes.

use std::fmt;

use geo::Coord;
use serde_json::Value;

use super::error::DecodeError;
use super::fields::{Decode, Fields};

/// Largest bearing the service reports; 0 is true north.
pub const MAX_BEARING: u16 = 359;

/// A road marking on a turn lane.
///
/// The service may introduce new indications, so any string is accepted. The
/// documented values are available as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct LaneIndication(String);

impl LaneIndication {
    /// No dedicated indication is shown.
    pub const NONE: &'static str = "none";
    /// Fully bent arrow.
    pub const UTURN: &'static str = "uturn";
    /// Strongly bent arrow to the right.
    pub const SHARP_RIGHT: &'static str = "sharp right";
    /// Bent arrow to the right.
    pub const RIGHT: &'static str = "right";
    /// Slightly bent arrow to the right.
    pub const SLIGHT_RIGHT: &'static str = "slight right";
    /// Straight arrow.
    pub const STRAIGHT: &'static str = "straight";
    /// Slightly bent arrow to the left.
    pub const SLIGHT_LEFT: &'static str = "slight left";
    /// Bent arrow to the left.
    pub const LEFT: &'static str = "left";
    /// Strongly bent arrow to the left.
    pub const SHARP_LEFT: &'static str = "sharp left";

    /// Documented indications.
    pub const KNOWN: [&'static str; 9] = [
        Self::NONE,
        Self::UTURN,
        Self::SHARP_RIGHT,
        Self::RIGHT,
        Self::SLIGHT_RIGHT,
        Self::STRAIGHT,
        Self::SLIGHT_LEFT,
        Self::LEFT,
        Self::SHARP_LEFT,
    ];

    /// Wrap an indication string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The indication as sent by the service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for the documented indications.
    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl PartialEq<&str> for LaneIndication {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LaneIndication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One marked turn lane at an intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lane {
    /// Markings on the lane, e.g. straight and left.
    pub indications: Vec<LaneIndication>,
    /// Whether the lane is a valid choice for the current maneuver.
    pub valid: bool,
}

impl Decode for Lane {
    const ENTITY: &'static str = "Lane";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            indications: fields.required_with("indications", indications)?,
            valid: fields.required("valid")?,
        })
    }
}

// A bare string is accepted as a single indication.
fn indications(value: &Value) -> Result<Vec<LaneIndication>, String> {
    match value {
        Value::String(single) => Ok(vec![LaneIndication::new(single.as_str())]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(LaneIndication::new)
                    .ok_or_else(|| format!("expected a string indication, found {item}"))
            })
            .collect(),
        other => Err(format!("expected a list of indications, found {other}")),
    }
}

/// A crossing point along a step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Intersection {
    /// Position, `x = longitude`, `y = latitude`.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::response::serialize_location")
    )]
    pub location: Coord<f64>,
    /// Bearings of every road at the intersection, 0-359.
    pub bearings: Vec<u16>,
    /// Entry flags, one per bearing.
    pub entry: Vec<bool>,
    /// Classes of the road exiting the intersection.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub classes: Option<Vec<String>>,
    /// Index into `bearings` of the approach road; absent on depart.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "in", skip_serializing_if = "Option::is_none")
    )]
    pub in_index: Option<usize>,
    /// Index into `bearings` of the exit road; absent on arrive.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "out", skip_serializing_if = "Option::is_none")
    )]
    pub out_index: Option<usize>,
    /// Turn lanes, when lane data is available.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lanes: Option<Vec<Lane>>,
}

impl Decode for Intersection {
    const ENTITY: &'static str = "Intersection";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        let location = fields.location("location")?;
        let bearings: Vec<u16> = fields.required("bearings")?;
        if let Some(bearing) = bearings.iter().find(|&&bearing| bearing > MAX_BEARING) {
            return Err(fields.invalid("bearings", format!("bearing {bearing} exceeds 359")));
        }
        let entry: Vec<bool> = fields.required("entry")?;
        if entry.len() != bearings.len() {
            return Err(fields.length_mismatch("entry", bearings.len(), entry.len()));
        }
        let in_index = bearing_index(fields, "in", bearings.len())?;
        let out_index = bearing_index(fields, "out", bearings.len())?;
        Ok(Self {
            location,
            bearings,
            entry,
            classes: fields.optional("classes")?,
            in_index,
            out_index,
            lanes: fields.optional_entity_list("lanes")?,
        })
    }
}

fn bearing_index(
    fields: &Fields<'_>,
    key: &'static str,
    count: usize,
) -> Result<Option<usize>, DecodeError> {
    match fields.optional::<usize>(key)? {
        Some(index) if index >= count => Err(fields.invalid(
            key,
            format!("index {index} is out of range for {count} bearings"),
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn intersection() -> Value {
        json!({
            "location": [13.39677, 52.529407],
            "bearings": [10, 92, 184, 270],
            "entry": [false, true, true, true],
            "in": 3,
            "out": 2,
            "classes": ["toll", "restricted"],
            "lanes": [
                { "indications": ["left", "straight"], "valid": false },
                { "indications": ["right"], "valid": true }
            ]
        })
    }

    #[rstest]
    fn decodes_every_field(intersection: Value) {
        let decoded = Intersection::from_value(&intersection).expect("valid intersection");

        assert_eq!(decoded.bearings, vec![10, 92, 184, 270]);
        assert_eq!(decoded.entry, vec![false, true, true, true]);
        assert_eq!(decoded.in_index, Some(3));
        assert_eq!(decoded.out_index, Some(2));
        assert_eq!(
            decoded.classes,
            Some(vec!["toll".to_owned(), "restricted".to_owned()])
        );
        let lanes = decoded.lanes.expect("lanes present");
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0].indications, vec![LaneIndication::LEFT, LaneIndication::STRAIGHT]);
        assert!(lanes[1].valid);
    }

    #[rstest]
    fn mismatched_entry_length_names_the_field(mut intersection: Value) {
        intersection["entry"] = json!([true, false]);

        let err = Intersection::from_value(&intersection).expect_err("should fail");

        assert_eq!(
            err,
            DecodeError::LengthMismatch {
                entity: "Intersection",
                path: "$".to_owned(),
                field: "entry",
                expected: 4,
                actual: 2,
            }
        );
    }

    #[rstest]
    fn bearings_above_359_are_rejected(mut intersection: Value) {
        intersection["bearings"] = json!([10, 92, 360, 270]);
        let err = Intersection::from_value(&intersection).expect_err("should fail");
        assert_eq!(err.field(), Some("bearings"));
    }

    #[rstest]
    fn out_of_range_indices_are_rejected(mut intersection: Value) {
        intersection["out"] = json!(4);
        let err = Intersection::from_value(&intersection).expect_err("should fail");
        assert_eq!(err.field(), Some("out"));
    }

    #[rstest]
    fn optional_fields_may_be_absent_or_null() {
        let value = json!({
            "location": [13.39677, 52.529407],
            "bearings": [90],
            "entry": [true],
            "lanes": null
        });

        let decoded = Intersection::from_value(&value).expect("valid intersection");

        assert!(decoded.classes.is_none());
        assert!(decoded.in_index.is_none());
        assert!(decoded.out_index.is_none());
        assert!(decoded.lanes.is_none());
    }

    #[rstest]
    fn unknown_indications_are_preserved() {
        let value = json!({ "indications": ["merge to left"], "valid": true });
        let lane = Lane::from_value(&value).expect("valid lane");
        assert_eq!(lane.indications, vec![LaneIndication::new("merge to left")]);
        assert!(!lane.indications[0].is_known());
    }

    #[rstest]
    fn single_indication_string_is_accepted() {
        let value = json!({ "indications": "straight", "valid": true });
        let lane = Lane::from_value(&value).expect("valid lane");
        assert_eq!(lane.indications, vec![LaneIndication::STRAIGHT]);
        assert!(lane.indications[0].is_known());
    }
}
