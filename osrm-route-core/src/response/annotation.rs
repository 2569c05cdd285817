//! Per-segment metadata attached to a leg.
//!
//! Segment arrays describe the stretch between consecutive coordinates of
//! the leg geometry, so they all share one length `n`. `nodes` lists node
//! ids of the coordinates themselves and therefore holds `n + 1` entries.
//! An annotation with every array empty is accepted as-is.

use serde_json::Value;

use super::error::DecodeError;
use super::fields::{Decode, Fields};

/// Additional metadata for each coordinate segment along a leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    /// Segment distances in metres.
    pub distance: Vec<f64>,
    /// Segment durations in seconds.
    pub duration: Vec<f64>,
    /// Segment weights in units of the route's `weight_name`.
    pub weight: Vec<f64>,
    /// Data source index of each segment.
    pub datasources: Vec<u32>,
    /// OSM node ids of each coordinate.
    pub nodes: Vec<u64>,
    /// Segment speeds in metres per second.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub speed: Option<Vec<f64>>,
    /// Server metadata such as `datasource_names`, passed through untouched.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<Value>,
}

impl Annotation {
    /// Number of segments described.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.distance.len()
    }
}

impl Decode for Annotation {
    const ENTITY: &'static str = "Annotation";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        let distance: Vec<f64> = fields.required("distance")?;
        let segments = distance.len();

        let duration: Vec<f64> = fields.required("duration")?;
        check_len(fields, "duration", segments, duration.len())?;
        let weight: Vec<f64> = fields.required("weight")?;
        check_len(fields, "weight", segments, weight.len())?;
        let datasources: Vec<u32> = fields.required("datasources")?;
        check_len(fields, "datasources", segments, datasources.len())?;
        let speed: Option<Vec<f64>> = fields.optional("speed")?;
        if let Some(values) = &speed {
            check_len(fields, "speed", segments, values.len())?;
        }

        let nodes: Vec<u64> = fields.required("nodes")?;
        let expected_nodes = if segments == 0 { 0 } else { segments.saturating_add(1) };
        check_len(fields, "nodes", expected_nodes, nodes.len())?;

        Ok(Self {
            distance,
            duration,
            weight,
            datasources,
            nodes,
            speed,
            metadata: fields.get("metadata").cloned(),
        })
    }
}

fn check_len(
    fields: &Fields<'_>,
    key: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), DecodeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(fields.length_mismatch(key, expected, actual))
    }
}
