//! Routes and the legs between consecutive waypoints.

use super::annotation::Annotation;
use super::error::DecodeError;
use super::fields::{Decode, Fields};
use super::geometry::Geometry;
use super::step::RouteStep;

/// A route through every requested waypoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    /// Total distance in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Cost of the route in units of `weight_name`.
    pub weight: f64,
    /// Name of the profile's weight metric, e.g. `routability`.
    pub weight_name: String,
    /// Legs between consecutive waypoints, in travel order.
    pub legs: Vec<RouteLeg>,
    /// Whole-route geometry; absent when `overview=false` was requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub geometry: Option<Geometry>,
}

impl Decode for Route {
    const ENTITY: &'static str = "Route";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            weight: fields.required("weight")?,
            weight_name: fields.required("weight_name")?,
            legs: fields.non_empty_entity_list("legs")?,
            geometry: fields.optional_with("geometry", |value| Ok(Geometry::new(value.clone())))?,
        })
    }
}

/// The part of a route between two waypoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteLeg {
    /// Distance in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Cost of the leg.
    pub weight: f64,
    /// Names of the most prominent streets, comma separated.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub summary: Option<String>,
    /// Turn-by-turn steps; present when steps were requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub steps: Option<Vec<RouteStep>>,
    /// Per-segment metadata; present when annotations were requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub annotation: Option<Annotation>,
}

impl Decode for RouteLeg {
    const ENTITY: &'static str = "RouteLeg";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            weight: fields.required("weight")?,
            summary: fields.optional("summary")?,
            steps: fields.optional_entity_list("steps")?,
            annotation: fields.optional_entity("annotation")?,
        })
    }
}
