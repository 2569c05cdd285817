//! Opaque route and step geometry.

use serde_json::{Map, Value};

/// Geometry exactly as the service returned it.
///
/// The shape depends on the requested [`Geometries`](crate::request::Geometries):
/// an encoded polyline string or a GeoJSON `LineString` object. Nothing is
/// decoded here; the helpers only look at the JSON shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Geometry(Value);

impl Geometry {
    /// Wrap a raw geometry value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The encoded polyline, when the geometry is a string.
    #[must_use]
    pub fn as_encoded_polyline(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// The GeoJSON object, when the geometry is an object with a `type`.
    #[must_use]
    pub fn as_geojson(&self) -> Option<&Map<String, Value>> {
        self.0.as_object().filter(|object| object.contains_key("type"))
    }
}

impl From<Value> for Geometry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
