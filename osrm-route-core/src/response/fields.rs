//! Field access over one JSON object of the response tree.
//!
//! [`Fields`] wraps a JSON object together with the entity name and the path
//! it was found at, so every lookup can report a precise [`DecodeError`].
//! [`Decode`] is implemented once per entity and is the only dispatch used:
//! the nesting key decides which entity is decoded.

use geo::Coord;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::DecodeError;

/// Path of the response root.
pub const ROOT_PATH: &str = "$";

/// An entity that can be decoded from a JSON object.
pub trait Decode: Sized {
    /// Entity name used in error reports.
    const ENTITY: &'static str;

    /// Decode the entity from its fields.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first violation found.
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError>;

    /// Decode the entity from a JSON value located at the response root.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnObject`] when `value` is not an object, or
    /// the first violation found inside it.
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        decode_at(value, ROOT_PATH.to_owned())
    }
}

/// Decode `T` from `value`, reporting errors against `path`.
pub(crate) fn decode_at<T: Decode>(value: &Value, path: String) -> Result<T, DecodeError> {
    let fields = Fields::new(T::ENTITY, value, path)?;
    T::decode(&fields)
}

/// The fields of one JSON object being decoded as `entity`.
#[derive(Debug)]
pub struct Fields<'a> {
    entity: &'static str,
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap `value` as the object for `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnObject`] when `value` is not an object.
    pub fn new(entity: &'static str, value: &'a Value, path: String) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { entity, path, map }),
            _ => Err(DecodeError::NotAnObject { entity, path }),
        }
    }

    /// Entity these fields belong to.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// Path of the object in the response tree.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up `key`, treating an explicit `null` like an absent key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// Decode a required scalar or plain-data field.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] when absent or `null`,
    /// [`DecodeError::InvalidField`] when the value has the wrong shape.
    pub fn required<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, DecodeError> {
        self.required_with(key, deserialize)
    }

    /// Decode an optional scalar or plain-data field.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidField`] when present with the wrong shape.
    pub fn optional<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        self.optional_with(key, deserialize)
    }

    /// Decode an optional field that may appear under any of `keys`.
    ///
    /// The first key present wins.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidField`] when present with the wrong shape.
    pub fn optional_any<T: DeserializeOwned>(
        &self,
        keys: &[&'static str],
    ) -> Result<Option<T>, DecodeError> {
        keys.iter()
            .find_map(|&key| self.get(key).map(|value| (key, value)))
            .map(|(key, value)| deserialize(value).map_err(|reason| self.invalid(key, reason)))
            .transpose()
    }

    /// Decode a required field with a custom conversion.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] when absent or `null`,
    /// [`DecodeError::InvalidField`] when `convert` fails.
    pub fn required_with<T>(
        &self,
        key: &'static str,
        convert: impl FnOnce(&'a Value) -> Result<T, String>,
    ) -> Result<T, DecodeError> {
        let value = self.get(key).ok_or_else(|| self.missing(key))?;
        convert(value).map_err(|reason| self.invalid(key, reason))
    }

    /// Decode an optional field with a custom conversion.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidField`] when `convert` fails.
    pub fn optional_with<T>(
        &self,
        key: &'static str,
        convert: impl FnOnce(&'a Value) -> Result<T, String>,
    ) -> Result<Option<T>, DecodeError> {
        self.get(key)
            .map(|value| convert(value).map_err(|reason| self.invalid(key, reason)))
            .transpose()
    }

    /// Decode a required `[longitude, latitude]` pair.
    ///
    /// # Errors
    ///
    /// As for [`Fields::required`].
    pub fn location(&self, key: &'static str) -> Result<Coord<f64>, DecodeError> {
        self.required_with(key, location)
    }

    /// Decode a required nested entity.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] when absent, or the nested violation.
    pub fn entity_field<T: Decode>(&self, key: &'static str) -> Result<T, DecodeError> {
        let value = self.get(key).ok_or_else(|| self.missing(key))?;
        decode_at(value, self.child(key))
    }

    /// Decode an optional nested entity.
    ///
    /// # Errors
    ///
    /// The nested violation, if any.
    pub fn optional_entity<T: Decode>(&self, key: &'static str) -> Result<Option<T>, DecodeError> {
        self.get(key)
            .map(|value| decode_at(value, self.child(key)))
            .transpose()
    }

    /// Decode a required list of nested entities, preserving order.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] when absent,
    /// [`DecodeError::InvalidField`] when not an array, or the first nested
    /// violation.
    pub fn entity_list<T: Decode>(&self, key: &'static str) -> Result<Vec<T>, DecodeError> {
        let value = self.get(key).ok_or_else(|| self.missing(key))?;
        self.decode_list(key, value)
    }

    /// Decode a required list of nested entities that must not be empty.
    ///
    /// # Errors
    ///
    /// As for [`Fields::entity_list`], plus [`DecodeError::EmptyList`].
    pub fn non_empty_entity_list<T: Decode>(
        &self,
        key: &'static str,
    ) -> Result<Vec<T>, DecodeError> {
        let items = self.entity_list(key)?;
        if items.is_empty() {
            return Err(DecodeError::EmptyList {
                entity: self.entity,
                path: self.path.clone(),
                field: key,
            });
        }
        Ok(items)
    }

    /// Decode an optional list of nested entities, preserving order.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidField`] when not an array, or the first nested
    /// violation.
    pub fn optional_entity_list<T: Decode>(
        &self,
        key: &'static str,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        self.get(key)
            .map(|value| self.decode_list(key, value))
            .transpose()
    }

    /// Build a [`DecodeError::MissingField`] for `key`.
    #[must_use]
    pub fn missing(&self, key: &'static str) -> DecodeError {
        DecodeError::MissingField {
            entity: self.entity,
            path: self.path.clone(),
            field: key,
        }
    }

    /// Build a [`DecodeError::InvalidField`] for `key`.
    #[must_use]
    pub fn invalid(&self, key: &'static str, reason: impl Into<String>) -> DecodeError {
        DecodeError::InvalidField {
            entity: self.entity,
            path: self.path.clone(),
            field: key,
            reason: reason.into(),
        }
    }

    /// Build a [`DecodeError::LengthMismatch`] for `key`.
    #[must_use]
    pub fn length_mismatch(&self, key: &'static str, expected: usize, actual: usize) -> DecodeError {
        DecodeError::LengthMismatch {
            entity: self.entity,
            path: self.path.clone(),
            field: key,
            expected,
            actual,
        }
    }

    fn decode_list<T: Decode>(&self, key: &'static str, value: &Value) -> Result<Vec<T>, DecodeError> {
        let Value::Array(items) = value else {
            return Err(self.invalid(key, "expected an array"));
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| decode_at(item, format!("{}[{index}]", self.child(key))))
            .collect()
    }

    fn child(&self, key: &str) -> String {
        format!("{}.{key}", self.path)
    }
}

fn deserialize<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    T::deserialize(value).map_err(|err| err.to_string())
}

fn location(value: &Value) -> Result<Coord<f64>, String> {
    let [lon, lat]: [f64; 2] = deserialize(value)?;
    if lon.is_finite() && lat.is_finite() {
        Ok(Coord { x: lon, y: lat })
    } else {
        Err("coordinate components must be finite".to_owned())
    }
}
