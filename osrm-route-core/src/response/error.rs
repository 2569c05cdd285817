//! Protocol violations found while decoding a route response.

use thiserror::Error;

/// The response tree does not honour the route service contract.
///
/// Every variant except [`DecodeError::MissingCode`] names the entity being
/// decoded and a JSON path such as `$.routes[0].legs[1].steps[2]`. Decoding
/// stops at the first violation; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The top-level object has no `code` field.
    #[error("response has no `code` field")]
    MissingCode,
    /// A value that must be a JSON object is something else.
    #[error("{entity} at {path} is not a JSON object")]
    NotAnObject {
        /// Entity expected at `path`.
        entity: &'static str,
        /// Location in the response tree.
        path: String,
    },
    /// A required field is absent or `null`.
    #[error("{entity} at {path} is missing required field `{field}`")]
    MissingField {
        /// Entity being decoded.
        entity: &'static str,
        /// Location of the entity in the response tree.
        path: String,
        /// Wire name of the field.
        field: &'static str,
    },
    /// A field is present but has the wrong type or an out-of-range value.
    #[error("{entity} at {path} has invalid `{field}`: {reason}")]
    InvalidField {
        /// Entity being decoded.
        entity: &'static str,
        /// Location of the entity in the response tree.
        path: String,
        /// Wire name of the field.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },
    /// Parallel arrays disagree in length.
    #[error("{entity} at {path}: `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Entity being decoded.
        entity: &'static str,
        /// Location of the entity in the response tree.
        path: String,
        /// Wire name of the array with the unexpected length.
        field: &'static str,
        /// Length implied by the sibling arrays.
        expected: usize,
        /// Length found.
        actual: usize,
    },
    /// A list that must hold at least one element is empty.
    #[error("{entity} at {path}: `{field}` must not be empty")]
    EmptyList {
        /// Entity being decoded.
        entity: &'static str,
        /// Location of the entity in the response tree.
        path: String,
        /// Wire name of the list.
        field: &'static str,
    },
}

impl DecodeError {
    /// Entity that failed to decode, if the violation is entity-level.
    #[must_use]
    pub const fn entity(&self) -> Option<&'static str> {
        match self {
            Self::MissingCode => None,
            Self::NotAnObject { entity, .. }
            | Self::MissingField { entity, .. }
            | Self::InvalidField { entity, .. }
            | Self::LengthMismatch { entity, .. }
            | Self::EmptyList { entity, .. } => Some(*entity),
        }
    }

    /// Wire name of the offending field, if the violation is field-level.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingCode => Some("code"),
            Self::NotAnObject { .. } => None,
            Self::MissingField { field, .. }
            | Self::InvalidField { field, .. }
            | Self::LengthMismatch { field, .. }
            | Self::EmptyList { field, .. } => Some(*field),
        }
    }

    /// JSON path of the entity that failed to decode.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingCode => None,
            Self::NotAnObject { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidField { path, .. }
            | Self::LengthMismatch { path, .. }
            | Self::EmptyList { path, .. } => Some(path.as_str()),
        }
    }
}
