//! Error types for form loading
//!
//! This module defines all error types surfaced by a load call.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Propagation
//!
//! A load call returns at most one error. Structural and destination errors
//! are fatal and returned before any field is written. Field-level errors
//! (`TypeMismatch`, `InvalidValue`) are recorded by the decode session while
//! the walk continues over the remaining fields.

use thiserror::Error;

/// Result type alias for load operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// The destination handle itself is unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// The destination is not a writable pointer (e.g. a shared reference)
    #[error("load(non-pointer {type_name})")]
    NotPointer {
        /// Declared type behind the handle
        type_name: &'static str,
    },

    /// The destination handle points to nothing
    #[error("load(nil {type_name})")]
    NilPointer {
        /// Declared type behind the handle
        type_name: &'static str,
    },
}

impl StructuralError {
    /// Declared type name of the rejected destination
    pub fn type_name(&self) -> &'static str {
        match *self {
            StructuralError::NotPointer { type_name }
            | StructuralError::NilPointer { type_name } => type_name,
        }
    }
}

/// A raw form value could not be coerced into a field's declared type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot load {value} into field {record}.{field} of type {type_name}")]
pub struct TypeMismatchError {
    /// Description of the raw value, e.g. `"number abc"` or `"array -1"`
    pub value: String,
    /// Declared type of the destination field
    pub type_name: &'static str,
    /// Name of the record type containing the field
    pub record: &'static str,
    /// Declared field name
    pub field: &'static str,
}

/// Error returned by a load call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Destination handle is nil or not writable
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Destination target is not a record
    #[error("invalid destination: {type_name} is not a record")]
    InvalidDestination {
        /// Declared type of the target
        type_name: &'static str,
    },

    /// A field value could not be coerced
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    /// A field declared a type the decoder does not coerce into
    #[error("invalid value")]
    InvalidValue,
}

impl LoadError {
    /// Check if this error aborted the call before any field was touched
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LoadError::Structural(_) | LoadError::InvalidDestination { .. }
        )
    }
}

/// Error parsing `LoadOptions` from configuration text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The configuration text is malformed
    #[error("invalid load options: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for OptionsError {
    fn from(e: toml::de::Error) -> Self {
        OptionsError::Parse(e.to_string())
    }
}
