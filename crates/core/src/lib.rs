//! Core types and traits for formload
//!
//! This crate defines the foundational types used by the decoder:
//! - FormSource / FormValues: the key → ordered values input mapping
//! - Record: static field table plus typed mutable field access
//! - FieldDescriptor, FieldKind, FieldSlot: the per-field model
//! - Destination: handles a load call writes through
//! - LoadOptions: load configuration
//! - LoadError: error type hierarchy
//! - record!: declare a struct together with its field table

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod destination;
pub mod error;
pub mod field;
pub mod form;
pub mod options;
pub mod record;

// Re-export commonly used types and traits
pub use destination::Destination;
pub use error::{LoadError, LoadResult, OptionsError, StructuralError, TypeMismatchError};
pub use field::{
    FieldDescriptor, FieldKind, FieldSlot, FormField, ListField, ScalarField, ScalarKind,
    ScalarSlot,
};
pub use form::{FormSource, FormValues};
pub use options::{ListFieldPolicy, LoadOptions, UnsupportedFieldPolicy, DEFAULT_NULL_LITERAL};
pub use record::{Record, Shape, Shaped};
