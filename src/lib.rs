//! formload - decode URL-encoded form values into typed records
//!
//! formload populates a record's fields from a mapping of keys to ordered
//! string values, the shape produced by parsing a query string or an
//! `application/x-www-form-urlencoded` body.
//!
//! # Quick Start
//!
//! ```
//! use formload::{load, record, FormValues};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Search {
//!         pub q: String,
//!         pub page: u32,
//!         pub kind as "type": String,
//!         pub ids: Vec<i64>,
//!     }
//! }
//!
//! let form = FormValues::parse("q=rust&page=2&type=1");
//! let mut search = Search::default();
//! load(&form, &mut search)?;
//!
//! assert_eq!(search.q, "rust");
//! assert_eq!(search.page, 2);
//! assert_eq!(search.kind, "1");
//! # Ok::<(), formload::LoadError>(())
//! ```
//!
//! List fields are filled element by element, then reported as
//! `LoadError::InvalidValue` unless the options say lists are supported:
//!
//! ```
//! use formload::{load, load_with, record, FormValues, ListFieldPolicy, LoadError, LoadOptions};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Batch {
//!         pub ids: Vec<i64>,
//!     }
//! }
//!
//! let form = FormValues::parse("ids=3&ids=-4");
//! let mut batch = Batch::default();
//! assert_eq!(load(&form, &mut batch), Err(LoadError::InvalidValue));
//! assert_eq!(batch.ids, vec![3, -4]);
//!
//! let options = LoadOptions::default().with_list_fields(ListFieldPolicy::Supported);
//! let mut batch = Batch::default();
//! load_with(&form, &mut batch, &options)?;
//! assert_eq!(batch.ids, vec![3, -4]);
//! # Ok::<(), formload::LoadError>(())
//! ```
//!
//! # Architecture
//!
//! - `formload-core`: input mapping, record field tables, options, errors
//! - `formload-engine`: the load entry points and the decode session
//!
//! Only the types needed to declare records and call `load` are re-exported
//! here.

pub use formload_core::{
    record, Destination, FieldDescriptor, FieldKind, FieldSlot, FormField, FormSource,
    FormValues, ListField, ListFieldPolicy, LoadError, LoadOptions, LoadResult, OptionsError, Record,
    ScalarField, ScalarKind, ScalarSlot, Shape, Shaped, StructuralError, TypeMismatchError,
    UnsupportedFieldPolicy, DEFAULT_NULL_LITERAL,
};
pub use formload_engine::{load, load_with, DecodeSession};
