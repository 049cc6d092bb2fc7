//! Decoding engine for formload
//!
//! This crate drives a load call:
//! - load / load_with: validate the destination handle and run a session
//! - DecodeSession: walk a record's fields, coerce and write input values,
//!   keep the first field error
//!
//! Field introspection and the input mapping live in `formload-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod coerce;
pub mod load;
pub mod session;

pub use load::{load, load_with};
pub use session::DecodeSession;
