//! Load entry points
//!
//! `load` validates the destination handle, runs one decode session over it,
//! and returns the session's terminal error. A structural failure is returned
//! before the target is touched.

use crate::session::DecodeSession;
use formload_core::{Destination, FormSource, LoadOptions, LoadResult};
use tracing::trace;

/// Populate `destination` from `input` with default options
///
/// # Errors
///
/// - `LoadError::Structural` if the handle is nil or not writable
/// - `LoadError::InvalidDestination` if the target is not a record
/// - the first field error recorded during the walk, if any
///
/// # Example
///
/// ```
/// use formload_core::FormValues;
/// use formload_engine::load;
///
/// formload_core::record! {
///     #[derive(Debug, Default)]
///     pub struct Status {
///         pub status: String,
///         pub kind as "type": String,
///     }
/// }
///
/// let mut status = Status { status: "success".to_string(), ..Status::default() };
/// load(&FormValues::parse("type=1"), &mut status).unwrap();
/// assert_eq!(status.kind, "1");
/// assert_eq!(status.status, "success");
/// ```
pub fn load<S, D>(input: &S, destination: D) -> LoadResult<()>
where
    S: FormSource + ?Sized,
    D: Destination,
{
    load_with(input, destination, &LoadOptions::default())
}

/// Populate `destination` from `input` with explicit options
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with<S, D>(input: &S, mut destination: D, options: &LoadOptions) -> LoadResult<()>
where
    S: FormSource + ?Sized,
    D: Destination,
{
    let type_name = destination.type_name();
    let target = destination.target()?;
    trace!(destination = type_name, "load started");

    let mut session = DecodeSession::new(input, options);
    session.value(target)?;
    session.finish()
}
