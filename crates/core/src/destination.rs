//! Destination handles
//!
//! A load call writes through a handle. Only an exclusive reference to a
//! present value is usable; anything else is a [`StructuralError`] raised
//! before the target is inspected.

use crate::error::StructuralError;
use crate::record::{Shape, Shaped};

/// A handle a load call can write through
pub trait Destination {
    /// Declared type behind the handle
    fn type_name(&self) -> &'static str;

    /// Dereference the handle
    ///
    /// # Errors
    ///
    /// Returns `StructuralError` if the handle is nil or not writable.
    fn target(&mut self) -> Result<Shape<'_>, StructuralError>;
}

impl<T: Shaped + ?Sized> Destination for &mut T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn target(&mut self) -> Result<Shape<'_>, StructuralError> {
        Ok((**self).shape())
    }
}

impl<T: Shaped + ?Sized> Destination for Option<&mut T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn target(&mut self) -> Result<Shape<'_>, StructuralError> {
        match self {
            Some(target) => Ok(target.shape()),
            None => Err(StructuralError::NilPointer {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }
}

impl<T: Shaped + ?Sized> Destination for &T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn target(&mut self) -> Result<Shape<'_>, StructuralError> {
        Err(StructuralError::NotPointer {
            type_name: std::any::type_name::<T>(),
        })
    }
}
