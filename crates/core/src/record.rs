//! Record introspection
//!
//! A record exposes a static, ordered field table and typed mutable access to
//! each field. Tables are produced once per type by the [`record!`] macro, or
//! by a hand-written [`Record`] impl.
//!
//! [`record!`]: crate::record

use crate::field::{FieldDescriptor, FieldSlot};

/// An aggregate with a fixed, ordered set of named, typed fields
pub trait Record {
    /// Name of the record type, used in diagnostics
    fn record_name(&self) -> &'static str;

    /// Field table in declaration order
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Borrow field `index` of the table as a typed slot
    fn field_slot(&mut self, index: usize) -> Option<FieldSlot<'_>>;
}

/// Shape of a load target after dereferencing its handle
pub enum Shape<'a> {
    /// A record the decoder can walk
    Record(&'a mut dyn Record),
    /// Anything else, with its type name
    Opaque(&'static str),
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Record(record) => write!(f, "Record({})", record.record_name()),
            Shape::Opaque(type_name) => write!(f, "Opaque({})", type_name),
        }
    }
}

/// A type that can report its shape
pub trait Shaped {
    /// Borrow as a shape
    fn shape(&mut self) -> Shape<'_>;
}

macro_rules! opaque_shapes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shaped for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Opaque(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

opaque_shapes!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, String,
    serde_json::Value,
);

impl<T> Shaped for Vec<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Opaque(std::any::type_name::<Self>())
    }
}

impl<T> Shaped for Option<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Opaque(std::any::type_name::<Self>())
    }
}

/// Declare a struct together with its form field table
///
/// Fields declared `pub` (any visibility qualifier) are settable; private
/// fields are listed but never written. `field as "key": Type` looks the
/// field up under `key` instead of its own name.
///
/// ```
/// formload_core::record! {
///     #[derive(Debug, Default)]
///     pub struct Status {
///         pub status: String,
///         pub kind as "type": String,
///         pub ids: Vec<u64>,
///     }
/// }
///
/// let status = Status::default();
/// assert_eq!(status.ids.len(), 0);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident $(as $alias:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $name {
            const FORM_FIELDS: &'static [$crate::FieldDescriptor] = &[
                $(
                    $crate::FieldDescriptor {
                        name: stringify!($field),
                        alias: $crate::__form_alias!($($alias)?),
                        kind: <$ty as $crate::FormField>::KIND,
                        type_name: stringify!($ty),
                        settable: !stringify!($field_vis).is_empty(),
                    },
                )*
            ];
        }

        impl $crate::Record for $name {
            fn record_name(&self) -> &'static str {
                stringify!($name)
            }

            fn fields(&self) -> &'static [$crate::FieldDescriptor] {
                Self::FORM_FIELDS
            }

            fn field_slot(&mut self, index: usize) -> Option<$crate::FieldSlot<'_>> {
                match Self::FORM_FIELDS.get(index)?.name {
                    $(
                        stringify!($field) => Some($crate::FormField::slot(&mut self.$field)),
                    )*
                    _ => None,
                }
            }
        }

        impl $crate::Shaped for $name {
            fn shape(&mut self) -> $crate::Shape<'_> {
                $crate::Shape::Record(self)
            }
        }

        impl $crate::FormField for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::Unsupported;

            fn slot(&mut self) -> $crate::FieldSlot<'_> {
                $crate::FieldSlot::Unsupported(stringify!($name))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __form_alias {
    () => {
        None
    };
    ($alias:literal) => {
        Some($alias)
    };
}
