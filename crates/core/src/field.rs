//! Field model for decodable records
//!
//! This module defines:
//! - FieldKind / ScalarKind: the declared kind of a record field
//! - FieldDescriptor: one static entry of a record's field table
//! - ScalarSlot / FieldSlot: typed mutable access to a single field
//! - ScalarField / FormField / ListField: traits implemented by field types
//!
//! ## Supported Field Types
//!
//! | Kind | Rust types |
//! |------|------------|
//! | Signed | `i8`, `i16`, `i32`, `i64`, `isize` |
//! | Unsigned | `u8`, `u16`, `u32`, `u64`, `usize` |
//! | Float | `f32`, `f64` |
//! | Bool | `bool` |
//! | String | `String` |
//! | Any | `serde_json::Value` |
//! | List | `Vec<T>` of any type above |
//!
//! `Option<T>`, `char` and nested records are declarable but unsupported:
//! the decoder reports `LoadError::InvalidValue` when input targets them.

use serde_json::Value;

/// Kind of a single scalar value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed integer of any width
    Signed,
    /// Unsigned integer of any width
    Unsigned,
    /// IEEE-754 float of any width
    Float,
    /// Boolean
    Bool,
    /// UTF-8 string
    String,
    /// Open slot accepting the raw string
    Any,
}

impl ScalarKind {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            ScalarKind::Signed => "signed integer",
            ScalarKind::Unsigned => "unsigned integer",
            ScalarKind::Float => "float",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Any => "any",
        }
    }
}

/// Declared kind of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single scalar value
    Scalar(ScalarKind),
    /// Homogeneous list of scalars
    List(ScalarKind),
    /// Type the decoder does not coerce into
    Unsupported,
}

impl FieldKind {
    /// Check if this is a list kind
    pub const fn is_list(&self) -> bool {
        matches!(self, FieldKind::List(_))
    }

    /// Check if the decoder can coerce into this kind
    pub const fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported)
    }
}

/// Static description of one record field
///
/// A record's descriptors are enumerated once per type, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name
    pub name: &'static str,
    /// Alternate lookup key; replaces `name` when present
    pub alias: Option<&'static str>,
    /// Declared kind
    pub kind: FieldKind,
    /// Declared type, as written in source
    pub type_name: &'static str,
    /// Whether the decoder may write this field
    pub settable: bool,
}

impl FieldDescriptor {
    /// Key used to look this field up in the input mapping
    pub fn key(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }
}

/// Mutable access to one scalar value
#[derive(Debug)]
pub enum ScalarSlot<'a> {
    #[allow(missing_docs)]
    I8(&'a mut i8),
    #[allow(missing_docs)]
    I16(&'a mut i16),
    #[allow(missing_docs)]
    I32(&'a mut i32),
    #[allow(missing_docs)]
    I64(&'a mut i64),
    #[allow(missing_docs)]
    Isize(&'a mut isize),
    #[allow(missing_docs)]
    U8(&'a mut u8),
    #[allow(missing_docs)]
    U16(&'a mut u16),
    #[allow(missing_docs)]
    U32(&'a mut u32),
    #[allow(missing_docs)]
    U64(&'a mut u64),
    #[allow(missing_docs)]
    Usize(&'a mut usize),
    #[allow(missing_docs)]
    F32(&'a mut f32),
    #[allow(missing_docs)]
    F64(&'a mut f64),
    #[allow(missing_docs)]
    Bool(&'a mut bool),
    #[allow(missing_docs)]
    Str(&'a mut String),
    /// Open slot; receives `Value::String`
    Any(&'a mut Value),
}

impl ScalarSlot<'_> {
    /// Kind of the referenced value
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarSlot::I8(_)
            | ScalarSlot::I16(_)
            | ScalarSlot::I32(_)
            | ScalarSlot::I64(_)
            | ScalarSlot::Isize(_) => ScalarKind::Signed,
            ScalarSlot::U8(_)
            | ScalarSlot::U16(_)
            | ScalarSlot::U32(_)
            | ScalarSlot::U64(_)
            | ScalarSlot::Usize(_) => ScalarKind::Unsigned,
            ScalarSlot::F32(_) | ScalarSlot::F64(_) => ScalarKind::Float,
            ScalarSlot::Bool(_) => ScalarKind::Bool,
            ScalarSlot::Str(_) => ScalarKind::String,
            ScalarSlot::Any(_) => ScalarKind::Any,
        }
    }
}

/// Mutable access to one record field
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// Single scalar
    Scalar(ScalarSlot<'a>),
    /// List of scalars
    List(&'a mut dyn ListField),
    /// Unsupported declared type, with its name
    Unsupported(&'static str),
}

/// A scalar type the decoder coerces into
pub trait ScalarField {
    /// Kind of this scalar
    const KIND: ScalarKind;

    /// Borrow as a typed slot
    fn scalar_slot(&mut self) -> ScalarSlot<'_>;
}

/// A type that may appear as a record field
pub trait FormField {
    /// Declared kind
    const KIND: FieldKind;

    /// Borrow as a typed slot
    fn slot(&mut self) -> FieldSlot<'_>;
}

/// Type-erased list of scalars
pub trait ListField: std::fmt::Debug {
    /// Current number of elements
    fn len(&self) -> usize;

    /// Check if the list has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resize to `len` elements, filling with zero values
    fn resize(&mut self, len: usize);

    /// Borrow element `index` as a typed slot
    fn element(&mut self, index: usize) -> Option<ScalarSlot<'_>>;
}

macro_rules! scalar_fields {
    ($($ty:ty => $variant:ident, $kind:ident;)*) => {
        $(
            impl ScalarField for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn scalar_slot(&mut self) -> ScalarSlot<'_> {
                    ScalarSlot::$variant(self)
                }
            }

            impl FormField for $ty {
                const KIND: FieldKind = FieldKind::Scalar(ScalarKind::$kind);

                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Scalar(ScalarSlot::$variant(self))
                }
            }
        )*
    };
}

scalar_fields! {
    i8 => I8, Signed;
    i16 => I16, Signed;
    i32 => I32, Signed;
    i64 => I64, Signed;
    isize => Isize, Signed;
    u8 => U8, Unsigned;
    u16 => U16, Unsigned;
    u32 => U32, Unsigned;
    u64 => U64, Unsigned;
    usize => Usize, Unsigned;
    f32 => F32, Float;
    f64 => F64, Float;
    bool => Bool, Bool;
    String => Str, String;
    Value => Any, Any;
}

impl<T> ListField for Vec<T>
where
    T: ScalarField + Default + Clone + std::fmt::Debug,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn resize(&mut self, len: usize) {
        Vec::resize(self, len, T::default());
    }

    fn element(&mut self, index: usize) -> Option<ScalarSlot<'_>> {
        self.get_mut(index).map(ScalarField::scalar_slot)
    }
}

impl<T> FormField for Vec<T>
where
    T: ScalarField + Default + Clone + std::fmt::Debug,
{
    const KIND: FieldKind = FieldKind::List(T::KIND);

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::List(self)
    }
}

impl<T> FormField for Option<T> {
    const KIND: FieldKind = FieldKind::Unsupported;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported(std::any::type_name::<Self>())
    }
}

impl FormField for char {
    const KIND: FieldKind = FieldKind::Unsupported;

    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported("char")
    }
}
