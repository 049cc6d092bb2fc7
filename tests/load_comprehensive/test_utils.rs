//! Test utilities for load comprehensive tests
//!
//! Provides shared record types, input builders, and log capture.

pub use formload::{
    load, load_with, record, FormValues, ListFieldPolicy, LoadError, LoadOptions,
    StructuralError, TypeMismatchError, UnsupportedFieldPolicy,
};
pub use serde_json::Value;

// =============================================================================
// Records
// =============================================================================

record! {
    /// One field per scalar kind
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Scalars {
        pub small: i8,
        pub signed: i64,
        pub word: isize,
        pub byte: u8,
        pub count: u32,
        pub size: usize,
        pub ratio: f32,
        pub amount: f64,
        pub enabled: bool,
        pub name: String,
        pub extra: Value,
    }
}

record! {
    /// One field per list element kind
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Lists {
        pub ints: Vec<i32>,
        pub uints: Vec<u64>,
        pub floats: Vec<f64>,
        pub flags: Vec<bool>,
        pub names: Vec<String>,
        pub raw: Vec<Value>,
    }
}

record! {
    /// Mirrors a typical request object with an aliased field
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct StatusObj {
        pub status: String,
        pub kind as "type": String,
    }
}

record! {
    /// Mixes supported, unsupported, and private fields
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Mixed {
        pub page: u32,
        pub note: Option<String>,
        pub letter: char,
        pub nested: StatusObj,
        pub limit: u16,
        hidden: u32,
    }
}

impl Mixed {
    pub fn hidden(&self) -> u32 {
        self.hidden
    }
}

// =============================================================================
// Input
// =============================================================================

/// Build input from key/value pairs; repeated keys accumulate in order
pub fn form(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().copied().collect()
}

/// Install a test-writer subscriber so session events show in failing tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Unwrap a `TypeMismatch` error or fail the test
pub fn expect_mismatch(result: Result<(), LoadError>) -> TypeMismatchError {
    match result {
        Err(LoadError::TypeMismatch(e)) => e,
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}
