//! Load configuration
//!
//! Options are plain data with serde support, so they can be embedded in a
//! host application's config file or parsed from a TOML fragment.
//!
//! # Example
//!
//! ```toml
//! # How an unsupported field type is reported: "overwrite" (default) or "first_wins"
//! #   "overwrite"  = replaces any error recorded earlier in the same call
//! #   "first_wins" = recorded like every other field error
//! unsupported_field = "overwrite"
//!
//! # Whether a list field with input is also reported as an unsupported type:
//! #   "unsupported" = elements are written, then the field is reported (default)
//! #   "supported"   = elements are written and nothing else is recorded
//! list_fields = "unsupported"
//!
//! # A first value equal to this literal means "no value supplied".
//! # An empty string disables the check.
//! null_literal = "null"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Default literal that marks a scalar as absent
pub const DEFAULT_NULL_LITERAL: &str = "null";

/// How an unsupported declared field type is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedFieldPolicy {
    /// Write `InvalidValue` into the error slot unconditionally
    #[default]
    Overwrite,
    /// Record `InvalidValue` only if no error was recorded yet
    FirstWins,
}

/// Whether list fields are also reported through the unsupported-type path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFieldPolicy {
    /// Write the elements, then report the field as an unsupported type
    /// unless its first value is the null literal
    #[default]
    Unsupported,
    /// Write the elements only
    Supported,
}

/// Options for a load call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Policy for fields whose declared type is not coercible
    #[serde(default)]
    pub unsupported_field: UnsupportedFieldPolicy,
    /// Policy for list fields that received input
    #[serde(default)]
    pub list_fields: ListFieldPolicy,
    /// Literal that makes a scalar field keep its value; `None` disables the check
    #[serde(default = "default_null_literal")]
    pub null_literal: Option<String>,
}

fn default_null_literal() -> Option<String> {
    Some(DEFAULT_NULL_LITERAL.to_string())
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            unsupported_field: UnsupportedFieldPolicy::default(),
            list_fields: ListFieldPolicy::default(),
            null_literal: default_null_literal(),
        }
    }
}

impl LoadOptions {
    /// Parse options from a TOML fragment
    ///
    /// Missing keys take their defaults. TOML has no null, so
    /// `null_literal = ""` disables the null check.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Parse` if the text is not valid TOML or a value
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, OptionsError> {
        let mut options: LoadOptions = toml::from_str(text)?;
        if options.null_literal.as_deref() == Some("") {
            options.null_literal = None;
        }
        Ok(options)
    }

    /// Set the unsupported field policy
    pub fn with_unsupported_field(mut self, policy: UnsupportedFieldPolicy) -> Self {
        self.unsupported_field = policy;
        self
    }

    /// Set the list field policy
    pub fn with_list_fields(mut self, policy: ListFieldPolicy) -> Self {
        self.list_fields = policy;
        self
    }

    /// Set or clear the null literal
    pub fn with_null_literal(mut self, literal: Option<&str>) -> Self {
        self.null_literal = literal.map(str::to_string);
        self
    }

    /// Check if `raw` is the configured null literal
    pub fn is_null(&self, raw: &str) -> bool {
        self.null_literal.as_deref() == Some(raw)
    }
}
