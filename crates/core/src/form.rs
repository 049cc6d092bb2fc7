//! Form input mapping
//!
//! This module defines:
//! - FormSource: read access to a mapping of keys to ordered value lists
//! - FormValues: owned mapping, built directly or parsed from a URL-encoded string
//!
//! Keys absent from a source are absent; a source never reports an empty list
//! for a key it does not hold.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to form input
pub trait FormSource {
    /// Values for `key` in submission order, or `None` if the key is absent
    fn values(&self, key: &str) -> Option<&[String]>;
}

impl<S: BuildHasher> FormSource for HashMap<String, Vec<String>, S> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl FormSource for BTreeMap<String, Vec<String>> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl<T: FormSource + ?Sized> FormSource for &T {
    fn values(&self, key: &str) -> Option<&[String]> {
        (**self).values(key)
    }
}

/// Owned form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    entries: HashMap<String, Vec<String>>,
}

impl FormValues {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` string
    ///
    /// A leading `?` is ignored. Repeated keys accumulate in order.
    ///
    /// ```
    /// use formload_core::{FormSource, FormValues};
    ///
    /// let form = FormValues::parse("?type=1&id=3&id=4");
    /// assert_eq!(form.values("id").unwrap(), ["3", "4"]);
    /// ```
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Replace all values for `key`
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(key.into(), values)
    }

    /// Append one value for `key`
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// Values for `key`
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Consume into the underlying map
    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.entries
    }
}

impl FormSource for FormValues {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key)
    }
}

impl From<HashMap<String, Vec<String>>> for FormValues {
    fn from(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        for (key, value) in iter {
            form.append(key, value);
        }
        form
    }
}
