//! Decode session
//!
//! One session per load call. It walks a record's field table in declaration
//! order and writes coerced input into each settable field it finds a key for.
//!
//! ## Error Slot
//!
//! A session holds a single error. Field failures go through
//! [`DecodeSession::save_error`], where the first recorded error wins and later
//! ones are dropped. An unsupported declared field type is the exception: under
//! `UnsupportedFieldPolicy::Overwrite` it replaces whatever was recorded.
//!
//! List fields count as unsupported too under `ListFieldPolicy::Unsupported`:
//! their elements are written first, then the field is reported unless its
//! first value is the null literal. An element mismatch recorded on the way is
//! therefore replaced under the default policies.
//!
//! Nothing is rolled back: fields coerced before a failure stay written.

use crate::coerce::{coerce_scalar, Coercion};
use formload_core::{
    FieldDescriptor, FieldSlot, FormSource, ListField, ListFieldPolicy, LoadError, LoadOptions, LoadResult,
    Record, ScalarSlot, Shape, TypeMismatchError, UnsupportedFieldPolicy,
};
use tracing::{debug, trace};

/// Transient state of one decode pass
#[derive(Debug)]
pub struct DecodeSession<'s, S: FormSource + ?Sized> {
    input: &'s S,
    options: &'s LoadOptions,
    error: Option<LoadError>,
}

impl<'s, S: FormSource + ?Sized> DecodeSession<'s, S> {
    /// Create a session over `input` with an empty error slot
    pub fn new(input: &'s S, options: &'s LoadOptions) -> Self {
        Self {
            input,
            options,
            error: None,
        }
    }

    /// Decode into `target`
    ///
    /// Field failures are recorded in the session, not returned here.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidDestination` if `target` is not a record.
    pub fn value(&mut self, target: Shape<'_>) -> LoadResult<()> {
        match target {
            Shape::Record(record) => {
                self.record(record);
                Ok(())
            }
            Shape::Opaque(type_name) => Err(LoadError::InvalidDestination { type_name }),
        }
    }

    /// Error recorded so far, if any
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    /// End the session, returning the recorded error
    ///
    /// # Errors
    ///
    /// Returns the error left in the slot by the walk.
    pub fn finish(self) -> LoadResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&mut self, record: &mut dyn Record) {
        let record_name = record.record_name();

        for (index, field) in record.fields().iter().enumerate() {
            let key = field.key();
            let Some(values) = self.input.values(key) else {
                trace!(record = record_name, field = field.name, key, "no input for field");
                continue;
            };

            if !field.settable {
                trace!(record = record_name, field = field.name, "field not settable");
                continue;
            }

            let Some(slot) = record.field_slot(index) else {
                continue;
            };

            match slot {
                FieldSlot::List(list) => {
                    self.list(record_name, field, values, list);
                    if self.options.list_fields == ListFieldPolicy::Unsupported
                        && self.first_value(record_name, field, values).is_some()
                    {
                        self.unsupported(record_name, field, field.type_name);
                    }
                }
                FieldSlot::Scalar(slot) => {
                    if let Some(raw) = self.first_value(record_name, field, values) {
                        self.scalar(record_name, field, raw, slot);
                    }
                }
                FieldSlot::Unsupported(type_name) => {
                    if self.first_value(record_name, field, values).is_some() {
                        self.unsupported(record_name, field, type_name);
                    }
                }
            }
        }
    }

    /// First value, unless there is none or it is the null literal
    fn first_value<'v>(
        &self,
        record_name: &'static str,
        field: &FieldDescriptor,
        values: &'v [String],
    ) -> Option<&'v str> {
        let raw = values.first()?;
        if self.options.is_null(raw) {
            trace!(record = record_name, field = field.name, "null literal, field kept");
            return None;
        }
        Some(raw)
    }

    fn scalar(
        &mut self,
        record_name: &'static str,
        field: &FieldDescriptor,
        raw: &str,
        slot: ScalarSlot<'_>,
    ) {
        let kind = slot.kind();
        if coerce_scalar(raw, slot) == Coercion::Mismatch {
            debug!(
                record = record_name,
                field = field.name,
                kind = kind.name(),
                raw,
                "scalar coercion failed"
            );
            self.save_error(mismatch(record_name, field, "number", raw));
        }
    }

    fn list(
        &mut self,
        record_name: &'static str,
        field: &FieldDescriptor,
        values: &[String],
        list: &mut dyn ListField,
    ) {
        if list.is_empty() {
            list.resize(values.len());
        }

        for (index, raw) in values.iter().enumerate().take(list.len()) {
            let Some(slot) = list.element(index) else {
                continue;
            };
            let kind = slot.kind();
            if coerce_scalar(raw, slot) == Coercion::Mismatch {
                debug!(
                    record = record_name,
                    field = field.name,
                    kind = kind.name(),
                    index,
                    raw,
                    "element coercion failed"
                );
                self.save_error(mismatch(record_name, field, "array", raw));
            }
        }
    }

    fn unsupported(
        &mut self,
        record_name: &'static str,
        field: &FieldDescriptor,
        type_name: &'static str,
    ) {
        match self.options.unsupported_field {
            UnsupportedFieldPolicy::Overwrite => {
                if let Some(previous) = self.error.replace(LoadError::InvalidValue) {
                    debug!(
                        record = record_name,
                        field = field.name,
                        type_name,
                        %previous,
                        "unsupported field type replaced recorded error"
                    );
                }
            }
            UnsupportedFieldPolicy::FirstWins => self.save_error(LoadError::InvalidValue),
        }
    }

    /// Record `err` unless an error is already recorded
    pub fn save_error(&mut self, err: LoadError) {
        if self.error.is_none() {
            debug!(error = %err, "field error recorded");
            self.error = Some(err);
        } else {
            trace!(error = %err, "field error dropped, earlier error kept");
        }
    }
}

fn mismatch(
    record_name: &'static str,
    field: &FieldDescriptor,
    prefix: &str,
    raw: &str,
) -> LoadError {
    LoadError::TypeMismatch(TypeMismatchError {
        value: format!("{prefix} {raw}"),
        type_name: field.type_name,
        record: record_name,
        field: field.name,
    })
}
