//! Scalar coercion from raw form strings
//!
//! Rules per kind:
//! - signed: base-10 parse into the declared width; failure leaves the slot
//!   untouched and is not reported
//! - unsigned: base-10 parse into the declared width, no sign; failure is a
//!   mismatch
//! - float: parse at the declared width; failure, or a finite literal that
//!   overflows to infinity, is a mismatch and nothing is written
//! - bool: `"true"` or `"1"` is true, anything else false
//! - string / any: the raw string, verbatim

use formload_core::ScalarSlot;
use serde_json::Value;
use std::str::FromStr;

/// Outcome of coercing one raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coercion {
    /// The slot now holds the coerced value
    Written,
    /// The raw value was rejected without a diagnostic
    Ignored,
    /// The raw value does not fit the declared type
    Mismatch,
}

/// Coerce `raw` into `slot`
pub(crate) fn coerce_scalar(raw: &str, slot: ScalarSlot<'_>) -> Coercion {
    match slot {
        ScalarSlot::I8(target) => signed(raw, target),
        ScalarSlot::I16(target) => signed(raw, target),
        ScalarSlot::I32(target) => signed(raw, target),
        ScalarSlot::I64(target) => signed(raw, target),
        ScalarSlot::Isize(target) => signed(raw, target),
        ScalarSlot::U8(target) => unsigned(raw, target),
        ScalarSlot::U16(target) => unsigned(raw, target),
        ScalarSlot::U32(target) => unsigned(raw, target),
        ScalarSlot::U64(target) => unsigned(raw, target),
        ScalarSlot::Usize(target) => unsigned(raw, target),
        ScalarSlot::F32(target) => float(raw, target, f32::is_infinite),
        ScalarSlot::F64(target) => float(raw, target, f64::is_infinite),
        ScalarSlot::Bool(target) => {
            *target = raw == "true" || raw == "1";
            Coercion::Written
        }
        ScalarSlot::Str(target) => {
            raw.clone_into(target);
            Coercion::Written
        }
        ScalarSlot::Any(target) => {
            *target = Value::String(raw.to_owned());
            Coercion::Written
        }
    }
}

fn signed<T: FromStr>(raw: &str, target: &mut T) -> Coercion {
    match raw.parse() {
        Ok(n) => {
            *target = n;
            Coercion::Written
        }
        Err(_) => Coercion::Ignored,
    }
}

fn unsigned<T: FromStr>(raw: &str, target: &mut T) -> Coercion {
    if raw.starts_with('+') {
        return Coercion::Mismatch;
    }
    match raw.parse() {
        Ok(n) => {
            *target = n;
            Coercion::Written
        }
        Err(_) => Coercion::Mismatch,
    }
}

fn float<T: FromStr + Copy>(raw: &str, target: &mut T, is_infinite: fn(T) -> bool) -> Coercion {
    match raw.parse::<T>() {
        Ok(n) if is_infinite(n) && !is_infinity_literal(raw) => Coercion::Mismatch,
        Ok(n) => {
            *target = n;
            Coercion::Written
        }
        Err(_) => Coercion::Mismatch,
    }
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
