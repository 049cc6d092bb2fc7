//! Property-Based Tests
//!
//! Random inputs against the coercion and resolution rules.

use crate::test_utils::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn properties_valid_scalars_roundtrip(
        small in any::<i8>(),
        signed in any::<i64>(),
        count in any::<u32>(),
        amount in -1.0e12f64..1.0e12,
        enabled in any::<bool>(),
        name in "[a-zA-Z0-9 ]{0,16}",
    ) {
        prop_assume!(name != "null");
        let raw = [
            small.to_string(),
            signed.to_string(),
            count.to_string(),
            amount.to_string(),
        ];
        let input = form(&[
            ("small", raw[0].as_str()),
            ("signed", raw[1].as_str()),
            ("count", raw[2].as_str()),
            ("amount", raw[3].as_str()),
            ("enabled", if enabled { "true" } else { "false" }),
            ("name", name.as_str()),
        ]);

        let mut scalars = Scalars::default();
        prop_assert!(load(&input, &mut scalars).is_ok());
        prop_assert_eq!(scalars.small, small);
        prop_assert_eq!(scalars.signed, signed);
        prop_assert_eq!(scalars.count, count);
        prop_assert_eq!(scalars.amount, amount);
        prop_assert_eq!(scalars.enabled, enabled);
        prop_assert_eq!(scalars.name, name);
    }

    #[test]
    fn properties_int_list_matches_input(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let raw: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut input = FormValues::new();
        input.insert("ints", raw);

        let mut lists = Lists::default();
        let result = load(&input, &mut lists);
        if values.is_empty() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(LoadError::InvalidValue));
        }
        prop_assert_eq!(lists.ints, values);
    }

    #[test]
    fn properties_absent_keys_leave_fields(status in "[a-z]{1,8}", key in "[a-z]{1,8}") {
        prop_assume!(key != "status" && key != "type");
        let mut obj = StatusObj {
            status: status.clone(),
            ..StatusObj::default()
        };

        prop_assert!(load(&form(&[(key.as_str(), "v")]), &mut obj).is_ok());
        prop_assert_eq!(obj.status, status);
        prop_assert_eq!(obj.kind, "");
    }

    #[test]
    fn properties_non_numeric_unsigned_is_mismatch(raw in "[a-z]{1,8}") {
        let mut scalars = Scalars::default();
        let result = load(&form(&[("count", raw.as_str())]), &mut scalars);

        match result {
            Err(LoadError::TypeMismatch(e)) => {
                prop_assert!(e.value.contains(&raw));
                prop_assert_eq!(e.field, "count");
            }
            other => prop_assert!(false, "expected TypeMismatch, got {:?}", other),
        }
        prop_assert_eq!(scalars.count, 0);
    }

    #[test]
    fn properties_bool_true_only_for_true_or_one(raw in ".{0,6}") {
        let mut scalars = Scalars::default();
        let result = load(&form(&[("enabled", raw.as_str())]), &mut scalars);

        prop_assert!(result.is_ok());
        if raw == "null" {
            prop_assert!(!scalars.enabled);
        } else {
            prop_assert_eq!(scalars.enabled, raw == "true" || raw == "1");
        }
    }
}
