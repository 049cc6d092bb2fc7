//! Entry Point
//!
//! Structural failures are returned before any field work and leave the
//! destination untouched.

use crate::test_utils::*;

#[test]
fn test_shared_reference_is_structural_error() {
    let obj = StatusObj {
        status: "success".to_string(),
        ..StatusObj::default()
    };

    let err = load(&form(&[("status", "changed")]), &obj).unwrap_err();
    match &err {
        LoadError::Structural(StructuralError::NotPointer { type_name }) => {
            assert!(type_name.ends_with("StatusObj"));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().contains("non-pointer"));
    assert!(err.is_fatal());
    assert_eq!(obj.status, "success");
}

#[test]
fn test_nil_handle_is_structural_error() {
    let err = load(&form(&[("status", "x")]), None::<&mut StatusObj>).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Structural(StructuralError::NilPointer { .. })
    ));
    assert!(err.to_string().contains("nil"));
}

#[test]
fn test_optional_handle_present() {
    let mut obj = StatusObj::default();
    load(&form(&[("status", "x")]), Some(&mut obj)).unwrap();
    assert_eq!(obj.status, "x");
}

#[test]
fn test_non_record_target_is_invalid_destination() {
    let mut list: Vec<u32> = Vec::new();
    let err = load(&form(&[("0", "1")]), &mut list).unwrap_err();

    match err {
        LoadError::InvalidDestination { type_name } => assert!(type_name.contains("Vec")),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(list.is_empty());
}

#[test]
fn test_boxed_record_through_deref() {
    let mut boxed = Box::new(StatusObj::default());
    load(&form(&[("type", "b")]), &mut *boxed).unwrap();
    assert_eq!(boxed.kind, "b");
}

#[test]
fn test_sessions_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let status = i.to_string();
                let input = form(&[("status", status.as_str())]);
                let mut obj = StatusObj::default();
                load(&input, &mut obj).map(|_| obj.status)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), i.to_string());
    }
}
