use typed_box::{BoxError, TypedBox};
use std::collections::HashMap;

#[test]
fn test_store_and_get() {
    let mut container = TypedBox::new();

    container.store(100i32);
    assert!(container.has_value());

    let value = container.get::<i32>().unwrap();
    assert_eq!(value, 100);

    // get doesn't consume; the value is still there
    assert_eq!(container.get::<i32>().unwrap(), 100);
}

#[test]
fn test_wrong_type_reports_both_names() {
    let mut container = TypedBox::new();
    container.store(100i32);

    let result = container.get::<f64>();
    assert_eq!(
        result,
        Err(BoxError::TypeMismatch {
            expected: "f64",
            actual: "i32",
        })
    );

    // A failed retrieval leaves the payload intact
    assert!(container.has_value());
    assert_eq!(container.get::<i32>().unwrap(), 100);
}

#[test]
fn test_empty_box_reports_empty_container() {
    let container = TypedBox::new();

    assert!(!container.has_value());
    assert_eq!(container.stored_type(), None);

    let result = container.get::<i32>();
    assert_eq!(
        result,
        Err(BoxError::TypeMismatch {
            expected: "i32",
            actual: "empty container",
        })
    );
}

#[test]
fn test_store_replaces_previous_value() {
    let mut container = TypedBox::new();

    container.store(1i32);
    container.store(2i32);
    assert_eq!(container.get::<i32>().unwrap(), 2);

    // Replacement works across types too; no residue of the old type
    container.store("text".to_string());
    assert_eq!(container.get::<String>().unwrap(), "text");
    assert!(matches!(
        container.get::<i32>(),
        Err(BoxError::TypeMismatch { actual: "alloc::string::String", .. })
    ));
}

#[test]
fn test_clear_is_idempotent() {
    let mut container = TypedBox::new();

    container.store(100i32);
    container.clear();
    assert!(!container.has_value());

    container.clear();
    assert!(!container.has_value());

    // A cleared box behaves exactly like a fresh one
    assert_eq!(
        container.get::<i32>(),
        Err(BoxError::TypeMismatch {
            expected: "i32",
            actual: "empty container",
        })
    );
}

#[test]
fn test_clone_is_deep() {
    let mut original = TypedBox::new();
    original.store("x".to_string());

    let copy = original.clone();
    original.clear();

    // The copy survives the original being cleared
    assert_eq!(copy.get::<String>().unwrap(), "x");
}

#[test]
fn test_clone_does_not_alias_mutable_payloads() {
    let mut original = TypedBox::new();
    original.store(vec![1, 2, 3]);

    let mut copy = original.clone();
    copy.with_mut(|v: &mut Vec<i32>| v.push(4)).unwrap();

    assert_eq!(original.get::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
    assert_eq!(copy.get::<Vec<i32>>().unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_with_and_with_mut() {
    let mut container = TypedBox::new();

    let mut counters = HashMap::new();
    counters.insert("visits".to_string(), 1);
    container.store(counters);

    container
        .with_mut(|counters: &mut HashMap<String, i32>| {
            *counters.entry("visits".to_string()).or_insert(0) += 1;
        })
        .unwrap();

    let visits = container
        .with(|counters: &HashMap<String, i32>| counters["visits"])
        .unwrap();
    assert_eq!(visits, 2);

    // Closure access checks types the same way get does
    let result = container.with(|_: &i32| ());
    assert!(matches!(result, Err(BoxError::TypeMismatch { .. })));

    let mut empty = TypedBox::new();
    let result = empty.with_mut(|_: &mut i32| ());
    assert_eq!(
        result,
        Err(BoxError::TypeMismatch {
            expected: "i32",
            actual: "empty container",
        })
    );
}

#[test]
fn test_take_moves_value_out() {
    let mut container = TypedBox::new();
    container.store("owned".to_string());

    let value = container.take::<String>().unwrap();
    assert_eq!(value, "owned");
    assert!(!container.has_value());

    // Taking from the now-empty box fails
    assert!(container.take::<String>().is_err());
}

#[test]
fn test_take_mismatch_leaves_value_in_place() {
    let mut container = TypedBox::new();
    container.store(7i32);

    let result = container.take::<String>();
    assert!(matches!(
        result,
        Err(BoxError::TypeMismatch { actual: "i32", .. })
    ));

    assert!(container.has_value());
    assert_eq!(container.get::<i32>().unwrap(), 7);
}

#[test]
fn test_stored_type_name() {
    let mut container = TypedBox::new();

    container.store(1u8);
    assert_eq!(container.stored_type(), Some("u8"));

    container.store(3.5f64);
    assert_eq!(container.stored_type(), Some("f64"));
}

#[test]
fn test_custom_struct_payload() {
    #[derive(Debug, Clone, PartialEq)]
    struct Config {
        retries: u32,
        endpoint: String,
    }

    let config = Config {
        retries: 3,
        endpoint: "localhost:9000".to_string(),
    };

    let mut container = TypedBox::new();
    container.store(config.clone());

    assert_eq!(container.get::<Config>().unwrap(), config);
}

#[test]
fn test_chrono_payload() {
    use chrono::{DateTime, TimeZone, Utc};

    let timestamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let mut container = TypedBox::new();
    container.store(timestamp);

    assert_eq!(container.get::<DateTime<Utc>>().unwrap(), timestamp);
    assert!(container.get::<i64>().is_err());
}

#[test]
fn test_error_display() {
    let mut container = TypedBox::new();
    container.store(100i32);

    let err = container.get::<f64>().unwrap_err();
    assert_eq!(err.to_string(), "expected type f64, but got type i32");

    container.clear();
    let err = container.get::<i32>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected type i32, but got type empty container"
    );
}

#[test]
fn test_debug_shows_held_type() {
    let mut container = TypedBox::new();
    assert!(format!("{:?}", container).contains("empty container"));

    container.store(1i32);
    assert!(format!("{:?}", container).contains("i32"));
}
