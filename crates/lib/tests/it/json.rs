//! Tests for JSON interop
//!
//! Reads and writes against documents loaded from JSON text, and checks
//! what comes back out.

use dotpath::{Value, path, read, write};
use serde_json::json;

#[test]
fn test_read_json_document() {
    let doc = Value::from_json_str(
        r#"{"orders":[{"id":1,"total":9.5},{"id":2,"total":12},{"id":3}]}"#,
    )
    .unwrap();

    let totals = read(&doc, path!("orders.total"));
    assert_eq!(totals.to_json(), Some(json!([9.5, 12])));

    let ids = read(&doc, path!("orders.id")).into_value().unwrap();
    assert_eq!(serde_json::Value::from(ids), json!([1, 2, 3]));
}

#[test]
fn test_write_then_serialize() {
    let mut doc = Value::from_json_str(r#"{"user":{"name":"John"}}"#).unwrap();
    write(&mut doc, path!("user.settings.theme"), "dark").unwrap();
    write(&mut doc, path!("user.tags"), vec!["a", "b"]).unwrap();

    assert_eq!(
        serde_json::Value::from(&doc),
        json!({ "user": { "name": "John", "settings": { "theme": "dark" }, "tags": ["a", "b"] } })
    );
    assert_eq!(
        serde_json::to_string(&doc).unwrap(),
        doc.to_json_string()
    );
}

#[test]
fn test_stored_null_round_trips() {
    let doc = Value::from_json_str(r#"{"a":{"b":null}}"#).unwrap();
    assert_eq!(read(&doc, path!("a.b")).to_json(), Some(json!(null)));
    assert_eq!(read(&doc, path!("a.c")).to_json(), None);
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = Value::from_json_str("[1, 2").unwrap_err();
    assert!(!err.is_invalid_path());
    assert_eq!(err.module(), "json");
}
