//! Tests for writing values through paths
//!
//! Covers container creation, overwrite behavior, the write/read round trip
//! and the failure cases for writes that have no single target.

use dotpath::{AccessError, Doc, Value, path, read, read_or, write};
use serde_json::json;

use crate::helpers::*;

fn user_john() -> Value {
    value(json!({ "user": { "profile": { "name": "John" } } }))
}

#[test]
fn test_sets_nested_value() {
    let mut data = user_john();
    write(&mut data, path!("user.profile.age"), 30).unwrap();
    assert_eq!(read_or(&data, path!("user.profile.age"), Value::Null), 30);
    assert_one_text(&read(&data, path!("user.profile.name")), "John");
}

#[test]
fn test_creates_intermediate_docs() {
    let mut data = user_john();
    write(&mut data, path!("user.profile.address.street"), "Second St").unwrap();
    assert_one_text(&read(&data, path!("user.profile.address.street")), "Second St");
    assert!(
        read(&data, path!("user.profile.address"))
            .one()
            .unwrap()
            .as_doc()
            .is_some()
    );
}

#[test]
fn test_builds_from_empty_root() {
    let mut data = Value::Doc(Doc::new());
    write(&mut data, path!("user.profile.age"), 30).unwrap();
    assert_eq!(data, value(json!({ "user": { "profile": { "age": 30 } } })));
}

#[test]
fn test_assigns_list_over_null() {
    let mut data = value(json!({ "user": { "test": null } }));
    let old = write(&mut data, path!("user.test"), value(json!([{ "foo": "bar" }]))).unwrap();
    assert_eq!(old, Some(Value::Null));
    assert_eq!(
        read(&data, path!("user.test")).into_value(),
        Some(value(json!([{ "foo": "bar" }])))
    );
}

#[test]
fn test_round_trip() {
    let mut data = Value::Doc(Doc::new());
    let cases = [
        ("a", Value::from(1)),
        ("b.c", Value::from("text")),
        ("b.d.e", Value::from(vec![1, 2, 3])),
        ("b.d.f", Value::Null),
        ("g.h.i.j", Value::Doc(Doc::new().with("k", true))),
    ];
    for (path, expected) in &cases {
        dotpath::write_str(&mut data, path, expected.clone()).unwrap();
    }
    for (path, expected) in &cases {
        let resolved = dotpath::read_str(&data, path).unwrap();
        assert_eq!(resolved.one(), Some(expected), "round trip failed for '{path}'");
    }
}

#[test]
fn test_existing_containers_untouched() {
    let mut data = value(json!({ "a": { "keep": 1, "list": [1, 2] } }));
    write(&mut data, path!("a.new"), 2).unwrap();
    write(&mut data, path!("a.list[0]"), 10).unwrap();
    assert_eq!(
        data,
        value(json!({ "a": { "keep": 1, "new": 2, "list": [10, 2] } }))
    );
}

#[test]
fn test_write_through_scalar_fails() {
    let mut data = value(json!({ "user": { "age": 0, "name": "", "active": false } }));
    for (path, found) in [
        (dotpath::path!("user.age.years"), "int"),
        (dotpath::path!("user.name.first"), "text"),
        (dotpath::path!("user.active.since"), "bool"),
    ] {
        let err = write(&mut data, path, 1).unwrap_err();
        match err {
            AccessError::NotAContainer { found: actual, .. } => assert_eq!(actual, found),
            other => panic!("Expected NotAContainer for '{path}', got {other:?}"),
        }
    }
    // Nothing was replaced
    assert_eq!(
        data,
        value(json!({ "user": { "age": 0, "name": "", "active": false } }))
    );
}

#[test]
fn test_no_fan_out_on_write() {
    let mut data = value(json!({ "users": [ { "name": "a" }, { "name": "b" } ] }));
    let err = write(&mut data, path!("users.name"), "c").unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.path(), Some("users"));
}

#[test]
fn test_list_append_and_bounds() {
    let mut data = value(json!({ "tags": [] }));
    write(&mut data, path!("tags[0]"), "first").unwrap();
    write(&mut data, path!("tags[1]"), "second").unwrap();
    assert_eq!(
        read(&data, path!("tags")).into_value(),
        Some(Value::from(vec!["first", "second"]))
    );

    let err = write(&mut data, path!("tags[5]"), "x").unwrap_err();
    assert!(err.is_bounds_error());
}

#[test]
fn test_empty_path_rejected() {
    let mut data = user_john();
    assert_eq!(
        write(&mut data, dotpath::PathBuf::new(), 1),
        Err(AccessError::EmptyPath)
    );
}
