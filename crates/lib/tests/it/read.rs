//! Tests for reading values through paths
//!
//! Covers direct lookups, fallbacks, fan-out through lists and the collapse
//! of fan-out results.

use dotpath::{PathBuf, Resolved, Value, path, read, read_or, read_str};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_reads_nested_value() {
    let data = user_data();
    assert_one_text(&read(&data, path!("user.profile.address.street")), "Main St");
}

#[test]
fn test_missing_key_returns_fallback() {
    let data = user_data();
    assert_eq!(
        read_or(&data, path!("user.profile.address.zipCode"), "00000"),
        "00000"
    );

    let data = value(json!({ "user": { "profile": { "address": {} } } }));
    assert_eq!(
        read_or(&data, path!("user.profile.address.zipCode"), "00000"),
        Value::from("00000")
    );
}

#[test]
fn test_missing_key_without_fallback_is_none() {
    let data = user_data();
    let resolved = read(&data, path!("user.profile.address.country"));
    assert!(resolved.is_not_found());
    assert_eq!(resolved.into_value(), None);
}

#[test]
fn test_fan_out_returns_list() {
    let data = user_data();
    let cities = read_or(&data, path!("user.subProfiles.address.city"), Value::Null);
    assert_eq!(cities, Value::from(vec!["Somewhere", "Somewhere else"]));

    let data = value(json!({ "user": { "profiles": [ { "city": "A" }, { "city": "B" } ] } }));
    assert_eq!(
        read(&data, path!("user.profiles.city")).into_value(),
        Some(Value::from(vec!["A", "B"]))
    );
}

#[test]
fn test_fan_out_single_hit_is_scalar() {
    let data = user_data();
    assert_one_text(&read(&data, path!("user.subProfiles.address.postcode")), "00000");

    let data = value(json!({ "user": { "profiles": [ null, { "city": "A" } ] } }));
    assert_eq!(read_or(&data, path!("user.profiles.city"), Value::Null), "A");
}

#[test]
fn test_fan_out_miss_returns_fallback() {
    let data = user_data();
    assert_eq!(
        read_or(&data, path!("user.subProfiles.address.zipcode.foo"), 12),
        Value::Int(12)
    );
}

#[test]
fn test_fan_out_over_only_nulls_returns_fallback() {
    let data = value(json!({ "user": { "profile": [ null, null ] } }));
    assert_eq!(
        read_or(&data, path!("user.profile.address.city"), "No City"),
        "No City"
    );
}

#[test]
fn test_empty_root() {
    let data = value(json!({}));
    assert_eq!(read_or(&data, path!("user.subProfiles"), false), false);
}

#[test]
fn test_null_root() {
    assert_eq!(
        read_or(&Value::Null, path!("user.profile.address.city"), "No City"),
        "No City"
    );
}

#[test]
fn test_fan_out_preserves_order_without_dedup() {
    let data = value(json!({
        "items": [ { "k": "x" }, { "k": "y" }, {}, { "k": "x" } ]
    }));
    let keys: Vec<&Value> = read(&data, path!("items.k")).into_iter().collect();
    assert_eq!(keys, vec!["x", "y", "x"]);
}

#[test]
fn test_bracket_and_dot_index_agree() {
    let data = user_data();
    let bracket = read(&data, path!("user.subProfiles[3].name"));
    let dotted = read(&data, path!("user.subProfiles.3.name"));
    assert_eq!(bracket, dotted);
    assert_one_text(&bracket, "Robb");

    assert!(read(&data, path!("user.subProfiles[0].name")).is_not_found());
    assert!(read(&data, path!("user.subProfiles[9]")).is_not_found());
}

#[test]
fn test_empty_path_returns_root() {
    let data = user_data();
    assert_eq!(read(&data, PathBuf::new()), Resolved::One(&data));
    assert_eq!(read_or(&data, path!(""), Value::Null), data);
}

#[test]
fn test_read_does_not_mutate() {
    let data = user_data();
    let before = data.clone();
    let _ = read(&data, path!("user.subProfiles.address.more.availableUntil"));
    let _ = read(&data, path!("user.nothing.here"));
    assert_eq!(data, before);
}

#[test]
fn test_deep_fan_out_unwraps_single_survivor() {
    let data = user_data();
    assert_one_text(
        &read(&data, path!("user.subProfiles.address.more.availableUntil")),
        "2024-10-05T08:57:18.021Z",
    );
}

#[test]
fn test_runtime_paths() {
    let data = user_data();
    let path = PathBuf::parse("user.subProfiles")
        .unwrap()
        .push_index(2)
        .push("address.street")
        .unwrap();
    assert_one_text(&read(&data, &path), "Main St");

    assert!(read_str(&data, "user.profile.name").unwrap().is_found());
    assert!(read_str(&data, "user profile").is_err());
}
