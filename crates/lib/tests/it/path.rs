//! Tests for path parsing
//!
//! Covers normalization of bracketed indices, equality between notations and
//! the errors raised for malformed input.

use std::collections::HashSet;
use std::str::FromStr;

use dotpath::{Path, PathBuf, PathError, path};

#[test]
fn test_notations_normalize_identically() {
    let bracket = PathBuf::from_str("a.b[2].c").unwrap();
    let dotted = PathBuf::from_str("a.b.2.c").unwrap();
    assert_eq!(bracket, dotted);
    assert_eq!(bracket.as_str(), "a.b.2.c");
    assert_eq!(path!("a.b[2].c"), dotted);
}

#[test]
fn test_equal_paths_hash_equal() {
    let mut set: HashSet<PathBuf> = HashSet::new();
    set.insert(PathBuf::parse("items[0].id").unwrap());
    set.insert(PathBuf::parse("items.0.id").unwrap());
    assert_eq!(set.len(), 1);

    // Borrowed lookups go through Path
    let borrowed: &Path = path!("items[0].id");
    assert!(set.contains(borrowed));
}

#[test]
fn test_identifier_alphabet() {
    for valid in ["$root", "_private", "camelCase", "snake_case", "x1", "0", "a.b.c.d.e"] {
        assert!(PathBuf::parse(valid).is_ok(), "'{valid}' should parse");
    }
    for invalid in ["a-b", "a b", "a/b", "a*", "a\"b", "a\\.b"] {
        assert!(
            matches!(PathBuf::parse(invalid), Err(PathError::InvalidCharacter { .. })),
            "'{invalid}' should be rejected"
        );
    }
}

#[test]
fn test_malformed_paths_fail_fast() {
    let cases = [
        ("user..name", "Empty segment in path 'user..name' at byte 5"),
        ("user.", "Empty segment in path 'user.' at byte 5"),
        ("user[", "Malformed index in path 'user[' at byte 4"),
        ("user[x]", "Malformed index in path 'user[x]' at byte 4"),
        ("user-name", "Invalid character '-' in path 'user-name' at byte 4"),
    ];
    for (input, message) in cases {
        let err = PathBuf::parse(input).unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(err.path(), input);
    }
}

#[test]
fn test_try_from_conversions() {
    let from_str: PathBuf = "a.b".try_into().unwrap();
    let from_string = PathBuf::try_from(String::from("a.b")).unwrap();
    assert_eq!(from_str, from_string);
    assert!(PathBuf::try_from("a..b").is_err());
}

#[test]
fn test_display() {
    assert_eq!(PathBuf::parse("a[1].b").unwrap().to_string(), "a.1.b");
    assert_eq!(path!("a[1].b").to_string(), "a[1].b");
    assert_eq!(PathBuf::new().to_string(), "(empty path)");
}

#[test]
fn test_macro_builds_from_runtime_parts() {
    let user = "user";
    let built = path!(user, "tags", 2);
    assert_eq!(built, PathBuf::parse("user.tags[2]").unwrap());
    assert_eq!(built, path!("user.tags[2]"));

    let ids: Vec<PathBuf> = (0..3).map(|i| path!("rows", i, "id")).collect();
    assert_eq!(ids[2].as_str(), "rows.2.id");
}
