//! Path assignment.
//!
//! Writing addresses exactly one location, so there is no fan-out. Every
//! segment but the last must lead into a container:
//!
//! - A missing key, or a key holding `Null`, gets a fresh empty [`Doc`].
//! - An existing `Doc` or list element is descended into and never replaced.
//! - Lists are indexed by numeric segments only and are never created.
//! - Any other scalar (including `0`, `""` and `false`) stops the write with
//!   [`AccessError::NotAContainer`].
//!
//! The last segment is assigned directly, replacing what was there.

use crate::{AccessError, Doc, Path, PathBuf, Value, errors::location, path::parse_index};

/// Moves from `current` into the child at `key`, creating a `Doc` when the
/// child is missing or null.
///
/// `at` holds the segments up to and including `key`.
fn descend<'v>(current: &'v mut Value, key: &str, at: &[&str]) -> Result<&'v mut Value, AccessError> {
    let slot = match current {
        Value::Doc(doc) => doc.children.entry(key.to_string()).or_insert(Value::Null),
        Value::List(items) => {
            let len = items.len();
            match parse_index(key) {
                Some(index) if index < len => &mut items[index],
                Some(index) => {
                    return Err(AccessError::IndexOutOfBounds {
                        path: location(&at[..at.len() - 1]),
                        index,
                        len,
                    });
                }
                None => {
                    return Err(AccessError::NonNumericIndex {
                        path: location(&at[..at.len() - 1]),
                        key: key.to_string(),
                    });
                }
            }
        }
        scalar => {
            return Err(AccessError::NotAContainer {
                path: location(&at[..at.len() - 1]),
                found: scalar.type_name(),
            });
        }
    };

    if slot.is_null() {
        tracing::debug!(path = %location(at), "creating intermediate doc");
        *slot = Value::Doc(Doc::new());
    }
    Ok(slot)
}

/// Stores `value` under `key` in `current`, returning what it replaced.
fn assign(
    current: &mut Value,
    key: &str,
    value: Value,
    at: &[&str],
) -> Result<Option<Value>, AccessError> {
    match current {
        Value::Doc(doc) => Ok(doc.insert(key, value)),
        Value::List(items) => {
            let len = items.len();
            match parse_index(key) {
                Some(index) if index < len => Ok(Some(std::mem::replace(&mut items[index], value))),
                Some(index) if index == len => {
                    items.push(value);
                    Ok(None)
                }
                Some(index) => Err(AccessError::IndexOutOfBounds {
                    path: location(at),
                    index,
                    len,
                }),
                None => Err(AccessError::NonNumericIndex {
                    path: location(at),
                    key: key.to_string(),
                }),
            }
        }
        scalar => Err(AccessError::NotAContainer {
            path: location(at),
            found: scalar.type_name(),
        }),
    }
}

/// Assigns `value` at `path` inside `root`, returning the previous value.
///
/// Intermediate documents are created for missing or null segments. The
/// root itself must already be a container.
///
/// # Errors
/// - [`AccessError::EmptyPath`] for a path with no segments.
/// - [`AccessError::NotAContainer`] when a segment other than the last holds a
///   non-null scalar, or the root is a scalar.
/// - [`AccessError::NonNumericIndex`] / [`AccessError::IndexOutOfBounds`] for
///   list accesses that do not name an existing element (or the append slot,
///   for the last segment).
///
/// Documents created before the failing segment are kept.
///
/// ```
/// use dotpath::{Doc, Value, path, read, write};
///
/// let mut root = Value::Doc(Doc::new());
/// write(&mut root, path!("user.profile.age"), 30)?;
///
/// assert_eq!(read(&root, path!("user.profile.age")).one().unwrap(), &Value::Int(30));
///
/// // Scalars are not written through
/// assert!(write(&mut root, path!("user.profile.age.years"), 1).is_err());
/// # Ok::<(), dotpath::AccessError>(())
/// ```
pub fn write(
    root: &mut Value,
    path: impl AsRef<Path>,
    value: impl Into<Value>,
) -> Result<Option<Value>, AccessError> {
    let segments: Vec<&str> = path.as_ref().segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        return Err(AccessError::EmptyPath);
    };

    let mut current = root;
    for (depth, key) in parents.iter().enumerate() {
        current = descend(current, key, &segments[..=depth])?;
    }
    assign(current, last, value.into(), parents)
}

/// Parses `path` and writes `value` there.
///
/// # Errors
/// [`Error::Path`](crate::Error::Path) for malformed paths, otherwise as
/// [`write`].
pub fn write_str(
    root: &mut Value,
    path: &str,
    value: impl Into<Value>,
) -> crate::Result<Option<Value>> {
    let path = PathBuf::parse(path)?;
    Ok(write(root, &path, value)?)
}
