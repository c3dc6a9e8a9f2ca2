//! Path resolution with fan-out through lists.
//!
//! Reading walks a path one segment at a time:
//!
//! - On a [`Doc`] the segment is a key lookup.
//! - On a list, a numeric segment indexes the list. Any other segment *fans
//!   out*: it is looked up in every element, elements where the lookup misses
//!   are dropped, and the hits are gathered in list order. Nested lists fan
//!   out recursively and their hits are flattened.
//! - Scalars and `Null` have no children, so the lookup misses.
//!
//! Once a step produces several hits, later segments apply to each hit and
//! the results are concatenated. Resolution stops at the first step with no
//! hits. The final hits collapse: none is [`Resolved::NotFound`], one is
//! [`Resolved::One`], more are [`Resolved::Many`].
//!
//! ```
//! use dotpath::{Value, path, read};
//!
//! let root: Value = serde_json::json!({
//!     "user": { "profiles": [ { "city": "A" }, null, { "city": "B" } ] }
//! })
//! .into();
//!
//! let cities = read(&root, path!("user.profiles.city"));
//! assert_eq!(cities.len(), 2);
//! assert_eq!(cities.into_value(), Some(Value::from(vec!["A", "B"])));
//!
//! let second = read(&root, path!("user.profiles[2].city"));
//! assert_eq!(second.one().unwrap(), "B");
//!
//! let zip = read(&root, path!("user.zip")).or("00000");
//! assert_eq!(zip, "00000");
//! ```

use crate::{Doc, Path, PathBuf, Value, path::parse_index};

/// Outcome of resolving a path.
///
/// Borrows from the root; use [`into_value`](Resolved::into_value) or
/// [`or`](Resolved::or) to get an owned [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// No value at the path
    NotFound,
    /// Exactly one value
    One(&'a Value),
    /// Several values gathered by fan-out, in list order
    Many(Vec<&'a Value>),
}

impl<'a> Resolved<'a> {
    /// Collapses a sequence of hits.
    fn from_hits(hits: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut hits: Vec<&'a Value> = hits.into_iter().collect();
        match hits.len() {
            0 => Resolved::NotFound,
            1 => Resolved::One(hits.remove(0)),
            _ => Resolved::Many(hits),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.is_not_found()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolved::NotFound)
    }

    /// Returns true if fan-out produced more than one value
    pub fn is_many(&self) -> bool {
        matches!(self, Resolved::Many(_))
    }

    /// Number of values found
    pub fn len(&self) -> usize {
        match self {
            Resolved::NotFound => 0,
            Resolved::One(_) => 1,
            Resolved::Many(hits) => hits.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_not_found()
    }

    /// Returns the value if exactly one was found
    pub fn one(&self) -> Option<&'a Value> {
        match self {
            Resolved::One(value) => Some(*value),
            _ => None,
        }
    }

    /// Iterates over every value found, in order
    pub fn iter(&self) -> std::slice::Iter<'_, &'a Value> {
        match self {
            Resolved::NotFound => std::slice::Iter::default(),
            Resolved::One(value) => std::slice::from_ref(value).iter(),
            Resolved::Many(hits) => hits.iter(),
        }
    }

    /// Converts to an owned value; several hits become a [`Value::List`].
    pub fn into_value(self) -> Option<Value> {
        match self {
            Resolved::NotFound => None,
            Resolved::One(value) => Some(value.clone()),
            Resolved::Many(hits) => Some(Value::List(hits.into_iter().cloned().collect())),
        }
    }

    /// Converts to an owned value, substituting `fallback` when not found.
    pub fn or(self, fallback: impl Into<Value>) -> Value {
        self.into_value().unwrap_or_else(|| fallback.into())
    }

    /// Like [`or`](Resolved::or) but computes the fallback lazily.
    pub fn or_else(self, fallback: impl FnOnce() -> Value) -> Value {
        self.into_value().unwrap_or_else(fallback)
    }
}

impl<'a> IntoIterator for Resolved<'a> {
    type Item = &'a Value;
    type IntoIter = std::vec::IntoIter<&'a Value>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Resolved::NotFound => Vec::new().into_iter(),
            Resolved::One(value) => vec![value].into_iter(),
            Resolved::Many(hits) => hits.into_iter(),
        }
    }
}

/// Looks up one segment in one value.
fn lookup<'a>(value: &'a Value, key: &str) -> Resolved<'a> {
    match value {
        Value::Doc(doc) => doc.get(key).map_or(Resolved::NotFound, Resolved::One),
        Value::List(items) => match parse_index(key) {
            Some(index) => items.get(index).map_or(Resolved::NotFound, Resolved::One),
            None => Resolved::from_hits(items.iter().flat_map(|item| lookup(item, key))),
        },
        _ => Resolved::NotFound,
    }
}

/// Applies the remaining segments to `current`.
fn walk<'a, 's>(
    mut current: Resolved<'a>,
    path: &Path,
    segments: impl Iterator<Item = (usize, &'s str)>,
) -> Resolved<'a> {
    for (depth, key) in segments {
        current = match current {
            Resolved::NotFound => Resolved::NotFound,
            Resolved::One(value) => lookup(value, key),
            Resolved::Many(hits) => {
                Resolved::from_hits(hits.into_iter().flat_map(|hit| lookup(hit, key)))
            }
        };
        if current.is_not_found() {
            tracing::trace!(%path, depth, segment = key, "path did not resolve");
            return Resolved::NotFound;
        }
    }
    current
}

/// Resolves `path` against `root`.
///
/// Never fails: a path that does not resolve returns [`Resolved::NotFound`].
/// The empty path resolves to the root itself.
pub fn read(root: &Value, path: impl AsRef<Path>) -> Resolved<'_> {
    let path = path.as_ref();
    walk(Resolved::One(root), path, path.segments().enumerate())
}

/// Resolves `path` against `root`, returning `fallback` when nothing is found.
///
/// A single hit is returned as is, several hits as a [`Value::List`]. A
/// stored [`Value::Null`] counts as found.
pub fn read_or(root: &Value, path: impl AsRef<Path>, fallback: impl Into<Value>) -> Value {
    read(root, path).or(fallback)
}

/// Parses `path` and resolves it against `root`.
///
/// # Errors
/// Returns [`Error::Path`](crate::Error::Path) if `path` is malformed. A
/// well-formed path that does not resolve is not an error.
pub fn read_str<'a>(root: &'a Value, path: &str) -> crate::Result<Resolved<'a>> {
    let path = PathBuf::parse(path)?;
    Ok(read(root, &path))
}

/// Resolves `path` starting from the children of `doc`.
pub(crate) fn resolve_in_doc<'a>(doc: &'a Doc, path: &Path) -> Resolved<'a> {
    let mut segments = path.segments().enumerate();
    let Some((_, first)) = segments.next() else {
        return Resolved::NotFound;
    };
    let start = doc.get(first).map_or(Resolved::NotFound, Resolved::One);
    if start.is_not_found() {
        tracing::trace!(%path, depth = 0, segment = first, "path did not resolve");
        return Resolved::NotFound;
    }
    walk(start, path, segments)
}
