//! Keyed container type.
//!
//! [`Doc`] maps string keys to [`Value`]s. It is the container the writer
//! materializes for missing intermediate segments, and the usual root of a
//! nested structure.
//!
//! # Usage
//!
//! ```
//! use dotpath::{Doc, path};
//!
//! let mut doc = Doc::new();
//! doc.insert("name", "Alice");
//! doc.set_path(path!("profile.address.city"), "Paris")?;
//!
//! assert_eq!(doc.get_path(path!("profile.address.city")).one().unwrap(), "Paris");
//! # Ok::<(), dotpath::AccessError>(())
//! ```

use std::{collections::BTreeMap, fmt};

use crate::{AccessError, Path, Resolved, Value};

/// A keyed container of values.
///
/// Keys are kept sorted so iteration and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    /// Child values indexed by key
    pub(crate) children: BTreeMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if `key` is present, including keys holding `Null`
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets a direct child by key. Use [`get_path`](Doc::get_path) for nested access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Inserts a direct child, returning the previous value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a direct child, returning it if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Returns an iterator over all key-value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Resolves `path` starting at this document's children.
    ///
    /// Unlike [`read`](crate::read) on a `Value`, the empty path resolves to
    /// [`Resolved::NotFound`] because a `Doc` is not itself a `Value`.
    pub fn get_path(&self, path: impl AsRef<Path>) -> Resolved<'_> {
        crate::read::resolve_in_doc(self, path.as_ref())
    }

    /// Assigns `value` at `path`, creating intermediate documents as needed.
    ///
    /// # Errors
    /// Same as [`write`](crate::write).
    pub fn set_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, AccessError> {
        let mut root = Value::Doc(std::mem::take(self));
        let result = crate::write(&mut root, path, value);
        // Writes only ever touch children, so the root stays a Doc
        if let Value::Doc(doc) = root {
            *self = doc;
        }
        result
    }
}

// Builder helpers
impl Doc {
    /// Adds a direct child, consuming and returning the document
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Doc {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}
