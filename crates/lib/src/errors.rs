//! Error types for path writes.
//!
//! Reads never fail: a path that does not resolve yields
//! [`Resolved::NotFound`](crate::Resolved::NotFound). Writes need a single
//! concrete target and report why one could not be reached.

use thiserror::Error;

/// Structured error types for writing through a path.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// Writes need at least one segment; the root cannot be replaced by path.
    #[error("Cannot write to an empty path")]
    EmptyPath,

    /// The value at `path` is a scalar and cannot hold children.
    #[error("Cannot write through {found} value at '{path}'")]
    NotAContainer { path: String, found: &'static str },

    /// A list was addressed with a key that is not a numeric index.
    #[error("Cannot write key '{key}' into list at '{path}'")]
    NonNumericIndex { path: String, key: String },

    /// A list index past the end (appending at `len` is allowed).
    ///
    /// Indices too large for `usize` are reported as `usize::MAX`.
    #[error("Index {index} out of bounds for list of length {len} at '{path}'")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },
}

impl AccessError {
    /// Check if this error is caused by the shape of the existing data
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            AccessError::NotAContainer { .. } | AccessError::NonNumericIndex { .. }
        )
    }

    /// Check if this error is a list bounds violation
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, AccessError::IndexOutOfBounds { .. })
    }

    /// Get the location the write stopped at, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            AccessError::NotAContainer { path, .. }
            | AccessError::NonNumericIndex { path, .. }
            | AccessError::IndexOutOfBounds { path, .. } => Some(path),
            AccessError::EmptyPath => None,
        }
    }
}

/// Renders the location reached by the first `segments`.
pub(crate) fn location(segments: &[&str]) -> String {
    if segments.is_empty() {
        "(root)".to_string()
    } else {
        segments.join(".")
    }
}

// Conversion from AccessError to the main Error type
impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
