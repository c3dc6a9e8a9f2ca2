//!
//! dotpath: read and write nested values through dot-delimited paths.
//!
//! ## Core Concepts
//!
//! * **Values (`Value`, `Doc`)**: A closed tree of scalars, keyed documents and lists.
//!   Absence is never a value: a missing key is `None` or `Resolved::NotFound`,
//!   distinct from a stored `Value::Null`.
//! * **Paths (`Path`, `PathBuf`, `path!`)**: Routes like `user.profiles[0].city`,
//!   parsed into segments. Malformed paths fail fast with `PathError`, or at
//!   compile time for `path!` literals.
//! * **Reading (`read`, `read_or`)**: Resolution never fails. A non-numeric
//!   segment applied to a list fans out over its elements; one hit comes back
//!   as a single value, several as a list, none as the caller's fallback.
//! * **Writing (`write`)**: Assigns one location, creating documents for missing
//!   or null intermediate segments and refusing to write through scalars.
//!
//! ```
//! use dotpath::{Value, path, read_or, write};
//!
//! let mut root = Value::from_json_str(r#"{"user":{"profiles":[{"city":"A"},{"city":"B"}]}}"#)?;
//!
//! assert_eq!(read_or(&root, path!("user.profiles.city"), Value::Null), Value::from(vec!["A", "B"]));
//! assert_eq!(read_or(&root, path!("user.zip"), "00000"), "00000");
//!
//! write(&mut root, path!("user.settings.theme"), "dark")?;
//! assert_eq!(read_or(&root, path!("user.settings.theme"), Value::Null), "dark");
//! # Ok::<(), dotpath::Error>(())
//! ```

pub mod doc;
pub mod errors;
pub mod json;
pub mod path;
pub mod read;
pub mod value;
pub mod write;

pub use doc::Doc;
pub use errors::AccessError;
pub use path::{Path, PathBuf, PathError};
pub use read::{Resolved, read, read_or, read_str};
pub use value::Value;
pub use write::{write, write_str};

/// Result type used throughout the dotpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Path syntax errors from the path module
    #[error(transparent)]
    Path(#[from] PathError),

    /// Structured write errors from the write module
    #[error(transparent)]
    Access(AccessError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Access(_) => "write",
            Error::Json(_) => "json",
        }
    }

    /// Check if this error is caused by malformed path syntax.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error is caused by the shape of existing data.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_type_error(),
            _ => false,
        }
    }
}
