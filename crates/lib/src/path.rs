//! Path types for addressing values inside nested structures.
//!
//! A path is a dot-delimited route such as `user.profiles[0].city`. The
//! `Path`/`PathBuf` types follow the same borrowed/owned pattern as
//! `std::path::Path`/`PathBuf`.
//!
//! # Grammar
//!
//! ```text
//! path       = segment *("." segment)
//! segment    = identifier [ "[" digits "]" ]
//! identifier = 1*(ALPHA / DIGIT / "_" / "$")
//! ```
//!
//! The empty string is the empty path and addresses the root itself.
//! Bracketed indices are flattened into their own segment, so `a[2]` and
//! `a.2` yield the same segments and compare equal.
//!
//! # Usage
//!
//! ```rust
//! use dotpath::{PathBuf, path};
//!
//! // Parse at runtime (fails fast on malformed input)
//! let parsed = PathBuf::parse("user.profiles[0].city")?;
//! assert_eq!(parsed.as_str(), "user.profiles.0.city");
//!
//! // Validate a literal at compile time
//! let literal = path!("user.profiles[0].city");
//! assert_eq!(literal, &*parsed);
//! # Ok::<(), dotpath::PathError>(())
//! ```

use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

use thiserror::Error;

/// Error type for path syntax failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// Two dots in a row, or a leading or trailing dot.
    #[error("Empty segment in path '{path}' at byte {position}")]
    EmptySegment { path: String, position: usize },

    /// A character outside `[A-Za-z0-9_$]` in an identifier.
    #[error("Invalid character '{character}' in path '{path}' at byte {position}")]
    InvalidCharacter {
        path: String,
        character: char,
        position: usize,
    },

    /// A bracketed index that is not `[<digits>]` closing a segment.
    #[error("Malformed index in path '{path}' at byte {position}")]
    MalformedIndex { path: String, position: usize },
}

impl PathError {
    /// Byte offset into the input where parsing stopped.
    pub fn position(&self) -> usize {
        match self {
            PathError::EmptySegment { position, .. }
            | PathError::InvalidCharacter { position, .. }
            | PathError::MalformedIndex { position, .. } => *position,
        }
    }

    /// The rejected input.
    pub fn path(&self) -> &str {
        match self {
            PathError::EmptySegment { path, .. }
            | PathError::InvalidCharacter { path, .. }
            | PathError::MalformedIndex { path, .. } => path,
        }
    }
}

/// Syntax failure found by [`check`], carrying the byte offset.
///
/// Kept allocation-free so the same checker runs in `const` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    EmptySegment(usize),
    InvalidCharacter(usize),
    MalformedIndex(usize),
}

impl Syntax {
    fn into_error(self, path: &str) -> PathError {
        let path_owned = path.to_string();
        match self {
            Syntax::EmptySegment(position) => PathError::EmptySegment {
                path: path_owned,
                position,
            },
            Syntax::InvalidCharacter(position) => PathError::InvalidCharacter {
                character: path[position..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                path: path_owned,
                position,
            },
            Syntax::MalformedIndex(position) => PathError::MalformedIndex {
                path: path_owned,
                position,
            },
        }
    }
}

const fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Checks `path` against the grammar.
const fn check(path: &str) -> Result<(), Syntax> {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return Ok(());
    }

    // Length of the identifier in the current segment; a closed index also
    // counts as content.
    let mut segment_len = 0;
    let mut i = 0;
    while i < len {
        let b = bytes[i];
        if b == b'.' {
            if segment_len == 0 {
                return Err(Syntax::EmptySegment(i));
            }
            segment_len = 0;
            i += 1;
        } else if b == b'[' {
            if segment_len == 0 {
                return Err(Syntax::MalformedIndex(i));
            }
            let mut j = i + 1;
            while j < len && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j == i + 1 || j >= len || bytes[j] != b']' {
                return Err(Syntax::MalformedIndex(i));
            }
            j += 1;
            if j < len && bytes[j] != b'.' {
                return Err(Syntax::MalformedIndex(j));
            }
            i = j;
        } else if is_identifier_byte(b) {
            segment_len += 1;
            i += 1;
        } else {
            return Err(Syntax::InvalidCharacter(i));
        }
    }

    if segment_len == 0 {
        return Err(Syntax::EmptySegment(len));
    }
    Ok(())
}

/// Validates a path literal during constant evaluation.
///
/// Used by [`path!`](crate::path!); a malformed literal becomes a compile error.
#[doc(hidden)]
pub const fn validate_literal(path: &'static str) -> &'static str {
    match check(path) {
        Ok(()) => path,
        Err(Syntax::EmptySegment(_)) => panic!("path literal contains an empty segment"),
        Err(Syntax::InvalidCharacter(_)) => panic!("path literal contains an invalid character"),
        Err(Syntax::MalformedIndex(_)) => panic!("path literal contains a malformed index"),
    }
}

/// Splits `name[2]` into `name`, `2`.
fn split_index(part: &str) -> impl Iterator<Item = &str> {
    let (name, index) = match part.split_once('[') {
        Some((name, rest)) => (name, rest.strip_suffix(']')),
        None => (part, None),
    };
    std::iter::once(name).chain(index)
}

/// Parses a segment as a sequence index.
///
/// Only plain decimal digits qualify; the grammar already excludes signs.
/// Digit runs too large for `usize` saturate to `usize::MAX`, which no list
/// can reach, so they stay indices and miss as out of bounds.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse().unwrap_or(usize::MAX))
}

/// Appends one runtime component for [`path!`](crate::path!).
///
/// The component is rendered with `Display` and parsed like
/// [`PathBuf::push`], so `"a.b"` adds two segments and `2` adds an index.
///
/// # Panics
/// Panics if the rendered component is not a valid path fragment.
#[doc(hidden)]
pub fn push_component(path: PathBuf, component: impl fmt::Display) -> PathBuf {
    let component = component.to_string();
    match path.push(&component) {
        Ok(path) => path,
        Err(err) => panic!("invalid path component '{component}': {err}"),
    }
}

/// An owned, validated path.
///
/// Always stored in canonical dotted form: `a[2].b` is kept as `a.2.b`.
///
/// ```rust
/// # use dotpath::PathBuf;
/// let path = PathBuf::parse("orders[3].total")?;
/// let segments: Vec<&str> = path.segments().collect();
/// assert_eq!(segments, vec!["orders", "3", "total"]);
///
/// assert!(PathBuf::parse("orders..total").is_err());
/// # Ok::<(), dotpath::PathError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed, validated path.
///
/// `Path` is to [`PathBuf`] what `str` is to `String`. It is unsized and
/// always used behind a reference. Unlike `PathBuf` it may hold bracketed
/// indices verbatim (for example from a [`path!`](crate::path!) literal);
/// [`segments`](Path::segments) flattens them either way.
#[derive(Debug)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path, which addresses the root.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Parses and canonicalizes a path string.
    ///
    /// # Errors
    /// Returns a [`PathError`] for empty segments, characters outside the
    /// identifier alphabet, or malformed `[index]` suffixes.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        check(input).map_err(|syntax| syntax.into_error(input))?;
        // SAFETY: `check` accepted the input.
        let path = unsafe { Path::from_str_unchecked(input) };
        Ok(path.to_path_buf())
    }

    /// Appends a path fragment such as `"address.city"` or `"items[1]"`.
    ///
    /// # Errors
    /// Fails if the fragment itself does not parse.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Result<Self, PathError> {
        let fragment = PathBuf::parse(fragment.as_ref())?;
        self.append(&fragment.inner);
        Ok(self)
    }

    /// Appends a numeric index segment.
    pub fn push_index(mut self, index: usize) -> Self {
        self.append(&index.to_string());
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        for segment in other.segments() {
            self.append(segment);
        }
        self
    }

    fn append(&mut self, canonical: &str) {
        if canonical.is_empty() {
            return;
        }
        if !self.inner.is_empty() {
            self.inner.push('.');
        }
        self.inner.push_str(canonical);
    }
}

impl Path {
    /// Creates a Path from a string without validation.
    ///
    /// # Safety
    /// The caller must ensure that the string matches the path grammar.
    /// This is intended for literals already checked by [`validate_literal`].
    pub const unsafe fn from_str_unchecked(s: &str) -> &Path {
        // SAFETY: Path is a transparent wrapper around str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the segment keys, with `[n]` flattened.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner
            .split('.')
            .filter(|part| !part.is_empty())
            .flat_map(split_index)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the parent path, or `None` for single-segment and empty paths.
    pub fn parent(&self) -> Option<PathBuf> {
        let segments: Vec<&str> = self.segments().collect();
        if segments.len() < 2 {
            return None;
        }
        Some(PathBuf {
            inner: segments[..segments.len() - 1].join("."),
        })
    }

    /// Returns the final segment, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Returns the path as written.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, canonical `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.segments().collect::<Vec<_>>().join("."),
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.segments().eq(other.segments())
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for segment in self.segments() {
            segment.hash(state);
        }
    }
}

impl PartialEq for PathBuf {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for PathBuf {}

impl Hash for PathBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.deref().hash(state)
    }
}

impl PartialEq<Path> for PathBuf {
    fn eq(&self, other: &Path) -> bool {
        self.deref() == other
    }
}

impl PartialEq<&Path> for PathBuf {
    fn eq(&self, other: &&Path) -> bool {
        self.deref() == *other
    }
}

impl PartialEq<PathBuf> for Path {
    fn eq(&self, other: &PathBuf) -> bool {
        self == other.deref()
    }
}

impl PartialEq<PathBuf> for &Path {
    fn eq(&self, other: &PathBuf) -> bool {
        *self == other.deref()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        // SAFETY: PathBuf only holds canonical, validated paths
        unsafe { Path::from_str_unchecked(self.inner.as_str()) }
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PathBuf {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathBuf {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path, checking string literals at compile time.
///
/// - `path!()` - Empty path (`PathBuf`)
/// - `path!("user.tags[0]")` - Literal (`&'static Path`, no allocation)
/// - `path!(user, "tags", 0)` - Runtime components (`PathBuf`); each one is
///   rendered with `Display` and panics if it is not a valid fragment
///
/// A literal that does not match the path grammar fails to compile:
///
/// ```compile_fail
/// let _ = dotpath::path!("user..name");
/// ```
///
/// ```rust
/// # use dotpath::path;
/// let path = path!("user.tags[0]");
/// let segments: Vec<&str> = path.segments().collect();
/// assert_eq!(segments, vec!["user", "tags", "0"]);
///
/// let empty = path!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::PathBuf::new()
    };

    ($literal:literal) => {{
        const CHECKED: &str = $crate::path::validate_literal($literal);
        // SAFETY: validate_literal rejected anything outside the grammar
        unsafe { $crate::path::Path::from_str_unchecked(CHECKED) }
    }};

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::path::push_component($crate::PathBuf::new(), $first);
        $(
            let path = $crate::path::push_component(path, $rest);
        )*
        path
    }};
}
