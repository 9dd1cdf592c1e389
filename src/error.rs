//! Error types for glyph construction and traversal.
//!
//! This module contains the [`Error`] type which represents every failure a
//! glyph can report, from malformed path specifications at construction time
//! to missing keys and type mismatches while walking a nested mapping.
//!
//! # Example
//!
//! ```
//! use glyphs::{Compound, Error, ReadGlyph, ReadOptions, Result, Value, read_with};
//!
//! fn lookup(source: &Compound) -> Result<Value> {
//!     let glyph = ReadGlyph::<Value>::builder("user>name").build()?;
//!     match read_with(source, &glyph, ReadOptions::new().strict()) {
//!         Ok(value) => Ok(value),
//!         Err(Error::MissingPath(segment)) => {
//!             println!("no `{segment}` in the source");
//!             Err(Error::MissingPath(segment))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(lookup(&Compound::new()).is_err());
//! ```

use thiserror::Error;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when building a
/// glyph or walking a nested mapping with one.
///
/// # Variants
///
/// - [`EmptyPath`](Error::EmptyPath) - A path was given without any segment
/// - [`EmptySegment`](Error::EmptySegment) - One level of a path is empty
/// - [`TypesTooLong`](Error::TypesTooLong) - More type levels than path levels
/// - [`MalformedTag`](Error::MalformedTag) - A type tag is not `key:value`
/// - [`MissingPath`](Error::MissingPath) - A segment is absent while reading
/// - [`TypeMismatch`](Error::TypeMismatch) - A type tag did not match while reading
/// - [`NotMapping`](Error::NotMapping) - A write met a non-mapping on its way down
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The path specification has no segment at all.
    #[error("path must contain at least one segment")]
    EmptyPath,

    /// A segment of the path specification is empty.
    ///
    /// With the joined form this happens for inputs such as `a>>b` or `a>`.
    #[error("path segment {index} is empty")]
    EmptySegment { index: usize },

    /// The type specification describes more levels than the path has.
    #[error("type specification has {types} levels but the path only has {levels}")]
    TypesTooLong { types: usize, levels: usize },

    /// A type tag could not be split into a key and a value.
    #[error("malformed type tag `{0}`: expected `key:value`")]
    MalformedTag(String),

    /// A segment of the path could not be found in the mapping.
    ///
    /// Reported by strict reads, and by any read that meets a value which is
    /// not a mapping while more segments remain to be walked.
    #[error("could not find `{0}` in the given mapping")]
    MissingPath(String),

    /// The type tag attached to a segment did not match the mapping.
    #[error("type mismatch for `{0}` in the given mapping")]
    TypeMismatch(String),

    /// A write found a non-mapping value where it needed to descend.
    #[error("`{0}` holds a value that is not a mapping")]
    NotMapping(String),
}
