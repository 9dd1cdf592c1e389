//! Walks nested mappings with glyphs.
//!
//! - [`read`] / [`read_with`] return the value a [`ReadGlyph`] points at,
//!   validating type tags and substituting the default value.
//! - [`contains`] reports whether the full typed path is present.
//! - [`write`] stores a value along a [`WriteGlyph`]'s write plan, creating
//!   intermediate mappings and type tags on the way.
//! - [`write_reset`] stores a [`ResettableGlyph`]'s reset value along its
//!   reset plan.
//!
//! # Example
//!
//! ```
//! use glyphs::{Compound, ReadGlyph, Value, WriteGlyph, contains, read, write};
//!
//! let field = WriteGlyph::<Value>::builder("a>b>c").build().unwrap();
//!
//! let mut doc = Compound::new();
//! assert!(!contains(&doc, &field));
//!
//! write(&mut doc, &field, 5.into()).unwrap();
//! assert!(contains(&doc, &field));
//! assert_eq!(read(&doc, &field).unwrap(), Value::from("5"));
//! ```

use tracing::{debug, trace};

use crate::{
    Error, Mapping, Node, Plan, ReadGlyph, ResettableGlyph, Result, Step, TypeTag, WriteGlyph,
};

/// Options for [`read_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOptions {
    strict: bool,
    null_as_default: bool,
}

impl ReadOptions {
    /// Lenient reads, null kept as found.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`Error::MissingPath`] instead of returning the default
    /// value when any segment is absent.
    #[inline]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Returns the default value when the value found (or its translation)
    /// is null.
    #[inline]
    pub fn null_as_default(mut self) -> Self {
        self.null_as_default = true;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    #[inline]
    pub fn is_null_as_default(&self) -> bool {
        self.null_as_default
    }
}

// A failed walk, borrowing the segment it failed at.
enum Miss<'p> {
    Path(&'p str),
    Type(&'p str),
}

impl From<Miss<'_>> for Error {
    #[inline]
    fn from(miss: Miss<'_>) -> Self {
        match miss {
            Miss::Path(segment) => Error::MissingPath(segment.to_owned()),
            Miss::Type(segment) => Error::TypeMismatch(segment.to_owned()),
        }
    }
}

#[inline]
fn tag_matches<M: Mapping>(map: &M, tag: &TypeTag) -> bool {
    match map.get(tag.key()) {
        // containers never match, skip rendering them
        Some(sibling) => !sibling.is_composite() && sibling.text() == tag.value(),
        None => false,
    }
}

/// Follows `plan` from `source`.
///
/// Returns `Ok(None)` if a segment is absent and `strict` is off.
fn walk<'a, 'p, M: Mapping>(
    source: &'a M,
    plan: &'p Plan,
    strict: bool,
) -> std::result::Result<Option<&'a M::Node>, Miss<'p>> {
    let mut subject = Some(source);
    let mut found = None;

    for step in plan {
        let Some(map) = subject else {
            return Err(Miss::Path(step.segment()));
        };

        if let Some(tag) = step.tag() {
            if !tag_matches(map, tag) {
                return Err(Miss::Type(step.segment()));
            }
        }

        match map.get(step.segment()) {
            Some(value) => {
                found = Some(value);
                subject = value.as_map();
            }
            None if strict => return Err(Miss::Path(step.segment())),
            None => return Ok(None),
        }
    }

    Ok(found)
}

#[inline]
fn collapses<V: Node>(value: &V, default_value: &V, options: ReadOptions) -> bool {
    value == default_value || (options.null_as_default && value.is_null())
}

/// Reads the value `glyph` points at in `source`, leniently.
///
/// Equivalent to [`read_with`] with [`ReadOptions::new`].
#[inline]
pub fn read<M: Mapping>(source: &M, glyph: &ReadGlyph<M::Node>) -> Result<M::Node> {
    read_with(source, glyph, ReadOptions::new())
}

/// Reads the value `glyph` points at in `source`.
///
/// A missing segment yields the glyph's default value, unless
/// [`strict`](ReadOptions::strict) is set. A value equal to the default is
/// returned untranslated. Otherwise the read translation is applied, and if
/// it produces the default the default is returned.
///
/// # Errors
///
/// - [`Error::TypeMismatch`] if a type tag along the path does not match
/// - [`Error::MissingPath`] if a strict read misses a segment, or if a value
///   that is not a mapping sits where the path needs to descend
pub fn read_with<M: Mapping>(
    source: &M,
    glyph: &ReadGlyph<M::Node>,
    options: ReadOptions,
) -> Result<M::Node> {
    let default_value = glyph.default_value();

    let Some(found) = walk(source, glyph.plan(), options.strict)? else {
        trace!(path = %glyph.plan(), "path not found, using default value");
        return Ok(default_value.clone());
    };

    if collapses(found, default_value, options) {
        return Ok(default_value.clone());
    }

    let Some(translate) = glyph.translate() else {
        return Ok(found.clone());
    };

    let value = translate(found.clone());
    if collapses(&value, default_value, options) {
        return Ok(default_value.clone());
    }
    Ok(value)
}

/// Returns `true` if `source` holds the full typed path of `glyph`.
///
/// Never fails: missing segments, mismatched tags and non-mapping values all
/// report `false`. When this returns `true`, a [`read_with`] on the same
/// source cannot fail, strict or not.
#[inline]
pub fn contains<M: Mapping>(source: &M, glyph: &ReadGlyph<M::Node>) -> bool {
    walk(source, glyph.plan(), true).is_ok()
}

/// Writes `value` into `destination` along the glyph's write plan.
///
/// The write translation is applied first. A null result is skipped unless
/// the glyph allows null writes. Missing intermediate mappings are created
/// along with the type tags of their level.
///
/// # Errors
///
/// [`Error::NotMapping`] if a value that is not a mapping sits where the
/// write needs to descend. The destination is left unchanged.
///
/// # Panics
///
/// If a type tag already present in `destination` disagrees with the tag
/// being written.
pub fn write<M: Mapping>(
    destination: &mut M,
    glyph: &WriteGlyph<M::Node>,
    value: M::Node,
) -> Result<()> {
    let value = match glyph.write_translate() {
        Some(translate) => translate(value),
        None => value,
    };

    if value.is_null() && !glyph.allow_null_write() {
        trace!(path = %glyph.write_plan(), "skipping null write");
        return Ok(());
    }

    put(destination, glyph.write_plan().steps(), value)
}

/// Writes the glyph's reset value into `destination` along its reset plan.
///
/// No translation is applied and null reset values are written as is.
///
/// # Errors
///
/// See [`write`].
///
/// # Panics
///
/// See [`write`].
pub fn write_reset<M: Mapping>(destination: &mut M, glyph: &ResettableGlyph<M::Node>) -> Result<()> {
    debug!(path = %glyph.reset_plan(), "writing reset value");
    put(
        destination,
        glyph.reset_plan().steps(),
        glyph.reset_value().clone(),
    )
}

// Consumes one step per level.
fn put<M: Mapping>(destination: &mut M, steps: &[Step], value: M::Node) -> Result<()> {
    // plans are never empty
    let Some((step, rest)) = steps.split_first() else {
        return Ok(());
    };
    let segment = step.segment();

    if step.is_last() {
        if let Some(tag) = step.tag() {
            put_tag(destination, segment, tag);
        }
        destination.insert(segment.to_owned(), value);
        return Ok(());
    }

    if destination.get(segment).is_none_or(Node::is_null) {
        destination.insert(segment.to_owned(), M::Node::from_map(M::default()));
        if let Some(tag) = step.tag() {
            put_tag(destination, segment, tag);
        }
    }

    let Some(child) = destination.get_mut(segment).and_then(Node::as_map_mut) else {
        return Err(Error::NotMapping(segment.to_owned()));
    };
    put(child, rest, value)
}

fn put_tag<M: Mapping>(destination: &mut M, segment: &str, tag: &TypeTag) {
    match destination.get(tag.key()) {
        Some(existing) => {
            let existing = existing.text();
            assert!(
                existing == tag.value(),
                "conflicting type tag for `{segment}`: `{}` is `{existing}`, expected `{}`",
                tag.key(),
                tag.value(),
            );
        }
        None => {
            debug!(segment, tag = %tag, "creating type tag");
            destination.insert(tag.key().to_owned(), M::Node::from_text(tag.value().to_owned()));
        }
    }
}
