//! Small conversions used as glyph translations.
//!
//! [`stringify`] is the default write translation of a
//! [`WriteGlyph`](crate::WriteGlyph). [`boolean`] is meant as a read
//! translation for fields storing flags as text.

use crate::Node;

/// Text literals read as `true`, compared case-insensitively.
pub const TRUE_VALUES: [&str; 2] = ["true", "t"];

/// Returns `true` if `text` is one of [`TRUE_VALUES`], ignoring case.
///
/// ```
/// use glyphs::coerce::to_boolean;
///
/// assert!(to_boolean("T"));
/// assert!(to_boolean("True"));
/// assert!(!to_boolean("yes"));
/// ```
#[inline]
pub fn to_boolean(text: &str) -> bool {
    TRUE_VALUES
        .iter()
        .any(|truthy| truthy.eq_ignore_ascii_case(text))
}

/// Converts a node into its text form. Null and text pass through unchanged.
#[inline]
pub fn stringify<V: Node>(value: V) -> V {
    if value.is_null() {
        return value;
    }
    let text = value.text().into_owned();
    V::from_text(text)
}

/// Converts a node into a boolean node. Null and booleans pass through
/// unchanged; anything else is true only if its text form is in
/// [`TRUE_VALUES`].
#[inline]
pub fn boolean<V: Node>(value: V) -> V {
    if value.is_null() || value.as_bool().is_some() {
        return value;
    }
    let truthy = to_boolean(&value.text());
    V::from_bool(truthy)
}
