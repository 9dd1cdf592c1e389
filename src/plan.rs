//! Compiles path and type specifications into traversal plans.
//!
//! A path names one key per level of nesting. It is written either as a
//! single string with levels joined by [`NAME_SPACE_SEPARATOR`], or as an
//! explicit list of segments. Both forms compile to the same [`Plan`].
//!
//! A type specification optionally attaches a [`TypeTag`] to each level. A
//! tag `key:value` at a level requires the mapping holding that level's
//! segment to also hold `key`, with a text form equal to `value`:
//!
//! ```
//! use glyphs::{Plan, TypeSpec};
//!
//! // {"sub_path1": {"sub_path2": {"sub_path3": 1, "xsi": "Entity"}}}
//! let plan = Plan::compile(
//!     "sub_path1>sub_path2>sub_path3",
//!     Some(TypeSpec::from(">>xsi:Entity")),
//! )
//! .unwrap();
//!
//! let last = plan.last();
//! assert!(last.is_last());
//! assert_eq!(last.segment(), "sub_path3");
//! assert_eq!(last.tag().map(|t| t.key()), Some("xsi"));
//! ```

use std::fmt;

use crate::{Error, Result};

/// Token separating the levels of a joined path or type specification.
pub const NAME_SPACE_SEPARATOR: char = '>';

/// Token separating the key from the value in a type tag.
pub const KEY_VALUE_SEPARATOR: char = ':';

/// A path specification, before compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Levels joined by [`NAME_SPACE_SEPARATOR`].
    Joined(String),
    /// One entry per level.
    Segments(Vec<String>),
}

impl PathSpec {
    fn into_segments(self) -> Result<Vec<String>> {
        let segments: Vec<String> = match self {
            PathSpec::Joined(path) => {
                if path.is_empty() {
                    return Err(Error::EmptyPath);
                }
                path.split(NAME_SPACE_SEPARATOR).map(str::to_owned).collect()
            }
            PathSpec::Segments(segments) => segments,
        };

        if segments.is_empty() {
            return Err(Error::EmptyPath);
        }
        if let Some(index) = segments.iter().position(String::is_empty) {
            return Err(Error::EmptySegment { index });
        }
        Ok(segments)
    }
}

impl From<&str> for PathSpec {
    #[inline]
    fn from(value: &str) -> Self {
        PathSpec::Joined(value.to_owned())
    }
}

impl From<String> for PathSpec {
    #[inline]
    fn from(value: String) -> Self {
        PathSpec::Joined(value)
    }
}

impl From<&String> for PathSpec {
    #[inline]
    fn from(value: &String) -> Self {
        PathSpec::Joined(value.clone())
    }
}

impl From<Vec<String>> for PathSpec {
    #[inline]
    fn from(value: Vec<String>) -> Self {
        PathSpec::Segments(value)
    }
}

impl From<Vec<&str>> for PathSpec {
    #[inline]
    fn from(value: Vec<&str>) -> Self {
        PathSpec::Segments(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for PathSpec {
    #[inline]
    fn from(value: &[&str]) -> Self {
        PathSpec::Segments(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    #[inline]
    fn from(value: [&str; N]) -> Self {
        PathSpec::Segments(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// A type specification, before compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    /// Per-level tags joined by [`NAME_SPACE_SEPARATOR`]; an empty level has
    /// no tag.
    Joined(String),
    /// One entry per level; `None` levels have no tag.
    Levels(Vec<Option<String>>),
}

impl TypeSpec {
    fn into_levels(self) -> Vec<Option<String>> {
        match self {
            TypeSpec::Joined(types) => types
                .split(NAME_SPACE_SEPARATOR)
                .map(|level| (!level.is_empty()).then(|| level.to_owned()))
                .collect(),
            TypeSpec::Levels(levels) => levels,
        }
    }
}

impl From<&str> for TypeSpec {
    #[inline]
    fn from(value: &str) -> Self {
        TypeSpec::Joined(value.to_owned())
    }
}

impl From<String> for TypeSpec {
    #[inline]
    fn from(value: String) -> Self {
        TypeSpec::Joined(value)
    }
}

impl From<Vec<Option<String>>> for TypeSpec {
    #[inline]
    fn from(value: Vec<Option<String>>) -> Self {
        TypeSpec::Levels(value)
    }
}

impl From<Vec<Option<&str>>> for TypeSpec {
    #[inline]
    fn from(value: Vec<Option<&str>>) -> Self {
        TypeSpec::Levels(value.into_iter().map(|l| l.map(str::to_owned)).collect())
    }
}

impl From<&[Option<&str>]> for TypeSpec {
    #[inline]
    fn from(value: &[Option<&str>]) -> Self {
        TypeSpec::Levels(value.iter().map(|l| l.map(str::to_owned)).collect())
    }
}

impl<const N: usize> From<[Option<&str>; N]> for TypeSpec {
    #[inline]
    fn from(value: [Option<&str>; N]) -> Self {
        TypeSpec::Levels(value.iter().map(|l| l.map(str::to_owned)).collect())
    }
}

/// A `key:value` requirement attached to one level of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag {
    key: Box<str>,
    value: Box<str>,
}

impl TypeTag {
    /// Parses a `key:value` tag.
    ///
    /// The key must be non-empty and the tag must hold exactly one
    /// [`KEY_VALUE_SEPARATOR`].
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) if !key.is_empty() && !value.contains(KEY_VALUE_SEPARATOR) => {
                Ok(Self {
                    key: key.into(),
                    value: value.into(),
                })
            }
            _ => Err(Error::MalformedTag(tag.to_owned())),
        }
    }

    /// The sibling key holding the type information.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The expected text form of the sibling.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_VALUE_SEPARATOR}{}", self.key, self.value)
    }
}

/// One level of a [`Plan`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    is_last: bool,
    segment: Box<str>,
    tag: Option<TypeTag>,
}

impl Step {
    /// Returns `true` only for the final step of a plan.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    #[inline]
    pub fn tag(&self) -> Option<&TypeTag> {
        self.tag.as_ref()
    }
}

/// A compiled, reusable traversal plan.
///
/// A plan is never empty and only its final step reports
/// [`is_last`](Step::is_last).
#[expect(
    clippy::len_without_is_empty,
    reason = "a plan always holds at least one step"
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plan {
    steps: Box<[Step]>,
    typed: bool,
}

impl Plan {
    /// Compiles a path and an optional type specification.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyPath`] if the path has no segment
    /// - [`Error::EmptySegment`] if any segment is empty
    /// - [`Error::TypesTooLong`] if the types describe more levels than the path
    /// - [`Error::MalformedTag`] if a tag is not `key:value`
    pub fn compile(path: impl Into<PathSpec>, types: Option<TypeSpec>) -> Result<Self> {
        let segments = path.into().into_segments()?;
        let levels = segments.len();

        let mut tags: Vec<Option<TypeTag>> = match types {
            Some(types) => {
                let types = types.into_levels();
                if types.len() > levels {
                    return Err(Error::TypesTooLong {
                        types: types.len(),
                        levels,
                    });
                }
                types
                    .iter()
                    .map(|level| level.as_deref().map(TypeTag::parse).transpose())
                    .collect::<Result<_>>()?
            }
            None => Vec::new(),
        };

        // all-untagged types are the same as no types at all
        let typed = tags.iter().any(Option::is_some);
        if !typed {
            tags.clear();
        }
        tags.resize(levels, None);

        let max_index = levels - 1;
        let steps = segments
            .into_iter()
            .zip(tags)
            .enumerate()
            .map(|(index, (segment, tag))| Step {
                is_last: index == max_index,
                segment: segment.into_boxed_str(),
                tag,
            })
            .collect();

        Ok(Self { steps, typed })
    }

    /// Returns the number of levels in the plan.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Returns the final step.
    #[inline]
    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Returns `false` when no level carries a type tag.
    #[inline]
    pub fn is_typed(&self) -> bool {
        self.typed
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "{NAME_SPACE_SEPARATOR}")?;
            }
            f.write_str(&step.segment)?;
        }
        if self.typed {
            f.write_str(" [")?;
            for (i, step) in self.steps.iter().enumerate() {
                if i > 0 {
                    write!(f, "{NAME_SPACE_SEPARATOR}")?;
                }
                if let Some(tag) = &step.tag {
                    write!(f, "{tag}")?;
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
