//! Declarative typed paths into nested key-value structures.
//!
//! A *glyph* describes one field of a nested mapping once: the path leading
//! to it, the type tags expected along the way, a default value and the
//! translations applied when reading or writing it. The same glyph is then
//! applied to any number of mappings.
//!
//! - [`ReadGlyph`] reads a field with [`read`], [`read_with`] and [`contains`].
//! - [`WriteGlyph`] also writes it back with [`write`], creating missing
//!   levels.
//! - [`ResettableGlyph`] also writes a reset signal with [`write_reset`].
//!
//! Paths are written with levels joined by `>`; type tags are `key:value`
//! pairs, one per level, joined the same way. Both can also be given as
//! explicit lists. See [`plan`] for the details.
//!
//! # Example
//!
//! ```
//! use glyphs::{Compound, Error, ReadGlyph, Value, contains, read};
//!
//! let mut inner = Compound::new();
//! inner.insert("kind".into(), "Entity".into());
//! inner.insert("b".into(), 1.into());
//! let mut doc = Compound::new();
//! doc.insert("a".into(), inner.into());
//!
//! let entity_b = ReadGlyph::<Value>::builder("a>b")
//!     .types(">kind:Entity")
//!     .build()
//!     .unwrap();
//! assert_eq!(read(&doc, &entity_b).unwrap(), Value::Int(1));
//!
//! let other_b = ReadGlyph::<Value>::builder("a>b")
//!     .types(">kind:Other")
//!     .build()
//!     .unwrap();
//! assert!(!contains(&doc, &other_b));
//! assert_eq!(read(&doc, &other_b), Err(Error::TypeMismatch("b".into())));
//! ```
//!
//! # Nested structures
//!
//! Glyphs are generic over the [`Node`] and [`Mapping`] traits. This crate
//! implements them for its own [`Value`] and, with the `json` feature, for
//! `serde_json::Value`.
//!
//! # Features
//!
//! - `serde` (default): `Serialize` and `Deserialize` for [`Value`]
//! - `json` (default): traversal over `serde_json::Value` documents

pub mod coerce;
mod error;
mod glyph;
#[cfg(feature = "json")]
mod json;
mod kind;
mod node;
pub mod plan;
mod traverse;
mod value;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use error::*;
pub use glyph::*;
pub use kind::*;
pub use node::*;
pub use plan::{KEY_VALUE_SEPARATOR, NAME_SPACE_SEPARATOR, PathSpec, Plan, Step, TypeSpec, TypeTag};
pub use traverse::*;
pub use value::*;
