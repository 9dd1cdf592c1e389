//! Glyph traversal over [`serde_json::Value`] documents.
//!
//! Lets a caller holding a parsed JSON document read and write it with
//! glyphs directly, without converting it to [`Value`](crate::Value) first.
//!
//! ```
//! use glyphs::{ReadGlyph, read};
//! use serde_json::json;
//!
//! let doc = json!({"a": {"kind": "Entity", "b": 1}});
//! let glyph = ReadGlyph::<serde_json::Value>::builder("a>b")
//!     .types(">kind:Entity")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(read(doc.as_object().unwrap(), &glyph).unwrap(), json!(1));
//! ```

use std::borrow::Cow;

use serde_json::{Map, Value as JsonValue};

use crate::{Mapping, Node};

impl Node for JsonValue {
    type Map = Map<String, JsonValue>;

    #[inline]
    fn null() -> Self {
        JsonValue::Null
    }

    #[inline]
    fn is_null(&self) -> bool {
        JsonValue::is_null(self)
    }

    #[inline]
    fn as_map(&self) -> Option<&Self::Map> {
        self.as_object()
    }

    #[inline]
    fn as_map_mut(&mut self) -> Option<&mut Self::Map> {
        self.as_object_mut()
    }

    #[inline]
    fn from_map(map: Self::Map) -> Self {
        JsonValue::Object(map)
    }

    #[inline]
    fn is_composite(&self) -> bool {
        self.is_object() || self.is_array()
    }

    fn text(&self) -> Cow<'_, str> {
        match self {
            JsonValue::String(value) => Cow::Borrowed(value),
            other => Cow::Owned(other.to_string()),
        }
    }

    #[inline]
    fn from_text(text: String) -> Self {
        JsonValue::String(text)
    }

    #[inline]
    fn from_bool(value: bool) -> Self {
        JsonValue::Bool(value)
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        JsonValue::as_bool(self)
    }
}

impl Mapping for Map<String, JsonValue> {
    type Node = JsonValue;

    #[inline]
    fn get(&self, key: &str) -> Option<&JsonValue> {
        Map::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        Map::get_mut(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        Map::insert(self, key, value)
    }
}
