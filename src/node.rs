use std::borrow::Cow;

/// A value living inside a nested mapping.
///
/// The traversal engine never looks at concrete container types. Anything
/// that can tell whether it is a mapping, whether it is composite, whether it
/// is null, and how it reads as text can be walked by a glyph.
///
/// This crate implements the trait for [`Value`](crate::Value) and, with the
/// `json` feature, for [`serde_json::Value`].
pub trait Node: Clone + PartialEq + Sized + 'static {
    /// The mapping type this node nests.
    type Map: Mapping<Node = Self>;

    /// Returns the null node.
    fn null() -> Self;

    /// Returns `true` if this node is null.
    fn is_null(&self) -> bool;

    /// Returns the node as a mapping, if it is one.
    fn as_map(&self) -> Option<&Self::Map>;

    /// Returns the node as a mutable mapping, if it is one.
    fn as_map_mut(&mut self) -> Option<&mut Self::Map>;

    /// Wraps a mapping into a node.
    fn from_map(map: Self::Map) -> Self;

    /// Returns `true` for containers (mappings, lists).
    ///
    /// Composite values never satisfy a type tag.
    fn is_composite(&self) -> bool;

    /// Returns the text form of the node.
    ///
    /// Text nodes return their content unquoted.
    fn text(&self) -> Cow<'_, str>;

    /// Builds a text node.
    fn from_text(text: String) -> Self;

    /// Builds a boolean node.
    fn from_bool(value: bool) -> Self;

    /// Returns the node as a boolean, if it is one.
    fn as_bool(&self) -> Option<bool>;
}

/// Keyed access into one level of a nested structure.
pub trait Mapping: Default {
    /// The values stored in this mapping.
    type Node: Node<Map = Self>;

    /// Gets the value stored under `key`.
    fn get(&self, key: &str) -> Option<&Self::Node>;

    /// Gets the value stored under `key` mutably.
    fn get_mut(&mut self, key: &str) -> Option<&mut Self::Node>;

    /// Returns `true` if `key` is present.
    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, returning the previous value.
    fn insert(&mut self, key: String, value: Self::Node) -> Option<Self::Node>;
}
