use std::{borrow::Cow, collections::BTreeMap, fmt};

use crate::{Kind, Mapping, Node};

/// One level of a nested [`Value`] structure.
pub type Compound = BTreeMap<String, Value>;

/// An owned, dynamically typed value.
///
/// This is the default node type walked by glyphs. Nested structures are
/// built from [`Value::Compound`] levels.
///
/// # Example
///
/// ```
/// use glyphs::{Compound, Kind, Value};
///
/// let mut inner = Compound::new();
/// inner.insert("kind".into(), "Entity".into());
/// inner.insert("id".into(), 7.into());
///
/// let value = Value::Compound(inner);
/// assert_eq!(value.kind(), Kind::Compound);
/// assert_eq!(value.get("id").and_then(Value::as_i64), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Compound(Compound),
}

impl Value {
    #[inline]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Compound(_) => Kind::Compound,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are widened.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(value) => Some(value),
            _ => None,
        }
    }

    /// Gets a value by key, if this is a compound.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_compound()?.get(key)
    }

    /// Takes the value out, leaving [`Value::Null`] in its place.
    #[inline]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            // whole floats keep their fraction, `2.0` not `2`
            Value::Float(value) => write!(f, "{value:?}"),
            Value::String(value) => f.write_str(value),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_nested(item, f)?;
                }
                f.write_str("]")
            }
            Value::Compound(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: ")?;
                    write_nested(item, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

// strings are quoted once they sit inside a container
fn write_nested(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::String(value) => write!(f, "{value:?}"),
        other => fmt::Display::fmt(other, f),
    }
}

impl Node for Value {
    type Map = Compound;

    #[inline]
    fn null() -> Self {
        Value::Null
    }

    #[inline]
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    #[inline]
    fn as_map(&self) -> Option<&Compound> {
        self.as_compound()
    }

    #[inline]
    fn as_map_mut(&mut self) -> Option<&mut Compound> {
        self.as_compound_mut()
    }

    #[inline]
    fn from_map(map: Compound) -> Self {
        Value::Compound(map)
    }

    #[inline]
    fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    fn text(&self) -> Cow<'_, str> {
        match self {
            Value::String(value) => Cow::Borrowed(value),
            other => Cow::Owned(other.to_string()),
        }
    }

    #[inline]
    fn from_text(text: String) -> Self {
        Value::String(text)
    }

    #[inline]
    fn from_bool(value: bool) -> Self {
        Value::Bool(value)
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }
}

impl Mapping for Compound {
    type Node = Value;

    #[inline]
    fn get(&self, key: &str) -> Option<&Value> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        BTreeMap::get_mut(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        BTreeMap::insert(self, key, value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Compound> for Value {
    #[inline]
    fn from(value: Compound) -> Self {
        Value::Compound(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Compound(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
