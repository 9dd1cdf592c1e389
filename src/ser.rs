//! [`serde::Serialize`] for [`Value`].
//!
//! A [`Value`] serializes as the natural self-describing form of each kind:
//!
//! | Value | serde data model |
//! |-------|------------------|
//! | `Null` | unit |
//! | `Bool` | bool |
//! | `Int` | i64 |
//! | `Float` | f64 |
//! | `String` | str |
//! | `List` | seq |
//! | `Compound` | map |

use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};

use crate::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Compound(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    out.serialize_entry(key, item)?;
                }
                out.end()
            }
        }
    }
}
