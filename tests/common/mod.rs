//! Shared helpers for building nested documents from `json!` literals.

#![allow(dead_code)]

use glyphs::{Compound, Value};
use serde_json::Value as Json;

pub fn value(json: Json) -> Value {
    serde_json::from_value(json).unwrap()
}

pub fn doc(json: Json) -> Compound {
    serde_json::from_value(json).unwrap()
}
