//! Tests for the Value type and its Node implementation

#![cfg(feature = "serde")]

mod common;

use common::value;
use glyphs::{Compound, Mapping, Node, Value};
use serde_json::json;

#[test]
fn test_value_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Int(-12).to_string(), "-12");
    assert_eq!(Value::Float(1.5).to_string(), "1.5");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::Float(-0.0).to_string(), "-0.0");
    assert_eq!(Value::from("plain").to_string(), "plain");
}

#[test]
fn test_nested_display_quotes_strings() {
    let list = value(json!(["a", 1, null]));
    assert_eq!(list.to_string(), r#"["a", 1, null]"#);

    let compound = value(json!({"k": "v", "n": [true]}));
    assert_eq!(compound.to_string(), r#"{"k": "v", "n": [true]}"#);
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::Int(3).as_i64(), Some(3));
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
    assert_eq!(Value::Float(0.5).as_i64(), None);
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Null.as_str(), None);

    let list = value(json!([1, 2]));
    assert_eq!(list.as_list(), Some(&[Value::Int(1), Value::Int(2)][..]));
    assert!(list.as_compound().is_none());
}

#[test]
fn test_value_get() {
    let nested = value(json!({"a": {"b": 1}}));
    assert_eq!(
        nested.get("a").and_then(|a| a.get("b")),
        Some(&Value::Int(1))
    );
    assert_eq!(nested.get("missing"), None);
    assert_eq!(Value::Int(1).get("a"), None);
}

#[test]
fn test_value_take() {
    let mut slot = Value::from("x");
    assert_eq!(slot.take(), Value::from("x"));
    assert!(slot.is_null());
}

#[test]
fn test_value_from() {
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from(-1i8), Value::Int(-1));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(2)), Value::Int(2));
    assert_eq!(
        Value::from(vec!["a", "b"]),
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
    assert_eq!(Value::from(Compound::new()), Value::Compound(Compound::new()));
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn test_value_from_iter() {
    let collected: Value = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(collected, value(json!({"a": 1, "b": 2})));
}

#[test]
fn test_node_text() {
    assert_eq!(Value::from("Entity").text(), "Entity");
    assert_eq!(Value::Int(2).text(), "2");
    assert_eq!(Value::Float(2.0).text(), "2.0");
    assert_eq!(Value::Bool(true).text(), "true");
    assert_eq!(Value::Null.text(), "null");
}

#[test]
fn test_node_composite() {
    assert!(value(json!([])).is_composite());
    assert!(value(json!({})).is_composite());
    assert!(!Value::from("x").is_composite());
    assert!(!Value::Null.is_composite());
}

#[test]
fn test_node_map_access() {
    let mut node = Value::from_map(Compound::new());
    node.as_map_mut()
        .unwrap()
        .insert("k".to_owned(), Value::from_text("v".to_owned()));

    let map = node.as_map().unwrap();
    assert!(Mapping::contains_key(map, "k"));
    assert_eq!(Mapping::get(map, "k"), Some(&Value::from("v")));
    assert_eq!(<Value as Node>::null(), Value::Null);
    assert_eq!(Value::from_bool(false), Value::Bool(false));
}
