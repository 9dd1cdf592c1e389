#![cfg(feature = "serde")]

mod common;

use common::doc;
use glyphs::{Compound, Value};
use serde::Serialize;
use serde_json::json;

#[test]
fn test_serialize_scalars() {
    assert_eq!(serde_json::to_value(Value::Null).unwrap(), json!(null));
    assert_eq!(serde_json::to_value(Value::Bool(true)).unwrap(), json!(true));
    assert_eq!(serde_json::to_value(Value::Int(-7)).unwrap(), json!(-7));
    assert_eq!(serde_json::to_value(Value::Float(2.5)).unwrap(), json!(2.5));
    assert_eq!(serde_json::to_value(Value::from("x")).unwrap(), json!("x"));
}

#[test]
fn test_serialize_nested() {
    let source = doc(json!({"a": {"b": [1, "two", null]}, "c": false}));
    assert_eq!(
        serde_json::to_value(&source).unwrap(),
        json!({"a": {"b": [1, "two", null]}, "c": false})
    );
}

#[test]
fn test_serialize_keys_in_order() {
    let source = doc(json!({"b": 1, "a": 2}));
    assert_eq!(serde_json::to_string(&source).unwrap(), r#"{"a":2,"b":1}"#);
}

#[test]
fn test_serialize_inside_struct() {
    #[derive(Serialize)]
    struct Envelope {
        id: u32,
        body: Value,
    }

    let envelope = Envelope {
        id: 1,
        body: Value::from_iter([("k", "v")]),
    };
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({"id": 1, "body": {"k": "v"}})
    );
}

#[test]
fn test_serialize_empty_containers() {
    assert_eq!(
        serde_json::to_value(Value::List(Vec::new())).unwrap(),
        json!([])
    );
    assert_eq!(
        serde_json::to_value(Value::Compound(Compound::new())).unwrap(),
        json!({})
    );
}
