#![cfg(feature = "serde")]

mod common;

use common::doc;
use glyphs::{Compound, ReadGlyph, Value, WriteGlyph, read, write};
use serde::Deserialize;
use serde_json::json;

#[test]
fn test_deserialize_scalars() {
    assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Null);
    assert_eq!(serde_json::from_str::<Value>("true").unwrap(), Value::Bool(true));
    assert_eq!(serde_json::from_str::<Value>("-3").unwrap(), Value::Int(-3));
    assert_eq!(serde_json::from_str::<Value>("0.5").unwrap(), Value::Float(0.5));
    assert_eq!(
        serde_json::from_str::<Value>(r#""text""#).unwrap(),
        Value::from("text")
    );
}

#[test]
fn test_deserialize_large_unsigned_as_float() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value, Value::Float(u64::MAX as f64));

    let value: Value = serde_json::from_str("9223372036854775807").unwrap();
    assert_eq!(value, Value::Int(i64::MAX));
}

#[test]
fn test_deserialize_compound() {
    let parsed: Compound =
        serde_json::from_str(r#"{"a": {"kind": "Entity", "b": [1, 2]}}"#).unwrap();
    assert_eq!(parsed, doc(json!({"a": {"kind": "Entity", "b": [1, 2]}})));
}

#[test]
fn test_deserialize_optional_field() {
    #[derive(Deserialize)]
    struct Envelope {
        body: Option<Value>,
    }

    let envelope: Envelope = serde_json::from_str(r#"{"body": {"k": 1}}"#).unwrap();
    assert_eq!(envelope.body, Some(Value::from_iter([("k", 1)])));

    let envelope: Envelope = serde_json::from_str(r#"{"body": null}"#).unwrap();
    assert_eq!(envelope.body, None);
}

#[test]
fn test_roundtrip_through_glyphs() {
    let mut parsed: Compound =
        serde_json::from_str(r#"{"user": {"kind": "Person", "name": "Ada"}}"#).unwrap();

    let name = WriteGlyph::builder("user>name")
        .types(">kind:Person")
        .build()
        .unwrap();
    assert_eq!(read(&parsed, &name).unwrap(), Value::from("Ada"));

    write(&mut parsed, &name, "Grace".into()).unwrap();
    let age = ReadGlyph::builder("user>age").default_value(0).build().unwrap();
    assert_eq!(read(&parsed, &age).unwrap(), Value::Int(0));

    assert_eq!(
        serde_json::to_string(&parsed).unwrap(),
        r#"{"user":{"kind":"Person","name":"Grace"}}"#
    );
}
