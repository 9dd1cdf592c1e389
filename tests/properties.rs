//! Property tests for plans and traversal

use glyphs::{
    Compound, Plan, ReadGlyph, ReadOptions, Value, WriteGlyph, coerce, contains, read, read_with,
    write,
};
use proptest::prelude::*;

fn arb_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z_]{1,6}", 1..5)
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[ -~]{0,8}".prop_map(Value::String),
    ]
}

// small key alphabet so random paths hit random documents
fn arb_key() -> impl Strategy<Value = String> {
    "[abk]"
}

fn arb_tree() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::List),
            prop::collection::btree_map(arb_key(), inner, 0..4).prop_map(Value::Compound),
        ]
    })
}

fn arb_doc() -> impl Strategy<Value = Compound> {
    prop::collection::btree_map(arb_key(), arb_tree(), 0..4)
}

fn arb_glyph() -> impl Strategy<Value = ReadGlyph> {
    (
        prop::collection::vec(arb_key(), 1..4),
        prop::option::of("k:[a-z]{0,1}"),
    )
        .prop_map(|(path, tag)| {
            let types = vec![None, tag];
            ReadGlyph::builder(path.clone())
                .types(types.into_iter().take(path.len()).collect::<Vec<_>>())
                .default_value("default")
                .build()
                .unwrap()
        })
}

proptest! {
    #[test]
    fn joined_and_segment_paths_agree(segments in arb_segments()) {
        let joined = Plan::compile(segments.join(">"), None).unwrap();
        let split = Plan::compile(segments, None).unwrap();
        prop_assert_eq!(joined, split);
    }

    #[test]
    fn contained_paths_read_alike(source in arb_doc(), glyph in arb_glyph()) {
        if contains(&source, &glyph) {
            let lenient = read(&source, &glyph);
            let strict = read_with(&source, &glyph, ReadOptions::new().strict());
            prop_assert!(lenient.is_ok());
            prop_assert_eq!(lenient, strict);
        }
    }

    #[test]
    fn writes_are_idempotent(
        source in arb_doc(),
        path in prop::collection::vec(arb_key(), 1..4),
        value in arb_scalar(),
    ) {
        let glyph = WriteGlyph::builder(path).build().unwrap();
        let mut once = source;
        if write(&mut once, &glyph, value.clone()).is_ok() {
            let mut twice = once.clone();
            write(&mut twice, &glyph, value).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn written_values_read_back_stringified(
        path in arb_segments(),
        types in prop::option::of("Kind:[A-Z][a-z]{0,5}"),
        value in arb_scalar(),
    ) {
        let builder = WriteGlyph::builder(path);
        let glyph = match types {
            Some(types) => builder.types(types),
            None => builder,
        }
        .build()
        .unwrap();

        let mut destination = Compound::new();
        write(&mut destination, &glyph, value.clone()).unwrap();

        prop_assert!(contains(&destination, &glyph));
        prop_assert_eq!(read(&destination, &glyph).unwrap(), coerce::stringify(value));
    }

    #[test]
    fn stringified_floats_parse_back(value in -1.0e12..1.0e12f64) {
        let text = coerce::stringify(Value::Float(value));
        let parsed: f64 = text.as_str().unwrap().parse().unwrap();
        prop_assert_eq!(parsed, value);
        prop_assert!(text.as_str().unwrap().contains(['.', 'e']));
    }
}
