use glyphs::{
    Compound, Plan, ReadGlyph, ReadOptions, Value, WriteGlyph, contains, read, read_with, write,
};

// Input layout: path, then type specification, then a JSON document, one per
// line. Missing lines are treated as empty.
fn split(data: &[u8]) -> Option<(&str, &str, &str)> {
    let text = std::str::from_utf8(data).ok()?;
    let mut lines = text.splitn(3, '\n');
    let path = lines.next().unwrap_or_default();
    let types = lines.next().unwrap_or_default();
    let doc = lines.next().unwrap_or_default();
    Some((path, types, doc))
}

pub fn test_compile(data: &[u8]) {
    let Some((path, types, _)) = split(data) else {
        return;
    };

    if let Ok(plan) = Plan::compile(path, Some(types.into())) {
        assert!(plan.len() > 0);
        assert!(plan.last().is_last());
        assert_eq!(plan.iter().filter(|step| step.is_last()).count(), 1);
    }

    if !path.is_empty() {
        let segments: Vec<&str> = path.split('>').collect();
        assert_eq!(Plan::compile(path, None), Plan::compile(segments, None));
    }
}

pub fn test_traverse(data: &[u8]) {
    let Some((path, types, doc)) = split(data) else {
        return;
    };
    let Ok(mut source) = serde_json::from_str::<Compound>(doc) else {
        return;
    };
    let Ok(glyph) = ReadGlyph::<Value>::builder(path)
        .types(types)
        .default_value("default")
        .build()
    else {
        return;
    };

    let lenient = read(&source, &glyph);
    let strict = read_with(&source, &glyph, ReadOptions::new().strict());
    if contains(&source, &glyph) {
        assert!(lenient.is_ok());
        assert_eq!(lenient, strict);
    }

    // untyped writes never hit a tag conflict
    let Ok(writer) = WriteGlyph::<Value>::builder(path)
        .write_path(path)
        .build()
    else {
        return;
    };
    if write(&mut source, &writer, Value::Int(1)).is_ok() {
        assert_eq!(read(&source, &writer), Ok(Value::from("1")));
    }
}

pub fn test(data: &[u8]) {
    test_compile(data);
    test_traverse(data);
}
