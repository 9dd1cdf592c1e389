//! Tests for the Error type

use glyphs::Error;

#[test]
fn test_error_display_empty_path() {
    let error = Error::EmptyPath;
    assert_eq!(format!("{}", error), "path must contain at least one segment");
}

#[test]
fn test_error_display_empty_segment() {
    let error = Error::EmptySegment { index: 2 };
    assert_eq!(format!("{}", error), "path segment 2 is empty");
}

#[test]
fn test_error_display_types_too_long() {
    let error = Error::TypesTooLong { types: 3, levels: 2 };
    assert_eq!(
        format!("{}", error),
        "type specification has 3 levels but the path only has 2"
    );
}

#[test]
fn test_error_display_malformed_tag() {
    let error = Error::MalformedTag("kind".to_owned());
    assert_eq!(
        format!("{}", error),
        "malformed type tag `kind`: expected `key:value`"
    );
}

#[test]
fn test_error_display_missing_path() {
    let error = Error::MissingPath("user".to_owned());
    assert_eq!(
        format!("{}", error),
        "could not find `user` in the given mapping"
    );
}

#[test]
fn test_error_display_type_mismatch() {
    let error = Error::TypeMismatch("b".to_owned());
    assert_eq!(
        format!("{}", error),
        "type mismatch for `b` in the given mapping"
    );
}

#[test]
fn test_error_display_not_mapping() {
    let error = Error::NotMapping("a".to_owned());
    assert_eq!(
        format!("{}", error),
        "`a` holds a value that is not a mapping"
    );
}

#[test]
fn test_error_debug() {
    let error = Error::EmptyPath;
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("EmptyPath"));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();
}

#[test]
fn test_result_type() {
    let ok_result: glyphs::Result<i32> = Ok(42);
    assert_eq!(ok_result.unwrap(), 42);

    let err_result: glyphs::Result<i32> = Err(Error::EmptyPath);
    assert!(err_result.is_err());
}
