//! Tests for [`RedialError`] display and variant classification.

use redial::{Codec, RedialError, Result};

#[test]
fn test_error_display() {
    let err = RedialError::NotFound("r42".to_string());
    assert!(err.to_string().contains("r42"));
}

#[test]
fn duplicate_id_display_names_the_id() {
    let err = RedialError::DuplicateId("r7".to_string());
    assert!(err.to_string().contains("r7"));
}

#[test]
fn decode_error_display_includes_the_offending_text() {
    let err = Codec::new().parse("{broken").unwrap_err();
    assert!(err.to_string().contains("{broken"));
}

#[test]
fn store_errors_are_distinct_from_codec_errors() {
    // A caller deciding "overwrite vs. abort" matches on the variant.
    fn is_caller_correctable(err: &RedialError) -> bool {
        matches!(
            err,
            RedialError::DuplicateId(_) | RedialError::NotFound(_)
        )
    }

    assert!(is_caller_correctable(&RedialError::DuplicateId("x".into())));
    let codec_err = Codec::new().parse("nope!").unwrap_err();
    assert!(!is_caller_correctable(&codec_err));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(RedialError::InvalidInput("example".to_string()))
    }
    assert!(returns_error().is_err());
}
