use earnings_tracker_core::errors::CoreError;

// ═══════════════════════════════════════════════════════════════════
//  Display messages
// ═══════════════════════════════════════════════════════════════════

#[test]
fn validation_error_display() {
    let err = CoreError::ValidationError("series is not date-ordered".to_string());
    assert_eq!(
        err.to_string(),
        "Series validation failed: series is not date-ordered"
    );
}

#[test]
fn date_out_of_range_display() {
    let err = CoreError::DateOutOfRange("cannot subtract 18M".to_string());
    assert_eq!(
        err.to_string(),
        "Date calculation out of range: cannot subtract 18M"
    );
}

#[test]
fn serialization_display() {
    let err = CoreError::Serialization("bad value".to_string());
    assert_eq!(err.to_string(), "Serialization error: bad value");
}

#[test]
fn deserialization_display() {
    let err = CoreError::Deserialization("bad input".to_string());
    assert_eq!(err.to_string(), "Deserialization error: bad input");
}

// ═══════════════════════════════════════════════════════════════════
//  From conversions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn serde_json_error_becomes_deserialization() {
    let json_err = serde_json::from_str::<Vec<f64>>("{oops").unwrap_err();
    let err: CoreError = json_err.into();
    assert!(matches!(err, CoreError::Deserialization(_)));
    assert!(err.to_string().starts_with("Deserialization error:"));
}

#[test]
fn errors_are_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&CoreError::ValidationError("x".into()));
}
