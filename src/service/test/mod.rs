use crate::error::AppError;


#[test]
fn accepts_non_empty_value() {
    assert!(super::require_non_empty("name", "Porto").is_ok());
}

#[test]
fn rejects_empty_value() {
    let result = super::require_non_empty("name", "");

    match result {
        Err(AppError::Validation(message)) => assert!(message.contains("name")),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn rejects_whitespace_only_value() {
    assert!(super::require_non_empty("name", "   ").is_err());
}
