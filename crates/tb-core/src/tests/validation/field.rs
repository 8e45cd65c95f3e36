use crate::{CoreError, Field};

fn validation_message(result: crate::Result<()>) -> String {
    match result {
        Err(CoreError::Validation { message, .. }) => message,
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn given_empty_required_text_when_validated_then_is_required_message() {
    // Given
    let field = Field::text("Title", "").required();

    // When
    let result = field.validate();

    // Then
    assert_eq!(validation_message(result), "Title is required");
}

#[test]
fn given_whitespace_only_required_text_when_validated_then_fails() {
    let field = Field::text("Title", "   ").required();

    let result = field.validate();

    assert_eq!(validation_message(result), "Title is required");
}

#[test]
fn given_required_number_when_validated_then_always_present() {
    // Numbers render to at least one digit, zero included
    let field = Field::number("People", 0).required();

    assert!(field.validate().is_ok());
}

#[test]
fn given_short_text_when_validated_then_min_length_message() {
    // Given
    let field = Field::text("Description", "abc").required().min_length(5);

    // When
    let result = field.validate();

    // Then
    assert_eq!(
        validation_message(result),
        "Description must be at least 5 characters"
    );
}

#[test]
fn given_long_text_when_validated_then_max_length_message() {
    let field = Field::text("Title", "abcdefgh").max_length(4);

    let result = field.validate();

    assert_eq!(
        validation_message(result),
        "Title must not exceed 4 characters"
    );
}

#[test]
fn given_number_below_min_when_validated_then_min_message() {
    let field = Field::number("People", 0).required().min(1).max(10);

    let result = field.validate();

    assert_eq!(validation_message(result), "People must be at least 1");
}

#[test]
fn given_number_above_max_when_validated_then_max_message() {
    // Given
    let field = Field::number("People", 11).required().min(1).max(10);

    // When
    let result = field.validate();

    // Then
    assert_eq!(validation_message(result), "People must not exceed 10");
}

#[test]
fn given_number_within_bounds_when_validated_then_passes() {
    let field = Field::number("People", 5).required().min(1).max(10);

    assert!(field.validate().is_ok());
}

#[test]
fn given_empty_required_text_with_min_length_when_validated_then_required_wins() {
    // required is checked before the length bounds
    let field = Field::text("Description", "").required().min_length(5);

    let result = field.validate();

    assert_eq!(validation_message(result), "Description is required");
}

#[test]
fn given_numeric_bounds_on_text_when_validated_then_bounds_are_skipped() {
    // min/max are numeric constraints and do not apply to text
    let field = Field::text("Title", "ok").min(5).max(10);

    assert!(field.validate().is_ok());
}

#[test]
fn given_length_bounds_on_number_when_validated_then_bounds_are_skipped() {
    let field = Field::number("People", 12345).min_length(10).max_length(2);

    assert!(field.validate().is_ok());
}

#[test]
fn given_optional_empty_text_when_validated_then_passes() {
    let field = Field::text("Description", "");

    assert!(field.validate().is_ok());
}
