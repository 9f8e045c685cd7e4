//! Shape checks shared by the field validators.

use serde_json::Value;

use super::super::result::ValidationResult;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// JSON type of a value as used in type-mismatch messages. Arrays are `array`.
pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Like [`value_type`], but arrays are reported as `Array`.
pub fn display_type(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "Array",
        other => value_type(other),
    }
}

/// Returns true if the string is empty once surrounding whitespace is removed.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Label for an object key in messages: the quoted trimmed key, or its position if the
/// key is blank.
pub fn property_label(key: &str, index: usize) -> String {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        index.to_string()
    } else {
        format!("\"{trimmed}\"")
    }
}

/// Checks that `value` is a non-blank string.
///
/// On success the string is handed back for further checks; otherwise the result holds
/// the single issue describing what is wrong, with `purpose` finishing the sentence
/// "the value is empty, but should be ...".
pub fn non_empty_string<'a>(value: &'a Value, purpose: &str) -> Result<&'a str, ValidationResult> {
    match value {
        Value::String(s) if is_blank(s) => Err(ValidationResult::from(format!(
            "the value is empty, but should be {purpose}"
        ))),
        Value::String(s) => Ok(s),
        Value::Null => Err("the value is `null`, but should be a `string`".into()),
        other => Err(ValidationResult::from(format!(
            "the type should be a `string`, not `{}`",
            display_type(other)
        ))),
    }
}

/// Validates a field whose only requirement is a non-blank string.
pub fn validate_non_empty_string(value: &Value, purpose: &str) -> ValidationResult {
    non_empty_string(value, purpose).err().unwrap_or_default()
}

/// Validates a field that must be a boolean.
pub fn validate_boolean(value: &Value) -> ValidationResult {
    match value {
        Value::Bool(_) => ValidationResult::default(),
        Value::Null => "the value is `null`, but should be a `boolean`".into(),
        other => format!(
            "the type should be a `boolean`, not `{}`",
            display_type(other)
        )
        .into(),
    }
}

/// Validates a field that must be an object, without looking inside it.
pub fn validate_object(value: &Value) -> ValidationResult {
    match value {
        Value::Object(_) => ValidationResult::default(),
        Value::Null => "the value is `null`, but should be an `object`".into(),
        other => format!("the type should be `object`, not `{}`", display_type(other)).into(),
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
