//! Checks a manifest against a field table and collects the outcome.

use serde_json::{Map, Value};

use super::outcome::{Critical, FieldError, ValidationOptions, ValidationOutput};
use super::spec::{FieldTypes, spec_table};
use super::validators::value_type;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A manifest to validate: raw JSON text or an already parsed value.
#[derive(Debug, Clone, Copy)]
pub enum ManifestInput<'a> {
    Text(&'a str),
    Value(&'a Value),
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validates a package manifest.
///
/// Input that is not a JSON object produces a critical outcome and no field checks run.
/// Otherwise every field in the dialect's table is checked, and all problems are
/// collected.
///
/// ```
/// use pjv::{ValidationOptions, validate};
///
/// let output = validate(r#"{"name": "a", "version": "1.0.0"}"#, &ValidationOptions::default());
/// assert!(output.valid);
/// assert!(output.errors.is_none());
/// ```
pub fn validate<'a>(
    input: impl Into<ManifestInput<'a>>,
    options: &ValidationOptions,
) -> ValidationOutput {
    let parsed;
    let manifest = match input.into() {
        ManifestInput::Text(text) => {
            if text.trim().is_empty() {
                tracing::debug!("manifest text is empty");
                return ValidationOutput::critical(Critical::labeled(
                    "Empty JSON",
                    "No data to parse",
                ));
            }
            parsed = match serde_json::from_str::<Value>(text) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!("manifest is not valid JSON: {}", e);
                    return ValidationOutput::critical(Critical::Message(format!(
                        "Invalid JSON - {e}"
                    )));
                }
            };
            match &parsed {
                Value::Object(manifest) => manifest,
                other => {
                    tracing::debug!("manifest JSON is a {}", value_type(other));
                    return ValidationOutput::critical(Critical::Message(format!(
                        "Invalid JSON - not an object (actual type: {})",
                        value_type(other)
                    )));
                }
            }
        }
        ManifestInput::Value(Value::Object(manifest)) => manifest,
        ManifestInput::Value(other) => {
            tracing::debug!("manifest value is a {}", value_type(other));
            return ValidationOutput::critical(Critical::Message(format!(
                "Invalid data - not an object (actual type: {})",
                value_type(other)
            )));
        }
    };

    validate_manifest(manifest, options)
}

/// Runs every field check of the dialect's table against a manifest object.
pub fn validate_manifest(
    manifest: &Map<String, Value>,
    options: &ValidationOptions,
) -> ValidationOutput {
    let is_private = matches!(manifest.get("private"), Some(Value::Bool(true)));
    tracing::debug!(
        "validating manifest against {} (private: {})",
        options.dialect,
        is_private
    );

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    for (name, spec) in spec_table(options.dialect, is_private) {
        let Some(value) = manifest.get(name) else {
            let satisfied_by_sibling = spec.or.is_some_and(|or| manifest.contains_key(or));
            if satisfied_by_sibling {
                continue;
            }
            if spec.required {
                errors.push(FieldError::new(name, format!("Missing required field: {name}")));
            } else if spec.warning {
                warnings.push(format!("Missing recommended field: {name}"));
            } else if spec.recommended {
                recommendations.push(format!("Missing optional field: {name}"));
            }
            continue;
        };

        tracing::trace!("checking field {}", name);

        if let Some(types) = &spec.types
            && let Some(message) = check_field_type(name, types, value)
        {
            errors.push(FieldError::new(name, message));
            continue;
        }

        if let Some(format) = spec.format {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if !format.is_match(&text) {
                errors.push(FieldError::new(
                    name,
                    format!(
                        "Value for field {name}, {text} does not match format: /{}/",
                        format.as_str()
                    ),
                ));
            }
        }

        if let Some(validator) = spec.validate {
            let result = validator.run(name, value);
            errors.extend(
                result
                    .error_messages()
                    .into_iter()
                    .map(|message| FieldError::new(name, message)),
            );
        }
    }

    tracing::debug!(
        "{} errors, {} warnings, {} recommendations",
        errors.len(),
        warnings.len(),
        recommendations.len()
    );

    ValidationOutput {
        valid: errors.is_empty(),
        errors: non_empty(errors),
        warnings: non_empty(warnings).filter(|_| options.warnings),
        recommendations: non_empty(recommendations).filter(|_| options.recommendations),
        critical: None,
    }
}

/// Returns the type-mismatch message for a value, if it has none of the declared types.
pub fn check_field_type(name: &str, types: &FieldTypes, value: &Value) -> Option<String> {
    if types.accepts(value) {
        return None;
    }
    Some(format!(
        "Type for field {name} was expected to be {}, not {}",
        types.describe(),
        value_type(value)
    ))
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl<'a> From<&'a str> for ManifestInput<'a> {
    fn from(text: &'a str) -> Self {
        ManifestInput::Text(text)
    }
}

impl<'a> From<&'a String> for ManifestInput<'a> {
    fn from(text: &'a String) -> Self {
        ManifestInput::Text(text)
    }
}

impl<'a> From<&'a Value> for ManifestInput<'a> {
    fn from(value: &'a Value) -> Self {
        ManifestInput::Value(value)
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
