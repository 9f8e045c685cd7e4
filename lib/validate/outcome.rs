//! Options and top-level outcome of validating a manifest.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Manifest dialect whose field table is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Dialect {
    /// npm `package.json`.
    #[default]
    #[serde(rename = "npm")]
    #[value(name = "npm")]
    Npm,

    /// CommonJS Packages 1.0.
    #[serde(rename = "commonjs_1.0")]
    #[value(name = "commonjs_1.0")]
    CommonJs10,

    /// CommonJS Packages 1.1.
    #[serde(rename = "commonjs_1.1")]
    #[value(name = "commonjs_1.1")]
    CommonJs11,
}

/// What to include in a [`ValidationOutput`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Report missing warning-tier fields.
    pub warnings: bool,

    /// Report missing recommended-tier fields.
    pub recommendations: bool,

    /// Field table to validate against.
    #[serde(rename = "spec")]
    pub dialect: Dialect,
}

/// An error attributed to a manifest field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field the error belongs to.
    pub field: String,

    /// What is wrong with it.
    pub message: String,
}

/// Reason the input could not be validated at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Critical {
    /// Serialized as a plain string.
    Message(String),

    /// Serialized as `{label: detail}`.
    Labeled { label: String, detail: String },
}

/// Result of validating a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutput {
    /// True when there are no errors and no critical failure.
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,

    /// Set only when the input is not an object. No field checks ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<Critical>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ValidationOutput {
    /// An invalid outcome carrying only a critical failure.
    pub fn critical(critical: Critical) -> Self {
        Self {
            valid: false,
            critical: Some(critical),
            ..Self::default()
        }
    }

    /// Error messages, without field names.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Critical {
    pub fn labeled(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Labeled {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            warnings: true,
            recommendations: true,
            dialect: Dialect::Npm,
        }
    }
}

impl Serialize for Critical {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Critical::Message(message) => serializer.serialize_str(message),
            Critical::Labeled { label, detail } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(label, detail)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for Critical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Critical::Message(message) => write!(f, "{message}"),
            Critical::Labeled { label, detail } => write!(f, "{label}: {detail}"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Npm => "npm",
            Dialect::CommonJs10 => "commonjs_1.0",
            Dialect::CommonJs11 => "commonjs_1.1",
        };
        write!(f, "{name}")
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_defaults() {
        let options: ValidationOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, ValidationOptions::default());
        assert!(options.warnings);
        assert!(options.recommendations);

        let options: ValidationOptions =
            serde_json::from_value(json!({"warnings": false, "spec": "commonjs_1.1"})).unwrap();
        assert!(!options.warnings);
        assert!(options.recommendations);
        assert_eq!(options.dialect, Dialect::CommonJs11);
    }

    #[test]
    fn test_output_omits_absent_keys() {
        let output = ValidationOutput {
            valid: true,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"valid": true})
        );

        let output = ValidationOutput {
            valid: false,
            errors: Some(vec![FieldError::new("version", "Missing required field: version")]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "valid": false,
                "errors": [{"field": "version", "message": "Missing required field: version"}]
            })
        );
    }

    #[test]
    fn test_critical_serialization() {
        let output = ValidationOutput::critical(Critical::Message("Invalid JSON - oops".into()));
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"valid": false, "critical": "Invalid JSON - oops"})
        );

        let critical = Critical::labeled("Empty JSON", "No data to parse");
        assert_eq!(
            serde_json::to_value(&critical).unwrap(),
            json!({"Empty JSON": "No data to parse"})
        );
        assert_eq!(critical.to_string(), "Empty JSON: No data to parse");
    }

    #[test]
    fn test_dialect_names() {
        assert_eq!(Dialect::CommonJs10.to_string(), "commonjs_1.0");
        assert_eq!(
            serde_json::from_value::<Dialect>(json!("npm")).unwrap(),
            Dialect::Npm
        );
    }
}
