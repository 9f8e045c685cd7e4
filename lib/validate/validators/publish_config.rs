//! The `publishConfig` field.
//!
//! Known properties are validated with the same rules as their top-level counterparts
//! where one exists. Package managers add their own keys, so unknown properties pass.

use serde_json::Value;

use super::super::result::ValidationResult;
use super::arrays::validate_cpu;
use super::common::{display_type, validate_boolean, validate_non_empty_string, validate_object};
use super::exports::validate_exports;
use super::fields::validate_main;
use super::maps::validate_bin;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Values accepted by `publishConfig.access`.
const VALID_ACCESS: &[&str] = &["public", "restricted"];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the `publishConfig` field. Every property gets a child, in order.
pub fn validate_publish_config(value: &Value) -> ValidationResult {
    let Value::Object(config) = value else {
        return validate_object(value);
    };

    let mut result = ValidationResult::default();
    for (index, (key, property)) in config.iter().enumerate() {
        let child = match key.as_str() {
            "access" => validate_access(property),
            "bin" => validate_bin(property),
            "cpu" => validate_cpu(property),
            "directory" => validate_non_empty_string(property, "the path to a subdirectory"),
            "exports" => validate_exports(property),
            "main" => validate_main(property),
            "provenance" => validate_boolean(property),
            "tag" => validate_non_empty_string(property, "a release tag"),
            _ => ValidationResult::default(),
        };
        result.add_child_result(index, child);
    }
    result
}

fn validate_access(value: &Value) -> ValidationResult {
    match value {
        Value::String(access) if access.trim().is_empty() => {
            "the value is empty, but should be \"public\" or \"restricted\"".into()
        }
        Value::String(access) if !VALID_ACCESS.contains(&access.as_str()) => format!(
            "the value \"{access}\" is not valid. Valid types are: {}",
            VALID_ACCESS.join(", ")
        )
        .into(),
        Value::String(_) => ValidationResult::default(),
        Value::Null => "the value is `null`, but should be a `string`".into(),
        other => format!(
            "the type should be a `string`, not `{}`",
            display_type(other)
        )
        .into(),
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
    fn test_valid_config() {
        let result = validate_publish_config(&json!({
            "access": "public",
            "bin": {"cli": "./dist/cli.js"},
            "cpu": ["x64"],
            "directory": "dist",
            "exports": {".": "./dist/index.js"},
            "main": "./dist/index.js",
            "provenance": true,
            "tag": "next",
            "registry": "https://registry.npmjs.org/"
        }));
        assert!(result.is_empty());
        assert_eq!(result.child_results().len(), 9);
    }

    #[test]
    fn test_invalid_properties() {
        let result = validate_publish_config(&json!({
            "access": "private",
            "provenance": "yes",
            "tag": "",
            "directory": null,
            "unknown": 5
        }));
        assert_eq!(
            result.error_messages(),
            vec![
                "the value \"private\" is not valid. Valid types are: public, restricted",
                "the type should be a `boolean`, not `string`",
                "the value is empty, but should be a release tag",
                "the value is `null`, but should be a `string`",
            ]
        );
        assert!(result.child_results()[4].issues().is_empty());
    }

    #[test]
    fn test_access_empty() {
        assert_eq!(
            validate_publish_config(&json!({"access": " "})).error_messages(),
            vec!["the value is empty, but should be \"public\" or \"restricted\""]
        );
    }

    #[test]
    fn test_top_level_shape() {
        assert_eq!(
            validate_publish_config(&json!(null)).error_messages(),
            vec!["the value is `null`, but should be an `object`"]
        );
        assert_eq!(
            validate_publish_config(&json!([])).error_messages(),
            vec!["the type should be `object`, not `Array`"]
        );
    }
}
