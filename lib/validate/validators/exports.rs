//! The `exports` field: an entry point path, or a tree of export conditions whose leaves
//! are entry point paths.

use serde_json::{Map, Value};

use super::super::result::ValidationResult;
use super::common::{display_type, is_blank};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the `exports` field.
pub fn validate_exports(value: &Value) -> ValidationResult {
    match value {
        Value::String(path) if is_blank(path) => {
            "the value is empty, but should be an entry point path".into()
        }
        Value::String(_) => ValidationResult::default(),
        Value::Object(conditions) => {
            let mut result = ValidationResult::default();
            add_conditions(&mut result, conditions);
            result
        }
        Value::Null => "the value is `null`, but should be an `object` or `string`".into(),
        other => format!(
            "the type should be `object` or `string`, not `{}`",
            display_type(other)
        )
        .into(),
    }
}

/// Adds one child per property of a conditions object. Nested objects recurse.
fn add_conditions(result: &mut ValidationResult, conditions: &Map<String, Value>) {
    for (index, (key, condition)) in conditions.iter().enumerate() {
        let trimmed = key.trim();
        let mut child = ValidationResult::default();

        let label = if trimmed.is_empty() {
            child.add_issue(format!(
                "property {index} has an empty key, but should be an export condition"
            ));
            format!("property {index}")
        } else {
            format!("\"{trimmed}\"")
        };

        match condition {
            Value::String(path) if is_blank(path) => child.add_issue(format!(
                "the value of {label} is empty, but should be an entry point path"
            )),
            Value::String(_) => {}
            Value::Object(nested) => add_conditions(&mut child, nested),
            _ => child.add_issue(format!(
                "the value of {label} should be either an entry point path or an object of export conditions"
            )),
        }

        result.add_child_result(index, child);
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
    fn test_string_exports() {
        assert!(validate_exports(&json!("./index.js")).is_empty());
        assert_eq!(
            validate_exports(&json!(" ")).error_messages(),
            vec!["the value is empty, but should be an entry point path"]
        );
    }

    #[test]
    fn test_nested_conditions() {
        let result = validate_exports(&json!({
            ".": {
                "types": "./index.d.ts",
                "import": {"node": "./index.mjs", "default": ""},
                "require": "./index.cjs"
            },
            "./package.json": "./package.json"
        }));
        assert_eq!(
            result.error_messages(),
            vec!["the value of \"default\" is empty, but should be an entry point path"]
        );

        let dot = &result.child_results()[0];
        assert_eq!(dot.child_results().len(), 3);
        let import = &dot.child_results()[1];
        assert_eq!(import.index(), 1);
        assert_eq!(import.child_results()[1].issues().len(), 1);
    }

    #[test]
    fn test_invalid_condition_values() {
        let result = validate_exports(&json!({
            "import": 5,
            "": "./x.js",
            "  ": null
        }));
        assert_eq!(
            result.error_messages(),
            vec![
                "the value of \"import\" should be either an entry point path or an object of export conditions",
                "property 1 has an empty key, but should be an export condition",
                "property 2 has an empty key, but should be an export condition",
                "the value of property 2 should be either an entry point path or an object of export conditions",
            ]
        );
    }

    #[test]
    fn test_empty_key_reported_before_value() {
        assert_eq!(
            validate_exports(&json!({"": 5})).error_messages(),
            vec![
                "property 0 has an empty key, but should be an export condition",
                "the value of property 0 should be either an entry point path or an object of export conditions",
            ]
        );

        let result = validate_exports(&json!({"": {"import": ""}}));
        assert_eq!(
            result.error_messages(),
            vec![
                "property 0 has an empty key, but should be an export condition",
                "the value of \"import\" is empty, but should be an entry point path",
            ]
        );
        assert_eq!(result.child_results()[0].issues().len(), 1);
        assert_eq!(result.child_results()[0].child_results().len(), 1);
    }

    #[test]
    fn test_root_types() {
        assert_eq!(
            validate_exports(&json!(["./index.js"])).error_messages(),
            vec!["the type should be `object` or `string`, not `Array`"]
        );
        assert_eq!(
            validate_exports(&json!(null)).error_messages(),
            vec!["the value is `null`, but should be an `object` or `string`"]
        );
        assert_eq!(
            validate_exports(&json!(true)).error_messages(),
            vec!["the type should be `object` or `string`, not `boolean`"]
        );
    }
}
