//! Object fields mapping names to strings: `bin`, `scripts`, `directories` and `engines`.

use serde_json::{Map, Value};

use super::super::result::ValidationResult;
use super::common::{is_blank, property_label, value_type};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// How to describe the keys and values of a string map in messages.
struct MapWording {
    /// What each value should be, e.g. "a script command".
    value: &'static str,

    /// What each key should be, e.g. "a script name".
    key: &'static str,
}

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const BIN: MapWording = MapWording {
    value: "a relative path",
    key: "a valid command name",
};

const SCRIPTS: MapWording = MapWording {
    value: "a script command",
    key: "a script name",
};

const DIRECTORIES: MapWording = MapWording {
    value: "a path to a directory",
    key: "a path to a directory",
};

const ENGINES: MapWording = MapWording {
    value: "a semver range",
    key: "a runtime or package manager",
};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the `bin` field: a path to one executable, or command names mapped to paths.
pub fn validate_bin(value: &Value) -> ValidationResult {
    match value {
        Value::String(path) if is_blank(path) => {
            format!("the value is empty, but should be {}", BIN.value).into()
        }
        Value::String(_) => ValidationResult::default(),
        Value::Object(commands) => validate_string_map(commands, &BIN),
        Value::Null => "the value is `null`, but should be a `string` or an `object`".into(),
        other => format!(
            "the type should be `string` or `object`, not `{}`",
            value_type(other)
        )
        .into(),
    }
}

/// Validate the `scripts` field.
pub fn validate_scripts(value: &Value) -> ValidationResult {
    validate_object_map(value, &SCRIPTS)
}

/// Validate the `directories` field.
pub fn validate_directories(value: &Value) -> ValidationResult {
    validate_object_map(value, &DIRECTORIES)
}

/// Validate the `engines` field. Values are free-form, so only emptiness is checked.
pub fn validate_engines(value: &Value) -> ValidationResult {
    validate_object_map(value, &ENGINES)
}

fn validate_object_map(value: &Value, wording: &MapWording) -> ValidationResult {
    match value {
        Value::Object(map) => validate_string_map(map, wording),
        Value::Null => "the value is `null`, but should be an `object`".into(),
        other => format!("the type should be `object`, not `{}`", value_type(other)).into(),
    }
}

/// One child per property. A property can carry both a value issue and a blank-key issue.
fn validate_string_map(map: &Map<String, Value>, wording: &MapWording) -> ValidationResult {
    let mut result = ValidationResult::default();
    for (index, (key, value)) in map.iter().enumerate() {
        let label = property_label(key, index);
        let mut child = ValidationResult::default();
        match value {
            Value::String(s) if is_blank(s) => child.add_issue(format!(
                "the value of property {label} is empty, but should be {}",
                wording.value
            )),
            Value::String(_) => {}
            _ => child.add_issue(format!("the value of property {label} should be a string")),
        }
        if is_blank(key) {
            child.add_issue(format!(
                "property {label} has an empty key, but should be {}",
                wording.key
            ));
        }
        result.add_child_result(index, child);
    }
    result
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
