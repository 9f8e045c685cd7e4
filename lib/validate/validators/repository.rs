//! The `repository` field, plus the legacy url-type check used by the commonjs tables.

use serde_json::{Map, Value};

use super::super::result::ValidationResult;
use super::common::{display_type, is_blank};
use crate::formats::{REPOSITORY_SHORTHAND_FORMAT, REPOSITORY_URL_FORMAT, URL_FORMAT};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const TYPE_PURPOSE: &str = "the type of repository this is (e.g. \"git\")";

const URL_PURPOSE: &str = "the url to a repository (e.g. \"git+https://github.com/npm/cli.git\")";

const DIRECTORY_PURPOSE: &str = "the path to this package in the repository";

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the `repository` field.
///
/// Accepts a shorthand (`github:user/repo`, `user/repo`, `gist:id`, ...), a full
/// repository URL, or an object with `type`, `url` and an optional `directory`.
pub fn validate_repository(value: &Value) -> ValidationResult {
    match value {
        Value::String(repository) if is_blank(repository) => {
            "the value is empty, but should be repository shorthand string".into()
        }
        Value::String(repository)
            if REPOSITORY_SHORTHAND_FORMAT.is_match(repository)
                || REPOSITORY_URL_FORMAT.is_match(repository) =>
        {
            ValidationResult::default()
        }
        Value::String(repository) => format!(
            "the value \"{repository}\" is invalid; it should be the shorthand for a repository (e.g. \"github:npm/example\")"
        )
        .into(),
        Value::Object(repository) => validate_repository_object(repository),
        Value::Null => "the value is `null`, but should be an `object` or a `string`".into(),
        other => format!(
            "the type should be `object` or `string`, not `{}`",
            display_type(other)
        )
        .into(),
    }
}

fn validate_repository_object(repository: &Map<String, Value>) -> ValidationResult {
    let mut result = ValidationResult::default();

    let has_key = |name: &str| repository.keys().any(|key| key.trim() == name);
    if !has_key("type") {
        result.add_issue(format!(
            "repository is missing property \"type\", which should be {TYPE_PURPOSE}"
        ));
    }
    if !has_key("url") {
        result.add_issue(format!(
            "repository is missing property \"url\", which should be {URL_PURPOSE}"
        ));
    }

    for (index, (key, value)) in repository.iter().enumerate() {
        let key = key.trim();
        let issue = match (key, value) {
            ("type" | "url" | "directory", Value::String(text)) => {
                check_repository_property(key, text)
            }
            ("type" | "url" | "directory", _) => Some(format!(
                "the value of property \"{key}\" should be a string"
            )),
            _ => Some(format!(
                "property {index} is invalid; keys should be \"type\", \"url\", and optionally \"directory\""
            )),
        };
        result.add_child_result(index, ValidationResult::new(issue, Vec::new()));
    }

    result
}

fn check_repository_property(key: &str, value: &str) -> Option<String> {
    match key {
        "url" if !REPOSITORY_URL_FORMAT.is_match(value) => Some(format!(
            "the value of property \"url\" is invalid; it should be {URL_PURPOSE}"
        )),
        "type" if is_blank(value) => Some(format!(
            "the value of property \"type\" is empty, but should be {TYPE_PURPOSE}"
        )),
        "directory" if is_blank(value) => Some(format!(
            "the value of property \"directory\" is empty, but should be {DIRECTORY_PURPOSE}"
        )),
        _ => None,
    }
}

/// Legacy check for commonjs `licenses` and `repositories`: a URL string, a `{type, url}`
/// object, or an array of such objects.
pub fn validate_url_types(name: &str, value: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    match value {
        Value::String(url) => {
            if !URL_FORMAT.is_match(url) {
                errors.push(format!("URL not valid for {name}: {url}"));
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                check_url_type(name, entry, &mut errors);
            }
        }
        Value::Object(_) => check_url_type(name, value, &mut errors),
        _ => errors.push(format!(
            "Type for field {name} should be a string or an object"
        )),
    }
    errors
}

fn check_url_type(name: &str, entry: &Value, errors: &mut Vec<String>) {
    if !is_set(entry.get("type")) {
        errors.push(format!("{name} field should have type"));
    }
    if !is_set(entry.get("url")) {
        errors.push(format!("{name} field should have url"));
    }
}

fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
