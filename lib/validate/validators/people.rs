//! People fields: `author`, `contributors` and `maintainers`.
//!
//! A person is either an object with at least a `name`, or a string of the form
//! `Name <email> (url)`.

use serde_json::{Map, Value};

use super::super::result::ValidationResult;
use super::common::is_blank;
use crate::formats::{EMAIL_FORMAT, PERSON_FORMAT, URL_FORMAT};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// True if the value is an object with a `name` property.
pub fn is_person(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("name"))
}

/// Validate a person, a person string, or an array of either.
///
/// Arrays get one child per element.
pub fn validate_people(value: &Value) -> ValidationResult {
    match value {
        Value::Array(items) => {
            let mut result = ValidationResult::default();
            for (index, item) in items.iter().enumerate() {
                result.add_child_result(index, validate_person(item));
            }
            result
        }
        other => validate_person(other),
    }
}

/// Validate the `author` field.
pub fn validate_author(value: &Value) -> ValidationResult {
    match value {
        Value::String(_) => validate_people(value),
        Value::Null => {
            "the value is `null`, but should be a `string` or an `object` with at least a `name` property"
                .into()
        }
        other if is_person(other) => validate_people(other),
        _ => {
            "the type should be a `string` or an `object` with at least a `name` property".into()
        }
    }
}

/// Validate the `contributors` field.
pub fn validate_contributors(value: &Value) -> ValidationResult {
    let Value::Array(items) = value else {
        return match value {
            Value::Null => {
                "the value is `null`, but should be an `Array` of objects with at least a `name` property"
                    .into()
            }
            _ => {
                "the type should be an `Array` of objects with at least a `name` property, and optionally `email` and `url`"
                    .into()
            }
        };
    };

    let mut result = ValidationResult::default();
    for (index, item) in items.iter().enumerate() {
        if is_person(item) {
            result.add_child_result(index, validate_people(item));
        } else {
            result.add_child_result(
                index,
                format!(
                    "item {index} is invalid; it should be a person object with at least a `name`"
                ),
            );
        }
    }
    result
}

fn validate_person(value: &Value) -> ValidationResult {
    match value {
        Value::String(person) => validate_person_object(&parse_person(person)).flatten(),
        Value::Object(person) => validate_person_object(person),
        _ => "person field must be an object or a string".into(),
    }
}

/// Splits `Name <email> (url)` into an object with `email`, `name` and `url` keys.
/// Missing parts are `null`.
fn parse_person(person: &str) -> Map<String, Value> {
    let caps = PERSON_FORMAT.captures(person);
    let part = |group: usize| {
        caps.as_ref()
            .and_then(|caps| caps.get(group))
            .map_or(Value::Null, |m| Value::String(m.as_str().to_string()))
    };

    let mut object = Map::new();
    object.insert("email".to_string(), part(3));
    object.insert("name".to_string(), part(1));
    object.insert("url".to_string(), part(5));
    object
}

fn validate_person_object(person: &Map<String, Value>) -> ValidationResult {
    let mut result = ValidationResult::default();

    let has_name = person
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !is_blank(name));
    if !has_name {
        result.add_issue("person object should have name");
    }

    for (index, (key, value)) in person.iter().enumerate() {
        let mut child = ValidationResult::default();
        if let Some(text) = present_text(value) {
            match key.as_str() {
                "email" if !is_str_matching(value, &EMAIL_FORMAT) => {
                    child.add_issue(format!("Email not valid: {text}"));
                }
                "url" | "web" if !is_str_matching(value, &URL_FORMAT) => {
                    child.add_issue(format!("URL not valid: {text}"));
                }
                _ => {}
            }
        }
        result.add_child_result(index, child);
    }

    result
}

/// Text of a value that counts as set: anything but `null`, `false` or an empty string.
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_str_matching(value: &Value, format: &regex::Regex) -> bool {
    value.as_str().is_some_and(|s| format.is_match(s))
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_person() {
        assert!(is_person(&json!({"name": "Barney"})));
        assert!(is_person(&json!({"name": null})));
        assert!(!is_person(&json!({"email": "b@rubble.com"})));
        assert!(!is_person(&json!("Barney")));
    }

    #[test]
    fn test_person_object() {
        let result = validate_people(&json!({
            "name": "Barney Rubble",
            "email": "b@rubble.com",
            "url": "http://barnyrubble.tumblr.com/"
        }));
        assert!(result.is_empty());
        assert_eq!(result.child_results().len(), 3);
    }

    #[test]
    fn test_person_object_bad_fields() {
        let result = validate_people(&json!({
            "email": "not-an-email",
            "web": "barnyrubble.tumblr.com"
        }));
        assert_eq!(
            result.error_messages(),
            vec![
                "person object should have name",
                "Email not valid: not-an-email",
                "URL not valid: barnyrubble.tumblr.com",
            ]
        );
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.child_results()[1].index(), 1);
    }

    #[test]
    fn test_person_string_is_flattened() {
        let person = "Barney Rubble <b@rubble.com> (http://barnyrubble.tumblr.com/)";
        let result = validate_people(&json!(person));
        assert!(result.is_empty());
        assert!(result.child_results().is_empty());

        let result = validate_people(&json!("Barney Rubble <not-an-email> (nope)"));
        assert!(result.child_results().is_empty());
        assert_eq!(
            result.error_messages(),
            vec!["Email not valid: not-an-email", "URL not valid: nope"]
        );

        let result = validate_people(&json!("<b@rubble.com>"));
        assert_eq!(
            result.error_messages(),
            vec!["person object should have name"]
        );
    }

    #[test]
    fn test_people_array() {
        let result = validate_people(&json!([{"name": "a"}, 42, "c <d@e.f>"]));
        let children = result.child_results();
        assert_eq!(children.len(), 3);
        assert_eq!(
            children.iter().map(|c| c.index()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(
            result.error_messages(),
            vec!["person field must be an object or a string"]
        );
    }

    #[test]
    fn test_validate_author() {
        assert!(validate_author(&json!("Barney Rubble")).is_empty());
        assert!(validate_author(&json!({"name": "Barney Rubble"})).is_empty());
        assert_eq!(
            validate_author(&json!({"email": "b@rubble.com"})).error_messages(),
            vec!["the type should be a `string` or an `object` with at least a `name` property"]
        );
        assert_eq!(
            validate_author(&json!(null)).error_messages(),
            vec!["the value is `null`, but should be a `string` or an `object` with at least a `name` property"]
        );
    }

    #[test]
    fn test_validate_contributors() {
        let result = validate_contributors(&json!([
            {"name": "Barney", "email": "b@rubble.com"},
            "Fred",
            {"name": "Wilma", "url": "bedrock"}
        ]));
        assert_eq!(
            result.error_messages(),
            vec![
                "item 1 is invalid; it should be a person object with at least a `name`",
                "URL not valid: bedrock",
            ]
        );
        assert_eq!(result.child_results().len(), 3);

        assert_eq!(
            validate_contributors(&json!({"name": "Barney"})).error_messages(),
            vec!["the type should be an `Array` of objects with at least a `name` property, and optionally `email` and `url`"]
        );
        assert!(validate_contributors(&json!(null)).error_messages()[0].contains("null"));
    }
}
