//! Array-of-strings fields: `files`, `keywords`, `workspaces`, `sideEffects`,
//! `bundleDependencies`, `cpu`, `os` and `man`.

use serde_json::Value;

use super::super::result::ValidationResult;
use super::common::{is_blank, value_type};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// CPU architectures accepted by the `cpu` field.
pub const VALID_CPUS: &[&str] = &[
    "arm", "arm64", "ia32", "loong64", "mips", "mipsel", "ppc64", "riscv64", "s390", "s390x",
    "x64",
];

/// Operating systems accepted by the `os` field.
pub const VALID_OSES: &[&str] = &[
    "aix", "android", "darwin", "freebsd", "linux", "openbsd", "sunos", "win32",
];

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A closed set of values an item must come from, optionally negated with `!`.
struct Allowed {
    values: &'static [&'static str],
    label: &'static str,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the `files` field.
pub fn validate_files(value: &Value) -> ValidationResult {
    validate_string_array(value, "a file pattern", None)
}

/// Validate the `keywords` field.
pub fn validate_keywords(value: &Value) -> ValidationResult {
    validate_string_array(value, "a keyword string", None)
}

/// Validate the `workspaces` field.
pub fn validate_workspaces(value: &Value) -> ValidationResult {
    validate_string_array(value, "a file path or glob pattern", None)
}

/// Validate the `cpu` field.
pub fn validate_cpu(value: &Value) -> ValidationResult {
    let allowed = Allowed {
        values: VALID_CPUS,
        label: "CPU",
    };
    validate_string_array(value, "the name of a CPU architecture", Some(&allowed))
}

/// Validate the `os` field.
pub fn validate_os(value: &Value) -> ValidationResult {
    let allowed = Allowed {
        values: VALID_OSES,
        label: "OS",
    };
    validate_string_array(value, "the name of an operating system", Some(&allowed))
}

/// Validate the `sideEffects` field: `false`/`true`, or the files that have side effects.
pub fn validate_side_effects(value: &Value) -> ValidationResult {
    match value {
        Value::Bool(_) => ValidationResult::default(),
        Value::Array(items) => string_items(
            items,
            "a path to a file with side effects or a glob pattern",
            None,
        ),
        Value::Null => "the value is `null`, but should be a `boolean` or an `Array`".into(),
        other => format!(
            "the type should be `boolean` or `Array`, not `{}`",
            value_type(other)
        )
        .into(),
    }
}

/// Validate `bundleDependencies` (and its `bundledDependencies` alias). `true` bundles
/// everything.
pub fn validate_bundle_dependencies(value: &Value) -> ValidationResult {
    match value {
        Value::Bool(_) => ValidationResult::default(),
        Value::Array(items) => string_items(items, "a dependency name", None),
        Value::Null => "the value is `null`, but should be an `Array` or a `boolean`".into(),
        other => format!(
            "the type should be `Array` or `boolean`, not `{}`",
            value_type(other)
        )
        .into(),
    }
}

/// Validate the `man` field: one man page path or a list of them.
///
/// A path must end in a section number, optionally followed by `.gz`.
pub fn validate_man(value: &Value) -> ValidationResult {
    const PURPOSE: &str = "the path to a man file";

    match value {
        Value::String(path) if is_blank(path) => {
            format!("the value is empty, but should be {PURPOSE}").into()
        }
        Value::String(path) if !is_man_path(path) => {
            format!("the value is not valid; it should be {PURPOSE}").into()
        }
        Value::String(_) => ValidationResult::default(),
        Value::Array(items) => {
            let mut result = ValidationResult::default();
            for (index, item) in items.iter().enumerate() {
                let issue = match item {
                    Value::String(path) if is_blank(path) => Some(format!(
                        "item at index {index} is empty, but should be {PURPOSE}"
                    )),
                    Value::String(path) if !is_man_path(path) => Some(format!(
                        "item at index {index} is not valid; it should be {PURPOSE}"
                    )),
                    Value::String(_) => None,
                    other => Some(format!(
                        "item at index {index} should be a string, not `{}`",
                        value_type(other)
                    )),
                };
                result.add_child_result(index, ValidationResult::new(issue, Vec::new()));
            }
            result
        }
        Value::Null => "the value is `null`, but should be an `Array` or a `string`".into(),
        other => format!(
            "the type should be `Array` or `string`, not `{}`",
            value_type(other)
        )
        .into(),
    }
}

fn validate_string_array(
    value: &Value,
    purpose: &str,
    allowed: Option<&Allowed>,
) -> ValidationResult {
    match value {
        Value::Array(items) => string_items(items, purpose, allowed),
        Value::Null => "the value is `null`, but should be an `Array` of strings".into(),
        other => format!("the type should be `Array`, not `{}`", value_type(other)).into(),
    }
}

/// One child per item, in order, whether or not the item has an issue.
fn string_items(items: &[Value], purpose: &str, allowed: Option<&Allowed>) -> ValidationResult {
    let mut result = ValidationResult::default();
    for (index, item) in items.iter().enumerate() {
        let issue = match item {
            Value::String(s) if is_blank(s) => Some(format!(
                "item at index {index} is empty, but should be {purpose}"
            )),
            Value::String(s) => allowed.and_then(|allowed| allowed.check(s)),
            other => Some(format!(
                "item at index {index} should be a string, not `{}`",
                value_type(other)
            )),
        };
        result.add_child_result(index, ValidationResult::new(issue, Vec::new()));
    }
    result
}

/// True if the last dot-separated part (or the one before a final `gz`) starts with an
/// optionally signed integer. A bare section such as `1` counts.
fn is_man_path(path: &str) -> bool {
    let mut parts = path.rsplit('.');
    let mut section = parts.next();
    if section == Some("gz") {
        section = parts.next();
    }
    section.is_some_and(|section| {
        let section = section.trim_start();
        let digits = section.strip_prefix(['+', '-']).unwrap_or(section);
        digits.starts_with(|c: char| c.is_ascii_digit())
    })
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Allowed {
    fn check(&self, item: &str) -> Option<String> {
        let name = item.strip_prefix('!').unwrap_or(item);
        if self.values.contains(&name) {
            None
        } else {
            Some(format!(
                "the value \"{item}\" is not valid. Valid {} values are: {}",
                self.label,
                self.values.join(", ")
            ))
        }
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
    fn test_validate_files() {
        let result = validate_files(&json!(["dist", "", null, "src/**/*.js", 7]));
        assert_eq!(
            result.error_messages(),
            vec![
                "item at index 1 is empty, but should be a file pattern",
                "item at index 2 should be a string, not `null`",
                "item at index 4 should be a string, not `number`",
            ]
        );
        assert_eq!(result.child_results().len(), 5);
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_top_level_shapes() {
        assert!(validate_keywords(&json!([])).is_empty());
        assert_eq!(
            validate_keywords(&json!(null)).error_messages(),
            vec!["the value is `null`, but should be an `Array` of strings"]
        );
        assert_eq!(
            validate_workspaces(&json!({"packages": ["a"]})).error_messages(),
            vec!["the type should be `Array`, not `object`"]
        );
        assert_eq!(
            validate_keywords(&json!(["  "])).error_messages(),
            vec!["item at index 0 is empty, but should be a keyword string"]
        );
    }

    #[test]
    fn test_validate_os() {
        assert!(validate_os(&json!(VALID_OSES)).is_empty());
        assert!(validate_os(&json!(["!win32"])).is_empty());

        let valid = VALID_OSES.join(", ");
        let result = validate_os(&json!(["arm", "x64"]));
        assert_eq!(
            result.error_messages(),
            vec![
                format!("the value \"arm\" is not valid. Valid OS values are: {valid}"),
                format!("the value \"x64\" is not valid. Valid OS values are: {valid}"),
            ]
        );
        assert!(result.issues().is_empty());

        let result = validate_os(&json!(["", "linux", " "]));
        assert_eq!(
            result.error_messages(),
            vec![
                "item at index 0 is empty, but should be the name of an operating system",
                "item at index 2 is empty, but should be the name of an operating system",
            ]
        );
        assert_eq!(
            validate_os(&json!(5)).error_messages(),
            vec!["the type should be `Array`, not `number`"]
        );
    }

    #[test]
    fn test_validate_cpu() {
        assert!(validate_cpu(&json!(["x64", "!arm"])).is_empty());
        let result = validate_cpu(&json!(["x64", null, "linux"]));
        assert_eq!(result.child_results().len(), 3);
        assert!(result.child_results()[0].issues().is_empty());
        assert_eq!(
            result.child_results()[1].error_messages(),
            vec!["item at index 1 should be a string, not `null`"]
        );
        let expected = "the value \"linux\" is not valid. Valid CPU values are: arm, arm64";
        assert!(result.error_messages()[1].starts_with(expected));
    }

    #[test]
    fn test_validate_side_effects() {
        assert!(validate_side_effects(&json!(false)).is_empty());
        assert!(validate_side_effects(&json!(["*.css"])).is_empty());
        assert_eq!(
            validate_side_effects(&json!([""])).error_messages(),
            vec!["item at index 0 is empty, but should be a path to a file with side effects or a glob pattern"]
        );
        assert_eq!(
            validate_side_effects(&json!("*.css")).error_messages(),
            vec!["the type should be `boolean` or `Array`, not `string`"]
        );
        assert!(validate_side_effects(&json!(null)).error_messages()[0].contains("`null`"));
    }

    #[test]
    fn test_validate_bundle_dependencies() {
        assert!(validate_bundle_dependencies(&json!(true)).is_empty());
        assert!(validate_bundle_dependencies(&json!(["left-pad"])).is_empty());
        assert_eq!(
            validate_bundle_dependencies(&json!(["", 1])).error_messages(),
            vec![
                "item at index 0 is empty, but should be a dependency name",
                "item at index 1 should be a string, not `number`",
            ]
        );
        assert_eq!(
            validate_bundle_dependencies(&json!({})).error_messages(),
            vec!["the type should be `Array` or `boolean`, not `object`"]
        );
        assert_eq!(
            validate_bundle_dependencies(&json!(null)).error_messages(),
            vec!["the value is `null`, but should be an `Array` or a `boolean`"]
        );
    }

    #[test]
    fn test_validate_man() {
        assert!(validate_man(&json!("./man/doc.1")).is_empty());
        assert!(validate_man(&json!(["./man/foo.1", "./man/bar.3.gz"])).is_empty());
        assert_eq!(
            validate_man(&json!("./man/doc.md")).error_messages(),
            vec!["the value is not valid; it should be the path to a man file"]
        );
        assert_eq!(
            validate_man(&json!(" ")).error_messages(),
            vec!["the value is empty, but should be the path to a man file"]
        );
        assert_eq!(
            validate_man(&json!(["./man/foo.1", "", "readme", false])).error_messages(),
            vec![
                "item at index 1 is empty, but should be the path to a man file",
                "item at index 2 is not valid; it should be the path to a man file",
                "item at index 3 should be a string, not `boolean`",
            ]
        );
        assert_eq!(
            validate_man(&json!({})).error_messages(),
            vec!["the type should be `Array` or `string`, not `object`"]
        );
    }

    #[test]
    fn test_man_section_parts() {
        for path in ["1", "5.gz", "./man/foo.1", "./man/foo.3x", "foo.-1"] {
            assert!(is_man_path(path), "{path}");
        }
        for path in ["readme", "gz", "./man/foo.gz", "./man/foo.", "foo.1.tar"] {
            assert!(!is_man_path(path), "{path}");
        }
        assert!(validate_man(&json!(["1", "5.gz"])).is_empty());
    }
}
