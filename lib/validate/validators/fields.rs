//! Validators for scalar manifest fields.

use serde_json::Value;

use super::super::result::ValidationResult;
use super::common::{
    non_empty_string, validate_boolean, validate_non_empty_string, validate_object,
};
use super::license::check_license;
use super::package_name::check_package_name;
use crate::formats::URL_FORMAT;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Module systems accepted by the `type` field.
const VALID_TYPES: &[&str] = &["commonjs", "module"];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the `name` field. Name errors come first, then name warnings.
pub fn validate_name(value: &Value) -> ValidationResult {
    match non_empty_string(value, "a valid name") {
        Ok(name) => {
            let check = check_package_name(name);
            ValidationResult::new(check.errors.into_iter().chain(check.warnings), Vec::new())
        }
        Err(result) => result,
    }
}

/// Validate the `version` field as a semver version.
pub fn validate_version(value: &Value) -> ValidationResult {
    match non_empty_string(value, "a valid version") {
        Ok(version) if !is_valid_semver(version) => {
            "the value is not a valid semver version".into()
        }
        Ok(_) => ValidationResult::default(),
        Err(result) => result,
    }
}

/// True if the string is a semver version, allowing surrounding whitespace and a leading
/// `v`.
pub fn is_valid_semver(version: &str) -> bool {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    semver::Version::parse(trimmed).is_ok()
}

/// Validate the `description` field.
pub fn validate_description(value: &Value) -> ValidationResult {
    validate_non_empty_string(value, "a description")
}

/// Validate the `main` field.
pub fn validate_main(value: &Value) -> ValidationResult {
    validate_non_empty_string(value, "the path to the package's main module")
}

/// Validate the `homepage` field.
pub fn validate_homepage(value: &Value) -> ValidationResult {
    match non_empty_string(value, "a valid url") {
        Ok(url) if !URL_FORMAT.is_match(url) => "the value is not a valid url".into(),
        Ok(_) => ValidationResult::default(),
        Err(result) => result,
    }
}

/// Validate the `license` field.
pub fn validate_license(value: &Value) -> ValidationResult {
    match non_empty_string(value, "a valid license") {
        Ok(license) => check_license(license).into(),
        Err(result) => result,
    }
}

/// Validate the `type` field. The value must match exactly, surrounding whitespace
/// included.
pub fn validate_type(value: &Value) -> ValidationResult {
    let valid = VALID_TYPES.join(", ");
    match non_empty_string(value, &format!("one of: {valid}")) {
        Ok(kind) if !VALID_TYPES.contains(&kind) => {
            format!("the value \"{kind}\" is not valid. Valid types are: {valid}").into()
        }
        Ok(_) => ValidationResult::default(),
        Err(result) => result,
    }
}

/// Validate the `private` field.
pub fn validate_private(value: &Value) -> ValidationResult {
    validate_boolean(value)
}

/// Validate the `config` field. Its contents are package-defined.
pub fn validate_config(value: &Value) -> ValidationResult {
    validate_object(value)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
