//! Link fields that can be a URL or an email address, such as `bugs`.

use serde_json::Value;

use crate::formats::{EMAIL_FORMAT, URL_FORMAT};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Object properties holding an address, and whether each one is an email.
const LINK_PROPERTIES: &[(&str, bool)] = &[
    ("email", true),
    ("mail", true),
    ("url", false),
    ("web", false),
];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a URL-or-email field: either string, or an object such as
/// `{"url": "...", "email": "..."}` or `{"web": "...", "mail": "..."}`.
pub fn validate_url_or_mailto(name: &str, value: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    match value {
        Value::String(link) => {
            if !URL_FORMAT.is_match(link) && !EMAIL_FORMAT.is_match(link) {
                errors.push(format!("{name} should be an email or a url"));
            }
        }
        Value::Object(link) => {
            let present: Vec<_> = LINK_PROPERTIES
                .iter()
                .filter_map(|&(key, is_email)| {
                    link.get(key)
                        .filter(|v| is_present(v))
                        .map(|v| (v, is_email))
                })
                .collect();

            if present.is_empty() {
                errors.push(format!(
                    "{name} field should have one of: email, url, mail, web"
                ));
            }
            for (address, is_email) in present {
                let text = address
                    .as_str()
                    .map_or_else(|| address.to_string(), str::to_string);
                let valid = address.as_str().is_some_and(|s| {
                    if is_email {
                        EMAIL_FORMAT.is_match(s)
                    } else {
                        URL_FORMAT.is_match(s)
                    }
                });
                if !valid {
                    let kind = if is_email { "Email" } else { "URL" };
                    errors.push(format!("{kind} not valid for {name}: {text}"));
                }
            }
        }
        Value::Null => errors.push(format!(
            "the value of {name} is `null`, but should be a string or an object"
        )),
        _ => errors.push(format!(
            "Type for field {name} should be a string or an object"
        )),
    }

    errors
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
