//! npm package name rules.
//!
//! Names that can no longer be published but still exist on the registry (capitals,
//! over-long names, special characters) are warnings. Names that could never be
//! published are errors.

use regex::Regex;
use std::sync::LazyLock;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Longest name the registry still accepts without a warning.
const MAX_NAME_LENGTH: usize = 214;

/// Names reserved by the registry.
const RESERVED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes.
const URI_COMPONENT_EXTRAS: &[char] = &['!', '\'', '(', ')', '*'];

/// Node.js core module names.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

static SCOPED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@([^/]+?)/)?([^/]+?)$").expect("valid scoped name regex"));

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Outcome of checking a package name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCheck {
    /// Problems that make the name unpublishable.
    pub errors: Vec<String>,

    /// Problems with names that are only accepted for legacy packages.
    pub warnings: Vec<String>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl NameCheck {
    /// True if the name can be used for a new package.
    pub fn is_valid_for_new_packages(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// True if the name is usable at all, possibly only by an existing package.
    pub fn is_valid_for_old_packages(&self) -> bool {
        self.errors.is_empty()
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Checks a package name against the npm registry's naming rules.
pub fn check_package_name(name: &str) -> NameCheck {
    let mut check = NameCheck::default();

    if name.is_empty() {
        check
            .errors
            .push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        check
            .errors
            .push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        check
            .errors
            .push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        check
            .errors
            .push("name cannot contain leading or trailing spaces".to_string());
    }

    let lower = name.to_lowercase();
    if RESERVED_NAMES.contains(&lower.as_str()) {
        check
            .errors
            .push(format!("{name} is not a valid package name"));
    }

    if CORE_MODULES.contains(&lower.as_str()) {
        check.warnings.push(format!("{name} is a core module name"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        check.warnings.push(format!(
            "name can no longer contain more than {MAX_NAME_LENGTH} characters"
        ));
    }
    if lower != name {
        check
            .warnings
            .push("name can no longer contain capital letters".to_string());
    }

    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(['~', '\'', '!', '(', ')', '*']) {
        check.warnings.push(
            "name can no longer contain special characters (\"~'!()*\")".to_string(),
        );
    }

    if !is_url_friendly(name) && !is_url_friendly_scoped(name) {
        check
            .errors
            .push("name can only contain URL-friendly characters".to_string());
    }

    check
}

/// True if percent-encoding the value as a URI component leaves it unchanged.
fn is_url_friendly(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !URI_COMPONENT_EXTRAS.contains(c))
        .collect();
    urlencoding::encode(&stripped) == stripped
}

fn is_url_friendly_scoped(name: &str) -> bool {
    let Some(caps) = SCOPED_NAME.captures(name) else {
        return false;
    };
    match (caps.get(1), caps.get(2)) {
        (Some(scope), Some(package)) => {
            is_url_friendly(scope.as_str()) && is_url_friendly(package.as_str())
        }
        _ => false,
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
