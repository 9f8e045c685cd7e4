//! Dependency maps: `dependencies`, `devDependencies`, `optionalDependencies` and
//! `peerDependencies`.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::super::result::ValidationResult;
use super::common::display_type;
use crate::formats::{PACKAGE_FORMAT, URL_FORMAT};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Prefixes of local and aliased dependency specifiers.
const UNPUBLISHED_PREFIXES: &[&str] = &["npm:", "file:", "../", "~/", "./", "/"];

/// Prefixes of registry specifiers that resolve through another package manager.
const REGISTRY_PROTOCOLS: &[&str] = &["jsr:", "catalog:"];

static RANGE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\^<>=~]{0,2}[0-9.x]+").expect("valid range regex"));

static GIT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git(?:\+(?:ssh|http|https|file|rsync|ftp))?:").expect("valid git regex")
});

static GITHUB_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:github:)?[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*/[\w.\-]+(?:#|$)")
        .expect("valid github regex")
});

static WORKSPACE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^workspace:((\^|~)?[0-9.x]*|(<=?|>=?)?[0-9.x][\-.+\w]+|\*)?$")
        .expect("valid workspace regex")
});

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a dependency map. Every entry gets a child, in order.
pub fn validate_dependencies(value: &Value) -> ValidationResult {
    let deps = match value {
        Value::Object(deps) => deps,
        Value::Null => return "the value is `null`, but should be an `object`".into(),
        other => {
            return format!("the type should be `object`, not `{}`", display_type(other)).into();
        }
    };

    let mut result = ValidationResult::default();
    for (index, (name, version)) in deps.iter().enumerate() {
        result.add_child_result(index, validate_dependency(name, version));
    }
    result
}

fn validate_dependency(name: &str, version: &Value) -> ValidationResult {
    let mut result = ValidationResult::default();

    let unpublished = version.as_str().is_some_and(is_unpublished_version);
    if !unpublished && !PACKAGE_FORMAT.is_match(name) {
        result.add_issue(format!("invalid dependency package name: {name}"));
    }

    match version {
        Value::String(range) if !is_valid_version_range(range) => {
            result.add_issue(format!(
                "invalid version range for dependency {name}: {range}"
            ));
        }
        Value::String(_) => {}
        other => result.add_issue(format!(
            "dependency version for {name} should be a string: {other}"
        )),
    }

    result
}

/// True if the specifier points somewhere other than the registry: a URL, a git or GitHub
/// reference, a workspace range, an `npm:` alias, or a local path.
///
/// Such dependencies can use any name.
pub fn is_unpublished_version(version: &str) -> bool {
    URL_FORMAT.is_match(version)
        || GIT_FORMAT.is_match(version)
        || GITHUB_FORMAT.is_match(version)
        || WORKSPACE_FORMAT.is_match(version)
        || UNPUBLISHED_PREFIXES
            .iter()
            .any(|prefix| version.starts_with(prefix))
}

/// True if the specifier is a version range, a tag npm understands, or an unpublished
/// version.
pub fn is_valid_version_range(version: &str) -> bool {
    RANGE_FORMAT.is_match(version)
        || matches!(version, "" | "*" | "latest")
        || REGISTRY_PROTOCOLS
            .iter()
            .any(|protocol| version.starts_with(protocol))
        || is_unpublished_version(version)
        || semver::VersionReq::parse(version).is_ok()
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_dependencies() {
        let result = validate_dependencies(&json!({
            "absolute-path-without-protocol": "/absolute/path",
            "caret-first": "^1.0.0",
            "catalog-named-package": "catalog:react19",
            "catalog-package": "catalog:",
            "empty": "",
            "gteq": ">=1.2.3",
            "jsr-scoped-package": "jsr:@valibot/valibot@^1.0.0",
            "range": "1.2.3 - 2.3.4",
            "relative": "file:../relative/path",
            "relative-tilde-without-protocol": "~/path",
            "star": "*",
            "latest-tag": "latest",
            "svgo-v1": "npm:svgo@1.3.2",
            "tilde-top": "~1",
            "url": "https://github.com/JoshuaKGoldberg/package-json-validator",
            "workspace-package-any": "workspace:*",
            "workspace-package-no-range": "workspace:",
            "workspace-pre-release": "workspace:1.2.3-rc.1",
            "x-version": "1.2.x",
            "@reactivex/rxjs": "^5.0.0-alpha.7",
            "git-ssh-reference": "git+ssh://git@github.com:npm/cli#semver:^5.0",
            "github-reference": "github:some/package",
            "github-reference-with-hash": "some/package#feature/branch"
        }));
        assert_eq!(result.error_messages(), Vec::<String>::new());
        assert_eq!(result.child_results().len(), 23);
    }

    #[test]
    fn test_unpublished_versions_skip_name_check() {
        let result = validate_dependencies(&json!({
            "_weird_name": "file:../x",
            "_git": "git://github.com/npm/cli.git#v1.0.27",
            "_workspace": "workspace:^",
            "_published": "1.2.3",
            "_catalog": "catalog:",
            "_jsr": "jsr:1.0.0"
        }));
        assert_eq!(
            result.error_messages(),
            vec![
                "invalid dependency package name: _published",
                "invalid dependency package name: _catalog",
                "invalid dependency package name: _jsr",
            ]
        );
    }

    #[test]
    fn test_invalid_ranges() {
        let result = validate_dependencies(&json!({
            "bad-catalog": "catalob:",
            "bad-npm": "npm;svgo@^1.2.3",
            "bad-workspace": "workspace:abc123",
            "invalid-git-protocol": "git+foo://github.com/npm/cli.git",
            "invalid-github-reference-bad-username": "some--user/package",
            "invalid-github-reference-too-many-slashes": "some/package/subpath",
            "package-name": "abc123"
        }));
        assert_eq!(
            result.error_messages(),
            vec![
                "invalid version range for dependency bad-catalog: catalob:",
                "invalid version range for dependency bad-npm: npm;svgo@^1.2.3",
                "invalid version range for dependency bad-workspace: workspace:abc123",
                "invalid version range for dependency invalid-git-protocol: git+foo://github.com/npm/cli.git",
                "invalid version range for dependency invalid-github-reference-bad-username: some--user/package",
                "invalid version range for dependency invalid-github-reference-too-many-slashes: some/package/subpath",
                "invalid version range for dependency package-name: abc123",
            ]
        );
    }

    #[test]
    fn test_scoped_name_still_checked() {
        let result = validate_dependencies(&json!({"@scope/@@@": "1.2.3"}));
        assert_eq!(result.child_results().len(), 1);
        assert_eq!(
            result.child_results()[0].error_messages(),
            vec!["invalid dependency package name: @scope/@@@"]
        );
    }

    #[test]
    fn test_non_string_version() {
        let result = validate_dependencies(&json!({"left-pad": 1, "_bad": null}));
        assert_eq!(
            result.error_messages(),
            vec![
                "dependency version for left-pad should be a string: 1",
                "invalid dependency package name: _bad",
                "dependency version for _bad should be a string: null",
            ]
        );
    }

    #[test]
    fn test_top_level_shape() {
        assert_eq!(
            validate_dependencies(&json!(["left-pad"])).error_messages(),
            vec!["the type should be `object`, not `Array`"]
        );
        assert_eq!(
            validate_dependencies(&json!(null)).error_messages(),
            vec!["the value is `null`, but should be an `object`"]
        );
    }
}
