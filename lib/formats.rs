//! Format regular expressions shared by the field tables and validators.

use regex::Regex;
use std::sync::LazyLock;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Package name, optionally scoped (`@scope/name`).
pub static PACKAGE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("valid package regex")
});

/// Loose `major.minor...` version string, used by the commonjs tables.
pub static VERSION_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+[0-9+a-zA-Z.\-]+$").expect("valid version regex")
});

/// Anything starting with an http or https scheme and a host.
pub static URL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https*://[a-z.\-0-9]+").expect("valid url regex"));

/// Not thorough, only catches values that obviously aren't addresses.
pub static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("valid email regex"));

/// Full repository URL: a VCS or http scheme, or scp-style `git@host:path`.
pub static REPOSITORY_URL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:git\+)?(?:https?|ssh|git|file)://|git@[\w.\-]+:)\S+$")
        .expect("valid repository url regex")
});

/// Repository shorthand: `[github:|gitlab:|bitbucket:]owner/repo` or `gist:id`.
pub static REPOSITORY_SHORTHAND_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:(?:github|gitlab|bitbucket):)?[\w.\-]+/[\w.\-]+|gist:[\w\-]+)$")
        .expect("valid repository shorthand regex")
});

/// `Name <email> (url)`, every part optional.
pub static PERSON_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^<(\s][^<(]*)?(\s*<(.*?)>)?(\s*\((.*?)\))?").expect("valid person regex")
});

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
