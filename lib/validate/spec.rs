//! Field tables: which manifest fields exist in each dialect and how each is checked.

use regex::Regex;
use serde_json::Value;

use super::outcome::Dialect;
use super::result::ValidationResult;
use super::validators::{self, value_type};
use crate::formats::{PACKAGE_FORMAT, URL_FORMAT, VERSION_FORMAT};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// JSON types a field can be declared to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

/// The type or types a field accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTypes {
    Single(SpecType),
    AnyOf(Vec<SpecType>),
}

/// Validation routine for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidator {
    Author,
    Bin,
    BundleDependencies,
    Config,
    Contributors,
    Cpu,
    Dependencies,
    Description,
    Directories,
    Engines,
    Exports,
    Files,
    Homepage,
    Keywords,
    License,
    Main,
    Man,
    Name,
    Os,
    People,
    Private,
    PublishConfig,
    Repository,
    Scripts,
    SideEffects,
    Type,
    UrlOrMailto,
    UrlTypes,
    Version,
    Workspaces,
}

/// How one field is checked.
///
/// Presence tiers are checked in the order required, warning, recommended; the first one
/// set decides how a missing field is reported.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    /// Missing field is an error.
    pub required: bool,

    /// Missing field is a warning.
    pub warning: bool,

    /// Missing field is a recommendation.
    pub recommended: bool,

    /// Declared type. Values of any other type fail and skip the remaining checks.
    pub types: Option<FieldTypes>,

    /// Pattern a present value must match.
    pub format: Option<&'static Regex>,

    /// Custom validation run on present values.
    pub validate: Option<FieldValidator>,

    /// Sibling field whose presence satisfies this field's presence requirement.
    pub or: Option<&'static str>,
}

/// Field name to spec, in checking order.
pub type SpecTable = Vec<(&'static str, FieldSpec)>;

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl SpecType {
    /// Name used in type-mismatch messages.
    pub fn name(self) -> &'static str {
        match self {
            SpecType::String => "string",
            SpecType::Number => "number",
            SpecType::Boolean => "boolean",
            SpecType::Object => "object",
            SpecType::Array => "array",
        }
    }

    /// True if the value has this type. Arrays are not objects.
    pub fn matches(self, value: &Value) -> bool {
        value_type(value) == self.name()
    }
}

impl FieldTypes {
    /// True if the value has one of the accepted types.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldTypes::Single(spec_type) => spec_type.matches(value),
            FieldTypes::AnyOf(types) => types.iter().any(|t| t.matches(value)),
        }
    }

    /// Accepted types joined with "or", e.g. `string or boolean`.
    pub fn describe(&self) -> String {
        match self {
            FieldTypes::Single(spec_type) => spec_type.name().to_string(),
            FieldTypes::AnyOf(types) => types
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

impl FieldValidator {
    /// Runs the validator. `field` names the field in messages that mention it.
    pub fn run(self, field: &str, value: &Value) -> ValidationResult {
        match self {
            FieldValidator::Author => validators::validate_author(value),
            FieldValidator::Bin => validators::validate_bin(value),
            FieldValidator::BundleDependencies => validators::validate_bundle_dependencies(value),
            FieldValidator::Config => validators::validate_config(value),
            FieldValidator::Contributors => validators::validate_contributors(value),
            FieldValidator::Cpu => validators::validate_cpu(value),
            FieldValidator::Dependencies => validators::validate_dependencies(value),
            FieldValidator::Description => validators::validate_description(value),
            FieldValidator::Directories => validators::validate_directories(value),
            FieldValidator::Engines => validators::validate_engines(value),
            FieldValidator::Exports => validators::validate_exports(value),
            FieldValidator::Files => validators::validate_files(value),
            FieldValidator::Homepage => validators::validate_homepage(value),
            FieldValidator::Keywords => validators::validate_keywords(value),
            FieldValidator::License => validators::validate_license(value),
            FieldValidator::Main => validators::validate_main(value),
            FieldValidator::Man => validators::validate_man(value),
            FieldValidator::Name => validators::validate_name(value),
            FieldValidator::Os => validators::validate_os(value),
            FieldValidator::People => validators::validate_people(value),
            FieldValidator::Private => validators::validate_private(value),
            FieldValidator::PublishConfig => validators::validate_publish_config(value),
            FieldValidator::Repository => validators::validate_repository(value),
            FieldValidator::Scripts => validators::validate_scripts(value),
            FieldValidator::SideEffects => validators::validate_side_effects(value),
            FieldValidator::Type => validators::validate_type(value),
            FieldValidator::UrlOrMailto => validators::validate_url_or_mailto(field, value).into(),
            FieldValidator::UrlTypes => validators::validate_url_types(field, value).into(),
            FieldValidator::Version => validators::validate_version(value),
            FieldValidator::Workspaces => validators::validate_workspaces(value),
        }
    }
}

impl FieldSpec {
    /// A field checked by `validator`, with no presence requirement.
    pub fn validated(validator: FieldValidator) -> Self {
        Self {
            validate: Some(validator),
            ..Self::default()
        }
    }

    /// A field that must have type `spec_type`, with no presence requirement.
    pub fn typed(spec_type: SpecType) -> Self {
        Self {
            types: Some(FieldTypes::Single(spec_type)),
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn warning(mut self) -> Self {
        self.warning = true;
        self
    }

    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    pub fn format(mut self, format: &'static Regex) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn or(mut self, sibling: &'static str) -> Self {
        self.or = Some(sibling);
        self
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Builds the field table for a dialect. `is_private` relaxes `name` and `version` in the
/// npm dialect.
pub fn spec_table(dialect: Dialect, is_private: bool) -> SpecTable {
    match dialect {
        Dialect::Npm => npm_table(is_private),
        Dialect::CommonJs10 => commonjs_1_0_table(),
        Dialect::CommonJs11 => commonjs_1_1_table(),
    }
}

fn npm_table(is_private: bool) -> SpecTable {
    use FieldSpec as F;
    use FieldValidator as V;

    vec![
        ("author", F::validated(V::Author).warning()),
        ("bin", F::validated(V::Bin)),
        ("bugs", F::validated(V::UrlOrMailto).warning()),
        ("bundledDependencies", F::validated(V::BundleDependencies)),
        ("bundleDependencies", F::validated(V::BundleDependencies)),
        ("config", F::validated(V::Config)),
        ("contributors", F::validated(V::Contributors)),
        ("cpu", F::validated(V::Cpu)),
        ("dependencies", F::validated(V::Dependencies).recommended()),
        ("description", F::validated(V::Description).warning()),
        ("devDependencies", F::validated(V::Dependencies)),
        ("directories", F::validated(V::Directories)),
        ("engines", F::validated(V::Engines).recommended()),
        ("exports", F::validated(V::Exports)),
        ("files", F::validated(V::Files)),
        ("homepage", F::validated(V::Homepage).recommended()),
        ("keywords", F::validated(V::Keywords).warning()),
        ("license", F::validated(V::License).warning().or("licenses")),
        ("main", F::validated(V::Main)),
        ("man", F::validated(V::Man)),
        ("name", F::validated(V::Name).required(!is_private)),
        ("optionalDependencies", F::validated(V::Dependencies)),
        ("os", F::validated(V::Os)),
        ("peerDependencies", F::validated(V::Dependencies)),
        ("private", F::validated(V::Private)),
        ("publishConfig", F::validated(V::PublishConfig)),
        ("repository", F::validated(V::Repository).warning()),
        ("scripts", F::validated(V::Scripts)),
        ("sideEffects", F::validated(V::SideEffects)),
        ("type", F::validated(V::Type).recommended()),
        ("version", F::validated(V::Version).required(!is_private)),
        ("workspaces", F::validated(V::Workspaces)),
    ]
}

// The commonjs tables predate the npm one: type and format checks do the work, and
// fields with no tier are still reported as missing optional fields.

fn commonjs_1_0_table() -> SpecTable {
    use FieldSpec as F;
    use FieldValidator as V;
    use SpecType as T;

    vec![
        (
            "name",
            F::typed(T::String).required(true).format(&PACKAGE_FORMAT),
        ),
        ("description", F::typed(T::String).required(true)),
        (
            "version",
            F::typed(T::String).required(true).format(&VERSION_FORMAT),
        ),
        ("keywords", F::typed(T::Array).required(true)),
        (
            "maintainers",
            F::typed(T::Array).required(true).with_validator(V::People),
        ),
        (
            "contributors",
            F::typed(T::Array).required(true).with_validator(V::People),
        ),
        (
            "bugs",
            F::typed(T::String)
                .required(true)
                .with_validator(V::UrlOrMailto),
        ),
        (
            "licenses",
            F::typed(T::Array)
                .required(true)
                .with_validator(V::UrlTypes),
        ),
        (
            "repositories",
            F::typed(T::Object)
                .required(true)
                .with_validator(V::UrlTypes),
        ),
        (
            "dependencies",
            F::typed(T::Object)
                .required(true)
                .with_validator(V::Dependencies),
        ),
        (
            "homepage",
            F::typed(T::String).warning().format(&URL_FORMAT),
        ),
        ("os", F::typed(T::Array).recommended()),
        ("cpu", F::typed(T::Array).recommended()),
        ("engine", F::typed(T::Array).recommended()),
        ("builtin", F::typed(T::Boolean).recommended()),
        ("directories", F::typed(T::Object).recommended()),
        ("implements", F::typed(T::Array).recommended()),
        ("scripts", F::typed(T::Object).recommended()),
        ("checksums", F::typed(T::Object).recommended()),
    ]
}

fn commonjs_1_1_table() -> SpecTable {
    use FieldSpec as F;
    use FieldValidator as V;
    use SpecType as T;

    vec![
        (
            "name",
            F::typed(T::String).required(true).format(&PACKAGE_FORMAT),
        ),
        (
            "version",
            F::typed(T::String).required(true).format(&VERSION_FORMAT),
        ),
        ("main", F::typed(T::Array).required(true)),
        ("directories", F::typed(T::Object).required(true)),
        (
            "maintainers",
            F::typed(T::Array).warning().with_validator(V::People),
        ),
        ("description", F::typed(T::String).warning()),
        (
            "licenses",
            F::typed(T::Array).warning().with_validator(V::UrlTypes),
        ),
        (
            "bugs",
            F::typed(T::String).warning().with_validator(V::UrlOrMailto),
        ),
        ("keywords", F::typed(T::Array).recommended()),
        (
            "repositories",
            F::typed(T::Array).recommended().with_validator(V::UrlTypes),
        ),
        (
            "contributors",
            F::typed(T::Array).recommended().with_validator(V::People),
        ),
        (
            "dependencies",
            F::typed(T::Object)
                .recommended()
                .with_validator(V::Dependencies),
        ),
        (
            "homepage",
            F::typed(T::String).warning().format(&URL_FORMAT),
        ),
        ("os", F::typed(T::Array).recommended()),
        ("cpu", F::typed(T::Array).recommended()),
        ("engine", F::typed(T::Array).recommended()),
        ("builtin", F::typed(T::Boolean).recommended()),
        ("implements", F::typed(T::Array).recommended()),
        ("scripts", F::typed(T::Object).recommended()),
        ("overlay", F::typed(T::Object).recommended()),
        ("checksums", F::typed(T::Object).recommended()),
    ]
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup<'a>(table: &'a SpecTable, field: &str) -> &'a FieldSpec {
        &table.iter().find(|(name, _)| *name == field).unwrap().1
    }

    #[test]
    fn test_private_relaxes_name_and_version() {
        let public = spec_table(Dialect::Npm, false);
        assert!(lookup(&public, "name").required);
        assert!(lookup(&public, "version").required);

        let private = spec_table(Dialect::Npm, true);
        assert!(!lookup(&private, "name").required);
        assert!(!lookup(&private, "version").required);
    }

    #[test]
    fn test_commonjs_always_requires_name_and_version() {
        for dialect in [Dialect::CommonJs10, Dialect::CommonJs11] {
            let table = spec_table(dialect, true);
            assert!(lookup(&table, "name").required);
            assert!(lookup(&table, "version").required);
        }
    }

    #[test]
    fn test_license_satisfied_by_licenses() {
        let table = spec_table(Dialect::Npm, false);
        assert_eq!(lookup(&table, "license").or, Some("licenses"));
    }

    #[test]
    fn test_field_types() {
        let single = FieldTypes::Single(SpecType::Object);
        assert!(single.accepts(&json!({})));
        assert!(!single.accepts(&json!([])));
        assert!(!single.accepts(&json!(null)));

        let any = FieldTypes::AnyOf(vec![SpecType::String, SpecType::Boolean]);
        assert!(any.accepts(&json!(true)));
        assert!(!any.accepts(&json!(1)));
        assert_eq!(any.describe(), "string or boolean");
        assert!(SpecType::Array.matches(&json!([])));
    }

    #[test]
    fn test_validator_dispatch_uses_field_name() {
        assert_eq!(
            FieldValidator::UrlOrMailto
                .run("bugs", &json!("nowhere"))
                .error_messages(),
            vec!["bugs should be an email or a url"]
        );
        assert!(FieldValidator::Name.run("name", &json!("ok")).is_empty());
    }
}
