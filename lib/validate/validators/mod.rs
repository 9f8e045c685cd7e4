//! Field validators for package manifests.
//!
//! Each validator takes the raw field value and reports problems as data; none of them
//! fail or panic on malformed input.

mod arrays;
mod common;
mod dependencies;
mod exports;
mod fields;
mod links;
mod maps;
mod people;
mod publish_config;
mod repository;

pub mod license;
pub mod package_name;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use arrays::{
    VALID_CPUS, VALID_OSES, validate_bundle_dependencies, validate_cpu, validate_files,
    validate_keywords, validate_man, validate_os, validate_side_effects, validate_workspaces,
};
pub use common::{display_type, value_type};
pub use dependencies::{is_unpublished_version, is_valid_version_range, validate_dependencies};
pub use exports::validate_exports;
pub use fields::{
    is_valid_semver, validate_config, validate_description, validate_homepage, validate_license,
    validate_main, validate_name, validate_private, validate_type, validate_version,
};
pub use license::check_license;
pub use links::validate_url_or_mailto;
pub use maps::{validate_bin, validate_directories, validate_engines, validate_scripts};
pub use package_name::{NameCheck, check_package_name};
pub use people::{is_person, validate_author, validate_contributors, validate_people};
pub use publish_config::validate_publish_config;
pub use repository::{validate_repository, validate_url_types};
