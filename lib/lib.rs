//! `pjv` validates package.json manifests against the npm and CommonJS specs.

pub mod commands;
pub mod constants;
pub mod error;
pub mod formats;
pub mod handlers;
pub mod output;
pub mod validate;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use validate::{
    ChildResult, Critical, Dialect, FieldError, ManifestInput, ValidationIssue, ValidationOptions,
    ValidationOutput, ValidationResult, validate, validate_manifest,
};
