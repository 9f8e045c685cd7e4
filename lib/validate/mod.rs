//! Package manifest validation.

mod engine;
mod outcome;
mod result;
mod spec;

pub mod validators;


//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use engine::{ManifestInput, check_field_type, validate, validate_manifest};
pub use outcome::{Critical, Dialect, FieldError, ValidationOptions, ValidationOutput};
pub use result::{ChildResult, ValidationIssue, ValidationResult};
pub use spec::{FieldSpec, FieldTypes, FieldValidator, SpecTable, SpecType, spec_table};
