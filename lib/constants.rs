//! Constants for pjv.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The manifest file validated when no filename is given.
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";
