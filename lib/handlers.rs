//! Command handlers for `pjv`.

use std::fs;
use std::path::Path;

use crate::commands::Cli;
use crate::error::{PjvError, PjvResult};
use crate::output::{output_full, output_json};
use crate::validate::{Critical, ValidationOptions, ValidationOutput, validate};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a manifest file on disk.
///
/// The file must exist; its contents are validated as text, so an empty, malformed
/// or non-UTF-8 file yields a critical outcome rather than an error.
pub fn validate_file(path: &Path, options: &ValidationOptions) -> PjvResult<ValidationOutput> {
    if !path.exists() {
        return Err(PjvError::FileNotFound(path.display().to_string()));
    }

    tracing::debug!("reading manifest from {}", path.display());
    let contents = match String::from_utf8(fs::read(path)?) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::debug!("manifest is not UTF-8: {}", e);
            return Ok(ValidationOutput::critical(Critical::Message(format!(
                "Invalid JSON - {e}"
            ))));
        }
    };
    Ok(validate(&contents, options))
}

/// Run the `pjv` command. Returns whether the manifest is valid.
///
/// Nothing is printed for a valid manifest in quiet mode. An invalid manifest is
/// always reported.
pub fn validate_cmd(cli: &Cli) -> PjvResult<bool> {
    let output = validate_file(Path::new(&cli.filename), &cli.options())?;

    if output.valid && cli.quiet {
        return Ok(true);
    }

    if cli.json {
        output_json(&output)?;
    } else {
        output_full(&cli.filename, &output);
    }

    Ok(output.valid)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
