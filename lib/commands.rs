//! CLI arguments for `pjv`.

use clap::Parser;

use crate::constants::DEFAULT_MANIFEST_FILE;
use crate::validate::{Dialect, ValidationOptions};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const EXAMPLES: &str = "\
Examples:
  pjv                              Validate ./package.json
  pjv -f packages/app/package.json Validate another manifest
  pjv -w -r                        Also report missing recommended and optional fields
  pjv -s commonjs_1.1              Validate against CommonJS Packages 1.1
  pjv --json                       Print the outcome as JSON";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Validate package.json files.
#[derive(Debug, Parser)]
#[command(name = "pjv", author, version, about, after_help = EXAMPLES)]
pub struct Cli {
    /// package.json file to validate.
    #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE)]
    pub filename: String,

    /// Display warnings.
    #[arg(short, long)]
    pub warnings: bool,

    /// Display recommendations.
    #[arg(short, long)]
    pub recommendations: bool,

    /// Less output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Spec to validate against.
    #[arg(short, long, value_enum, default_value_t = Dialect::Npm)]
    pub spec: Dialect,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Cli {
    /// Validation options selected by the flags.
    pub fn options(&self) -> ValidationOptions {
        ValidationOptions {
            warnings: self.warnings,
            recommendations: self.recommendations,
            dialect: self.spec,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
