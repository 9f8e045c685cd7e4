//! Terminal and JSON rendering of a validation outcome.

use colored::Colorize;
use std::fmt::Write;

use crate::error::PjvResult;
use crate::validate::ValidationOutput;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Print the outcome as pretty JSON.
pub fn output_json(output: &ValidationOutput) -> PjvResult<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

/// Print the outcome for a person reading the terminal.
pub fn output_full(filename: &str, output: &ValidationOutput) {
    print!("{}", render_full(filename, output));
}

/// Render the outcome as colored terminal text.
pub fn render_full(filename: &str, output: &ValidationOutput) -> String {
    let mut text = String::new();

    if output.valid {
        let _ = writeln!(
            text,
            "  {} {} is valid",
            "✓".bright_green(),
            filename.bold()
        );
    } else {
        let _ = writeln!(
            text,
            "  {} {} is NOT valid",
            "✗".bright_red(),
            filename.bold()
        );
    }
    text.push('\n');

    if let Some(critical) = &output.critical {
        let _ = writeln!(text, "  {}: {}", "critical".bright_red().bold(), critical);
        text.push('\n');
    }

    for error in output.errors.iter().flatten() {
        let _ = writeln!(
            text,
            "  {}: → {}",
            "error".bright_red().bold(),
            error.field.bold()
        );
        let _ = writeln!(text, "      {} {}", "└─".dimmed(), error.message.dimmed());
        text.push('\n');
    }

    for warning in output.warnings.iter().flatten() {
        let _ = writeln!(text, "  {}: {}", "warning".bright_yellow().bold(), warning);
    }

    for recommendation in output.recommendations.iter().flatten() {
        let _ = writeln!(
            text,
            "  {}: {}",
            "recommendation".bright_blue().bold(),
            recommendation
        );
    }

    if output.warnings.is_some() || output.recommendations.is_some() {
        text.push('\n');
    }

    let _ = writeln!(text, "  {}", summary(output));
    text
}

fn summary(output: &ValidationOutput) -> String {
    if output.critical.is_some() {
        return format!("{} could not be validated", "✗".bright_red());
    }

    let count = |items: Option<usize>, one: &str, many: &str| match items.unwrap_or(0) {
        0 => None,
        1 => Some(format!("1 {one}")),
        n => Some(format!("{n} {many}")),
    };

    let parts: Vec<String> = [
        count(output.errors.as_ref().map(Vec::len), "error", "errors"),
        count(
            output.warnings.as_ref().map(Vec::len),
            "warning",
            "warnings",
        ),
        count(
            output.recommendations.as_ref().map(Vec::len),
            "recommendation",
            "recommendations",
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    match (output.valid, parts.is_empty()) {
        (true, true) => format!("{} valid", "✓".bright_green()),
        (true, false) => format!("{} valid, {}", "✓".bright_green(), parts.join(", ")),
        (false, _) => format!("{} {}", "✗".bright_red(), parts.join(", ")),
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Critical, FieldError};

    fn plain(filename: &str, output: &ValidationOutput) -> String {
        colored::control::set_override(false);
        render_full(filename, output)
    }

    #[test]
    fn test_render_valid() {
        let output = ValidationOutput {
            valid: true,
            ..Default::default()
        };
        let text = plain("package.json", &output);
        assert!(text.starts_with("  ✓ package.json is valid\n"));
        assert!(text.trim_end().ends_with("✓ valid"));
    }

    #[test]
    fn test_render_errors_and_warnings() {
        let error = FieldError::new("version", "Missing required field: version");
        let output = ValidationOutput {
            valid: false,
            errors: Some(vec![error]),
            warnings: Some(vec!["Missing recommended field: author".into()]),
            ..Default::default()
        };
        let text = plain("app/package.json", &output);
        assert!(text.starts_with("  ✗ app/package.json is NOT valid\n"));
        assert!(text.contains("  error: → version\n"));
        assert!(text.contains("└─ Missing required field: version"));
        assert!(text.contains("  warning: Missing recommended field: author\n"));
        assert!(text.trim_end().ends_with("✗ 1 error, 1 warning"));
    }

    #[test]
    fn test_render_critical() {
        let output =
            ValidationOutput::critical(Critical::labeled("Empty JSON", "No data to parse"));
        let text = plain("package.json", &output);
        assert!(text.contains("  critical: Empty JSON: No data to parse\n"));
        assert!(text.trim_end().ends_with("✗ could not be validated"));
    }
}
