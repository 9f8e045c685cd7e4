//! `pjv` validates a package.json file from the command line.

use clap::Parser;
use colored::Colorize;
use pjv::{Cli, PjvError, PjvResult, handlers};
use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn main() {
    // Only enable tracing when RUST_LOG is set.
    init_tracing();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}

/// Print an error with appropriate formatting based on error type.
fn print_error(e: &PjvError) {
    match e {
        PjvError::FileNotFound(_) => {
            eprintln!("  {} {}", "error".bright_red().bold(), e);
        }
        _ => {
            let msg = e.to_string();
            match msg.split_once(": ") {
                Some((prefix, rest)) => eprintln!(
                    "  {} {}",
                    format!("error[{}]", prefix.to_lowercase().replace(" error", ""))
                        .bright_red()
                        .bold(),
                    rest.dimmed()
                ),
                None => eprintln!("  {} {}", "error".bright_red().bold(), msg),
            }
        }
    }
}

fn init_tracing() {
    let rust_log_set = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_some();

    // Without a subscriber, all tracing events are discarded.
    if !rust_log_set {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> PjvResult<bool> {
    let cli = Cli::parse();
    handlers::validate_cmd(&cli)
}
