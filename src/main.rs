//! ccs - CI/CD Standard pipeline tooling
//!
//! Command-line front end for the `ccs` pipeline schema.
//!
//! ## Commands
//!
//! - `ccs validate` - Decode and structurally validate a pipeline file
//! - `ccs init` - Write a starter `ccs.yaml`
//! - `ccs completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Scaffold a pipeline, answering prompts for each task
//! ccs init --interactive
//!
//! # Validate it
//! ccs validate -f ccs.yaml
//! ```
//!
//! Set `CCS_DEBUG` (or pass `--verbose`) to enable logging, and
//! `CCS_VERBOSE` to print the full error chain on failure.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if std::env::var("CCS_VERBOSE").is_ok() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
