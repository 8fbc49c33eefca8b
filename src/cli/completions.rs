//! `ccs completions` - Generate shell completions
//!
//! Supports bash, zsh, fish, PowerShell and elvish.

use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs;
use std::path::Path;

/// Render the completion script for `shell`.
///
/// The script is generated from the same clap definition `ccs` parses with,
/// so new subcommands and flags show up without further changes.
pub fn generate_completions(shell: Shell) -> Result<String> {
    use clap_complete::generate;

    let mut cmd = super::build_cli();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "ccs", &mut buf);

    String::from_utf8(buf).context("Failed to generate completions")
}

/// Write a generated completion script to `output_path`.
pub fn save_completions(completions: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, completions)
        .with_context(|| format!("Failed to write completions to: {}", output_path.display()))?;
    Ok(())
}
