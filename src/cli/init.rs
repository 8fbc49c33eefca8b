//! `ccs init` - Write a starter pipeline file

use anyhow::{Context, Result};
use ccs::pipeline::scaffold::{self, ScaffoldAnswers};
use std::fs;
use std::path::Path;

/// Fail if `output` exists and `force` is not set.
///
/// Run before prompting so interactive answers are never thrown away.
pub fn ensure_writable(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite it",
            output.display()
        );
    }
    Ok(())
}

/// Render the scaffold for `answers` and write it to `output`.
///
/// An existing file is only replaced when `force` is set.
pub fn init_project(output: &Path, answers: &ScaffoldAnswers, force: bool) -> Result<()> {
    ensure_writable(output, force)?;

    let contents = scaffold::render(&answers.to_pipeline())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(output, contents)
        .with_context(|| format!("Failed to write configuration file: {}", output.display()))?;

    tracing::info!("Wrote pipeline scaffold: {}", output.display());
    Ok(())
}
