//! `ccs validate` - Decode and validate a pipeline file
//!
//! Reads the file, decodes it as JSON when it has a `.json` extension and as
//! YAML otherwise, then runs the structural validator. The first problem
//! found is reported.
//!
//! ## Usage
//!
//! ```bash
//! ccs validate -f ccs.yaml
//! # Exit code 0: Pipeline validation succeeded
//! # Exit code 1: Error: pipeline validation failed: duplicate task name: build
//! ```

use anyhow::{Context, Result};
use ccs::pipeline::{self, DocumentFormat, Pipeline};
use std::fs;
use std::path::Path;

/// Load and validate a pipeline file
///
/// # Returns
///
/// The decoded pipeline if it is structurally valid, otherwise the decode
/// or validation error.
pub fn validate_file(file: &Path) -> Result<Pipeline> {
    tracing::debug!("Validating pipeline: {}", file.display());

    if !file.exists() {
        anyhow::bail!("Pipeline file not found: {}", file.display());
    }

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read pipeline file: {}", file.display()))?;

    let format = DocumentFormat::from_path(file);
    tracing::debug!(?format, bytes = content.len(), "Read pipeline file");

    let pipeline = pipeline::load(&content, format)?;

    tracing::info!(
        tasks = pipeline.tasks().len(),
        "Pipeline validation successful: {}",
        file.display()
    );
    Ok(pipeline)
}
