//! Structural validation of decoded pipelines
//!
//! Tasks are checked one by one in declaration order while a name table is
//! filled in behind them. A dependency can therefore only point at a task
//! declared earlier in the list (or at the task itself, since a task is
//! entered into the table before its `needs` are checked). Forward references
//! are rejected, which keeps every accepted dependency relation consistent
//! with declaration order without a separate cycle check.
//!
//! The first violation found is returned; nothing is aggregated.

use ahash::AHashMap;

use super::errors::ValidationError;
use super::model::{Pipeline, Task};
use super::types::{TaskType, Validate};

/// Validates a decoded pipeline, returning the first violation found.
///
/// # Errors
///
/// - [`ValidationError::EmptySpec`] if the document has no `spec`
/// - [`ValidationError::NoTasks`] if `spec.tasks` is empty
/// - otherwise the first per-task error, see [`ValidationError`]
pub fn validate(pipeline: &Pipeline) -> Result<(), ValidationError> {
    let spec = pipeline.spec.as_ref().ok_or(ValidationError::EmptySpec)?;

    if spec.tasks.is_empty() {
        return Err(ValidationError::NoTasks);
    }

    let mut declared: AHashMap<&str, &Task> = AHashMap::with_capacity(spec.tasks.len());

    for (index, task) in spec.tasks.iter().enumerate() {
        tracing::debug!(index, task = %task.name, "Validating task");

        if task.name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        if declared.contains_key(task.name.as_str()) {
            return Err(ValidationError::DuplicateTaskName {
                name: task.name.clone(),
            });
        }

        validate_task_type(task)?;

        // Entered before `needs` is resolved: a task may name itself.
        declared.insert(task.name.as_str(), task);

        if let Some(missing) = task
            .needs
            .iter()
            .find(|dependency| !declared.contains_key(dependency.as_str()))
        {
            return Err(ValidationError::InvalidDependency {
                task: task.name.clone(),
                dependency: missing.clone(),
            });
        }
    }

    tracing::debug!(tasks = declared.len(), "Pipeline is structurally valid");
    Ok(())
}

fn validate_task_type(task: &Task) -> Result<(), ValidationError> {
    task.task_type
        .parse::<TaskType>()
        .map(|_| ())
        .map_err(ValidationError::invalid_task_type)
}

impl Validate for Pipeline {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        validate(self)
    }
}
