//! Error types for the pipeline domain

use thiserror::Error;

use super::types::TaskType;

/// Errors that can occur while loading and checking a pipeline document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The document could not be turned into a pipeline model
    #[error("pipeline decoding failed: {0}")]
    Decode(#[from] DecodeError),

    /// The decoded pipeline is structurally invalid
    #[error("pipeline validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A pipeline could not be serialized back to text
    #[error("failed to render pipeline: {0}")]
    Render(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Errors raised while decoding a document into the typed model.
///
/// A document that fails here never reaches the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// None of `build`, `release` or `deployment` is present
    #[error("task {task:?} must have one action type defined")]
    MissingAction {
        /// Name of the offending task (may be empty).
        task: String,
    },

    /// More than one of `build`, `release` or `deployment` is present
    #[error("task {task:?} has more than one action type defined: [{}]", .actions.join(" "))]
    MultipleActions {
        /// Name of the offending task (may be empty).
        task: String,
        /// Action keys found on the task, in schema order.
        actions: Vec<&'static str>,
    },

    /// The document does not have the expected shape, or is not parseable
    #[error("malformed pipeline document: {0}")]
    Malformed(String),
}

impl From<serde_yaml::Error> for DecodeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Structural validation errors.
///
/// Validation stops at the first of these it encounters. Errors raised while
/// checking a single task carry the `task validation failed: ` prefix; the
/// pipeline-level ones (and duplicate names) do not.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The document has no `spec` section
    #[error("pipeline spec must be set")]
    EmptySpec,

    /// `spec.tasks` is empty or absent
    #[error("pipeline must have at least one task")]
    NoTasks,

    /// A task has an empty name
    #[error("task validation failed: task name must be set")]
    MissingName,

    /// A task name was already used by an earlier task
    #[error("duplicate task name: {name}")]
    DuplicateTaskName {
        /// The repeated name.
        name: String,
    },

    /// A task type outside the allowed set
    #[error(
        "task validation failed: task type validation failed: invalid task type: {value}, allowed types: [{}]",
        TaskType::join(.allowed)
    )]
    InvalidTaskType {
        /// The offending value, empty when `type` was not set.
        value: String,
        /// The accepted task types.
        allowed: Vec<TaskType>,
    },

    /// A `needs` entry naming no earlier task
    #[error("task validation failed: task {task:?} has an invalid dependency: {dependency:?}")]
    InvalidDependency {
        /// Task declaring the dependency.
        task: String,
        /// The unresolved dependency name.
        dependency: String,
    },
}

impl ValidationError {
    /// Builds an [`ValidationError::InvalidTaskType`] carrying the full allowed set.
    pub fn invalid_task_type(value: impl Into<String>) -> Self {
        Self::InvalidTaskType {
            value: value.into(),
            allowed: TaskType::ALL.to_vec(),
        }
    }
}
