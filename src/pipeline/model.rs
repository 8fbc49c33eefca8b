//! Typed pipeline model
//!
//! A [`Pipeline`] is built once from a document and never mutated
//! afterwards. Deserializing goes through the raw document form in
//! [`super::decode`], which is where the one-action-per-task rule lives.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::decode::PipelineDocument;
use super::types::TaskType;

/// Top-level pipeline document.
///
/// `api_version`, `kind` and `metadata` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PipelineDocument", into = "PipelineDocument")]
pub struct Pipeline {
    /// Schema version, e.g. `v1`.
    pub api_version: Option<String>,
    /// Document kind, e.g. `Pipeline`.
    pub kind: Option<String>,
    /// Opaque metadata block.
    pub metadata: Option<serde_yaml::Value>,
    /// The pipeline body; `None` when the document has no `spec`.
    pub spec: Option<PipelineSpec>,
}

impl Pipeline {
    /// Creates a `v1` pipeline holding the given tasks.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            api_version: Some("v1".to_string()),
            kind: Some("Pipeline".to_string()),
            metadata: None,
            spec: Some(PipelineSpec {
                product_data: None,
                tasks,
            }),
        }
    }

    /// Declared tasks in order, empty when there is no spec.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.spec.as_ref().map_or(&[], |spec| spec.tasks.as_slice())
    }

    /// Looks a task up by name. The first declaration wins.
    #[must_use]
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks().iter().find(|task| task.name == name)
    }
}

/// The body of a pipeline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineSpec {
    /// Product the pipeline belongs to.
    pub product_data: Option<ProductData>,
    /// Tasks in declaration order. Order matters for dependency resolution.
    pub tasks: Vec<Task>,
}

/// Product information attached to a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductData {
    /// Product name
    #[serde(default)]
    pub name: String,
}

/// A named unit of work with exactly one action
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique task name
    pub name: String,
    /// Declared type, kept verbatim so invalid values can be reported.
    pub task_type: String,
    /// Names of tasks this one depends on
    pub needs: Vec<String>,
    /// The task payload
    pub action: TaskAction,
}

impl Task {
    /// Creates a task whose type matches its action.
    #[must_use]
    pub fn new(name: impl Into<String>, action: TaskAction) -> Self {
        Self {
            name: name.into(),
            task_type: action.task_type().as_str().to_string(),
            needs: Vec::new(),
            action,
        }
    }

    /// Replaces the declared type string.
    #[must_use]
    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    /// Adds a dependency.
    #[must_use]
    pub fn needs(mut self, dependency: impl Into<String>) -> Self {
        self.needs.push(dependency.into());
        self
    }

    /// Parsed task type, `None` when the declared value is not recognised.
    #[must_use]
    pub fn parsed_type(&self) -> Option<TaskType> {
        self.task_type.parse().ok()
    }
}

/// The payload of a task; exactly one variant per task
#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
    /// Build payload
    Build(Build),
    /// Release payload
    Release(Release),
    /// Deployment payload
    Deployment(Deployment),
}

impl TaskAction {
    /// Document key the payload is read from.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.task_type().as_str()
    }

    /// The task type this payload naturally belongs to.
    #[must_use]
    pub fn task_type(&self) -> TaskType {
        match self {
            Self::Build(_) => TaskType::Build,
            Self::Release(_) => TaskType::Release,
            Self::Deployment(_) => TaskType::Deployment,
        }
    }
}

/// Build task configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    /// Image or environment the build runs in
    pub environment: String,
    /// Build command
    pub command: String,
}

impl Build {
    /// Creates a build payload.
    #[must_use]
    pub fn new(environment: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            command: command.into(),
        }
    }
}

/// Release task configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    /// Version bump level, e.g. `minor`
    pub level: String,
    /// Release flavour, e.g. `semver`
    #[serde(rename = "type")]
    pub release_type: String,
    /// Free-form release metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_yaml::Value>>,
}

impl Release {
    /// Creates a release payload without metadata.
    #[must_use]
    pub fn new(level: impl Into<String>, release_type: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            release_type: release_type.into(),
            metadata: None,
        }
    }
}

/// Deployment task configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    /// Target environment
    pub environment: String,
    /// Release being deployed
    pub release: ReleaseRef,
}

impl Deployment {
    /// Creates a deployment of the release produced by `release_task`.
    #[must_use]
    pub fn new(environment: impl Into<String>, release_task: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            release: ReleaseRef {
                task: release_task.into(),
            },
        }
    }
}

/// Reference to the release task a deployment ships
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseRef {
    /// Name of the release task
    pub task: String,
}
