//! Decoding pipeline documents into the typed model
//!
//! Documents are first read into a loose raw form mirroring the file
//! layout, then converted. The conversion is where each task's action is
//! selected: `build`, `release` and `deployment` are all checked before
//! deciding, and exactly one of them must be present.
//!
//! No cross-task checks happen here; see [`super::validator`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::DecodeError;
use super::model::{
    Build, Deployment, Pipeline, PipelineSpec, ProductData, Release, Task, TaskAction,
};

/// Serialization formats a pipeline document may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// YAML (the default)
    #[default]
    Yaml,
    /// JSON
    Json,
}

impl DocumentFormat {
    /// Picks the format from a file extension. Only `.json` selects JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Decodes a generic YAML document tree.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if the tree does not have the pipeline
/// shape, or the action errors if a task breaks the one-action rule.
pub fn from_document(document: serde_yaml::Value) -> Result<Pipeline, DecodeError> {
    let raw: PipelineDocument = serde_yaml::from_value(document)?;
    Pipeline::try_from(raw)
}

/// Decodes a generic JSON document tree.
///
/// # Errors
///
/// Same as [`from_document`].
pub fn from_json_document(document: serde_json::Value) -> Result<Pipeline, DecodeError> {
    let raw: PipelineDocument = serde_json::from_value(document)?;
    Pipeline::try_from(raw)
}

/// Parses and decodes YAML text.
///
/// # Errors
///
/// Same as [`from_document`], plus YAML syntax errors as
/// [`DecodeError::Malformed`].
pub fn from_yaml_str(text: &str) -> Result<Pipeline, DecodeError> {
    let raw: PipelineDocument = serde_yaml::from_str(text)?;
    Pipeline::try_from(raw)
}

/// Parses and decodes JSON text.
///
/// # Errors
///
/// Same as [`from_document`], plus JSON syntax errors as
/// [`DecodeError::Malformed`].
pub fn from_json_str(text: &str) -> Result<Pipeline, DecodeError> {
    let raw: PipelineDocument = serde_json::from_str(text)?;
    Pipeline::try_from(raw)
}

/// Parses and decodes text in the given format.
///
/// # Errors
///
/// See [`from_yaml_str`] and [`from_json_str`].
pub fn from_str(text: &str, format: DocumentFormat) -> Result<Pipeline, DecodeError> {
    match format {
        DocumentFormat::Yaml => from_yaml_str(text),
        DocumentFormat::Json => from_json_str(text),
    }
}

/// Raw pipeline document, as laid out in the file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(rename = "apiVersion", default, skip_serializing_if = "Option::is_none")]
    api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spec: Option<SpecDocument>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SpecDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    product_data: Option<ProductData>,
    #[serde(default)]
    tasks: Option<Vec<TaskDocument>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TaskDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    task_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    needs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build: Option<Build>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    release: Option<Release>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deployment: Option<Deployment>,
}

impl TryFrom<PipelineDocument> for Pipeline {
    type Error = DecodeError;

    fn try_from(raw: PipelineDocument) -> Result<Self, Self::Error> {
        let spec = raw
            .spec
            .map(|spec| -> Result<PipelineSpec, DecodeError> {
                let tasks = spec
                    .tasks
                    .unwrap_or_default()
                    .into_iter()
                    .map(Task::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PipelineSpec {
                    product_data: spec.product_data,
                    tasks,
                })
            })
            .transpose()?;

        tracing::debug!(
            tasks = spec.as_ref().map_or(0, |s| s.tasks.len()),
            has_spec = spec.is_some(),
            "Decoded pipeline document"
        );

        Ok(Self {
            api_version: raw.api_version,
            kind: raw.kind,
            metadata: raw.metadata,
            spec,
        })
    }
}

impl TryFrom<TaskDocument> for Task {
    type Error = DecodeError;

    fn try_from(raw: TaskDocument) -> Result<Self, Self::Error> {
        let name = raw.name.unwrap_or_default();

        // Count every variant before deciding so no key short-circuits another.
        let present: Vec<&'static str> = [
            ("build", raw.build.is_some()),
            ("release", raw.release.is_some()),
            ("deployment", raw.deployment.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, is_set)| is_set.then_some(key))
        .collect();

        let action = match (raw.build, raw.release, raw.deployment) {
            (Some(build), None, None) => TaskAction::Build(build),
            (None, Some(release), None) => TaskAction::Release(release),
            (None, None, Some(deployment)) => TaskAction::Deployment(deployment),
            (None, None, None) => return Err(DecodeError::MissingAction { task: name }),
            _ => {
                return Err(DecodeError::MultipleActions {
                    task: name,
                    actions: present,
                });
            }
        };

        Ok(Self {
            name,
            task_type: raw.task_type.unwrap_or_default(),
            needs: raw.needs.unwrap_or_default(),
            action,
        })
    }
}

impl From<Pipeline> for PipelineDocument {
    fn from(pipeline: Pipeline) -> Self {
        Self {
            api_version: pipeline.api_version,
            kind: pipeline.kind,
            metadata: pipeline.metadata,
            spec: pipeline.spec.map(|spec| SpecDocument {
                product_data: spec.product_data,
                tasks: Some(spec.tasks.into_iter().map(TaskDocument::from).collect()),
            }),
        }
    }
}

impl From<Task> for TaskDocument {
    fn from(task: Task) -> Self {
        let mut raw = Self {
            name: Some(task.name),
            task_type: Some(task.task_type),
            needs: Some(task.needs),
            ..Self::default()
        };
        match task.action {
            TaskAction::Build(build) => raw.build = Some(build),
            TaskAction::Release(release) => raw.release = Some(release),
            TaskAction::Deployment(deployment) => raw.deployment = Some(deployment),
        }
        raw
    }
}
