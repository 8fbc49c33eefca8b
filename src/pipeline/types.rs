//! Core types for the pipeline domain
//!
//! This module contains the small value types shared by the model,
//! the decoder and the validator.

#![allow(clippy::must_use_candidate)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of task a pipeline may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Produces an artifact
    Build,
    /// Versions and publishes an artifact
    Release,
    /// Rolls a release out to an environment
    Deployment,
}

impl TaskType {
    /// Every accepted task type, in schema order.
    pub const ALL: [TaskType; 3] = [Self::Build, Self::Release, Self::Deployment];

    /// Returns the lowercase name used in pipeline documents
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Release => "release",
            Self::Deployment => "deployment",
        }
    }

    /// Space-separated list of names, e.g. `build release deployment`.
    #[must_use]
    pub fn join(types: &[TaskType]) -> String {
        types
            .iter()
            .map(TaskType::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Trait for types that can be validated
#[allow(clippy::missing_errors_doc)]
pub trait Validate {
    /// Type of validation error
    type Error;

    /// Validates this type
    fn validate(&self) -> std::result::Result<(), Self::Error>;
}
