//! Prelude module for common imports

pub use crate::pipeline::decode::{self, DocumentFormat};
pub use crate::pipeline::errors::{DecodeError, PipelineError, ValidationError};
pub use crate::pipeline::model::{
    Build, Deployment, Pipeline, PipelineSpec, ProductData, Release, ReleaseRef, Task, TaskAction,
};
pub use crate::pipeline::types::{TaskType, Validate};
pub use crate::pipeline::{load, validate};
