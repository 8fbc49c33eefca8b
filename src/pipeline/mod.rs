//! Pipeline domain types and logic
//!
//! Loading a pipeline is two steps: [`decode`] turns a document into the
//! typed [`Pipeline`] model, then [`validator`] checks the model's structure.

pub mod decode;
pub mod errors;
pub mod model;
pub mod scaffold;
pub mod types;
pub mod validator;


pub use decode::DocumentFormat;
pub use errors::{DecodeError, PipelineError, ValidationError};
pub use model::{
    Build, Deployment, Pipeline, PipelineSpec, ProductData, Release, ReleaseRef, Task, TaskAction,
};
pub use types::{TaskType, Validate};
pub use validator::validate;

/// Decodes and validates a document in one step.
///
/// # Errors
///
/// Returns [`PipelineError::Decode`] if the document cannot be decoded, or
/// [`PipelineError::Validation`] with the first structural violation.
pub fn load(text: &str, format: DocumentFormat) -> Result<Pipeline, PipelineError> {
    let pipeline = decode::from_str(text, format)?;
    validate(&pipeline)?;
    Ok(pipeline)
}
