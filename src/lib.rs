//! # ccs - CI/CD Standard pipeline schema
//!
//! `ccs` describes a CI/CD pipeline as an ordered list of named tasks
//! (build, release, deployment). Each task carries exactly one typed action
//! payload and may depend on tasks declared before it.
//!
//! ## Quick Start
//!
//! ```
//! use ccs::prelude::*;
//!
//! let yaml = r"
//! apiVersion: v1
//! kind: Pipeline
//! spec:
//!   tasks:
//!   - name: build_app
//!     type: build
//!     build:
//!       environment: my-docker-image
//!       command: docker build .
//!   - name: release_app
//!     type: release
//!     needs: [build_app]
//!     release:
//!       level: minor
//!       type: semver
//! ";
//!
//! let pipeline = decode::from_yaml_str(yaml)?;
//! pipeline.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Structure
//!
//! - [`pipeline::decode`]: documents (YAML, JSON, or already-parsed trees) to
//!   the typed model, enforcing one action per task
//! - [`pipeline::validator`]: name, type and dependency checks over the model
//! - [`pipeline::scaffold`]: starter pipeline generation
//! - [`infrastructure`]: configuration and logging
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod pipeline;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::Config;
pub use pipeline::{
    Build, DecodeError, Deployment, DocumentFormat, Pipeline, PipelineError, PipelineSpec, Release,
    Task, TaskAction, TaskType, Validate, ValidationError,
};

/// Version of the ccs crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
