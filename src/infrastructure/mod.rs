//! Infrastructure layer
//!
//! Configuration and logging setup shared by the binary.

mod config;
mod logging;

pub use config::{Config, FILE_ENV, LOG_LEVEL_ENV};
pub use logging::init_logging;
