//! Logging configuration
//!
//! Initializes tracing for the application. `RUST_LOG` takes precedence
//! over the level passed in.

/// Initializes logging with the specified level.
///
/// Returns `true` if this call installed the subscriber. Later calls keep
/// the existing subscriber, log the refusal at debug level and return `false`.
pub fn init_logging(level: &str) -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, requested = level, "Subscriber already installed, keeping it");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        // Another test may have installed one already, so only the second
        // call's outcome is fixed.
        init_logging("debug");
        assert!(!init_logging("info"));
        tracing::debug!("logging initialised");
    }
}
