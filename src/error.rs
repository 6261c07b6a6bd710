//! Error types for the engine.

use crate::config::ConfigError;
use std::io;
use thiserror::Error;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum Error {
    /// Character definitions could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The terminal could not be set up or a worker thread could not start.
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),

    /// Frames kept failing to reach the terminal.
    #[error("failed to draw {failures} frames in a row: {source}")]
    Render {
        /// Consecutive failures observed.
        failures: u32,
        /// The last failure.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err = Error::from(ConfigError::HomeDirUnavailable);
        assert!(matches!(err, Error::Config(ConfigError::HomeDirUnavailable)));
        assert_eq!(err.to_string(), "could not determine the home directory");
    }

    #[test]
    fn test_render_error_keeps_source() {
        let err = Error::Render {
            failures: 5,
            source: io::Error::other("broken pipe"),
        };
        assert_eq!(err.to_string(), "failed to draw 5 frames in a row: broken pipe");
        assert!(std::error::Error::source(&err).is_some());
    }
}
