//! CLI error types.

use std::fmt;

use offlinelayer::config::ConfigError;

/// Errors that can occur while running a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded or was invalid.
    Config(ConfigError),

    /// Filesystem error while scanning.
    Io(std::io::Error),

    /// Output serialization failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Serialize(e) => write!(f, "Failed to serialize output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Serialize(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e)
    }
}
