use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading or resolving environments
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("unknown parent: \"{0}\"")]
    UnknownParent(String),

    #[error("circular parent reference: {}", path.join(" > "))]
    CircularReference { path: Vec<String> },

    #[error("unknown target \"{target}\" for \"{environment}\" environment")]
    UnknownTarget { target: String, environment: String },

    #[error("no {kind} entry \"{label}\" in \"{environment}\" environment")]
    UnknownCommand {
        kind: String,
        label: String,
        environment: String,
    },

    #[error("no remote hosts configured for \"{environment}\" environment")]
    NoHosts { environment: String },

    #[error("Failed to parse {}: {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for hostenv operations
pub type Result<T> = std::result::Result<T, Error>;
