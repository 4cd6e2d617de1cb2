//! Error types for the command-line front-end.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("invalid color mode '{0}' (expected auto, always, or never)")]
    InvalidColor(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
