//! Error types for the generation pipeline

use std::io;
use std::path::PathBuf;

/// Errors raised while collecting a request, rendering, or writing artifacts.
///
/// Only [`GenerateError::Prompt`] and [`GenerateError::Template`] registration
/// failures end a run; directory and file errors are reported as events and
/// decide whether the flow aborts or moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The target directory could not be created. Fatal to the current flow.
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single artifact file could not be written. The flow continues.
    #[error("failed to write file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The interactive input capability failed (closed stream, interrupt).
    #[error("prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// A template could not be registered or rendered.
    #[error("template '{name}' failed: {message}")]
    Template { name: &'static str, message: String },

    /// The project configuration file could not be read or parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A request was built with a missing or empty field.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The prompter answered a question with the wrong kind of answer.
    #[error("unexpected answer for question '{question}'")]
    UnexpectedAnswer { question: &'static str },
}

impl GenerateError {
    /// Path involved in a filesystem failure, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GenerateError::DirectoryCreation { path, .. }
            | GenerateError::FileWrite { path, .. }
            | GenerateError::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}
