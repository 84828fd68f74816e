use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for texproj operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Operation referenced a project name missing from the registry.
    #[error("Project '{0}' doesn't exist")]
    ProjectNotFound(String),

    /// Create collided with an existing project name.
    #[error("Project '{0}' already exists")]
    ProjectExists(String),

    /// Registry file is unreadable or has an incompatible shape.
    #[error("Malformed registry file {}: {details}", path.display())]
    Parse { path: PathBuf, details: String },

    /// Scaffolding requested before the project root path was set.
    #[error("Project '{0}' has no project path set")]
    ProjectPathUnset(String),

    /// A figure script or the build tool returned a nonzero exit status.
    #[error("Command '{command}' failed: {details}")]
    ExternalTool { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
