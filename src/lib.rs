//! texproj: manage LaTeX project paths and deploy project template scaffolding.

pub mod confirm;
pub mod error;
pub mod registry;
pub mod scaffold;
pub mod templates;
pub mod tools;

use std::path::PathBuf;

pub use confirm::{AutoConfirm, Confirmation, InteractiveConfirm};
pub use error::AppError;
pub use registry::{PathField, Project, Registry};

/// Default registry file location: `$HOME/.config/texproj/registry.json`.
///
/// Only the CLI layer consults this; the library threads explicit paths
/// through [`Registry::load`] so tests can bind arbitrary locations.
pub fn default_registry_path() -> Result<PathBuf, AppError> {
    let home = std::env::var("HOME")
        .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("texproj").join("registry.json"))
}
