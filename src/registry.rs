//! Persistent project registry backed by a single JSON file.
//!
//! The registry maps project names to records of three optional absolute
//! paths. Every load binds the registry to the file it came from; `save`
//! rewrites that file in full. Writes are deliberately non-transactional:
//! this is a single-user, single-shot tool and a torn write is an accepted
//! risk rather than something we recover from.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One registered LaTeX project. All fields start out null and are filled
/// in as the user sets them; any non-null value is an absolute path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub project_path: Option<PathBuf>,
    #[serde(default)]
    pub figures_path: Option<PathBuf>,
    #[serde(default)]
    pub texfile_path: Option<PathBuf>,
}

/// Addressable path fields of a [`Project`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathField {
    Project,
    Figures,
    Texfile,
}

/// On-disk document shape. Unrecognized top-level keys are ignored on load;
/// `path_config` records the file's own location but the bound path always
/// comes from the `load` argument.
#[derive(Debug, Serialize, Deserialize)]
struct RegistryDoc {
    #[serde(default)]
    projects: BTreeMap<String, Project>,
    #[serde(default)]
    path_config: Option<PathBuf>,
}

/// In-memory registry bound to its backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    projects: BTreeMap<String, Project>,
    path: PathBuf,
}

impl Registry {
    /// Load the registry from `path`, creating an empty backing file if none
    /// exists yet. Fails with [`AppError::Parse`] on malformed content.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let path = std::path::absolute(path)?;

        if !path.exists() {
            let registry = Self { projects: BTreeMap::new(), path };
            if let Some(parent) = registry.path.parent() {
                fs::create_dir_all(parent)?;
            }
            registry.save()?;
            return Ok(registry);
        }

        let content = fs::read_to_string(&path)?;
        let doc: RegistryDoc = serde_json::from_str(&content)
            .map_err(|e| AppError::Parse { path: path.clone(), details: e.to_string() })?;

        Ok(Self { projects: doc.projects, path })
    }

    /// Overwrite the backing file with the full current state in one shot.
    pub fn save(&self) -> Result<(), AppError> {
        let mut content = self.to_pretty_json()?;
        content.push('\n');
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Serialize the full registry document, including the bound path.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let doc = RegistryDoc {
            projects: self.projects.clone(),
            path_config: Some(self.path.clone()),
        };
        serde_json::to_string_pretty(&doc)
            .map_err(|e| AppError::config_error(format!("failed to serialize registry: {e}")))
    }

    /// Absolute path of the backing file.
    pub fn bound_path(&self) -> &Path {
        &self.path
    }

    /// Register a new project with all path fields null.
    pub fn add(&mut self, name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::config_error("project name must not be empty"));
        }
        if self.projects.contains_key(name) {
            return Err(AppError::ProjectExists(name.to_string()));
        }
        self.projects.insert(name.to_string(), Project::default());
        Ok(())
    }

    /// Remove a project from the registry. Registry-only: the project's
    /// files and directories on disk are never touched.
    pub fn delete(&mut self, name: &str) -> Result<(), AppError> {
        if self.projects.remove(name).is_none() {
            return Err(AppError::ProjectNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Read a path field as stored (may be null).
    pub fn get_path(&self, name: &str, field: PathField) -> Result<Option<&Path>, AppError> {
        let project = self
            .projects
            .get(name)
            .ok_or_else(|| AppError::ProjectNotFound(name.to_string()))?;
        let value = match field {
            PathField::Project => &project.project_path,
            PathField::Figures => &project.figures_path,
            PathField::Texfile => &project.texfile_path,
        };
        Ok(value.as_deref())
    }

    /// Set a path field, resolving relative input against the current
    /// working directory at call time. The target need not exist.
    pub fn set_path(&mut self, name: &str, field: PathField, value: &Path) -> Result<(), AppError> {
        let absolute = std::path::absolute(value)?;
        let project = self
            .projects
            .get_mut(name)
            .ok_or_else(|| AppError::ProjectNotFound(name.to_string()))?;
        match field {
            PathField::Project => project.project_path = Some(absolute),
            PathField::Figures => project.figures_path = Some(absolute),
            PathField::Texfile => project.texfile_path = Some(absolute),
        }
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Clear all records, keeping the bound path.
    pub fn reset(&mut self) {
        self.projects.clear();
    }
}
