//! Project scaffolding: deploy the template bundle into a project tree.

use std::fs;
use std::path::Path;

use crate::confirm::Confirmation;
use crate::error::AppError;
use crate::registry::{PathField, Registry};
use crate::templates::{self, TemplateFile};

/// Directory for generated figure scripts inside a project.
pub const FIGURES_DIR: &str = "figures";

/// Directory for secondary LaTeX sources inside a project.
pub const TEX_DIR: &str = "tex";

/// Copy the template bundle into the project's directory tree.
///
/// Requires the project's root path to be set. Creates the root, figures,
/// and tex directories (idempotent), then copies every template artifact
/// through [`copy_template`]. Conflicts are resolved per file, so a
/// declined overwrite never aborts the rest of the batch. At the end, one
/// aggregate prompt gates pointing the registry's figures/texfile fields at
/// the new locations, and the registry is persisted exactly once.
pub fn setup_template(
    name: &str,
    registry: &mut Registry,
    confirm: &dyn Confirmation,
) -> Result<(), AppError> {
    let root = registry
        .get_path(name, PathField::Project)?
        .ok_or_else(|| AppError::ProjectPathUnset(name.to_string()))?
        .to_path_buf();
    let figures_dir = root.join(FIGURES_DIR);
    let tex_dir = root.join(TEX_DIR);

    fs::create_dir_all(&root)?;
    fs::create_dir_all(&figures_dir)?;
    fs::create_dir_all(&tex_dir)?;

    let main_tex = root.join("main.tex");
    copy_template(&templates::main_tex()?, &main_tex, confirm)?;
    copy_template(&templates::makefile()?, &root.join("makefile"), confirm)?;

    for script in templates::figure_scripts() {
        copy_template(&script, &figures_dir.join(&script.name), confirm)?;
    }
    for source in templates::tex_sources() {
        copy_template(&source, &tex_dir.join(&source.name), confirm)?;
    }

    let update_paths = confirm.confirm(&format!(
        "Point project '{name}' figures/texfile paths at the new template locations?"
    ))?;
    if update_paths {
        registry.set_path(name, PathField::Figures, &figures_dir)?;
        registry.set_path(name, PathField::Texfile, &main_tex)?;
    }

    registry.save()?;
    println!("Template created in {}", root.display());
    Ok(())
}

/// Copy one template file to `destination`, asking before overwriting.
///
/// A declined overwrite skips this file only.
fn copy_template(
    file: &TemplateFile,
    destination: &Path,
    confirm: &dyn Confirmation,
) -> Result<(), AppError> {
    if destination.exists() {
        let overwrite = confirm
            .confirm(&format!("File '{}' already exists. Overwrite?", destination.display()))?;
        if !overwrite {
            println!("Skipping {}", destination.display());
            return Ok(());
        }
    }
    fs::write(destination, file.contents)?;
    Ok(())
}
