//! Embedded template bundle for project scaffolding.
//!
//! The whole `templates/` tree ships inside the binary via `include_dir`,
//! so scaffolding works without any installed support files.

use include_dir::{Dir, include_dir};

use crate::error::AppError;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// A single file from the template bundle.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// File name without any directory component.
    pub name: String,
    /// Raw content, copied byte-for-byte into the project tree.
    pub contents: &'static [u8],
}

/// The main document template (`main.tex`).
pub fn main_tex() -> Result<TemplateFile, AppError> {
    bundled_file("main.tex")
}

/// The build-description template (`makefile`).
pub fn makefile() -> Result<TemplateFile, AppError> {
    bundled_file("makefile")
}

/// Every figure script in the bundle (`figures/*.py`), sorted by name.
pub fn figure_scripts() -> Vec<TemplateFile> {
    bundled_dir_files("figures", "py")
}

/// Every secondary LaTeX source in the bundle (`tex/*.tex`), sorted by name.
pub fn tex_sources() -> Vec<TemplateFile> {
    bundled_dir_files("tex", "tex")
}

fn bundled_file(name: &str) -> Result<TemplateFile, AppError> {
    let file = TEMPLATE_DIR
        .get_file(name)
        .ok_or_else(|| AppError::config_error(format!("template bundle is missing '{name}'")))?;
    Ok(TemplateFile { name: name.to_string(), contents: file.contents() })
}

fn bundled_dir_files(dir: &str, extension: &str) -> Vec<TemplateFile> {
    let Some(subdir) = TEMPLATE_DIR.get_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<TemplateFile> = subdir
        .files()
        .filter(|f| f.path().extension().and_then(|e| e.to_str()) == Some(extension))
        .filter_map(|f| {
            f.path().file_name().and_then(|n| n.to_str()).map(|name| TemplateFile {
                name: name.to_string(),
                contents: f.contents(),
            })
        })
        .collect();

    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}
