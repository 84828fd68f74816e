//! External tool invocations: the LaTeX build and figure generation.
//!
//! Both collaborators are opaque subprocesses. Their stdout/stderr stream
//! straight through to the user; texproj only inspects the exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::AppError;

/// Interpreter used for figure scripts.
const FIGURE_INTERPRETER: &str = "python3";

/// LaTeX build tool.
const BUILD_TOOL: &str = "latexmk";

/// Compile the main document with `latexmk -pdf`, running in the project
/// root. Returns the expected output path (texfile with a `.pdf` extension).
pub fn compile_document(texfile: &Path, project_root: &Path) -> Result<PathBuf, AppError> {
    let command = format!("{BUILD_TOOL} -pdf {}", texfile.display());
    let status = Command::new(BUILD_TOOL)
        .arg("-pdf")
        .arg(texfile)
        .current_dir(project_root)
        .status()
        .map_err(|e| AppError::ExternalTool { command: command.clone(), details: e.to_string() })?;

    if !status.success() {
        return Err(AppError::ExternalTool { command, details: status.to_string() });
    }

    Ok(texfile.with_extension("pdf"))
}

/// Run every figure script found directly inside `figures_dir` with the
/// figure interpreter, in sorted order. The first failing script aborts
/// the remaining ones.
pub fn run_figure_scripts(figures_dir: &Path) -> Result<(), AppError> {
    for script in list_figure_scripts(figures_dir)? {
        println!("Running {}...", script.display());
        let command = format!("{FIGURE_INTERPRETER} {}", script.display());
        let status = Command::new(FIGURE_INTERPRETER)
            .arg(&script)
            .current_dir(figures_dir)
            .status()
            .map_err(|e| AppError::ExternalTool {
                command: command.clone(),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::ExternalTool { command, details: status.to_string() });
        }
    }
    Ok(())
}

/// Regular `*.py` files directly inside `directory`, sorted. Non-recursive.
fn list_figure_scripts(directory: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut scripts = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("py") {
            scripts.push(path);
        }
    }
    scripts.sort();
    Ok(scripts)
}
