//! Shared testing utilities for texproj CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// `$HOME` points into the temp root, so the default registry location
/// never touches the real user configuration.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default registry location under the emulated `$HOME`.
    pub fn registry_path(&self) -> PathBuf {
        self.home().join(".config").join("texproj").join("registry.json")
    }

    /// Build a command for invoking the compiled `texproj` binary.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir.clone())
    }

    /// Build a command running in a custom working directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("texproj").expect("Failed to locate texproj binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.home());
        cmd
    }

    /// Parse the registry file into a JSON value.
    pub fn read_registry(&self) -> serde_json::Value {
        let content =
            fs::read_to_string(self.registry_path()).expect("Failed to read registry file");
        serde_json::from_str(&content).expect("Registry file is not valid JSON")
    }

    /// Record for one project in the registry file.
    pub fn project_record(&self, name: &str) -> serde_json::Value {
        self.read_registry()["projects"][name].clone()
    }
}
