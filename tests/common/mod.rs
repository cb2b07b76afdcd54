//! Common test utilities for xpress integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A project directory for integration tests
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// xpress command running against this project
    #[allow(deprecated)]
    pub fn xpress(&self) -> Command {
        let mut cmd = Command::cargo_bin("xpress").expect("xpress binary not built");
        cmd.env_remove("XPRESS_WORKSPACE")
            .env_remove("XPRESS_TEMPLATES")
            .env_remove("XPRESS_LOG")
            .arg("--workspace")
            .arg(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
