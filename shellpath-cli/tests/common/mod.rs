//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary home and scratch directory
//! - Command builder helpers isolated from the caller's environment
//! - Fixture helpers for building small trees

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory handed to the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder for the binary with a private home directory
    /// and no `SHELLPATH_*` variables inherited.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("shellpath").expect("Failed to find shellpath binary");
        cmd.env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env_remove("SHELLPATH_HOST_FAMILY")
            .env_remove("SHELLPATH_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Shell form of a path inside the environment.
    pub fn shell(&self, path: &Path) -> String {
        shellpath::PathEnv::native().to_shell(&path.to_string_lossy())
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with the given content, creating parents.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        let dir = self.home.join(".shellpath");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.yaml"), yaml).expect("Failed to write config");
    }
}
