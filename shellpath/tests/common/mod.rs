//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the shellpath library.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shellpath::{Filesystem, MemoryLog, PathEnv};
use tempfile::TempDir;

/// A scratch directory plus a filesystem handle logging into memory.
#[allow(dead_code)]
pub struct Scratch {
    dir: TempDir,
    /// Filesystem handle for the native platform.
    pub fs: Filesystem,
    /// Everything the handle logged.
    pub log: Arc<MemoryLog>,
}

#[allow(dead_code)]
impl Scratch {
    /// Create an empty scratch directory.
    pub fn new() -> Self {
        let log = Arc::new(MemoryLog::new());
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            fs: Filesystem::native().with_logger(log.clone()),
            log,
        }
    }

    /// Host path of an entry inside the scratch directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Shell form of an entry inside the scratch directory.
    pub fn shell(&self, rel: &str) -> String {
        shell_of(&self.path(rel))
    }

    /// Write a file, creating its parents.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create a directory, including parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }
}

/// Shell form of a host path on this platform.
#[allow(dead_code)]
pub fn shell_of(path: &Path) -> String {
    PathEnv::native().to_shell(&path.to_string_lossy())
}
