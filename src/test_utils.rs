//! Test utilities for building temporary route directory trees.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Route handler files used by the reference fixture, relative to its root.
pub const FIXTURE_FILES: &[&str] = &[
    "bf01.route.js",
    "x.api.slashes.routes.js",
    "x.api.user-accounts.routes.js",
    "index.routes.js",
    "rm01.miss.js",
    "df01/df01.route.js",
];

/// A temporary directory tree for testing.
///
/// The directory is removed when the value is dropped.
pub struct RouteTree {
    dir: TempDir,
}

impl RouteTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create the reference fixture: five route files at the top level and
    /// one in the `df01` sub-directory.
    pub fn fixture() -> Self {
        let tree = Self::new();
        for file in FIXTURE_FILES {
            tree.add_file(file);
        }
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a stub route handler file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        self.add_file_with(path, "module.exports = function () {};\n")
    }

    /// Add a file with the given content, creating parent directories as needed.
    pub fn add_file_with(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for RouteTree {
    fn default() -> Self {
        Self::new()
    }
}
