//! [`TestProject`] builder for on-disk project scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative location of the default node file inside a project.
pub const DEFAULT_NODE_FILE: &str = ".settings/com.eclipsesource.jshint.ui.toml";

/// A temporary project directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use prefs_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.add_file("src/app.js");
/// project.write_node("includedPaths = \"src/app.js\"\n");
/// project.assert_file_exists(".settings/com.eclipsesource.jshint.ui.toml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Create an empty file (and its parents) at `relative`.
    pub fn add_file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }

    /// Write raw content to the default node file.
    pub fn write_node(&self, content: &str) {
        let path = self.path(DEFAULT_NODE_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Read the default node file, if it exists.
    pub fn read_node(&self) -> Option<String> {
        fs::read_to_string(self.path(DEFAULT_NODE_FILE)).ok()
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
