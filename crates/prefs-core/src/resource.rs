//! Resource path derivation
//!
//! Preferences key resources by their project-relative path in portable,
//! forward-slash form. [`resource_path`] is the pure transform;
//! [`Resource`] is the seam to whatever host knows where a resource lives.

use std::path::{Path, PathBuf};

use prefs_store::NormalizedPath;

/// Something that can report its location relative to its project.
pub trait Resource {
    fn project_relative_path(&self) -> PathBuf;
}

/// Convert a project-relative path into its portable string form.
///
/// Backslashes become `/`, a leading `./` and trailing `/` are dropped.
/// The project itself maps to `""`.
pub fn resource_path(relative: impl AsRef<Path>) -> String {
    let normalized = NormalizedPath::new(relative);
    let mut portable = normalized.as_str();

    while let Some(rest) = portable.strip_prefix("./") {
        portable = rest;
    }
    if portable == "." {
        portable = "";
    }

    portable.trim_end_matches('/').to_string()
}

/// Portable path of a resource, as stored in preferences.
pub fn resource_path_of(resource: &impl Resource) -> String {
    resource_path(resource.project_relative_path())
}

/// A file or folder on disk inside a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectResource {
    project_root: PathBuf,
    location: PathBuf,
}

impl ProjectResource {
    /// `location` may be absolute or relative to `project_root`.
    pub fn new(project_root: impl Into<PathBuf>, location: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let location = location.into();
        let location = if location.is_absolute() {
            location
        } else {
            project_root.join(location)
        };
        Self {
            project_root,
            location,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn exists(&self) -> bool {
        self.location.exists()
    }
}

impl Resource for ProjectResource {
    /// Path below the project root; a location outside the project is
    /// returned unchanged.
    fn project_relative_path(&self) -> PathBuf {
        let root = NormalizedPath::new(&self.project_root);
        let location = NormalizedPath::new(&self.location);
        match location.strip_prefix(&root) {
            Some(relative) => relative.to_native(),
            None => {
                tracing::warn!(
                    location = %location,
                    project = %root,
                    "Resource lies outside its project"
                );
                self.location.clone()
            }
        }
    }
}
