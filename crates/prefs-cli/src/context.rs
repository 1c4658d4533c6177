//! Project context detection
//!
//! Finds the project a command applies to. An explicit `--project` wins;
//! otherwise the directory tree is walked up from the working directory
//! until a project marker is found, so commands work from anywhere inside
//! a project.

use std::path::{Component, Path, PathBuf};

use prefs_core::{ProjectResource, ProjectScope, ScopeSettings, resource_path_of};

use crate::error::{CliError, Result};

/// File marking the root of an Eclipse project
const PROJECT_DESCRIPTOR: &str = ".project";

/// The project context detected for a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectContext {
    /// Directory holding a `.project` descriptor
    Descriptor { path: PathBuf },

    /// Directory already holding a preference settings directory
    Settings { path: PathBuf },

    /// No marker found; the starting directory is used as is
    Unmarked { path: PathBuf },
}

impl ProjectContext {
    pub fn root_path(&self) -> &Path {
        match self {
            ProjectContext::Descriptor { path }
            | ProjectContext::Settings { path }
            | ProjectContext::Unmarked { path } => path,
        }
    }
}

/// Detect the project context from the given directory
///
/// Walks up the directory tree looking for, in each directory:
/// - a `.project` descriptor
/// - the settings directory named by `settings`
pub fn detect_context(cwd: &Path, settings: &ScopeSettings) -> ProjectContext {
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(PROJECT_DESCRIPTOR).is_file() {
            return ProjectContext::Descriptor { path: current };
        }
        if current.join(&settings.settings_dir).is_dir() {
            return ProjectContext::Settings { path: current };
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    ProjectContext::Unmarked {
        path: cwd.to_path_buf(),
    }
}

/// Load scope settings from an optional TOML file.
pub fn load_settings(path: Option<&Path>) -> Result<ScopeSettings> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                CliError::user(format!("Cannot read settings {}: {}", path.display(), e))
            })?;
            Ok(ScopeSettings::parse(&content)?)
        }
        None => Ok(ScopeSettings::default()),
    }
}

/// Resolve the preference scope for a command.
pub fn resolve_scope(
    project: Option<&Path>,
    settings_file: Option<&Path>,
    cwd: &Path,
) -> Result<ProjectScope> {
    let settings = load_settings(settings_file)?;

    let root = match project {
        Some(project) => {
            let root = cwd.join(project);
            if !root.is_dir() {
                return Err(CliError::user(format!(
                    "Project directory not found: {}",
                    project.display()
                )));
            }
            resolve_dots(&root)?
        }
        None => {
            let context = detect_context(cwd, &settings);
            tracing::debug!(?context, "Detected project context");
            context.root_path().to_path_buf()
        }
    };

    Ok(ProjectScope::new(root, settings))
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// Fails when `..` climbs above the start of `path`.
fn resolve_dots(path: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !resolved.pop() {
                    return Err(CliError::user(format!(
                        "Cannot resolve {}: too many '..' components",
                        path.display()
                    )));
                }
            }
            Component::CurDir => {}
            _ => resolved.push(component),
        }
    }

    Ok(resolved)
}

/// Turn a command-line path into the path stored in preferences.
///
/// Relative paths are taken relative to the project root, absolute paths
/// as given. Either way the resolved location must lie inside the project.
pub fn to_resource_path(scope: &ProjectScope, path: &Path) -> Result<String> {
    let root = resolve_dots(&std::path::absolute(scope.root().to_native())?)?;
    let location = resolve_dots(&root.join(path))
        .map_err(|_| outside_project(path, &root))?;

    if !location.starts_with(&root) {
        return Err(outside_project(path, &root));
    }

    Ok(resource_path_of(&ProjectResource::new(root, location)))
}

fn outside_project(path: &Path, root: &Path) -> CliError {
    CliError::user(format!(
        "{} is outside project {}",
        path.display(),
        root.display()
    ))
}
