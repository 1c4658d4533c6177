//! Include, exclude and clear commands

use std::path::PathBuf;

use colored::Colorize;
use prefs_core::{ProjectPreferences, ProjectScope};

use crate::context::to_resource_path;
use crate::error::{CliError, Result};

/// Run the include command
pub fn run_include(scope: ProjectScope, paths: &[PathBuf]) -> Result<()> {
    set_included(scope, paths, true)
}

/// Run the exclude command
pub fn run_exclude(scope: ProjectScope, paths: &[PathBuf]) -> Result<()> {
    set_included(scope, paths, false)
}

/// Run the clear command
pub fn run_clear(scope: ProjectScope) -> Result<()> {
    let mut prefs = ProjectPreferences::open(scope)?;
    let count = prefs.enablement().included_paths()?.len();

    prefs.enablement_mut().set_included_paths::<String>(&[])?;

    if prefs.save()? {
        println!("{} Disabled JSHint for {} resource(s)", "ok:".green().bold(), count);
    } else {
        println!("{}", "Nothing to clear.".dimmed());
    }
    Ok(())
}

fn set_included(scope: ProjectScope, paths: &[PathBuf], included: bool) -> Result<()> {
    let resource_paths = paths
        .iter()
        .map(|path| to_resource_path(&scope, path))
        .collect::<Result<Vec<_>>>()?;

    if resource_paths.iter().any(|p| p.is_empty()) {
        return Err(CliError::user(
            "The project itself cannot be enabled; name a folder or file inside it",
        ));
    }

    let mut prefs = ProjectPreferences::open(scope)?;
    let mut changed = Vec::new();
    for path in &resource_paths {
        if prefs.enablement().is_included(path)? != included {
            prefs.enablement_mut().set_included(path, included)?;
            changed.push(path);
        }
    }

    let verb = if included { "Enabled" } else { "Disabled" };
    if prefs.save()? {
        for path in changed {
            println!("{} {} JSHint for {}", "ok:".green().bold(), verb, path.cyan());
        }
    } else {
        println!("{}", "No changes.".dimmed());
    }
    Ok(())
}
