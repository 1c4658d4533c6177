//! Query commands: check and where

use std::path::Path;

use colored::Colorize;
use prefs_core::{ProjectPreferences, ProjectScope};

use crate::context::to_resource_path;
use crate::error::Result;

/// Run the check command
pub fn run_check(scope: ProjectScope, path: &Path) -> Result<()> {
    let resource_path = to_resource_path(&scope, path)?;
    let prefs = ProjectPreferences::open(scope)?;

    if prefs.enablement().is_included(&resource_path)? {
        println!("{} {}", resource_path.cyan(), "included".green());
    } else {
        println!("{} {}", resource_path.cyan(), "excluded".yellow());
    }
    Ok(())
}

/// Run the where command
pub fn run_where(scope: &ProjectScope) -> Result<()> {
    let node_path = scope.node_path();
    let state = if node_path.exists() { "" } else { " (not yet created)" };
    println!("{}{}", node_path, state.dimmed());
    Ok(())
}
