//! List the enabled paths of a project

use colored::Colorize;
use prefs_core::{ProjectPreferences, ProjectScope};

use crate::error::Result;

/// Run the list command
pub fn run_list(scope: ProjectScope, json: bool) -> Result<()> {
    let prefs = ProjectPreferences::open(scope)?;
    let paths = prefs.enablement().included_paths()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if paths.is_empty() {
        println!("{}", "JSHint is not enabled for any resource.".dimmed());
        return Ok(());
    }

    println!("{}", "Enabled resources".bold());
    for path in &paths {
        println!("  {}", path.green());
    }
    println!();
    println!("{} {}", "Total:".dimmed(), paths.len());

    Ok(())
}
