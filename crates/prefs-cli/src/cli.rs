//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// JSHint enablement preferences - choose which project resources get linted
#[derive(Parser, Debug)]
#[command(name = "jshint-prefs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory (defaults to the nearest enclosing project)
    #[arg(short, long, global = true, env = "JSHINT_PREFS_PROJECT")]
    pub project: Option<PathBuf>,

    /// TOML file overriding where the preference node is stored
    #[arg(long, global = true, env = "JSHINT_PREFS_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the paths JSHint is enabled for
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Enable JSHint for resources
    ///
    /// Relative paths are taken relative to the project root; absolute
    /// paths must lie inside the project.
    ///
    /// Examples:
    ///   jshint-prefs include src            # Enable a folder
    ///   jshint-prefs include src/a.js lib   # Enable several resources
    Include {
        /// Resources to enable
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Disable JSHint for resources
    Exclude {
        /// Resources to disable
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Report whether JSHint is enabled for a resource
    Check {
        /// Resource to check
        path: PathBuf,
    },

    /// Disable JSHint for every resource of the project
    Clear,

    /// Show where the preference node of the project is stored
    Where,
}
