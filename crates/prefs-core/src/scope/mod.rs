//! Project-scoped preference location and lifecycle
//!
//! Each project keeps its JSHint preferences in a node file below the
//! project root:
//!
//! ```text
//! <project>/
//!   .settings/
//!     com.eclipsesource.jshint.ui.toml   includedPaths = "src:test/spec.js"
//! ```
//!
//! [`ScopeSettings`] says where that file is, [`ProjectScope`] resolves it
//! for one project, and [`ProjectPreferences`] ties the opened node to an
//! [`EnablementPreferences`](crate::EnablementPreferences) facade.

mod project;
mod settings;

pub use project::{ProjectPreferences, ProjectScope};
pub use settings::ScopeSettings;
