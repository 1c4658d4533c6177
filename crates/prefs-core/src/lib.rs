//! JSHint enablement preferences
//!
//! Tracks which resources of a project have JSHint linting enabled. The
//! set of enabled paths is kept as one encoded value in a project-scoped
//! preference node:
//!
//! - **Path codec**: [`PathEncoder`] turns a path list into one string and back
//! - **Facade**: [`EnablementPreferences`] answers and updates per-path
//!   inclusion and tracks whether the stored value changed
//! - **Resources**: [`resource_path`] derives the portable path a resource is
//!   stored under
//! - **Scope**: [`ProjectScope`] / [`ProjectPreferences`] locate, open and save
//!   a project's node
//!
//! # Example
//!
//! ```
//! use prefs_core::EnablementPreferences;
//! use prefs_store::MemoryNode;
//!
//! let node = MemoryNode::new("example");
//! let mut prefs = EnablementPreferences::new(&node);
//!
//! prefs.set_included("src/app.js", true).unwrap();
//!
//! assert!(prefs.is_included("src/app.js").unwrap());
//! assert!(prefs.has_changed());
//! ```

pub mod codec;
pub mod enablement;
pub mod error;
pub mod resource;
pub mod scope;

pub use codec::PathEncoder;
pub use enablement::{DEF_INCLUDED, EnablementPreferences, KEY_INCLUDED};
pub use error::{Error, Result};
pub use resource::{ProjectResource, Resource, resource_path, resource_path_of};
pub use scope::{ProjectPreferences, ProjectScope, ScopeSettings};
