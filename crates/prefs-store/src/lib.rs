//! Preference node storage for JSHint enablement preferences
//!
//! Provides the [`PreferenceNode`] contract together with an in-memory and a
//! file-backed implementation, plus the portable-path and atomic I/O helpers
//! the file backend is built on.

pub mod config;
pub mod error;
pub mod file;
pub mod io;
pub mod memory;
pub mod node;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use file::FileNode;
pub use memory::MemoryNode;
pub use node::PreferenceNode;
pub use path::NormalizedPath;
