//! Shared test utilities for the jshint-prefs workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`node`] — preference node doubles, including one that always fails
//! - [`project`] — [`TestProject`] builder for on-disk project scenarios

pub mod node;
pub mod project;

pub use node::{FailOn, FailingNode};
pub use project::TestProject;
