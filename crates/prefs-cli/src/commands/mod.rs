//! Command implementations for prefs-cli

pub mod check;
pub mod enable;
pub mod list;

pub use check::{run_check, run_where};
pub use enable::{run_clear, run_exclude, run_include};
pub use list::run_list;
