//! Preference node doubles.

use prefs_store::{Error, PreferenceNode, Result};

/// Which operations a [`FailingNode`] rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    /// Every operation fails.
    All,
    /// Reads succeed with the default, writes fail.
    Writes,
}

/// A node whose backing store is unavailable.
///
/// Used to check that store failures reach the caller untouched.
#[derive(Debug)]
pub struct FailingNode {
    fail_on: FailOn,
}

impl FailingNode {
    pub fn new(fail_on: FailOn) -> Self {
        Self { fail_on }
    }

    fn failure(&self, operation: &str) -> Error {
        Error::backing_store("failing", format!("{operation} rejected"))
    }
}

impl PreferenceNode for FailingNode {
    fn name(&self) -> &str {
        "failing"
    }

    fn get(&self, _key: &str, default: &str) -> Result<String> {
        match self.fail_on {
            FailOn::All => Err(self.failure("get")),
            FailOn::Writes => Ok(default.to_string()),
        }
    }

    fn put(&self, _key: &str, _value: &str) -> Result<()> {
        Err(self.failure("put"))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(self.failure("remove"))
    }

    fn keys(&self) -> Result<Vec<String>> {
        match self.fail_on {
            FailOn::All => Err(self.failure("keys")),
            FailOn::Writes => Ok(Vec::new()),
        }
    }

    fn flush(&self) -> Result<()> {
        Err(self.failure("flush"))
    }
}
