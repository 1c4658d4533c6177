//! The preference node contract
//!
//! A preference node is a persistent, string-keyed store scoped to a project
//! or workspace. Consumers depend only on [`PreferenceNode`]; the backing
//! store can be a file ([`FileNode`](crate::FileNode)), memory
//! ([`MemoryNode`](crate::MemoryNode)) or anything else that satisfies it.

use std::rc::Rc;
use std::sync::Arc;

use crate::Result;

/// A string key/value preference store.
///
/// Every method takes `&self`: a node is a handle onto shared state, so
/// several consumers can hold the same node and observe each other's
/// writes. Implementations use interior mutability and are not expected to
/// be `Sync`.
pub trait PreferenceNode {
    /// Name of the node, used in diagnostics.
    fn name(&self) -> &str;

    /// Get the value stored under `key`, or `default` when there is none.
    fn get(&self, key: &str, default: &str) -> Result<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key does nothing.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored, in sorted order.
    fn keys(&self) -> Result<Vec<String>>;

    /// Persist pending changes to the backing store.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: PreferenceNode + ?Sized> PreferenceNode for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str, default: &str) -> Result<String> {
        (**self).get(key, default)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: PreferenceNode + ?Sized> PreferenceNode for Rc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str, default: &str) -> Result<String> {
        (**self).get(key, default)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: PreferenceNode + ?Sized> PreferenceNode for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str, default: &str) -> Result<String> {
        (**self).get(key, default)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// Check whether a node holds no keys at all.
pub fn is_empty(node: &impl PreferenceNode) -> Result<bool> {
    Ok(node.keys()?.is_empty())
}
