//! In-memory preference node

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::{PreferenceNode, Result};

/// A preference node that lives only in memory.
///
/// Never fails. Also serves as the working copy behind
/// [`FileNode`](crate::FileNode).
#[derive(Debug, Default)]
pub struct MemoryNode {
    name: String,
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: RefCell::new(BTreeMap::new()),
        }
    }

    /// Create a node pre-populated with `values`.
    pub fn with_values(name: impl Into<String>, values: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            values: RefCell::new(values),
        }
    }

    /// Copy of the current key/value table.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.borrow().clone()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceNode for MemoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .values
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_falls_back_to_default() {
        let node = MemoryNode::new("test");
        assert_eq!(node.get("missing", "fallback").unwrap(), "fallback");
    }

    #[test]
    fn put_then_remove_leaves_node_empty() {
        let node = MemoryNode::new("test");
        node.put("a", "1").unwrap();
        assert_eq!(node.keys().unwrap(), vec!["a".to_string()]);

        node.remove("a").unwrap();
        assert!(node.is_empty());
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let node = MemoryNode::new("test");
        node.remove("never-set").unwrap();
        assert!(node.is_empty());
    }
}
