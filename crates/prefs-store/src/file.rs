//! File-backed preference node

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::{ConfigStore, MemoryNode, NormalizedPath, PreferenceNode, Result, io};

/// A preference node persisted as a flat key/value table in a file.
///
/// The table is loaded once on [`open`](FileNode::open). Writes go to an
/// in-memory working copy and reach the disk on [`flush`](PreferenceNode::flush).
/// An empty table is never written; flushing it deletes the file instead.
#[derive(Debug)]
pub struct FileNode {
    path: NormalizedPath,
    store: ConfigStore,
    values: MemoryNode,
    dirty: Cell<bool>,
}

impl FileNode {
    /// Open the node stored at `path`.
    ///
    /// A missing file yields an empty node. The file format follows the
    /// extension (see [`ConfigStore`]).
    pub fn open(path: impl Into<NormalizedPath>) -> Result<Self> {
        let path = path.into();
        let store = ConfigStore::new();
        let name = path
            .file_name()
            .map(|name| match name.rfind('.') {
                Some(idx) if idx > 0 => name[..idx].to_string(),
                _ => name.to_string(),
            })
            .unwrap_or_default();

        let values: BTreeMap<String, String> = if path.is_file() {
            store.load(&path)?
        } else {
            // Fail early on an unusable extension rather than at flush time
            if !ConfigStore::supports(path.extension().unwrap_or("")) {
                return Err(crate::Error::UnsupportedFormat {
                    extension: path.extension().unwrap_or("").to_string(),
                });
            }
            BTreeMap::new()
        };

        tracing::debug!(path = %path, keys = values.len(), "Opened preference node");

        Ok(Self {
            path,
            store,
            values: MemoryNode::with_values(name, values),
            dirty: Cell::new(false),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Whether there are changes not yet flushed to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }
}

impl PreferenceNode for FileNode {
    fn name(&self) -> &str {
        self.values.name()
    }

    fn get(&self, key: &str, default: &str) -> Result<String> {
        self.values.get(key, default)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        if !self.values.contains_key(key) || self.values.get(key, "")? != value {
            self.values.put(key, value)?;
            self.dirty.set(true);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.values.contains_key(key) {
            self.values.remove(key)?;
            self.dirty.set(true);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.values.keys()
    }

    fn flush(&self) -> Result<()> {
        if !self.dirty.get() {
            return Ok(());
        }

        if self.values.is_empty() {
            io::remove_file(&self.path)?;
            tracing::debug!(path = %self.path, "Removed empty preference node");
        } else {
            self.store.save(&self.path, &self.values.snapshot())?;
            tracing::debug!(path = %self.path, keys = self.values.len(), "Flushed preference node");
        }

        self.dirty.set(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_missing_file_is_empty_and_clean() {
        let temp = TempDir::new().unwrap();
        let node = FileNode::open(temp.path().join("prefs.toml")).unwrap();

        assert!(node.keys().unwrap().is_empty());
        assert!(!node.is_dirty());
        assert_eq!(node.name(), "prefs");
    }

    #[test]
    fn open_unsupported_extension_fails() {
        let temp = TempDir::new().unwrap();
        let result = FileNode::open(temp.path().join("prefs.ini"));
        assert!(matches!(
            result,
            Err(crate::Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn rewriting_same_value_does_not_dirty() {
        let temp = TempDir::new().unwrap();
        let node = FileNode::open(temp.path().join("prefs.toml")).unwrap();
        node.put("k", "v").unwrap();
        node.flush().unwrap();

        node.put("k", "v").unwrap();
        assert!(!node.is_dirty());
    }

    #[test]
    fn flush_without_changes_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("prefs.toml");
        let node = FileNode::open(file.as_path()).unwrap();

        node.flush().unwrap();
        assert!(!file.exists());
    }
}
