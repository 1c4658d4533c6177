//! Path-level enablement on top of a preference node
//!
//! [`EnablementPreferences`] stores the set of resource paths JSHint is
//! enabled for as one encoded value under [`KEY_INCLUDED`]. Every mutation
//! re-encodes the whole list and writes only when the stored value actually
//! changes; an empty list removes the key instead of storing `""`.

use prefs_store::PreferenceNode;

use crate::Result;
use crate::codec::PathEncoder;

/// Key under which the encoded included paths are stored.
pub const KEY_INCLUDED: &str = "includedPaths";

/// Value equivalent to an absent [`KEY_INCLUDED`].
pub const DEF_INCLUDED: &str = "";

/// Include/exclude preferences for the resources of one project.
///
/// Writes go straight to the node. `has_changed` reports whether any write
/// altered the stored value since construction or the last
/// [`clear_changed`](Self::clear_changed); callers use it to decide whether
/// to flush the node and re-validate resources.
///
/// No locking is done across the read-modify-write in
/// [`set_included`](Self::set_included): two facades racing on one node can
/// lose an update.
#[derive(Debug)]
pub struct EnablementPreferences<N: PreferenceNode> {
    node: N,
    changed: bool,
}

impl<N: PreferenceNode> EnablementPreferences<N> {
    pub fn new(node: N) -> Self {
        Self {
            node,
            changed: false,
        }
    }

    /// The wrapped preference node.
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn into_node(self) -> N {
        self.node
    }

    /// Include or exclude a single resource path.
    ///
    /// Excluding drops every occurrence of `resource_path`, so a stored value
    /// that somehow holds duplicates is cleaned up rather than left half-set.
    /// The empty path is never stored.
    pub fn set_included(&mut self, resource_path: &str, included: bool) -> Result<()> {
        let mut included_paths = self.included_paths()?;
        let present = included_paths.iter().any(|p| p == resource_path);

        if included && !present {
            included_paths.push(resource_path.to_string());
        } else if !included && present {
            included_paths.retain(|p| p != resource_path);
        }

        self.set_included_paths(included_paths.as_slice())
    }

    /// Whether `resource_path` is in the included set.
    pub fn is_included(&self, resource_path: &str) -> Result<bool> {
        let included_paths = self.included_paths()?;
        Ok(included_paths.iter().any(|p| p == resource_path))
    }

    /// Replace the whole included set.
    ///
    /// The node is written only when the encoded value differs from what it
    /// holds; only then is the changed flag raised.
    pub fn set_included_paths<S: AsRef<str>>(&mut self, included_paths: &[S]) -> Result<()> {
        let value = PathEncoder::encode_paths(included_paths);
        let stored = self.node.get(KEY_INCLUDED, DEF_INCLUDED)?;

        if value != stored {
            if value == DEF_INCLUDED {
                self.node.remove(KEY_INCLUDED)?;
            } else {
                self.node.put(KEY_INCLUDED, &value)?;
            }
            self.changed = true;
            tracing::debug!(
                node = self.node.name(),
                paths = included_paths.len(),
                "Updated included paths"
            );
        }

        Ok(())
    }

    /// The included set, in stored order. Never contains the empty path.
    pub fn included_paths(&self) -> Result<Vec<String>> {
        let value = self.node.get(KEY_INCLUDED, DEF_INCLUDED)?;
        Ok(PathEncoder::decode_paths(&value))
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Reset the changed flag. Stored values are left untouched.
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}
