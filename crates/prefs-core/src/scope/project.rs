//! A project's preference node and the facade over it

use std::path::Path;

use prefs_store::{FileNode, NormalizedPath, PreferenceNode};

use super::ScopeSettings;
use crate::{EnablementPreferences, Result};

/// Preference scope of a single project directory.
#[derive(Debug, Clone)]
pub struct ProjectScope {
    root: NormalizedPath,
    settings: ScopeSettings,
}

impl ProjectScope {
    pub fn new(root: impl AsRef<Path>, settings: ScopeSettings) -> Self {
        Self {
            root: NormalizedPath::new(root),
            settings,
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn settings(&self) -> &ScopeSettings {
        &self.settings
    }

    /// Location of the node file: `<root>/<settings_dir>/<qualifier>.<format>`.
    pub fn node_path(&self) -> NormalizedPath {
        self.root
            .join(&self.settings.settings_dir)
            .join(&self.settings.node_file_name())
    }

    /// Open the project's node; a missing file yields an empty node.
    pub fn open_node(&self) -> Result<FileNode> {
        self.settings.validate()?;
        Ok(FileNode::open(self.node_path())?)
    }
}

/// Enablement preferences of a project, backed by its node file.
///
/// Changes made through [`enablement_mut`](Self::enablement_mut) stay in
/// memory until [`save`](Self::save).
#[derive(Debug)]
pub struct ProjectPreferences {
    scope: ProjectScope,
    enablement: EnablementPreferences<FileNode>,
}

impl ProjectPreferences {
    pub fn open(scope: ProjectScope) -> Result<Self> {
        let node = scope.open_node()?;
        Ok(Self {
            scope,
            enablement: EnablementPreferences::new(node),
        })
    }

    pub fn scope(&self) -> &ProjectScope {
        &self.scope
    }

    pub fn enablement(&self) -> &EnablementPreferences<FileNode> {
        &self.enablement
    }

    pub fn enablement_mut(&mut self) -> &mut EnablementPreferences<FileNode> {
        &mut self.enablement
    }

    /// Flush the node if the enablement changed, then clear the flag.
    ///
    /// Returns whether anything was written. On failure the flag stays set
    /// so a later save retries.
    pub fn save(&mut self) -> Result<bool> {
        if !self.enablement.has_changed() {
            return Ok(false);
        }

        self.enablement.node().flush()?;
        self.enablement.clear_changed();
        tracing::info!(node = %self.scope.node_path(), "Saved enablement preferences");
        Ok(true)
    }
}
