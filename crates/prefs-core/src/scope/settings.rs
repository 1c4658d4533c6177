//! Settings that locate the preference node of a project

use prefs_store::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

fn default_settings_dir() -> String {
    ".settings".to_string()
}

fn default_qualifier() -> String {
    "com.eclipsesource.jshint.ui".to_string()
}

fn default_format() -> String {
    "toml".to_string()
}

/// Where a project's preference node lives.
///
/// Parsed from TOML; every field is optional:
///
/// ```
/// use prefs_core::ScopeSettings;
///
/// let settings = ScopeSettings::parse(r#"
/// settings_dir = ".prefs"
/// format = "json"
/// "#).unwrap();
///
/// assert_eq!(settings.settings_dir, ".prefs");
/// assert_eq!(settings.qualifier, "com.eclipsesource.jshint.ui");
/// assert_eq!(settings.node_file_name(), "com.eclipsesource.jshint.ui.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSettings {
    /// Directory below the project root holding preference nodes
    #[serde(default = "default_settings_dir")]
    pub settings_dir: String,

    /// Node name, used as the file stem
    #[serde(default = "default_qualifier")]
    pub qualifier: String,

    /// File format of the node: "toml", "json", "yaml" or "yml"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            settings_dir: default_settings_dir(),
            qualifier: default_qualifier(),
            format: default_format(),
        }
    }
}

impl ScopeSettings {
    /// Parse settings from TOML content and validate them.
    pub fn parse(content: &str) -> Result<Self> {
        let settings: ScopeSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot name a node file.
    pub fn validate(&self) -> Result<()> {
        if self.qualifier.is_empty() {
            return Err(Error::InvalidSettings {
                message: "qualifier must not be empty".into(),
            });
        }
        if self.qualifier.contains(['/', '\\']) {
            return Err(Error::InvalidSettings {
                message: format!("qualifier '{}' must not contain path separators", self.qualifier),
            });
        }
        if !ConfigStore::supports(&self.format) {
            return Err(Error::InvalidSettings {
                message: format!("unsupported node format '{}'", self.format),
            });
        }
        Ok(())
    }

    /// File name of the node, e.g. `com.eclipsesource.jshint.ui.toml`.
    pub fn node_file_name(&self) -> String {
        format!("{}.{}", self.qualifier, self.format)
    }
}
