//! Format-agnostic loading and saving of preference files

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a value from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("");
        let format = Self::format_name(extension)?;
        let content = io::read_text(path)?;

        let parsed = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        })
    }

    /// Save a value to a file.
    ///
    /// Format is determined from file extension.
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let extension = path.extension().unwrap_or("");
        let format = Self::format_name(extension)?;

        let content = match format {
            "TOML" => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            "JSON" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            _ => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
        .map_err(|message| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.into(),
            message,
        })?;

        io::write_atomic(path, content.as_bytes())
    }

    /// Check whether an extension names a format this store can handle.
    pub fn supports(extension: &str) -> bool {
        Self::format_name(extension).is_ok()
    }

    fn format_name(extension: &str) -> Result<&'static str> {
        match extension.to_lowercase().as_str() {
            "toml" => Ok("TOML"),
            "json" => Ok("JSON"),
            "yaml" | "yml" => Ok("YAML"),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
