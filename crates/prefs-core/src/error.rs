//! Error types for prefs-core

/// Result type for prefs-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prefs-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scope settings could not be parsed or are unusable
    #[error("Invalid scope settings: {message}")]
    InvalidSettings { message: String },

    // Transparent wrappers for underlying crate errors
    /// Preference node failure from prefs-store
    #[error(transparent)]
    Store(#[from] prefs_store::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
