//! Error handling module for extract-settings
//!
//! Every failure that can happen while resolving or provisioning the data
//! layout is an initialization failure. `SettingsError::is_initialization`
//! lets callers tell these apart from their own downstream errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for layout resolution and provisioning
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The program's own location could not be turned into a base directory
    #[error("Initialization failed: cannot determine base directory: {0}")]
    BaseDirUnresolved(String),

    /// A directory of the layout could not be created
    #[error("Initialization failed: cannot create {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing entry at a layout path is not a directory (strict mode only)
    #[error("Initialization failed: {0:?} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// IO errors outside directory creation (metadata lookups, cwd)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extract-settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

impl SettingsError {
    /// Create a base-directory resolution error
    pub fn base_dir(msg: impl Into<String>) -> Self {
        Self::BaseDirUnresolved(msg.into())
    }

    /// True for errors raised while resolving or provisioning the layout
    pub fn is_initialization(&self) -> bool {
        matches!(
            self,
            Self::BaseDirUnresolved(_) | Self::CreateDir { .. } | Self::NotADirectory(_)
        )
    }
}
