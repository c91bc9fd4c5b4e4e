//! Base directory selection
//!
//! ## Environment Variables
//!
//! - `EXTRACT_BASE_DIR`: use this directory as the layout root instead of the
//!   one two levels above the executable.
//!
//! Precedence is explicit override (e.g. `--base-dir`) > `EXTRACT_BASE_DIR` >
//! executable-relative default.

use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::paths;
use crate::provision::ProvisionMode;

/// Environment variable that overrides the base directory
pub const BASE_DIR_ENV: &str = "EXTRACT_BASE_DIR";

/// Inputs to [`crate::settings::Settings::init`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsConfig {
    /// Explicit root, wins over everything else
    pub base_dir: Option<PathBuf>,
    /// Root taken from `EXTRACT_BASE_DIR`
    pub env_base_dir: Option<PathBuf>,
    pub mode: ProvisionMode,
}

impl SettingsConfig {
    /// Config with `EXTRACT_BASE_DIR` read from the process environment
    pub fn from_env() -> Self {
        let env_base_dir = env::var_os(BASE_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            env_base_dir,
            ..Self::default()
        }
    }

    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if base_dir.is_some() {
            self.base_dir = base_dir;
        }
        self
    }

    pub fn with_mode(mut self, mode: ProvisionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pick the base directory according to precedence
    pub fn resolve_base(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            tracing::debug!("Using base directory from override: {:?}", dir);
            return paths::absolutize(dir);
        }
        if let Some(dir) = &self.env_base_dir {
            tracing::debug!("Using base directory from {}: {:?}", BASE_DIR_ENV, dir);
            return paths::absolutize(dir);
        }
        paths::resolve_base_dir()
    }
}
