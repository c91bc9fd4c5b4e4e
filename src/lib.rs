//! extract-settings library
//!
//! Resolves the extraction tool's directory layout (`data`, `data/input`,
//! `data/output`) relative to a base directory and makes sure it exists.

pub mod cli;
pub mod config;
pub mod error;
pub mod layout_file;
pub mod paths;
pub mod provision;
pub mod sanity;
pub mod settings;

// Re-export main types for convenience
pub use config::{SettingsConfig, BASE_DIR_ENV};
pub use error::{Result, SettingsError};
pub use paths::{base_dir_for, resolve_base_dir, DataLayout};
pub use provision::{ensure_directory, provision, DirStatus, ProvisionMode, ProvisionReport};
pub use sanity::{verify_layout, LayoutCheck};
pub use settings::Settings;
