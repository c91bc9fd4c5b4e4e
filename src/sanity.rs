//! Read-only checks on an already provisioned layout
//!
//! Used by `extract-settings check` to report problems without creating
//! anything. Unlike provisioning, this does tell a regular file apart from a
//! directory.

use std::path::PathBuf;

use crate::paths::DataLayout;

/// Result of layout verification
#[derive(Debug, Default)]
pub struct LayoutCheck {
    pub missing: Vec<PathBuf>,
    pub not_directories: Vec<PathBuf>,
}

impl LayoutCheck {
    /// Returns true if every directory exists and is a directory
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.not_directories.is_empty()
    }
}

/// Inspect every directory of `layout` without modifying anything
pub fn verify_layout(layout: &DataLayout) -> LayoutCheck {
    let mut check = LayoutCheck::default();

    for dir in layout.dirs() {
        if dir.is_dir() {
            continue;
        }
        if dir.exists() {
            tracing::debug!("{:?} is not a directory", dir);
            check.not_directories.push(dir.to_path_buf());
        } else {
            tracing::debug!("{:?} is missing", dir);
            check.missing.push(dir.to_path_buf());
        }
    }

    check
}

/// Print the check result to stderr in the same shape as a failed provision
pub fn print_check_failures(check: &LayoutCheck) {
    for dir in &check.missing {
        eprintln!("✗ missing: {}", dir.display());
    }
    for dir in &check.not_directories {
        eprintln!("✗ not a directory: {}", dir.display());
    }
}
