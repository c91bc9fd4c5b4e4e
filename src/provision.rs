//! Directory provisioning
//!
//! Creates the layout's directories with a shallow "exists or create" check:
//! one `create_dir` per directory, no recursive parent creation.
//!
//! In [`ProvisionMode::Shallow`] any existing entry counts as present, even a
//! regular file. Such a file is not reported here; whatever later tries to
//! use it as a directory fails instead. [`ProvisionMode::Strict`] rejects it
//! up front.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use strum::{Display, EnumIter, EnumString};
use tracing::{debug, info, warn};

use crate::error::{Result, SettingsError};
use crate::paths::DataLayout;

/// How existing entries at a layout path are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ProvisionMode {
    /// Any existing entry satisfies the check
    #[default]
    Shallow,
    /// An existing entry must be a directory
    Strict,
}

/// Outcome of ensuring a single directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DirStatus {
    Created,
    AlreadyPresent,
}

/// Per-directory outcomes of a provisioning run, in provisioning order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub entries: Vec<(PathBuf, DirStatus)>,
}

impl ProvisionReport {
    /// Directories this run created
    pub fn created(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter(|(_, status)| *status == DirStatus::Created)
            .map(|(path, _)| path.as_path())
            .collect()
    }

    /// True when nothing on the filesystem was changed
    pub fn is_noop(&self) -> bool {
        self.entries
            .iter()
            .all(|(_, status)| *status == DirStatus::AlreadyPresent)
    }
}

/// Ensure `path` exists, creating only the final component if it is absent
pub fn ensure_directory(path: &Path, mode: ProvisionMode) -> Result<DirStatus> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            debug!("{:?} already present", path);
            return Ok(DirStatus::AlreadyPresent);
        }
        Ok(_) => {
            if mode == ProvisionMode::Strict {
                return Err(SettingsError::NotADirectory(path.to_path_buf()));
            }
            debug!("{:?} exists but is not a directory, leaving it alone", path);
            return Ok(DirStatus::AlreadyPresent);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(SettingsError::CreateDir {
                path: path.to_path_buf(),
                source: e,
            });
        }
    }

    match fs::create_dir(path) {
        Ok(()) => {
            info!("Created directory {:?}", path);
            Ok(DirStatus::Created)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            // Someone else created it between the check and create_dir
            warn!("{:?} appeared while creating it, treating as present", path);
            if mode == ProvisionMode::Strict && !path.is_dir() {
                return Err(SettingsError::NotADirectory(path.to_path_buf()));
            }
            Ok(DirStatus::AlreadyPresent)
        }
        Err(e) => Err(SettingsError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Ensure every directory of `layout` exists: data, then input, then output
///
/// Stops at the first failure, so a child is never attempted without its parent.
pub fn provision(layout: &DataLayout, mode: ProvisionMode) -> Result<ProvisionReport> {
    let mut report = ProvisionReport::default();

    for dir in layout.dirs() {
        let status = ensure_directory(dir, mode)?;
        report.entries.push((dir.to_path_buf(), status));
    }

    Ok(report)
}
