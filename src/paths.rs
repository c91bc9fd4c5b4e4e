//! Data directory layout - single source of truth for every path the
//! extraction tool reads from or writes to.
//!
//! ```text
//! <base>/
//! └── data/
//!     ├── input/    (also exposed as the download directory)
//!     └── output/
//! ```
//!
//! The base directory is anchored two levels above the running program:
//! an executable at `.../project/bin/extract-settings` resolves to
//! `.../project`.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Name of the data directory under the base directory
pub const DATA_DIR_NAME: &str = "data";

/// Name of the input (download) directory under the data directory
pub const INPUT_DIR_NAME: &str = "input";

/// Name of the output directory under the data directory
pub const OUTPUT_DIR_NAME: &str = "output";

/// Resolved, absolute directory layout
///
/// Built once and never mutated. The download directory is not stored
/// separately; `download_dir()` hands out the input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayout {
    base_dir: PathBuf,
    data_dir: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl DataLayout {
    /// Derive the layout from a base directory
    ///
    /// A relative base is made absolute against the current directory.
    pub fn from_base(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = absolutize(base_dir.as_ref())?;
        let data_dir = base_dir.join(DATA_DIR_NAME);
        let input_dir = data_dir.join(INPUT_DIR_NAME);
        let output_dir = data_dir.join(OUTPUT_DIR_NAME);

        Ok(Self {
            base_dir,
            data_dir,
            input_dir,
            output_dir,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding files to ingest
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Alias of [`DataLayout::input_dir`]; downloads land where input is read
    pub fn download_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Directory receiving extraction results
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directories to provision, parents first
    pub fn dirs(&self) -> [&Path; 3] {
        [&self.data_dir, &self.input_dir, &self.output_dir]
    }
}

/// Base directory for a program located at `module_path`: its grandparent
pub fn base_dir_for(module_path: impl AsRef<Path>) -> Result<PathBuf> {
    let module_path = absolutize(module_path.as_ref())?;

    module_path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            SettingsError::base_dir(format!(
                "{:?} has no directory two levels above it",
                module_path
            ))
        })
}

/// Base directory of the running executable
pub fn resolve_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| SettingsError::base_dir(format!("cannot locate executable: {}", e)))?;
    tracing::debug!("Resolving base directory from executable {:?}", exe);
    base_dir_for(exe)
}

/// Make `path` absolute and drop `.`/`..` components lexically
pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .map_err(|e| SettingsError::base_dir(format!("cannot make {:?} absolute: {}", path, e)))?;
    let mut normalized = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}
