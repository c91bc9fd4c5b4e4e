//! Saving and loading a resolved layout as JSON
//!
//! Lets collaborators that cannot link this crate pick up the same paths.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::paths::DataLayout;

impl DataLayout {
    /// Write the layout as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write layout to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Read a layout previously written by [`DataLayout::save_to_file`]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read layout from {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse layout JSON")
    }

    /// Pretty JSON form, also used by `show --json`
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_save_and_load_layout() {
        let tmp = TempDir::new().unwrap();
        let layout = DataLayout::from_base("/srv/project").unwrap();
        let file = tmp.path().join("layout.json");

        layout.save_to_file(&file).unwrap();
        let loaded = DataLayout::load_from_file(&file).unwrap();

        assert_eq!(loaded, layout);
        assert_eq!(loaded.download_dir(), loaded.input_dir());
    }

    #[test]
    fn test_json_has_no_download_field() {
        let layout = DataLayout::from_base("/srv/project").unwrap();
        let value: serde_json::Value = serde_json::from_str(&layout.to_json().unwrap()).unwrap();

        assert_eq!(value["input_dir"], "/srv/project/data/input");
        assert!(value.get("download_dir").is_none());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = DataLayout::load_from_file("/nonexistent/layout.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json").unwrap();
        temp_file.flush().unwrap();

        let result = DataLayout::load_from_file(temp_file.path());
        assert!(result.is_err());
    }
}
