//! One-shot initialization of the data layout
//!
//! The host application calls [`Settings::init`] once during startup and
//! passes the returned record to whatever needs the paths.

use std::path::Path;

use tracing::info;

use crate::config::SettingsConfig;
use crate::error::Result;
use crate::paths::DataLayout;
use crate::provision::{provision, ProvisionMode, ProvisionReport};

/// Provisioned layout plus what provisioning did
#[derive(Debug, Clone)]
pub struct Settings {
    pub layout: DataLayout,
    pub report: ProvisionReport,
}

impl Settings {
    /// Resolve the base directory from `config` and provision the layout
    pub fn init(config: &SettingsConfig) -> Result<Self> {
        let base_dir = config.resolve_base()?;
        Self::init_with(base_dir, config.mode)
    }

    /// Provision the layout under an explicit base directory
    pub fn init_with(base_dir: impl AsRef<Path>, mode: ProvisionMode) -> Result<Self> {
        let layout = DataLayout::from_base(base_dir)?;
        let report = provision(&layout, mode)?;

        info!(
            "Data layout ready under {:?} ({} created, mode={})",
            layout.base_dir(),
            report.created().len(),
            mode
        );

        Ok(Self { layout, report })
    }

    pub fn data_dir(&self) -> &Path {
        self.layout.data_dir()
    }

    pub fn input_dir(&self) -> &Path {
        self.layout.input_dir()
    }

    pub fn download_dir(&self) -> &Path {
        self.layout.download_dir()
    }

    pub fn output_dir(&self) -> &Path {
        self.layout.output_dir()
    }
}
