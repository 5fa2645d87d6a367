//! Config store for locating and loading stubdeps.toml.

use std::path::{Path, PathBuf};

use super::{InstallerConfig, parser};

pub const CONFIG_FILE_NAME: &str = "stubdeps.toml";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
    required: bool,
}

impl ConfigStore {
    /// Store for `<project_root>/stubdeps.toml`; a missing file yields defaults.
    pub fn from_project_root(project_root: &Path) -> Self {
        Self {
            config_path: project_root.join(CONFIG_FILE_NAME),
            required: false,
        }
    }

    /// Store for an explicitly chosen file, which must exist.
    pub fn from_path(config_path: PathBuf) -> Self {
        Self {
            config_path,
            required: true,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration.
    ///
    /// A relative `stubs_dir` is resolved against the directory holding the
    /// config file.
    pub fn load(&self) -> anyhow::Result<InstallerConfig> {
        let mut config = if self.config_path.exists() {
            parser::parse_config(&self.config_path)?
        } else if self.required {
            anyhow::bail!("Config file not found: {}", self.config_path.display());
        } else {
            tracing::debug!(
                path = %self.config_path.display(),
                "No config file, using defaults"
            );
            InstallerConfig::new()
        };

        if config.stubs_dir.is_relative()
            && let Some(base) = self.config_path.parent()
        {
            config.stubs_dir = base.join(&config.stubs_dir);
        }

        Ok(config)
    }
}
