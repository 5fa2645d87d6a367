//! Configuration schema for stubdeps.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dependencies::{DependencyTable, check_package_name};

pub const DEFAULT_STUBS_DIR: &str = "stubs";
pub const DEFAULT_ELEVATION_COMMAND: &str = "sudo";

/// Complete installer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    /// Directory holding one entry per stub
    #[serde(default = "default_stubs_dir")]
    pub stubs_dir: PathBuf,

    /// Command prepended to the install command when elevation is requested
    #[serde(default = "default_elevation_command")]
    pub elevation_command: String,

    /// Packages installed in addition to those declared by stubs
    #[serde(default)]
    pub extra_dependencies: DependencyTable,
}

fn default_stubs_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STUBS_DIR)
}

fn default_elevation_command() -> String {
    DEFAULT_ELEVATION_COMMAND.to_string()
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            stubs_dir: default_stubs_dir(),
            elevation_command: default_elevation_command(),
            extra_dependencies: DependencyTable::default(),
        }
    }
}

impl InstallerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stubs_dir(mut self, stubs_dir: impl Into<PathBuf>) -> Self {
        self.stubs_dir = stubs_dir.into();
        self
    }

    pub fn with_elevation_command(mut self, command: impl Into<String>) -> Self {
        self.elevation_command = command.into();
        self
    }

    pub fn with_extra_dependencies(mut self, table: DependencyTable) -> Self {
        self.extra_dependencies = table;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.elevation_command.is_empty()
            || self.elevation_command.chars().any(char::is_whitespace)
        {
            anyhow::bail!(
                "Invalid elevation_command {:?}: must be a single program name",
                self.elevation_command
            );
        }

        for (manager, name) in self.extra_dependencies.iter() {
            if let Err(reason) = check_package_name(name) {
                anyhow::bail!(
                    "Invalid package name {:?} in extra_dependencies.{}: {}",
                    name,
                    manager.table_key(),
                    reason
                );
            }
        }

        Ok(())
    }
}
