//! Dependency installation orchestration.
//!
//! The installer unions the configured extra dependencies with the
//! dependencies every stub declares for the selected package manager, then
//! runs a single install command for the result:
//!
//! 1. [`DependencyInstaller::resolve`] collects the package set
//! 2. [`DependencyInstaller::plan`] turns it into an optional [`InstallCommand`]
//! 3. [`DependencyInstaller::execute`] runs the command, if any

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::command::InstallCommand;
use crate::config::InstallerConfig;
use crate::error::{InstallError, Result};
use crate::metadata::{MetadataParser, TomlMetadataParser, stub_entries};
use crate::package_manager::PackageManager;
use crate::runner::{CommandRunner, SystemRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    pub package_manager: PackageManager,
    /// Prefix the command with the configured elevation command
    pub elevate: bool,
}

impl InstallOptions {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager,
            elevate: false,
        }
    }

    pub fn with_elevation(mut self, elevate: bool) -> Self {
        self.elevate = elevate;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub package_manager: PackageManager,
    pub packages: BTreeSet<String>,
    /// `None` when there is nothing to install
    pub command: Option<InstallCommand>,
}

impl InstallPlan {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub executed: bool,
}

#[derive(Debug)]
pub struct DependencyInstaller<P, R> {
    config: InstallerConfig,
    parser: P,
    runner: R,
}

impl DependencyInstaller<TomlMetadataParser, SystemRunner> {
    /// Installer reading METADATA.toml files and spawning real processes.
    pub fn system(config: InstallerConfig) -> Self {
        Self::new(config, TomlMetadataParser::new(), SystemRunner::new())
    }
}

impl<P: MetadataParser, R: CommandRunner> DependencyInstaller<P, R> {
    pub fn new(config: InstallerConfig, parser: P, runner: R) -> Self {
        Self {
            config,
            parser,
            runner,
        }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Union of the extra dependencies and every stub's dependencies for `manager`.
    ///
    /// Stops at the first stub whose metadata cannot be parsed.
    pub fn resolve(&self, manager: PackageManager) -> Result<BTreeSet<String>> {
        let mut packages = self.config.extra_dependencies.for_manager(manager).clone();

        for entry in stub_entries(&self.config.stubs_dir)? {
            let metadata = self.parser.parse_metadata(&entry)?;
            let deps = metadata.dependencies_for(manager);
            debug!(
                stub = %entry.display(),
                count = deps.len(),
                "Collected stub dependencies"
            );
            packages.extend(deps.iter().cloned());
        }

        info!(
            manager = %manager,
            count = packages.len(),
            "Resolved OS dependencies"
        );
        Ok(packages)
    }

    pub fn plan(&self, options: &InstallOptions) -> Result<InstallPlan> {
        let manager = options.package_manager;
        let packages = self.resolve(manager)?;

        let command = if packages.is_empty() {
            None
        } else {
            let command = InstallCommand::new(manager, packages.iter().cloned());
            Some(if options.elevate {
                command.with_elevation(&self.config.elevation_command)
            } else {
                command
            })
        };

        Ok(InstallPlan {
            package_manager: manager,
            packages,
            command,
        })
    }

    /// Run the planned command. A non-zero exit becomes [`InstallError::CommandFailed`].
    pub fn execute(&self, plan: &InstallPlan) -> Result<InstallReport> {
        let Some(command) = &plan.command else {
            info!(manager = %plan.package_manager, "Nothing to install");
            return Ok(InstallReport {
                installed: Vec::new(),
                executed: false,
            });
        };

        info!(command = %command, "Installing OS dependencies");
        let code = self.runner.run(&command.argv())?;
        if code != 0 {
            return Err(InstallError::CommandFailed {
                command: command.to_string(),
                code,
            });
        }

        Ok(InstallReport {
            installed: command.packages().to_vec(),
            executed: true,
        })
    }

    /// Plan and execute in one step.
    pub fn install(&self, options: &InstallOptions) -> Result<InstallReport> {
        let plan = self.plan(options)?;
        self.execute(&plan)
    }
}
