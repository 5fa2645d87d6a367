//! Stubdeps Core Library
//!
//! Resolves the OS packages required by a set of stub definitions and installs
//! them through a platform package manager (`apt-get`, `brew` or `choco`).

pub mod command;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod installer;
pub mod metadata;
pub mod package_manager;
pub mod runner;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::command::InstallCommand;
    pub use crate::config::{ConfigStore, InstallerConfig};
    pub use crate::dependencies::DependencyTable;
    pub use crate::error::{InstallError, MetadataError};
    pub use crate::installer::{DependencyInstaller, InstallOptions, InstallPlan, InstallReport};
    pub use crate::metadata::{MetadataParser, StubMetadata, TomlMetadataParser};
    pub use crate::package_manager::PackageManager;
    pub use crate::runner::{CommandRunner, SystemRunner};
}
