//! Error types for stubdeps-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, InstallError>;

/// Failure to load the metadata of a single stub entry.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Failed to read stub metadata {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid stub metadata {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid package name {name:?} in {path}: {reason}")]
    InvalidPackageName {
        path: PathBuf,
        name: String,
        reason: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("Unsupported package manager: {0} (expected one of apt-get, brew, choco)")]
    UnknownPackageManager(String),

    #[error("Failed to read stubs directory {path}: {source}")]
    StubsDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Cannot run an empty command line")]
    EmptyCommand,

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Command exited with status {code}: {command}")]
    CommandFailed { command: String, code: i32 },
}

impl InstallError {
    /// Exit status of the package manager when this error came from a failed run.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
