//! METADATA.toml parser

use std::path::Path;

use super::{MetadataParser, StubMetadata};
use crate::config::parser::describe_toml_error;
use crate::dependencies::check_package_name;
use crate::error::MetadataError;
use crate::package_manager::PackageManager;

pub const METADATA_FILE_NAME: &str = "METADATA.toml";

/// Reads `<entry>/METADATA.toml` from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlMetadataParser;

impl TomlMetadataParser {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataParser for TomlMetadataParser {
    fn parse_metadata(&self, entry: &Path) -> Result<StubMetadata, MetadataError> {
        let path = entry.join(METADATA_FILE_NAME);
        let content = std::fs::read_to_string(&path).map_err(|source| MetadataError::Read {
            path: path.clone(),
            source,
        })?;

        parse_metadata_str(&content, &path)
    }
}

/// Parse METADATA.toml content. `path` is only used in error messages.
pub fn parse_metadata_str(content: &str, path: &Path) -> Result<StubMetadata, MetadataError> {
    let metadata: StubMetadata = toml::from_str(content).map_err(|e| MetadataError::Parse {
        path: path.to_path_buf(),
        message: describe_toml_error(&e, content),
    })?;

    for manager in PackageManager::ALL {
        for name in metadata.dependencies_for(manager) {
            check_package_name(name).map_err(|reason| MetadataError::InvalidPackageName {
                path: path.to_path_buf(),
                name: name.clone(),
                reason,
            })?;
        }
    }

    Ok(metadata)
}
