//! Stub metadata
//!
//! Every entry of the stubs directory describes one stub distribution. Its
//! `METADATA.toml` declares, among other things, the OS packages needed to
//! process the stub on each platform:
//!
//! ```toml
//! version = "2.31.*"
//!
//! [tool.stubtest]
//! apt_dependencies = ["libxml2-dev"]
//! brew_dependencies = ["libxml2"]
//! ```

mod parser;
mod schema;

use std::path::{Path, PathBuf};

pub use parser::{METADATA_FILE_NAME, TomlMetadataParser, parse_metadata_str};
pub use schema::{StubMetadata, StubtestConfig, ToolSection};

use crate::error::{InstallError, MetadataError};

/// Source of stub metadata.
pub trait MetadataParser {
    /// Parse the metadata of the stub entry at `entry`.
    fn parse_metadata(&self, entry: &Path) -> Result<StubMetadata, MetadataError>;
}

impl<T: MetadataParser + ?Sized> MetadataParser for &T {
    fn parse_metadata(&self, entry: &Path) -> Result<StubMetadata, MetadataError> {
        (**self).parse_metadata(entry)
    }
}

/// List the entries of the stubs directory, non-recursively, sorted by path.
pub fn stub_entries(stubs_dir: &Path) -> Result<Vec<PathBuf>, InstallError> {
    let dir_error = |source| InstallError::StubsDir {
        path: stubs_dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(stubs_dir).map_err(dir_error)? {
        entries.push(entry.map_err(dir_error)?.path());
    }
    entries.sort();

    Ok(entries)
}
