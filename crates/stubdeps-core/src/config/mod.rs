//! Installer configuration loaded from `stubdeps.toml`
//!
//! The file is optional. It supplies the extra dependency tables, the stub
//! directory and the command used for privilege elevation.

pub mod parser;
pub mod schema;
pub mod store;

pub use parser::{parse_config, parse_config_str, to_toml};
pub use schema::{DEFAULT_ELEVATION_COMMAND, DEFAULT_STUBS_DIR, InstallerConfig};
pub use store::{CONFIG_FILE_NAME, ConfigStore};
