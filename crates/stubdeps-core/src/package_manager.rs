//! Supported platform package managers.

use std::fmt;
use std::str::FromStr;

use crate::error::InstallError;

/// Package manager used to install OS-level dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// Debian/Ubuntu `apt-get`
    AptGet,
    /// Homebrew (macOS)
    Brew,
    /// Chocolatey (Windows)
    Choco,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::AptGet, Self::Brew, Self::Choco];

    /// Executable name, which is also the spelling accepted on the command line.
    pub fn program(&self) -> &'static str {
        match self {
            Self::AptGet => "apt-get",
            Self::Brew => "brew",
            Self::Choco => "choco",
        }
    }

    /// Key used for this manager in dependency tables (`apt`, `brew`, `choco`).
    pub fn table_key(&self) -> &'static str {
        match self {
            Self::AptGet => "apt",
            Self::Brew => "brew",
            Self::Choco => "choco",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|manager| manager.program() == s)
            .ok_or_else(|| InstallError::UnknownPackageManager(s.to_string()))
    }
}
