//! Install command construction.

use std::fmt;

use crate::package_manager::PackageManager;

/// A fully resolved `[elevation] <manager> install <packages...>` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    elevation: Option<String>,
    program: String,
    packages: Vec<String>,
}

impl InstallCommand {
    pub fn new<I>(manager: PackageManager, packages: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            elevation: None,
            program: manager.program().to_string(),
            packages: packages.into_iter().collect(),
        }
    }

    /// Prefix the command with a privilege-escalation program such as `sudo`.
    pub fn with_elevation(mut self, command: impl Into<String>) -> Self {
        self.elevation = Some(command.into());
        self
    }

    pub fn elevation(&self) -> Option<&str> {
        self.elevation.as_deref()
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.packages.len() + 3);
        argv.extend(self.elevation.iter().cloned());
        argv.push(self.program.clone());
        argv.push("install".to_string());
        argv.extend(self.packages.iter().cloned());
        argv
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}
