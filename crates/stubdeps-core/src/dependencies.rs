//! Per-package-manager dependency tables.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::package_manager::PackageManager;

/// Package names keyed by package manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyTable {
    pub apt: BTreeSet<String>,
    pub brew: BTreeSet<String>,
    pub choco: BTreeSet<String>,
}

impl DependencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add packages for one package manager.
    pub fn with<I, S>(mut self, manager: PackageManager, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.for_manager_mut(manager)
            .extend(packages.into_iter().map(Into::into));
        self
    }

    pub fn for_manager(&self, manager: PackageManager) -> &BTreeSet<String> {
        match manager {
            PackageManager::AptGet => &self.apt,
            PackageManager::Brew => &self.brew,
            PackageManager::Choco => &self.choco,
        }
    }

    fn for_manager_mut(&mut self, manager: PackageManager) -> &mut BTreeSet<String> {
        match manager {
            PackageManager::AptGet => &mut self.apt,
            PackageManager::Brew => &mut self.brew,
            PackageManager::Choco => &mut self.choco,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.apt.is_empty() && self.brew.is_empty() && self.choco.is_empty()
    }

    /// Every package name in the table, paired with its manager.
    pub fn iter(&self) -> impl Iterator<Item = (PackageManager, &str)> {
        PackageManager::ALL.into_iter().flat_map(move |manager| {
            self.for_manager(manager)
                .iter()
                .map(move |name| (manager, name.as_str()))
        })
    }
}

/// Check that a package name can be passed as a single install argument.
///
/// Returns the reason on failure.
pub fn check_package_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("package name is empty");
    }
    if name.chars().any(char::is_whitespace) {
        return Err("package name contains whitespace");
    }
    if name.starts_with('-') {
        return Err("package name starts with '-'");
    }
    Ok(())
}
