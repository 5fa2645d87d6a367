//! METADATA.toml schema

use serde::{Deserialize, Serialize};

use crate::package_manager::PackageManager;

/// Metadata of one stub distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubMetadata {
    /// Version of the upstream distribution the stub targets
    pub version: String,

    /// Other stub distributions this one depends on
    #[serde(default)]
    pub requires: Vec<String>,

    #[serde(default)]
    pub extra_description: Option<String>,

    #[serde(default)]
    pub stub_distribution: Option<String>,

    #[serde(default)]
    pub upstream_repository: Option<String>,

    #[serde(default)]
    pub obsolete_since: Option<String>,

    #[serde(default)]
    pub no_longer_updated: bool,

    #[serde(default)]
    pub partial_stub: bool,

    #[serde(default)]
    pub requires_python: Option<String>,

    #[serde(default)]
    pub tool: ToolSection,
}

/// The `[tool]` table. Sections for other tools are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSection {
    #[serde(default)]
    pub stubtest: StubtestConfig,
}

/// The `[tool.stubtest]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StubtestConfig {
    pub skip: bool,
    pub apt_dependencies: Vec<String>,
    pub brew_dependencies: Vec<String>,
    pub choco_dependencies: Vec<String>,
    pub extras: Vec<String>,
    pub ignore_missing_stub: bool,
    pub stubtest_requirements: Vec<String>,
    pub supported_platforms: Option<Vec<String>>,
    pub ci_platforms: Option<Vec<String>>,
}

impl StubMetadata {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            requires: Vec::new(),
            extra_description: None,
            stub_distribution: None,
            upstream_repository: None,
            obsolete_since: None,
            no_longer_updated: false,
            partial_stub: false,
            requires_python: None,
            tool: ToolSection::default(),
        }
    }

    /// Add OS dependencies for one package manager.
    pub fn with_dependencies<I, S>(mut self, manager: PackageManager, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stubtest = &mut self.tool.stubtest;
        let deps = match manager {
            PackageManager::AptGet => &mut stubtest.apt_dependencies,
            PackageManager::Brew => &mut stubtest.brew_dependencies,
            PackageManager::Choco => &mut stubtest.choco_dependencies,
        };
        deps.extend(packages.into_iter().map(Into::into));
        self
    }

    /// OS dependencies declared for `manager`.
    pub fn dependencies_for(&self, manager: PackageManager) -> &[String] {
        let stubtest = &self.tool.stubtest;
        match manager {
            PackageManager::AptGet => &stubtest.apt_dependencies,
            PackageManager::Brew => &stubtest.brew_dependencies,
            PackageManager::Choco => &stubtest.choco_dependencies,
        }
    }
}
