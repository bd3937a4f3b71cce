//! A single row of the support table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trollcheck_core::{Architecture, Version};

/// Installer tool name and the URL stored for it.
///
/// The URL may be empty, e.g. for the `"Unsupported"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub tool: String,
    #[serde(default)]
    pub url: String,
}

impl ToolEntry {
    pub fn new(tool: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            url: url.into(),
        }
    }
}

/// Inclusive version range with its architectures and installer tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportRecord {
    /// Lower bound, e.g. `"14.0 beta 2"`
    pub from_version: String,

    /// Upper bound, e.g. `"17.0.1 and later"`
    pub to_version: String,

    /// Display text for the covered hardware span
    pub platforms: String,

    /// Architectures this record applies to.
    ///
    /// Left empty in YAML, it is derived from `platforms`.
    #[serde(default)]
    pub architectures: BTreeSet<Architecture>,

    /// Installer tools in display order. Empty means no known install method.
    #[serde(default)]
    pub supported: Vec<ToolEntry>,
}

impl SupportRecord {
    /// Create a record with no tools; architectures come from `platforms`.
    pub fn new(
        from_version: impl Into<String>,
        to_version: impl Into<String>,
        platforms: impl Into<String>,
    ) -> Self {
        let platforms = platforms.into();
        Self {
            from_version: from_version.into(),
            to_version: to_version.into(),
            architectures: Architecture::scan(&platforms),
            platforms,
            supported: Vec::new(),
        }
    }

    /// Add an installer tool
    pub fn with_tool(mut self, tool: impl Into<String>, url: impl Into<String>) -> Self {
        self.supported.push(ToolEntry::new(tool, url));
        self
    }

    pub fn from_bound(&self) -> Version {
        Version::parse(&self.from_version)
    }

    pub fn to_bound(&self) -> Version {
        Version::parse(&self.to_version)
    }

    pub fn covers(&self, architecture: Architecture) -> bool {
        self.architectures.contains(&architecture)
    }

    /// Whether any installer tool is listed, sentinels included
    pub fn has_install_method(&self) -> bool {
        !self.supported.is_empty()
    }

    pub fn range_description(&self) -> String {
        format!("Supported from {} to {}", self.from_version, self.to_version)
    }

    /// Fill `architectures` from the platform text when it was not given.
    pub(crate) fn resolve_architectures(&mut self) {
        if self.architectures.is_empty() {
            self.architectures = Architecture::scan(&self.platforms);
        }
    }
}
