//! trollcheck lookup: is this iOS version supported?
//!
//! Scans a [`SupportTable`] for the first record whose inclusive version
//! range holds the query. That record alone decides the answer: it must
//! cover the requested architecture and list at least one installer tool.
//!
//! # Example
//!
//! ```
//! use trollcheck_core::Architecture;
//! use trollcheck_lookup::{lookup, Query};
//! use trollcheck_registry::SupportTable;
//!
//! let table = SupportTable::builtin();
//! let verdict = lookup(&table, &Query::new("15.0", Architecture::Arm64));
//!
//! assert!(verdict.is_supported());
//! assert_eq!(verdict.range_description(), Some("Supported from 15.0 to 15.0"));
//! assert!(verdict.has_tool("TrollHelperOTA"));
//! ```

pub mod links;
pub mod matcher;
pub mod verdict;

pub use links::InstallerLink;
pub use matcher::in_range;
pub use verdict::Verdict;

use serde::{Deserialize, Serialize};
use tracing::debug;
use trollcheck_core::{Architecture, Version};
use trollcheck_registry::SupportTable;

/// A single support question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Version as typed, e.g. `"16.6.1"`
    pub version_text: String,
    /// Beta build rather than a release
    #[serde(default)]
    pub is_beta: bool,
    pub architecture: Architecture,
}

impl Query {
    pub fn new(version_text: impl Into<String>, architecture: Architecture) -> Self {
        Self {
            version_text: version_text.into(),
            is_beta: false,
            architecture,
        }
    }

    pub fn beta(mut self, is_beta: bool) -> Self {
        self.is_beta = is_beta;
        self
    }

    /// Parsed version used for matching
    pub fn version(&self) -> Version {
        Version::parse(&matcher::query_text(&self.version_text, self.is_beta))
    }
}

/// Answer `query` against `table`. Never fails.
pub fn lookup(table: &SupportTable, query: &Query) -> Verdict {
    let version = query.version();

    let Some((index, record)) = matcher::first_in_range(table, &version) else {
        debug!(version = %query.version_text, parsed = %version, "no range matches");
        return Verdict::NotSupported;
    };

    if !record.covers(query.architecture) {
        debug!(index, architecture = %query.architecture, "range matched, architecture not covered");
        return Verdict::NotSupported;
    }

    if !record.has_install_method() {
        debug!(index, "range matched, no install method listed");
        return Verdict::NotSupported;
    }

    debug!(index, range = %record.range_description(), tools = record.supported.len(), "supported");
    Verdict::supported(
        record.range_description(),
        record.supported.iter().map(links::resolve).collect(),
    )
}

/// Shorthand for [`lookup`] without building a [`Query`]
pub fn check(
    table: &SupportTable,
    version_text: &str,
    is_beta: bool,
    architecture: Architecture,
) -> Verdict {
    lookup(table, &Query::new(version_text, architecture).beta(is_beta))
}
