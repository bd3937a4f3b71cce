//! Inclusive range matching over the support table.

use trollcheck_core::Version;
use trollcheck_registry::{SupportRecord, SupportTable};
use std::cmp::Ordering;
use tracing::trace;

/// Effective query text; beta queries carry a `" beta"` suffix.
pub fn query_text(version_text: &str, is_beta: bool) -> String {
    if is_beta {
        format!("{} beta", version_text)
    } else {
        version_text.to_string()
    }
}

/// Check whether `version_text` lies in `[from_bound, to_bound]`.
pub fn in_range(version_text: &str, is_beta: bool, from_bound: &str, to_bound: &str) -> bool {
    let version = Version::parse(&query_text(version_text, is_beta));
    contains(&version, &Version::parse(from_bound), &Version::parse(to_bound))
}

fn contains(version: &Version, from: &Version, to: &Version) -> bool {
    version.compare(from) != Ordering::Less && version.compare(to) != Ordering::Greater
}

/// First record whose range holds `version`, with its position in the table.
pub fn first_in_range<'a>(
    table: &'a SupportTable,
    version: &Version,
) -> Option<(usize, &'a SupportRecord)> {
    table.iter().enumerate().find(|(index, record)| {
        let hit = contains(version, &record.from_bound(), &record.to_bound());
        trace!(index, from = %record.from_version, to = %record.to_version, hit, "range check");
        hit
    })
}
