//! Version parsing and numeric-prefix comparison.
//!
//! Support bounds look like `"14.0 beta 2"`, `"16.7 RC"` or
//! `"17.0.1 and later"`. Only the first word takes part in comparison:
//! it is split on `.` and each piece is read as an integer, with anything
//! unreadable counting as `0`.
//!
//! Comparison stops at the end of the shorter sequence, so `16.6` and
//! `16.6.1` compare equal. Because of that, [`Version`] exposes
//! [`Version::compare`] instead of implementing `Ord`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Parsed numeric components of a version string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(Vec<i64>);

impl Version {
    /// Parse a version string. Never fails.
    pub fn parse(text: &str) -> Self {
        Version(parse(text))
    }

    pub fn components(&self) -> &[i64] {
        &self.0
    }

    pub fn compare(&self, other: &Version) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl From<Vec<i64>> for Version {
    fn from(components: Vec<i64>) -> Self {
        Version(components)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

/// Split the leading word of `text` into integer components.
///
/// Empty words and empty dot-pieces are skipped, so `""` parses to `[]`
/// and `"15..0"` to `[15, 0]`.
pub fn parse(text: &str) -> Vec<i64> {
    let Some(head) = text.split(' ').find(|word| !word.is_empty()) else {
        return Vec::new();
    };

    head.split('.')
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.parse::<i64>().unwrap_or(0))
        .collect()
}

/// Compare two component sequences up to the shorter length.
pub fn compare(a: &[i64], b: &[i64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
