//! CPU architecture variants a support record can cover.

use crate::error::TrollcheckError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Target instruction-set variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// A8 through A11
    Arm64,
    /// A12 and later, M1/M2
    Arm64e,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Architecture::Arm64, Architecture::Arm64e];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Arm64 => "arm64",
            Architecture::Arm64e => "arm64e",
        }
    }

    /// Collect the architectures named in a free-text platform description
    /// such as `"arm64 (A8) - arm64e (A12-A17/M1-M2)"`.
    ///
    /// Tokens are split on anything that is not alphanumeric, so `arm64e`
    /// never counts as `arm64`.
    pub fn scan(platforms: &str) -> BTreeSet<Architecture> {
        platforms
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter_map(|token| token.parse().ok())
            .collect()
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = TrollcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arm64" => Ok(Architecture::Arm64),
            "arm64e" => Ok(Architecture::Arm64e),
            other => Err(TrollcheckError::UnknownArchitecture(other.to_string())),
        }
    }
}
