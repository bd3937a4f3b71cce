//! Lookup verdict
//!
//! A lookup either finds a supported range with its installer links or
//! it does not. There is no error case.

use crate::links::InstallerLink;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// A record covers the query and lists at least one installer tool
    Supported {
        /// `"Supported from <from> to <to>"`
        range: String,
        /// Installer tools in table order
        links: Vec<InstallerLink>,
    },

    /// No record covers the query, or the covering record lists no tool
    NotSupported,
}

impl Verdict {
    pub fn supported(range: impl Into<String>, links: Vec<InstallerLink>) -> Self {
        Verdict::Supported {
            range: range.into(),
            links,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Verdict::Supported { .. })
    }

    pub fn range_description(&self) -> Option<&str> {
        match self {
            Verdict::Supported { range, .. } => Some(range),
            Verdict::NotSupported => None,
        }
    }

    /// Installer links, empty when not supported
    pub fn links(&self) -> &[InstallerLink] {
        match self {
            Verdict::Supported { links, .. } => links,
            Verdict::NotSupported => &[],
        }
    }

    /// Tool name to installation guide URL
    pub fn guides(&self) -> Option<Vec<(&str, &str)>> {
        match self {
            Verdict::Supported { links, .. } => Some(
                links.iter().map(|l| (l.tool.as_str(), l.guide.as_str())).collect(),
            ),
            Verdict::NotSupported => None,
        }
    }

    /// Tool name to official website URL
    pub fn websites(&self) -> Option<Vec<(&str, &str)>> {
        match self {
            Verdict::Supported { links, .. } => Some(
                links.iter().map(|l| (l.tool.as_str(), l.website.as_str())).collect(),
            ),
            Verdict::NotSupported => None,
        }
    }

    pub fn has_tool(&self, tool: &str) -> bool {
        self.links().iter().any(|l| l.tool == tool)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Supported { range, links } => {
                let tools: Vec<&str> = links.iter().map(|l| l.tool.as_str()).collect();
                write!(f, "Supported ({}; {})", range, tools.join(", "))
            }
            Verdict::NotSupported => write!(f, "Not Supported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(tool: &str, url: &str) -> InstallerLink {
        InstallerLink {
            tool: tool.to_string(),
            website: url.to_string(),
            guide: url.to_string(),
        }
    }

    #[test]
    fn test_not_supported_is_empty() {
        let v = Verdict::NotSupported;
        assert!(!v.is_supported());
        assert_eq!(v.range_description(), None);
        assert!(v.links().is_empty());
        assert!(v.guides().is_none());
    }

    #[test]
    fn test_supported_accessors() {
        let v = Verdict::supported("Supported from 15.0 to 15.0", vec![link("TrollHelperOTA", "https://a")]);
        assert!(v.is_supported());
        assert_eq!(v.range_description(), Some("Supported from 15.0 to 15.0"));
        assert_eq!(v.guides().unwrap(), vec![("TrollHelperOTA", "https://a")]);
        assert!(v.has_tool("TrollHelperOTA"));
        assert!(!v.has_tool("TrollInstallerX"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(Verdict::NotSupported).unwrap();
        assert_eq!(json["status"], "NOT_SUPPORTED");

        let v = Verdict::supported("r", vec![link("Unsupported", "")]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["status"], "SUPPORTED");
        assert_eq!(json["links"][0]["tool"], "Unsupported");
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::NotSupported.to_string(), "Not Supported");
        let v = Verdict::supported("Supported from 15.0 to 15.0", vec![link("A", ""), link("B", "")]);
        assert_eq!(v.to_string(), "Supported (Supported from 15.0 to 15.0; A, B)");
    }
}
