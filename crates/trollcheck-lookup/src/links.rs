//! Installer link resolution.
//!
//! `TrollInstallerX` and `TrollInstallerMDC` always resolve to their
//! canonical website and install guide; the URL stored in the table is
//! ignored for them. Other tools use the stored URL for both.

use serde::{Deserialize, Serialize};
use trollcheck_registry::builtin::{TROLLINSTALLERMDC_APPS, TROLLINSTALLERX_RELEASE};
use trollcheck_registry::ToolEntry;

pub const TROLLINSTALLERX_GUIDE: &str = "https://ios.cfw.guide/installing-trollstore-trollinstallerx";
pub const TROLLINSTALLERMDC_GUIDE: &str = "https://ios.cfw.guide/installing-trollstore-trollinstallermdc/";

/// An installer tool with where to get it and how to use it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerLink {
    pub tool: String,
    /// Official website
    pub website: String,
    /// Installation guide
    pub guide: String,
}

struct Canonical {
    website: &'static str,
    guide: &'static str,
}

fn canonical(tool: &str) -> Option<Canonical> {
    match tool {
        "TrollInstallerX" => Some(Canonical {
            website: TROLLINSTALLERX_RELEASE,
            guide: TROLLINSTALLERX_GUIDE,
        }),
        "TrollInstallerMDC" => Some(Canonical {
            website: TROLLINSTALLERMDC_APPS,
            guide: TROLLINSTALLERMDC_GUIDE,
        }),
        _ => None,
    }
}

/// Turn a stored tool entry into the link shown to the user
pub fn resolve(entry: &ToolEntry) -> InstallerLink {
    match canonical(&entry.tool) {
        Some(c) => InstallerLink {
            tool: entry.tool.clone(),
            website: c.website.to_string(),
            guide: c.guide.to_string(),
        },
        None => InstallerLink {
            tool: entry.tool.clone(),
            website: entry.url.clone(),
            guide: entry.url.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_trollinstallerx() {
        let link = resolve(&ToolEntry::new("TrollInstallerX", "https://example.invalid/stale"));
        assert_eq!(link.website, TROLLINSTALLERX_RELEASE);
        assert_eq!(link.guide, TROLLINSTALLERX_GUIDE);
    }

    #[test]
    fn test_rewrites_mdc() {
        let link = resolve(&ToolEntry::new("TrollInstallerMDC", ""));
        assert_eq!(link.website, TROLLINSTALLERMDC_APPS);
        assert_eq!(link.guide, TROLLINSTALLERMDC_GUIDE);
    }

    #[test]
    fn test_passthrough() {
        let link = resolve(&ToolEntry::new("TrollHelperOTA", "https://ios.cfw.guide/x"));
        assert_eq!(link.website, "https://ios.cfw.guide/x");
        assert_eq!(link.guide, "https://ios.cfw.guide/x");

        let sentinel = resolve(&ToolEntry::new("Unsupported", ""));
        assert_eq!(sentinel.tool, "Unsupported");
        assert!(sentinel.guide.is_empty());
    }
}
