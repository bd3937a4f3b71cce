//! The support table shipped with trollcheck.

use crate::record::SupportRecord;

pub const TROLLINSTALLERX_RELEASE: &str = "https://github.com/alfiecg24/TrollInstallerX/tree/1.0.2";
pub const TROLLHELPEROTA_GUIDE: &str = "https://ios.cfw.guide/installing-trollstore-trollhelperota";
pub const TROLLHELPER_GUIDE: &str = "https://ios.cfw.guide/installing-trollstore-trollhelper";
pub const TROLLINSTALLERMDC_APPS: &str = "https://dhinakg.github.io/apps.html";

const ARM64_ONLY: &str = "arm64 (A8) - arm64 (A9-A11)";
const ARM64_TO_ARM64E: &str = "arm64 (A8) - arm64e (A12-A17/M1-M2)";

/// Revision label of [`records`]
pub const REVISION: &str = "builtin";

/// Records in ascending version order.
pub fn records() -> Vec<SupportRecord> {
    vec![
        SupportRecord::new("14.0 beta 1", "14.0 beta 2", ARM64_ONLY),
        SupportRecord::new("14.0 beta 2", "14.8.1", ARM64_ONLY)
            .with_tool("TrollInstallerX", TROLLINSTALLERX_RELEASE)
            .with_tool("TrollHelperOTA", TROLLHELPEROTA_GUIDE),
        SupportRecord::new("15.0", "15.0", ARM64_TO_ARM64E)
            .with_tool("TrollInstallerX", TROLLINSTALLERX_RELEASE)
            .with_tool("TrollHelperOTA", TROLLHELPEROTA_GUIDE),
        SupportRecord::new("15.0 beta 1", "15.5 beta 4", ARM64_TO_ARM64E)
            .with_tool("TrollHelperOTA", TROLLHELPEROTA_GUIDE),
        SupportRecord::new("15.5", "15.5", ARM64_TO_ARM64E)
            .with_tool("TrollHelperOTA", TROLLHELPEROTA_GUIDE)
            .with_tool("TrollInstallerX", TROLLINSTALLERX_RELEASE)
            .with_tool("TrollInstallerMDC", TROLLINSTALLERMDC_APPS),
        SupportRecord::new("16.0 beta 1", "16.0 beta 3", ARM64_TO_ARM64E),
        SupportRecord::new("16.0 beta 4", "16.6.1", ARM64_TO_ARM64E)
            .with_tool("TrollInstallerX", TROLLINSTALLERX_RELEASE)
            .with_tool("TrollHelperOTA", TROLLHELPEROTA_GUIDE),
        SupportRecord::new("16.7 RC", "16.7 RC", ARM64_TO_ARM64E)
            .with_tool("TrollHelper", TROLLHELPER_GUIDE)
            .with_tool("No Install Method", ""),
        SupportRecord::new("16.7", "16.7.7", ARM64_TO_ARM64E)
            .with_tool("Unsupported", ""),
        SupportRecord::new("17.0 beta 1", "17.0 beta 4", ARM64_TO_ARM64E)
            .with_tool("TrollInstallerX", TROLLINSTALLERX_RELEASE)
            .with_tool("No Install Method", ""),
        SupportRecord::new("17.0 beta 5", "17.0", ARM64_TO_ARM64E)
            .with_tool("TrollHelper", TROLLHELPER_GUIDE)
            .with_tool("No Install Method", ""),
        SupportRecord::new("17.0.1 and later", "17.0.1 and later", ARM64_TO_ARM64E)
            .with_tool("Unsupported", ""),
    ]
}
