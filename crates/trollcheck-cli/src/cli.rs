use clap::{Parser, ValueEnum};
use trollcheck_core::{Architecture, TROLLCHECK_VERSION};

#[derive(Parser, Debug)]
#[command(name = "trollcheck", version = TROLLCHECK_VERSION)]
#[command(about = "Check whether an iOS version supports TrollStore", long_about = None)]
pub struct Cli {
    /// iOS version, e.g. 16.6.1
    #[arg(id = "ios_version", value_name = "VERSION", required_unless_present = "list")]
    pub ios_version: Option<String>,

    /// Treat the version as a beta build
    #[arg(short, long)]
    pub beta: bool,

    /// Device architecture
    #[arg(short, long, value_enum, default_value_t = ArchArg::Arm64)]
    pub arch: ArchArg,

    /// Output format
    #[arg(short, long, value_enum, env = "TROLLCHECK_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the support table and exit
    #[arg(short, long)]
    pub list: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchArg {
    Arm64,
    Arm64e,
}

impl From<ArchArg> for Architecture {
    fn from(arg: ArchArg) -> Self {
        match arg {
            ArchArg::Arm64 => Architecture::Arm64,
            ArchArg::Arm64e => Architecture::Arm64e,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
