//! trollcheck core: version comparator, architecture model, error model
//!
//! Shared building blocks for the support table and the lookup engine.

pub mod architecture;
pub mod error;
pub mod version;

pub use architecture::Architecture;
pub use error::TrollcheckError;
pub use version::{compare, parse, Version};

/// Engine version reported by the CLI
pub const TROLLCHECK_VERSION: &str = env!("CARGO_PKG_VERSION");
