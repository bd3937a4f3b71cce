//! trollcheck registry: the support table
//!
//! An ordered list of [`SupportRecord`]s, each one an inclusive iOS version
//! range with the architectures it covers and the installer tools known to
//! work there. The built-in revision ships with the crate; other revisions
//! can be described in YAML.

pub mod builtin;
pub mod record;
pub mod table;

pub use record::{SupportRecord, ToolEntry};
pub use table::SupportTable;
