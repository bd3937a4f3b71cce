//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrollcheckError {
    #[error("ARCH/unknown architecture '{0}' (expected arm64 or arm64e)")]
    UnknownArchitecture(String),

    #[error("TABLE/{0}")]
    TableError(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}

impl From<serde_json::Error> for TrollcheckError {
    fn from(err: serde_json::Error) -> Self {
        TrollcheckError::SerializeError(err.to_string())
    }
}
