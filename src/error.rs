//! Error type for the edges of the crate
//!
//! The simulation itself is total; only configuration loading, argument
//! parsing, snapshot output and the native runner can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("invalid bounds {0:?}: expected WIDTHxHEIGHT")]
    InvalidBounds(String),
    #[error("failed to write snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("frame loop task failed: {0}")]
    FrameLoop(String),
}

pub type Result<T> = std::result::Result<T, Error>;
