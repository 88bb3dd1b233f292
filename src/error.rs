// Error type shared by the navigation and favorites core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The path failed the existence check. Callers treat this as a no-op.
    #[error("Path does not exist: {0:?}")]
    InvalidPath(PathBuf),

    /// Favorites file could not be read or written.
    #[error("Favorites file {path:?} unavailable: {source}")]
    PersistenceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    ConfigDirUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
