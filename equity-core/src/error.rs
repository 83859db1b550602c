//! Errors for the file-backed parts of the core.
//!
//! The projection and formatters are total and never return these; only
//! reading and writing scenario and config files can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaytoolError {
    #[error("read or write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl PlaytoolError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlaytoolError::Io {
            path: path.into(),
            source,
        }
    }
}
