use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the desktop: files, config and the host browser.
/// Window commands themselves never fail.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences file {path} is not valid JSON: {source}")]
    Prefs {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode preferences: {0}")]
    PrefsEncode(#[source] serde_json::Error),
    #[error("config file {path} is invalid: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config: {0}")]
    InvalidConfig(String),
    #[error("could not open {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },
}

impl DeskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DeskError> for io::Error {
    fn from(err: DeskError) -> Self {
        io::Error::other(err.to_string())
    }
}
