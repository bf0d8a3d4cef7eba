use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    ConfigurationInvalid { reason: String },
    #[error("could not read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("terminal error")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GameError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::ConfigurationInvalid {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
