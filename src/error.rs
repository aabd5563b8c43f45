// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpactError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config in {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Directory walk failed: {0}")]
    Walk(String),
}

pub type Result<T> = std::result::Result<T, ImpactError>;

// Allow `?` on std::io::Error by converting to ImpactError::Io with unknown path.
impl From<std::io::Error> for ImpactError {
    fn from(source: std::io::Error) -> Self {
        ImpactError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for ImpactError {
    fn from(e: walkdir::Error) -> Self {
        ImpactError::Walk(e.to_string())
    }
}
