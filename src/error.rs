use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pbxpatch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("Invalid pattern for anchor '{anchor}': {source}")]
    InvalidPattern {
        anchor: String,
        source: regex::Error,
    },

    #[error("Config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Anchors not found in project file: {}", anchors.join(", "))]
    UnmatchedAnchors { anchors: Vec<String> },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new invalid pattern error
    pub fn invalid_pattern(anchor: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            anchor: anchor.into(),
            source,
        }
    }

    /// Create a new config error
    pub fn config_error(message: impl Into<String>, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
        }
    }

    pub fn unmatched(anchors: Vec<String>) -> Self {
        Self::UnmatchedAnchors { anchors }
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            PatchError::Io { path, .. } | PatchError::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
