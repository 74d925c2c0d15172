use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IjwtError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("INVALID_SITE_BASE: '{base}' is not a valid absolute URL: {reason}")]
    InvalidSiteBase { base: String, reason: String },

    // Render errors
    #[error("PAGE_NOT_FOUND: '{0}' was not found in any configured directory")]
    PageNotFound(String),

    #[error("UNQUALIFIABLE_PATH: '{0}' has no component that can be re-rooted")]
    UnqualifiablePath(String),

    #[error("INCLUDE_DEPTH_EXCEEDED: including '{file_name}' would exceed depth {max_depth}")]
    IncludeDepthExceeded { file_name: String, max_depth: usize },

    // Store errors
    #[error("STORE_READ_ERROR: failed to read {path}: {reason}")]
    StoreReadError { path: PathBuf, reason: String },

    #[error("STORE_WRITE_ERROR: failed to write {path}: {reason}")]
    StoreWriteError { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for IjwtError {
    fn from(err: serde_json::Error) -> Self {
        IjwtError::Generic(format!("JSON error: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for IjwtError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        IjwtError::Generic(format!("Serialized HTML is not UTF-8: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, IjwtError>;
