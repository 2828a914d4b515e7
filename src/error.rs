//! Error types for partsplit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for partsplit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while splitting or merging files
#[derive(Error, Debug)]
pub enum Error {
    #[error("file name is empty")]
    EmptyFileName,

    #[error("size must be positive")]
    NonPositiveSize,

    #[error("size {0} is too large")]
    SizeTooLarge(u64),

    #[error("{} is a directory, not a file", .0.display())]
    IsDirectory(PathBuf),

    #[error("{} is empty", .0.display())]
    EmptySource(PathBuf),

    #[error("empty file list")]
    EmptyFileList,

    #[error("empty output file name")]
    EmptyOutputName,

    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("fail to create file {}, error: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification used by callers to decide how to report an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad or missing arguments, detected before any I/O side effect
    Usage,
    /// A named file was not there when it was accessed
    NotFound,
    /// Failure while opening, reading, writing or releasing a file
    Io,
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::EmptyFileName
            | Error::NonPositiveSize
            | Error::SizeTooLarge(_)
            | Error::IsDirectory(_)
            | Error::EmptySource(_)
            | Error::EmptyFileList
            | Error::EmptyOutputName => ErrorClass::Usage,
            Error::NotFound(_) => ErrorClass::NotFound,
            Error::AlreadyExists(_)
            | Error::CreateOutput { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::Config(_) => ErrorClass::Io,
        }
    }
}
