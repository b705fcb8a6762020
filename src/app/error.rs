use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Raised when a setting breaks a format rule during validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Include tag '{0}' does not start with '@'.")]
    IncludeTag(String),

    #[error("Exclude tag '{0}' does not start with '@'.")]
    ExcludeTag(String),
}

/// Failures surfaced by [`crate::app::file_io::FileIo`].
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File '{}' does not exist or cannot be read", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File '{}' could not be created", path.display())]
    Creation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
