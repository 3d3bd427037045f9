use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the asset lister
#[derive(Debug)]
pub enum Error {
    /// The assets directory (or the executable location) could not be accessed
    FileSystem {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The listing could not be written out
    Output { source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileSystem {
                source,
                path,
                operation,
            } => {
                if path.as_os_str().is_empty() {
                    write!(f, "Failed to {operation}: {source}")
                } else {
                    write!(f, "Failed to {} {}: {}", operation, path.display(), source)
                }
            }
            Error::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileSystem { source, .. } => Some(source),
            Error::Output { source } => Some(source),
        }
    }
}

impl Error {
    /// Whether this error came from the filesystem side of the run
    pub fn is_file_system(&self) -> bool {
        matches!(self, Error::FileSystem { .. })
    }
}

/// Result type used across the crate
///
/// # Examples
/// ```
/// use art_file_finder::prelude::Result;
///
/// fn example_function() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a filesystem error
pub fn file_system_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileSystem {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an output error
pub fn output_error(err: io::Error) -> Error {
    Error::Output { source: err }
}
