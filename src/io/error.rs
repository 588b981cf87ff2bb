//! Error types and result alias for engine operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum EngineError {
    /// Failed to read the dictionary file from the filesystem
    DictionaryLoad {
        /// Path to the dictionary file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Supplied grid does not describe a fillable 5x5 board
    ///
    /// Raised for wrong dimensions, unrecognized cell markers, and white
    /// cells that belong to no slot in either direction.
    InvalidGrid {
        /// Description of what is wrong with the grid
        reason: String,
    },

    /// Operation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// All candidate assignments were exhausted without finding a fill
    NoSolution {
        /// Operation that failed
        operation: &'static str,
        /// Number of attempts made before giving up
        attempts: usize,
        /// Wall-clock time spent in milliseconds
        elapsed_ms: u128,
    },

    /// The wall-clock deadline elapsed before any attempt succeeded
    Timeout {
        /// Operation that timed out
        operation: &'static str,
        /// Number of attempts started before the deadline fired
        attempts: usize,
        /// Wall-clock time spent in milliseconds
        elapsed_ms: u128,
    },
}

impl EngineError {
    /// Short machine-readable identifier for the error category
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DictionaryLoad { .. } => "dictionary_load",
            Self::FileSystem { .. } => "file_system",
            Self::InvalidGrid { .. } => "invalid_input",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::NoSolution { .. } => "no_solution",
            Self::Timeout { .. } => "timeout",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryLoad { path, source } => {
                write!(
                    f,
                    "Failed to load dictionary '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoSolution {
                operation,
                attempts,
                elapsed_ms,
            } => {
                write!(
                    f,
                    "No solution found by {operation} after {attempts} attempt(s) in {elapsed_ms} ms"
                )
            }
            Self::Timeout {
                operation,
                attempts,
                elapsed_ms,
            } => {
                write!(
                    f,
                    "Deadline exceeded in {operation} after {attempts} attempt(s) in {elapsed_ms} ms"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DictionaryLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: impl Into<String>) -> EngineError {
    EngineError::InvalidGrid {
        reason: reason.into(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
