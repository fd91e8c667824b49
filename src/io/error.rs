//! Error types and path context for editor operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all editor operations
#[derive(Debug)]
pub enum EditorError {
    /// Requested grid dimensions cannot be allocated
    InvalidSize {
        /// Requested width in cells
        width: i64,
        /// Requested height in cells
        height: i64,
        /// Explanation of why the size was rejected
        reason: &'static str,
    },

    /// Cell coordinate lies outside the grid
    OutOfBounds {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
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

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// User or command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid size {width}x{height}: {reason}")
            }
            Self::OutOfBounds { x, y, dimensions } => {
                write!(
                    f,
                    "Cell ({x}, {y}) is outside the {}x{} grid",
                    dimensions.0, dimensions.1
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, EditorError>;

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the path and operation name to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`EditorError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| EditorError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EditorError {
    EditorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
