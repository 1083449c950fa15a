//! Error types for encoding, export and batch operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for everything around pattern generation
///
/// Rendering itself cannot fail; these cover encoding the result and the
/// filesystem work the CLI does.
#[derive(Debug)]
pub enum PatternError {
    /// Failed to encode a rendered surface as PNG
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Two distinct seeds in one batch resolved to the same output file
    OutputCollision {
        /// Output file both seeds map to
        path: PathBuf,
        /// Seed that claimed the file first
        first_seed: String,
        /// Seed that was refused
        second_seed: String,
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
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode pattern as PNG: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::OutputCollision {
                path,
                first_seed,
                second_seed,
            } => {
                write!(
                    f,
                    "Seeds {first_seed:?} and {second_seed:?} both write to '{}'",
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
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageEncode { source } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::OutputCollision { .. } => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageEncode { source: err }
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PatternError {
    PatternError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
