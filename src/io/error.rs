//! Error types for generation and file handling

use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong while generating from a sample
///
/// A single contradicted attempt is not an error at this level; the solver
/// restarts internally and only surfaces
/// [`GenerationError::AttemptsExhausted`] once a bounded retry policy runs
/// out.
#[derive(Debug)]
pub enum GenerationError {
    /// A text sample did not match the expected format
    SampleParse {
        /// Path of the offending sample
        path: PathBuf,
        /// Description of what failed to parse
        reason: String,
    },

    /// Sample data cannot drive a generation
    InvalidSourceData {
        /// What is wrong with the sample
        reason: String,
    },

    /// A caller-supplied value failed validation
    InvalidParameter {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// The value as given
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A grid holds a tile identity the sample never defined
    InvalidTileIndex {
        /// The unknown tile identity
        index: usize,
        /// Number of tiles the sample defines
        max_tiles: usize,
    },

    /// A bounded retry policy ran out of attempts without a consistent grid
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
        /// Position of the contradiction that ended the final attempt
        position: [i32; 2],
    },

    /// An internal computation produced an impossible state
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// A sample image could not be read
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// A generated image could not be written
    ImageExport {
        /// Path the export targeted
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// A plain filesystem operation failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// What was being done to it
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleParse { path, reason } => {
                write!(f, "Failed to parse sample '{}': {reason}", path.display())
            }
            Self::InvalidSourceData { reason } => write!(f, "Unusable sample: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}"),
            Self::InvalidTileIndex { index, max_tiles } => write!(
                f,
                "Tile identity {index} has no entry ({max_tiles} tiles known)"
            ),
            Self::AttemptsExhausted { attempts, position } => write!(
                f,
                "No consistent grid found after {attempts} attempts \
                 (last contradiction at [{}, {}])",
                position[0], position[1]
            ),
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot read sample image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => write!(
                f,
                "Cannot write generated image '{}': {source}",
                path.display()
            ),
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(
                f,
                "Filesystem error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> GenerationError {
    GenerationError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
