//! Error types for board construction, search and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all packing operations
///
/// An exhausted search is not an error: it is reported as
/// [`SearchOutcome::Exhausted`](crate::algorithm::search::SearchOutcome::Exhausted).
#[derive(Debug)]
pub enum PackingError {
    /// Board side is zero or wider than a row word
    InvalidBoardSize {
        /// Requested side length
        size: usize,
        /// Largest supported side length
        max: usize,
    },

    /// Piece dimensions cannot be used
    InvalidPiece {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Explanation of why the piece is rejected
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The free-cell counter disagrees with the occupancy bits
    ///
    /// Raised when no free cell exists at or after the search floor although
    /// the counter still reports free cells.
    InconsistentBoard {
        /// Free cells reported by the counter
        free_cells: usize,
        /// Cell index the scan started from
        floor: usize,
    },

    /// Placements overlap, leave the board or leave cells uncovered
    InvalidLayout {
        /// Description of the defect
        reason: String,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system or stream failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize { size, max } => {
                write!(f, "Board size {size} is not supported (expected 1..={max})")
            }
            Self::InvalidPiece {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid piece {width}x{height}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InconsistentBoard { free_cells, floor } => {
                write!(
                    f,
                    "Board reports {free_cells} free cells but none exist at or after cell {floor}"
                )
            }
            Self::InvalidLayout { reason } => {
                write!(f, "Invalid layout: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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

impl std::error::Error for PackingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackingError>;

/// Path recorded for failures writing the text report
pub const REPORT_STREAM: &str = "<report>";

/// Create an error for a failed write of the text report
///
/// The report goes to a caller-supplied writer rather than a file, so the
/// path names the stream.
pub fn report_write_error(source: std::io::Error) -> PackingError {
    PackingError::FileSystem {
        path: PathBuf::from(REPORT_STREAM),
        operation: "write report",
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackingError {
    PackingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid layout error
pub fn invalid_layout(reason: &impl ToString) -> PackingError {
    PackingError::InvalidLayout {
        reason: reason.to_string(),
    }
}
