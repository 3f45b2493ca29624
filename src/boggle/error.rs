use std::io;
use std::path::PathBuf;

/// Errors raised while building boards and lexicons.
///
/// Only `InvalidDimension`, `InvalidLengthRange`, `InvalidBoard` and the I/O
/// variants are fatal. `LengthMismatch` is returned after the board has been
/// filled as far as possible, and `InvalidToken` leaves the target cell unset.
#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("invalid board dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("puzzle text has {found} letters but the board has {expected} cells")]
    LengthMismatch { expected: usize, found: usize },

    #[error("`{0}` is not a letter token")]
    InvalidToken(String),

    #[error("no cell at row {row}, column {col}")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid word length range {min}..={max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("malformed board: {0}")]
    InvalidBoard(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
