use thiserror::Error;

/// Failures a caller can trigger on the grid engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid grid dimensions {rows}x{cols} for {len} cells")]
    InvalidDimensions { rows: usize, cols: usize, len: usize },
}
