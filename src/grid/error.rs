//! Error types for grid construction and variable encoding

use std::fmt;
use std::io;

/// Errors that prevent a grid from being read as a Karnaugh map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is not a power of two
    ///
    /// Gray-code encoding only covers `2^n` rows or columns, so a map whose
    /// clustering produced e.g. three rows has no consistent variable layout.
    MalformedGrid {
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        cols: usize,
    },
    /// The grid needs more variables than there are names for
    UnsupportedVariableCount {
        /// Variables needed to address every cell
        required: usize,
        /// Size of the variable-name pool
        available: usize,
    },
    /// A manually supplied state vector does not fill the grid exactly
    StateCountMismatch {
        /// `rows * cols`
        expected: usize,
        /// Number of states supplied
        actual: usize,
    },
    /// A manually supplied grid has zero rows or zero columns
    EmptyGrid,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::MalformedGrid { rows, cols } => write!(
                f,
                "Grid of {}x{} cells is not a Karnaugh map: both dimensions must be powers of two",
                rows, cols
            ),
            GridError::UnsupportedVariableCount {
                required,
                available,
            } => write!(
                f,
                "Grid needs {} variables but at most {} are supported",
                required, available
            ),
            GridError::StateCountMismatch { expected, actual } => write!(
                f,
                "Expected {} cell states, got {}",
                expected, actual
            ),
            GridError::EmptyGrid => write!(f, "Grid must have at least one row and one column"),
        }
    }
}

impl std::error::Error for GridError {}

impl From<GridError> for io::Error {
    fn from(err: GridError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
