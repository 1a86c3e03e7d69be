//! Error types for the Karnaugh-map pipeline
//!
//! The pipeline degrades silently wherever it can (unmatched rectangles are
//! dropped, an image with no relevant labels is reported as
//! [`Analysis::NothingDetected`]), so the variants here cover only the cases
//! where no meaningful map can be derived, plus input loading failures.
//!
//! [`Analysis::NothingDetected`]: crate::Analysis::NothingDetected

use crate::grid::GridError;
use std::fmt;
use std::io;

/// The main error type for the crate
#[derive(Debug)]
pub enum KmapError {
    /// The clustered grid cannot be encoded as a Karnaugh map
    Grid(GridError),

    /// Invalid input provided to a function
    ///
    /// Used when the recognizer output cannot be decoded, e.g. malformed JSON.
    InvalidInput {
        /// Description of what was invalid
        message: String,
    },

    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::Grid(err) => write!(f, "{}", err),
            KmapError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            KmapError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::Grid(err) => Some(err),
            KmapError::Io(err) => Some(err),
            KmapError::InvalidInput { .. } => None,
        }
    }
}

impl From<GridError> for KmapError {
    fn from(err: GridError) -> Self {
        KmapError::Grid(err)
    }
}

impl From<io::Error> for KmapError {
    fn from(err: io::Error) -> Self {
        KmapError::Io(err)
    }
}

impl From<serde_json::Error> for KmapError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            KmapError::Io(err.into())
        } else {
            KmapError::InvalidInput {
                message: err.to_string(),
            }
        }
    }
}

// Conversion from KmapError to io::Error for callers working in io::Result
impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        match err {
            KmapError::Io(e) => e,
            KmapError::Grid(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            KmapError::InvalidInput { message } => {
                io::Error::new(io::ErrorKind::InvalidInput, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display_passthrough() {
        let err = KmapError::from(GridError::MalformedGrid { rows: 3, cols: 2 });
        assert_eq!(err.to_string(), GridError::MalformedGrid { rows: 3, cols: 2 }.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_becomes_invalid_input() {
        let parse: Result<Vec<u8>, _> = serde_json::from_str("[1, 2");
        let err = KmapError::from(parse.unwrap_err());
        assert!(matches!(err, KmapError::InvalidInput { .. }));
    }

    #[test]
    fn test_into_io_error_kind() {
        let io_err: io::Error = KmapError::from(GridError::EmptyGrid).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let io_err: io::Error = KmapError::InvalidInput {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
