// ============================================================================
// I/O Errors
// Error types for the file and console collaborators
// ============================================================================

use crate::numeric::FractionError;
use std::fmt;
use std::io;

/// Errors surfaced by the file and console collaborators.
///
/// Operating-system failures (missing file, permission) keep their
/// underlying `std::io::Error`; everything the fraction core rejects
/// arrives as a [`FractionError`].
#[derive(Debug)]
pub enum IoError {
    /// File or stream access failed
    Io(io::Error),
    /// The payload was read but is not a valid fraction
    Fraction(FractionError),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Io(e) => write!(f, "i/o failure: {}", e),
            IoError::Fraction(e) => write!(f, "invalid fraction payload: {}", e),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Io(e) => Some(e),
            IoError::Fraction(e) => Some(e),
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        IoError::Io(e)
    }
}

impl From<FractionError> for IoError {
    fn from(e: FractionError) -> Self {
        IoError::Fraction(e)
    }
}

/// Result type alias for collaborator operations
pub type IoResult<T> = Result<T, IoError>;
