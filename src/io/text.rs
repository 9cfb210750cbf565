// ============================================================================
// Text File Collaborator
// Reads and writes single-fraction "num/den" text files
// ============================================================================

use super::errors::IoResult;
use crate::numeric::Fraction;
use std::fs;
use std::path::Path;

/// Read a fraction from a text file containing `"<num>/<den>"`.
///
/// Surrounding whitespace (including a trailing newline) is tolerated.
///
/// # Errors
/// `IoError::Io` for filesystem failures, `IoError::Fraction` if the
/// content does not parse.
pub fn read_fraction<P: AsRef<Path>>(path: P) -> IoResult<Fraction> {
    let content = fs::read_to_string(&path)?;
    let fraction: Fraction = content.parse()?;
    tracing::debug!(path = %path.as_ref().display(), %fraction, "read text fraction");
    Ok(fraction)
}

/// Write a fraction to a text file as `"<num>/<den>"`, no trailing newline.
///
/// The file is created if missing and truncated otherwise.
pub fn write_fraction<P: AsRef<Path>>(path: P, fraction: &Fraction) -> IoResult<()> {
    fs::write(&path, fraction.to_string())?;
    tracing::debug!(path = %path.as_ref().display(), %fraction, "wrote text fraction");
    Ok(())
}
