// ============================================================================
// Binary File Collaborator
// Reads and writes the fixed 8-byte two-i32 little-endian record
// ============================================================================

use super::errors::IoResult;
use crate::numeric::Fraction;
use std::fs;
use std::path::Path;

/// Read a fraction from a binary file holding one 8-byte record.
///
/// The whole file is the payload: anything other than exactly 8 bytes is
/// rejected as `FractionError::FormatError` through the decode path.
///
/// # Errors
/// `IoError::Io` for filesystem failures, `IoError::Fraction` if the
/// payload does not decode.
pub fn read_fraction<P: AsRef<Path>>(path: P) -> IoResult<Fraction> {
    let bytes = fs::read(&path)?;
    let fraction = Fraction::decode(&bytes)?;
    tracing::debug!(path = %path.as_ref().display(), %fraction, "read binary fraction");
    Ok(fraction)
}

/// Write a fraction to a binary file as its 8-byte record.
///
/// The file is created if missing and truncated otherwise.
pub fn write_fraction<P: AsRef<Path>>(path: P, fraction: &Fraction) -> IoResult<()> {
    fs::write(&path, fraction.encode())?;
    tracing::debug!(path = %path.as_ref().display(), %fraction, "wrote binary fraction");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::errors::IoError;
    use crate::numeric::FractionError;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraction.bin");

        let x = Fraction::new(-3, 4).unwrap();
        write_fraction(&path, &x).unwrap();

        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk.len(), Fraction::ENCODED_LEN);
        assert_eq!(read_fraction(&path).unwrap(), x);
    }

    #[test]
    fn test_record_layout_is_little_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraction.bin");

        write_fraction(&path, &Fraction::new(1, 2).unwrap()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_read_truncated_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraction.bin");

        fs::write(&path, [1, 2, 3, 4, 5]).unwrap();
        match read_fraction(&path) {
            Err(IoError::Fraction(FractionError::FormatError { len: 5 })) => {},
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.bin");

        match read_fraction(&path) {
            Err(IoError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
