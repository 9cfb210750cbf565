// ============================================================================
// Console Collaborator
// Reads one "num/den" line from an input stream
// ============================================================================

use super::errors::IoResult;
use crate::numeric::Fraction;
use std::io::BufRead;

/// Read one line from `reader` and parse it as `"<num>/<den>"`.
///
/// Reading stops at the first newline; the line (with any surrounding
/// whitespace) goes through the textual parse operation. End-of-input with
/// no data parses as an empty string and fails accordingly.
pub fn read_fraction<R: BufRead>(reader: &mut R) -> IoResult<Fraction> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let fraction: Fraction = line.parse()?;
    tracing::debug!(%fraction, "read console fraction");
    Ok(fraction)
}

/// Read one `"<num>/<den>"` line from standard input.
pub fn read_fraction_stdin() -> IoResult<Fraction> {
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    read_fraction(&mut lock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::errors::IoError;
    use crate::numeric::FractionError;
    use std::io::Cursor;

    #[test]
    fn test_read_single_line() {
        let mut input = Cursor::new("3/4\n");
        assert_eq!(
            read_fraction(&mut input).unwrap(),
            Fraction::new(3, 4).unwrap()
        );
    }

    #[test]
    fn test_read_stops_at_newline() {
        let mut input = Cursor::new("6/8\n1/2\n");
        assert_eq!(
            read_fraction(&mut input).unwrap(),
            Fraction::new(3, 4).unwrap()
        );
        // The next line is still available to the caller
        assert_eq!(
            read_fraction(&mut input).unwrap(),
            Fraction::new(1, 2).unwrap()
        );
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let mut input = Cursor::new("-5/6");
        assert_eq!(
            read_fraction(&mut input).unwrap(),
            Fraction::new(-5, 6).unwrap()
        );
    }

    #[test]
    fn test_read_malformed_line() {
        let mut input = Cursor::new("five quarters\n");
        match read_fraction(&mut input) {
            Err(IoError::Fraction(FractionError::ParseError)) => {},
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_empty_input() {
        let mut input = Cursor::new("");
        match read_fraction(&mut input) {
            Err(IoError::Fraction(FractionError::ParseError)) => {},
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
