// ============================================================================
// I/O Module
// Thin collaborators that persist fractions to files and read from consoles
// ============================================================================
//
// This module provides:
// - text: single-fraction "num/den" text files
// - binary: the fixed 8-byte two-i32 little-endian record files
// - console: one-line interactive input over any BufRead
// - IoError: filesystem failures alongside rejected payloads
//
// The collaborators own file handles and error reporting; all fraction
// semantics stay in the numeric core, reached only through its parse,
// Display, encode and decode operations.

mod errors;

pub mod binary;
pub mod console;
pub mod text;

pub use errors::{IoError, IoResult};
