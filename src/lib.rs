// ============================================================================
// Exact Fraction Library
// Canonical lowest-terms rational arithmetic with text and binary codecs
// ============================================================================

//! # Exact Fraction
//!
//! Exact rational arithmetic on a canonical fraction value type.
//!
//! ## Features
//!
//! - **Canonical representation**: positive denominator, lowest terms,
//!   enforced by every construction path
//! - **Checked arithmetic** returning `Result` (add, subtract, multiply,
//!   divide, integer power), with panicking operator sugar
//! - **Total ordering** by cross-multiplication, equality on canonical form
//! - **Textual codec** (`"num/den"` via `Display`/`FromStr`) and a fixed
//!   8-byte little-endian binary codec
//! - **File and console collaborators** for persisting single fractions
//!
//! ## Example
//!
//! ```rust
//! use exact_fraction::prelude::*;
//!
//! let half = Fraction::new(1, 2)?;
//! let third = Fraction::new(1, 3)?;
//!
//! // Arithmetic always yields canonical results
//! let sum = half.checked_add(third)?;
//! assert_eq!(sum, Fraction::new(5, 6)?);
//!
//! // Construction reduces and normalizes signs
//! assert_eq!(Fraction::new(6, -8)?.to_string(), "-3/4");
//!
//! // Round-trip through the binary record
//! let record = sum.encode();
//! assert_eq!(Fraction::decode(&record)?, sum);
//! # Ok::<(), exact_fraction::numeric::FractionError>(())
//! ```

pub mod io;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::io::{IoError, IoResult};
    pub use crate::numeric::{Fraction, FractionError, FractionResult};
}
