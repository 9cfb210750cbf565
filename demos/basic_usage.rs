// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_fraction::io::{binary, text};
use exact_fraction::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("=== Exact Fraction Example ===\n");

    // Construction canonicalizes: signs move to the numerator, common
    // factors cancel
    let a = Fraction::new(6, -8)?;
    println!("Fraction::new(6, -8) stores {}", a);

    let b = Fraction::new(1, 3)?;
    println!("Fraction::new(1, 3) stores {}\n", b);

    // Checked arithmetic
    println!("{} + {} = {}", a, b, a.checked_add(b)?);
    println!("{} - {} = {}", a, b, a.checked_sub(b)?);
    println!("{} * {} = {}", a, b, a.checked_mul(b)?);
    println!("{} / {} = {}", a, b, a.checked_div(b)?);
    println!("{} ^ -2 = {}", a, a.checked_pow(-2)?);
    println!("{} as f64 = {}\n", a, a.to_f64());

    // Ordering uses cross-multiplication; equal values compare equal in
    // any construction spelling
    println!("{} < {} : {}", a, b, a < b);
    println!("6/-8 == -3/4 : {}", a == Fraction::new(-3, 4)?);
    println!();

    // Persist to a text file and back
    let dir = tempfile::tempdir()?;
    let text_path = dir.path().join("fraction.txt");
    text::write_fraction(&text_path, &a)?;
    let restored = text::read_fraction(&text_path)?;
    println!("text file round-trip: {} -> {}", a, restored);

    // Persist to the 8-byte binary record and back
    let bin_path = dir.path().join("fraction.bin");
    binary::write_fraction(&bin_path, &a)?;
    let restored = binary::read_fraction(&bin_path)?;
    println!("binary record round-trip: {} -> {}", a, restored);
    println!("record bytes: {:?}", a.encode());

    Ok(())
}
