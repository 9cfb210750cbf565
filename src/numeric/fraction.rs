// ============================================================================
// Exact Fraction
// Canonical lowest-terms rational arithmetic on 32-bit fields
// ============================================================================

use super::errors::{FractionError, FractionResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number stored in canonical form.
///
/// Every reachable value satisfies three invariants:
/// - the denominator is never zero,
/// - the denominator is positive (the numerator carries the sign),
/// - numerator and denominator are coprime (zero is stored as `0/1`).
///
/// Fields are `i32` because the binary record format fixes them at two
/// 4-byte signed integers. Arithmetic widens to `i64` internally and
/// reports [`FractionError::Overflow`] when a canonical result no longer
/// fits; arbitrary precision is out of scope.
///
/// The type is immutable after construction. To replace a field, go through
/// [`Fraction::with_numerator`] or [`Fraction::with_denominator`], which
/// re-run the whole normalization pipeline.
///
/// # Example
/// ```
/// use exact_fraction::numeric::Fraction;
///
/// let half = Fraction::new(1, 2)?;
/// let third = Fraction::new(1, 3)?;
/// assert_eq!(half.checked_add(third)?, Fraction::new(5, 6)?);
/// assert_eq!(Fraction::new(4, 6)?.to_string(), "2/3");
/// # Ok::<(), exact_fraction::numeric::FractionError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Fraction {
    num: i32,
    den: i32,
}

// ============================================================================
// Reduction
// ============================================================================

/// Euclidean gcd: replace `(a, b)` with `(b, a % b)` until `b` is zero.
///
/// Handles `gcd(0, d) = |d|` and `gcd(n, 0) = |n|`.
const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

impl Fraction {
    /// Zero value (`0/1`)
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// One (`1/1`)
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Length of the binary record produced by [`Fraction::encode`]
    pub const ENCODED_LEN: usize = 8;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from a numerator/denominator pair.
    ///
    /// Applies the full canonicalization pipeline: sign normalization
    /// (denominator made positive, numerator carries the sign) followed by
    /// reduction to lowest terms.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero.
    /// - `Overflow` if the canonical value does not fit the 32-bit fields
    ///   (only possible for `i32::MIN` magnitudes).
    #[inline]
    pub fn new(numerator: i32, denominator: i32) -> FractionResult<Self> {
        Self::normalized(numerator as i64, denominator as i64)
    }

    /// Create a whole-number fraction (`n/1`).
    #[inline]
    pub const fn from_integer(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    /// Rebuild with a different numerator, re-running canonicalization.
    #[inline]
    pub fn with_numerator(self, numerator: i32) -> FractionResult<Self> {
        Self::new(numerator, self.den)
    }

    /// Rebuild with a different denominator, re-running canonicalization.
    ///
    /// This replaces the field setter of a mutable design: there is no way
    /// to install a denominator without the sign and reduction invariants
    /// being re-established.
    #[inline]
    pub fn with_denominator(self, denominator: i32) -> FractionResult<Self> {
        Self::new(self.num, denominator)
    }

    /// Canonicalize a widened numerator/denominator pair.
    ///
    /// All arithmetic funnels through here, so every returned `Fraction`
    /// is in lowest terms with a positive denominator.
    fn normalized(mut num: i64, mut den: i64) -> FractionResult<Self> {
        if den == 0 {
            return Err(FractionError::DivisionByZero);
        }
        if den < 0 {
            num = -num;
            den = -den;
        }
        let g = gcd(num, den);
        num /= g;
        den /= g;
        let num = i32::try_from(num).map_err(|_| FractionError::Overflow)?;
        let den = i32::try_from(den).map_err(|_| FractionError::Overflow)?;
        Ok(Self { num, den })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical numerator (carries the sign).
    #[inline]
    pub const fn numerator(self) -> i32 {
        self.num
    }

    /// The canonical denominator (always positive).
    #[inline]
    pub const fn denominator(self) -> i32 {
        self.den
    }

    /// Check if the value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Check if the value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    /// Check if the value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// Sign of the value: -1, 0 or 1.
    #[inline]
    pub const fn signum(self) -> i32 {
        self.num.signum()
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i32::MIN`.
    #[inline]
    pub fn abs(self) -> FractionResult<Self> {
        if self.num == i32::MIN {
            Err(FractionError::Overflow)
        } else {
            Ok(Self {
                num: self.num.abs(),
                den: self.den,
            })
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition: `a/b + c/d = (a·d + c·b) / (b·d)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the canonical result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> FractionResult<Self> {
        let (a, b) = (self.num as i64, self.den as i64);
        let (c, d) = (rhs.num as i64, rhs.den as i64);
        Self::normalized(a * d + c * b, b * d)
    }

    /// Checked subtraction: `a/b - c/d = (a·d - c·b) / (b·d)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the canonical result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> FractionResult<Self> {
        let (a, b) = (self.num as i64, self.den as i64);
        let (c, d) = (rhs.num as i64, rhs.den as i64);
        Self::normalized(a * d - c * b, b * d)
    }

    /// Checked multiplication: `a/b · c/d = (a·c) / (b·d)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the canonical result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> FractionResult<Self> {
        let (a, b) = (self.num as i64, self.den as i64);
        let (c, d) = (rhs.num as i64, rhs.den as i64);
        Self::normalized(a * c, b * d)
    }

    /// Checked division: `a/b ÷ c/d = (a·d) / (b·c)`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is a zero-valued fraction.
    /// - `Overflow` if the canonical result is out of range.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> FractionResult<Self> {
        if rhs.num == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let (a, b) = (self.num as i64, self.den as i64);
        let (c, d) = (rhs.num as i64, rhs.den as i64);
        Self::normalized(a * d, b * c)
    }

    /// Checked reciprocal: `a/b -> b/a`.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero-valued fraction.
    #[inline]
    pub fn checked_recip(self) -> FractionResult<Self> {
        if self.num == 0 {
            return Err(FractionError::DivisionByZero);
        }
        Self::normalized(self.den as i64, self.num as i64)
    }

    /// Checked integer power: `(a/b)^exp = (a^exp) / (b^exp)`.
    ///
    /// A zero exponent yields `1/1` for every base, matching integer
    /// exponentiation. A negative exponent inverts the base first.
    ///
    /// # Errors
    /// - `DivisionByZero` for a negative exponent on a zero-valued fraction.
    /// - `Overflow` if an intermediate power or the canonical result is out
    ///   of range.
    pub fn checked_pow(self, exp: i32) -> FractionResult<Self> {
        if exp == 0 {
            return Ok(Self::ONE);
        }
        if exp < 0 && self.num == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let e = exp.unsigned_abs();
        let n = (self.num as i64)
            .checked_pow(e)
            .ok_or(FractionError::Overflow)?;
        let d = (self.den as i64)
            .checked_pow(e)
            .ok_or(FractionError::Overflow)?;
        if exp < 0 {
            Self::normalized(d, n)
        } else {
            Self::normalized(n, d)
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Approximate the value as `f64` (numerator over denominator).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    // ========================================================================
    // Binary Codec
    // ========================================================================

    /// Encode as the fixed 8-byte record: numerator then denominator, each
    /// a little-endian `i32`. Little-endian is part of the format so records
    /// are byte-identical across platforms.
    #[inline]
    pub fn encode(self) -> [u8; Self::ENCODED_LEN] {
        let mut buf = [0u8; Self::ENCODED_LEN];
        buf[..4].copy_from_slice(&self.num.to_le_bytes());
        buf[4..].copy_from_slice(&self.den.to_le_bytes());
        buf
    }

    /// Decode an 8-byte record produced by [`Fraction::encode`].
    ///
    /// The decoded pair runs through the full canonicalization pipeline, so
    /// a hand-crafted record with a negative or reducible denominator still
    /// yields a canonical fraction.
    ///
    /// # Errors
    /// - `FormatError` unless the payload is exactly 8 bytes.
    /// - `DivisionByZero` if the record holds a zero denominator.
    pub fn decode(bytes: &[u8]) -> FractionResult<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(FractionError::FormatError { len: bytes.len() });
        }
        let num = i32::from_le_bytes(bytes[..4].try_into().expect("length checked"));
        let den = i32::from_le_bytes(bytes[4..].try_into().expect("length checked"));
        Self::new(num, den)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

/// Representation equality: both canonical fields must match.
///
/// This is only a value comparison because every reachable `Fraction` is
/// construction-normalized; with no mutation API the two notions coincide.
impl PartialEq for Fraction {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// Cross-multiplied comparison: `a/b < c/d` iff `a·d < c·b`.
    ///
    /// Valid without reference to the reduction state because denominators
    /// are always positive.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = (self.num as i64) * (other.den as i64);
        let rhs = (other.num as i64) * (self.den as i64);
        lhs.cmp(&rhs)
    }
}

impl Hash for Fraction {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num.hash(state);
        self.den.hash(state);
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in
// production)
impl Add for Fraction {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Fraction addition overflow")
    }
}

impl Sub for Fraction {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Fraction subtraction overflow")
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Fraction multiplication overflow")
    }
}

impl Div for Fraction {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("Fraction division failed")
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<(i32, i32)> for Fraction {
    type Error = FractionError;

    #[inline]
    fn try_from(pair: (i32, i32)) -> FractionResult<Self> {
        Self::new(pair.0, pair.1)
    }
}

impl From<Fraction> for (i32, i32) {
    #[inline]
    fn from(f: Fraction) -> Self {
        (f.num, f.den)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Fraction {
    type Err = FractionError;

    /// Parse a `"<num>/<den>"` pair.
    ///
    /// Surrounding whitespace is trimmed, including around each side of the
    /// separator.
    ///
    /// # Examples
    /// - "3/4" -> 3/4
    /// - " 6/8 " -> 3/4
    /// - "-3/-4" -> 3/4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num_str, den_str) = s.split_once('/').ok_or(FractionError::ParseError)?;
        if den_str.contains('/') {
            return Err(FractionError::ParseError);
        }
        let num: i32 = num_str
            .trim()
            .parse()
            .map_err(|_| FractionError::ParseError)?;
        let den: i32 = den_str
            .trim()
            .parse()
            .map_err(|_| FractionError::ParseError)?;
        Self::new(num, den)
    }
}

// ============================================================================
// Tests
// ============================================================================
