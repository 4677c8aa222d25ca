//! Exact rational numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that measurement magnitudes never drift.
//! Decimal rendering rounds with integer arithmetic, so even the display
//! step is free of floating point.

use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Exact rational number
///
/// Always stored in lowest terms, so equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    inner: RBig,
}

impl Number {
    // ========== Construction ==========

    /// Create from string representation
    /// Supports: "3", "2.5", ".5", "1/4"
    ///
    /// Signs, exponents and embedded whitespace are rejected; measurement
    /// text never carries them.
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        let invalid = || NumberError::ParseError(s.to_string());

        // Rational format "a/b"
        if let Some((num, den)) = s.split_once('/') {
            let num = parse_digits(num).ok_or_else(invalid)?;
            let den = parse_digits(den).ok_or_else(invalid)?;
            if den == UBig::ZERO {
                return Err(NumberError::DivisionByZero);
            }
            return Ok(Self { inner: RBig::from_parts(IBig::from(num), den) });
        }

        // Decimal format "a.b" is converted exactly: 2.5 -> 25/10 -> 5/2
        if let Some((whole, frac)) = s.split_once('.') {
            let digits = format!("{}{}", whole, frac);
            let num = parse_digits(&digits).ok_or_else(invalid)?;
            let den = UBig::from(10u8).pow(frac.len());
            return Ok(Self { inner: RBig::from_parts(IBig::from(num), den) });
        }

        let num = parse_digits(s).ok_or_else(invalid)?;
        Ok(Self { inner: RBig::from_parts(IBig::from(num), UBig::ONE) })
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from_parts(IBig::from(n), UBig::ONE) }
    }

    /// Create from ratio (exact division)
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, NumberError> {
        if den == 0 {
            return Err(NumberError::DivisionByZero);
        }
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Ok(Self { inner: RBig::from_parts(num, UBig::from(den.unsigned_abs())) })
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner.numerator() == &IBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner.numerator() < &IBig::ZERO
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        self.inner.denominator() == &UBig::ONE
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    // ========== Conversion ==========

    /// Try to convert to i64. None if not integral or out of range.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        i64::try_from(self.inner.numerator().clone()).ok()
    }

    /// Render as decimal string with exactly `places` digits after the point.
    ///
    /// Rounds half away from zero: 1/16 at two places is "0.06".
    pub fn as_decimal(&self, places: u32) -> String {
        let negative = self.is_negative();
        let numerator = if negative {
            -self.inner.numerator().clone()
        } else {
            self.inner.numerator().clone()
        };
        let denominator = IBig::from(self.inner.denominator().clone());
        let scale = IBig::from(UBig::from(10u8).pow(places as usize));
        let two = IBig::from(2u8);

        // round(numerator * 10^places / denominator)
        let scaled = (&numerator * &scale * &two + &denominator) / (&denominator * &two);
        let sign = if negative && scaled != IBig::ZERO { "-" } else { "" };

        let digits = scaled.to_string();
        if places == 0 {
            return format!("{}{}", sign, digits);
        }

        let places = places as usize;
        let digits = format!("{:0>width$}", digits, width = places + 1);
        let (whole, frac) = digits.split_at(digits.len() - places);
        format!("{}{}.{}", sign, whole, frac)
    }
}

/// Parse a non-empty run of ASCII digits
fn parse_digits(s: &str) -> Option<UBig> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.inner.numerator())
        } else {
            write!(f, "{}/{}", self.inner.numerator(), self.inner.denominator())
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
