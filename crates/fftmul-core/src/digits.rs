//! Decimal digit codec: little-endian digit sequences and their string form.

use crate::errors::MulError;

/// A non-negative integer as little-endian decimal digits.
///
/// Index 0 holds the least significant digit; every digit is in 0..=9.
/// A normalized sequence carries no high-order zero digits, except the
/// canonical zero which is exactly `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Parse an ASCII decimal string into a digit sequence.
    ///
    /// Only '0'-'9' are accepted: no sign, separators, or whitespace.
    /// The empty string is rejected with [`MulError::EmptyOperand`]
    /// rather than mapped to zero; leading zeros are normalized away.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(s: &str) -> Result<Self, MulError> {
        if s.is_empty() {
            return Err(MulError::EmptyOperand);
        }

        let mut digits = Vec::with_capacity(s.len());
        for (index, ch) in s.char_indices() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(MulError::InvalidDigit { ch, index }),
            }
        }
        digits.reverse();
        Ok(Self::from_digits(digits))
    }

    /// Build a normalized sequence from little-endian digits.
    ///
    /// Trims high-order zeros; an all-zero (or empty) input becomes the
    /// canonical single-digit zero.
    #[must_use]
    pub fn from_digits(mut digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9), "digit out of range");
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Self(digits)
    }

    /// The canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![0])
    }

    /// Render most-significant digit first.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        self.0
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect()
    }

    /// Number of digits (always at least 1 for a normalized sequence).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this sequence denotes zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    /// Little-endian digit slice.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal())
    }
}
