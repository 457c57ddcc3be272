//! Error taxonomy for the multiplication pipeline.

/// Error type for big number multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MulError {
    /// A character outside '0'-'9' in an operand.
    #[error("invalid character in number: {ch} (at position {index})")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Byte position within the operand string.
        index: usize,
    },

    /// An operand was the empty string.
    #[error("empty operand: expected a non-empty string of decimal digits")]
    EmptyOperand,

    /// The operands are too large for the double-precision envelope.
    #[error("product of {digits} digits exceeds the double-precision envelope ({limit} digits)")]
    PrecisionLimit {
        /// Requested product length in digits.
        digits: usize,
        /// Maximum supported product length.
        limit: usize,
    },

    /// An inverse-transform coefficient drifted too far from an integer.
    #[error("coefficient {value} at position {index} drifted {gap} from the nearest integer")]
    RoundingDrift {
        /// Coefficient position.
        index: usize,
        /// The real component before rounding.
        value: f64,
        /// Absolute distance to the nearest integer.
        gap: f64,
    },
}
