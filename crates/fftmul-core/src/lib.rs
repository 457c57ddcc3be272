//! # fftmul-core
//!
//! Decimal digit codec and FFT convolution pipeline for multiplying
//! arbitrarily large non-negative integers in O(n log n).

pub mod constants;
pub mod convolver;
pub mod digits;
pub mod errors;

// Re-exports
pub use constants::exit_codes;
pub use convolver::multiply;
pub use digits::DigitSequence;
pub use errors::MulError;

/// Multiply two decimal strings.
///
/// This is a convenience function for simple use cases; it parses both
/// operands, runs the convolution pipeline, and renders the product.
///
/// # Example
/// ```
/// assert_eq!(fftmul_core::multiply_decimal("123", "456").unwrap(), "56088");
/// assert_eq!(fftmul_core::multiply_decimal("0", "12345").unwrap(), "0");
/// ```
pub fn multiply_decimal(a: &str, b: &str) -> Result<String, MulError> {
    let a = DigitSequence::parse(a)?;
    let b = DigitSequence::parse(b)?;
    Ok(convolver::multiply(&a, &b)?.to_decimal())
}
