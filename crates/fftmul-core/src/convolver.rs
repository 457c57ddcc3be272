//! Convolution pipeline: padding, spectral multiplication, rounding, carries.

use num_complex::Complex64;
use tracing::debug;

use fftmul_fft::{fft_forward, fft_inverse};

use crate::constants::{MAX_PRODUCT_DIGITS, ROUNDING_GAP_LIMIT, SCHOOLBOOK_THRESHOLD};
use crate::digits::DigitSequence;
use crate::errors::MulError;

/// Multiply two digit sequences.
///
/// Routes short operands to the schoolbook convolution and everything
/// else through the FFT pipeline. Both paths return a normalized
/// sequence of at most `len(a) + len(b)` digits.
pub fn multiply(a: &DigitSequence, b: &DigitSequence) -> Result<DigitSequence, MulError> {
    if a.is_zero() || b.is_zero() {
        return Ok(DigitSequence::zero());
    }

    if a.len().min(b.len()) < SCHOOLBOOK_THRESHOLD {
        return Ok(schoolbook_multiply(a, b));
    }

    fft_multiply(a, b)
}

/// FFT multiplication core.
///
/// Pads both operands to the smallest power of two that holds the
/// convolution, transforms, multiplies pointwise in the spectral domain,
/// inverse-transforms, rounds, and carries.
pub(crate) fn fft_multiply(
    a: &DigitSequence,
    b: &DigitSequence,
) -> Result<DigitSequence, MulError> {
    let product_len = a.len() + b.len();
    if product_len > MAX_PRODUCT_DIGITS {
        return Err(MulError::PrecisionLimit {
            digits: product_len,
            limit: MAX_PRODUCT_DIGITS,
        });
    }

    // Smallest n = 2^k >= len(a) + len(b) - 1; both operands are non-zero
    // here so product_len - 1 >= 1.
    let n = (product_len - 1).next_power_of_two();
    debug!(a_len = a.len(), b_len = b.len(), n, "fft multiply");

    let mut va = to_spectral(a, n);
    let mut vb = to_spectral(b, n);

    fft_forward(&mut va);
    fft_forward(&mut vb);

    // Pointwise (Hadamard) product in the spectral domain
    for (x, y) in va.iter_mut().zip(&vb) {
        *x *= *y;
    }

    fft_inverse(&mut va);

    let coefficients = round_coefficients(&va)?;
    Ok(DigitSequence::from_digits(propagate_carries(coefficients)))
}

/// Direct O(n²) digit convolution for short operands.
fn schoolbook_multiply(a: &DigitSequence, b: &DigitSequence) -> DigitSequence {
    let mut acc = vec![0u64; a.len() + b.len() - 1];
    for (i, &da) in a.digits().iter().enumerate() {
        for (j, &db) in b.digits().iter().enumerate() {
            acc[i + j] += u64::from(da) * u64::from(db);
        }
    }
    DigitSequence::from_digits(propagate_carries(acc))
}

/// Copy digits into the low positions of a zero-padded complex vector.
fn to_spectral(d: &DigitSequence, n: usize) -> Vec<Complex64> {
    let mut v = vec![Complex64::new(0.0, 0.0); n];
    for (slot, &digit) in v.iter_mut().zip(d.digits()) {
        *slot = Complex64::new(f64::from(digit), 0.0);
    }
    v
}

/// Round inverse-transform output back to integer coefficients.
///
/// True coefficients are non-negative (both operands are), so rounding is
/// add-0.5-and-truncate. Each coefficient is first checked against the
/// drift margin; exceeding it means the transform left the precision
/// envelope and the result can no longer be trusted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_coefficients(spectrum: &[Complex64]) -> Result<Vec<u64>, MulError> {
    let mut coefficients = Vec::with_capacity(spectrum.len());
    for (index, sample) in spectrum.iter().enumerate() {
        let value = sample.re;
        let gap = (value - value.round()).abs();
        if gap > ROUNDING_GAP_LIMIT {
            return Err(MulError::RoundingDrift { index, value, gap });
        }
        coefficients.push((value + 0.5) as u64);
    }
    Ok(coefficients)
}

/// Normalize convolution coefficients into decimal digits.
///
/// A single left-to-right pass suffices: each coefficient is bounded by
/// 81 * min(len(a), len(b)), so a position never receives more than one
/// multi-digit carry before it is finalized. The top cell has no
/// neighbour to carry into and is decomposed into digits instead.
#[allow(clippy::cast_possible_truncation)]
fn propagate_carries(mut coefficients: Vec<u64>) -> Vec<u8> {
    let n = coefficients.len();
    for i in 0..n - 1 {
        if coefficients[i] >= 10 {
            coefficients[i + 1] += coefficients[i] / 10;
            coefficients[i] %= 10;
        }
    }

    let mut digits: Vec<u8> = coefficients[..n - 1].iter().map(|&c| c as u8).collect();
    let mut top = coefficients[n - 1];
    if top == 0 {
        digits.push(0);
    } else {
        while top > 0 {
            digits.push((top % 10) as u8);
            top /= 10;
        }
    }
    digits
}
