//! Recursive even/odd-split FFT with threshold-based parallelism.
//!
//! The iterative form in [`crate::transform`] is the production path for
//! ordinary sizes. The recursive split is used above
//! [`crate::transform::PARALLEL_FFT_THRESHOLD`], where its two independent
//! sub-transforms run under `rayon::join`. Joining does not reorder the
//! combine-step arithmetic, so the result is bit-for-bit identical to the
//! sequential recursive evaluation.

use num_complex::Complex64;

/// Sub-transform length below which recursion stays on the current thread.
const SEQUENTIAL_CUTOFF: usize = 1 << 12;

/// Recursive forward DFT, returning a new vector.
///
/// Precondition: `input.len()` is a power of two; lengths 0 and 1 are the
/// recursion base case and are returned as-is.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fft_forward_recursive(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }
    debug_assert!(n.is_power_of_two(), "transform length must be 2^k");

    // Split into even and odd parts
    let even: Vec<Complex64> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = input.iter().skip(1).step_by(2).copied().collect();

    let (even, odd) = if n > SEQUENTIAL_CUTOFF {
        rayon::join(
            || fft_forward_recursive(&even),
            || fft_forward_recursive(&odd),
        )
    } else {
        (fft_forward_recursive(&even), fft_forward_recursive(&odd))
    };

    // Combine results
    let half = n / 2;
    let mut result = vec![Complex64::new(0.0, 0.0); n];
    for i in 0..half {
        let angle = -2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
        let twiddle = Complex64::cis(angle);
        result[i] = even[i] + twiddle * odd[i];
        result[i + half] = even[i] - twiddle * odd[i];
    }
    result
}

/// In-place adapter over [`fft_forward_recursive`] for the dispatch in
/// [`crate::transform::fft_forward`].
pub(crate) fn fft_forward_in_place(data: &mut [Complex64]) {
    let result = fft_forward_recursive(data);
    data.copy_from_slice(&result);
}
