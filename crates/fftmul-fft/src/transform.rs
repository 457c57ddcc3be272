//! Core FFT transform: iterative forward and inverse over `Complex64`.

use num_complex::Complex64;

use crate::recursive;
use crate::twiddle;

/// Transform length (in samples) above which the recursive split
/// runs its two sub-transforms on the rayon pool.
pub const PARALLEL_FFT_THRESHOLD: usize = 1 << 17;

/// Perform the forward DFT in-place.
///
/// Uses the iterative Cooley-Tukey butterfly after a bit-reversal
/// permutation, with twiddle factors exp(-2πi·j/n) taken from the shared
/// root table. Precondition: `data.len()` is a power of two; lengths 0
/// and 1 are returned unchanged.
pub fn fft_forward(data: &mut [Complex64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two(), "transform length must be 2^k");

    if n >= PARALLEL_FFT_THRESHOLD {
        recursive::fft_forward_in_place(data);
        return;
    }

    // Bit-reversal permutation
    bit_reverse_permutation(data);

    // Iterative Cooley-Tukey FFT
    let roots = twiddle::roots_for(n);
    let mut size = 2;
    while size <= n {
        let half = size / 2;
        // Twiddle stride: stage `size` uses every (n/size)-th root of the
        // full-length table
        let stride = n / size;

        for start in (0..n).step_by(size) {
            for j in 0..half {
                let w = roots[j * stride];
                // Split to get simultaneous mutable access to indices [start+j] and [start+j+half]
                let (lo, hi) = data.split_at_mut(start + j + half);
                let u = lo[start + j];
                let t = w * hi[0];
                lo[start + j] = u + t;
                hi[0] = u - t;
            }
        }
        size *= 2;
    }
}

/// Perform the inverse DFT in-place.
///
/// Conjugation trick: conjugate every sample, apply the forward transform,
/// conjugate again and divide by n. Precondition identical to
/// [`fft_forward`].
#[allow(clippy::cast_precision_loss)]
pub fn fft_inverse(data: &mut [Complex64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for sample in data.iter_mut() {
        *sample = sample.conj();
    }

    fft_forward(data);

    let scale = 1.0 / (n as f64);
    for sample in data.iter_mut() {
        *sample = sample.conj() * scale;
    }
}

/// Bit-reversal permutation.
fn bit_reverse_permutation(data: &mut [Complex64]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(got: Complex64, expected: Complex64, tol: f64) {
        assert!(
            (got - expected).norm() < tol,
            "expected {expected}, got {got}"
        );
    }

    #[test]
    fn single_element_unchanged() {
        let mut data = vec![Complex64::new(42.0, -7.0)];
        fft_forward(&mut data);
        assert_close(data[0], Complex64::new(42.0, -7.0), 1e-12);
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let mut data = vec![Complex64::new(0.0, 0.0); 8];
        data[0] = Complex64::new(1.0, 0.0);
        fft_forward(&mut data);
        for sample in &data {
            assert_close(*sample, Complex64::new(1.0, 0.0), 1e-12);
        }
    }

    #[test]
    fn constant_signal_concentrates_at_dc() {
        let mut data = vec![Complex64::new(1.0, 0.0); 8];
        fft_forward(&mut data);
        assert_close(data[0], Complex64::new(8.0, 0.0), 1e-12);
        for sample in &data[1..] {
            assert!(sample.norm() < 1e-12);
        }
    }

    #[test]
    fn known_dft_of_four_points() {
        // DFT([0,1,2,3]) = [6, -2+2i, -2, -2-2i]
        let mut data: Vec<Complex64> =
            (0..4).map(|v| Complex64::new(f64::from(v), 0.0)).collect();
        fft_forward(&mut data);
        assert_close(data[0], Complex64::new(6.0, 0.0), 1e-12);
        assert_close(data[1], Complex64::new(-2.0, 2.0), 1e-12);
        assert_close(data[2], Complex64::new(-2.0, 0.0), 1e-12);
        assert_close(data[3], Complex64::new(-2.0, -2.0), 1e-12);
    }

    #[test]
    fn roundtrip_recovers_input() {
        let original: Vec<Complex64> = (0..16)
            .map(|v| Complex64::new(f64::from(v) * 1.5, f64::from(v) - 8.0))
            .collect();
        let mut data = original.clone();
        fft_forward(&mut data);
        fft_inverse(&mut data);
        for (got, expected) in data.iter().zip(&original) {
            assert_close(*got, *expected, 1e-6);
        }
    }

    #[test]
    fn inverse_of_empty_and_single() {
        let mut empty: Vec<Complex64> = vec![];
        fft_inverse(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![Complex64::new(3.0, 4.0)];
        fft_inverse(&mut one);
        assert_close(one[0], Complex64::new(3.0, 4.0), 1e-12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Forward then inverse recovers the input within tolerance for
        /// any power-of-two length.
        #[test]
        fn roundtrip_random_vectors(
            log_n in 0usize..10,
            seed in proptest::collection::vec(-100.0f64..100.0, 1024),
        ) {
            let n = 1 << log_n;
            let original: Vec<Complex64> = (0..n)
                .map(|i| Complex64::new(seed[i], seed[(i + 512) % 1024]))
                .collect();
            let mut data = original.clone();
            fft_forward(&mut data);
            fft_inverse(&mut data);
            for (got, expected) in data.iter().zip(&original) {
                prop_assert!((got - expected).norm() < 1e-6);
            }
        }

        /// The DFT is linear: FFT(a + b) == FFT(a) + FFT(b).
        #[test]
        fn transform_is_linear(
            values in proptest::collection::vec(-50.0f64..50.0, 16),
        ) {
            let a: Vec<Complex64> = values[..8]
                .iter()
                .map(|&v| Complex64::new(v, 0.0))
                .collect();
            let b: Vec<Complex64> = values[8..]
                .iter()
                .map(|&v| Complex64::new(v, 0.0))
                .collect();
            let sum: Vec<Complex64> =
                a.iter().zip(&b).map(|(x, y)| x + y).collect();

            let mut fa = a.clone();
            let mut fb = b.clone();
            let mut fsum = sum.clone();
            fft_forward(&mut fa);
            fft_forward(&mut fb);
            fft_forward(&mut fsum);

            for i in 0..8 {
                prop_assert!((fsum[i] - (fa[i] + fb[i])).norm() < 1e-9);
            }
        }
    }
}
