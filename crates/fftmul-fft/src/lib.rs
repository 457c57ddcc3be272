//! # fftmul-fft
//!
//! Radix-2 Cooley-Tukey FFT over `Complex64`, used as the spectral engine
//! for convolution-based big number multiplication.

pub mod recursive;
pub mod transform;
pub mod twiddle;

// Re-exports
pub use num_complex::Complex64;
pub use transform::{fft_forward, fft_inverse, PARALLEL_FFT_THRESHOLD};
