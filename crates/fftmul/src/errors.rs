//! Error to exit-code mapping.

use fftmul_core::exit_codes;
use fftmul_core::MulError;

/// Map a pipeline error to the process exit code.
///
/// The original tool printed errors but always exited 0; reporting
/// failure through the exit status is a deliberate fix.
#[must_use]
pub fn exit_code_for(err: &MulError) -> i32 {
    match err {
        MulError::InvalidDigit { .. } | MulError::EmptyOperand => exit_codes::ERROR_PARSE,
        MulError::PrecisionLimit { .. } => exit_codes::ERROR_PRECISION,
        MulError::RoundingDrift { .. } => exit_codes::ERROR_GENERIC,
    }
}
