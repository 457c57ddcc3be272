//! Constants for pipeline thresholds and process exit codes.

/// Operand length (in digits) below which schoolbook convolution is used.
///
/// For a short operand the O(n²) digit loop beats the three transforms.
pub const SCHOOLBOOK_THRESHOLD: usize = 32;

/// Maximum supported product length, len(a) + len(b), in digits.
///
/// Convolution coefficients are bounded by 81 * min(len(a), len(b)), and
/// f64 carries roughly 15-17 significant decimal digits. Up to about a
/// million digits per operand the accumulated transform error stays well
/// below the 0.5 rounding margin; beyond that a misrounded coefficient
/// becomes possible, so the pipeline refuses up front instead of silently
/// corrupting a digit.
pub const MAX_PRODUCT_DIGITS: usize = 2_000_000;

/// Maximum tolerated distance between an inverse-transform coefficient
/// and the nearest integer before the pipeline fails loudly.
pub const ROUNDING_GAP_LIMIT: f64 = 0.3;

/// Process exit codes.
///
/// The original implementation exited 0 even after printing an error;
/// distinguishing failures via the exit status is a deliberate fix.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Wrong number of command-line operands.
    pub const ERROR_USAGE: i32 = 2;
    /// An operand failed to parse.
    pub const ERROR_PARSE: i32 = 3;
    /// Operands exceed the double-precision envelope.
    pub const ERROR_PRECISION: i32 = 4;
}
