//! Application configuration from CLI flags.

use clap::Parser;

/// FFTMul — FFT-based large integer multiplication.
#[derive(Parser, Debug)]
#[command(name = "fftmul", version, about)]
pub struct AppConfig {
    /// The two non-negative decimal operands to multiply.
    ///
    /// Collected loosely so the operand-count check (and its usage
    /// message) stays under application control rather than clap's.
    #[arg(value_name = "NUMBER")]
    pub operands: Vec<String>,

    /// Verbose output (adds timing).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show operand and product digit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the digits).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the product digits to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
