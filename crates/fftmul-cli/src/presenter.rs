//! CLI result presenter.

use std::time::Duration;

use crate::output::{format_duration, format_number};

/// Presents multiplication results and errors on standard output.
///
/// Default mode prints `Product: <digits>`; quiet mode prints the digits
/// alone. Errors also go to standard output, matching the reference
/// behaviour of the original tool.
pub struct ProductPresenter {
    verbose: bool,
    quiet: bool,
}

impl ProductPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present a product.
    #[allow(clippy::cast_possible_truncation)]
    pub fn present_product(
        &self,
        product: &str,
        operand_lens: (usize, usize),
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{product}");
            return;
        }

        if details {
            println!(
                "Operand digits: {} x {}",
                format_number(operand_lens.0 as u64),
                format_number(operand_lens.1 as u64),
            );
            println!("Product digits: {}", format_number(product.len() as u64));
        }

        if self.verbose {
            println!("Duration: {}", format_duration(duration));
        }

        println!("Product: {product}");
    }

    /// Present an error.
    pub fn present_error(&self, error: &str) {
        println!("Error: {error}");
    }
}
