//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Context;

use fftmul_cli::output::write_to_file;
use fftmul_cli::presenter::ProductPresenter;
use fftmul_core::exit_codes;
use fftmul_core::{multiply, DigitSequence, MulError};

use crate::config::AppConfig;
use crate::errors::exit_code_for;

const USAGE: &str = "Usage: fftmul <number1> <number2>";

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> i32 {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fftmul_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return exit_codes::SUCCESS;
    }

    let [a, b] = config.operands.as_slice() else {
        println!("{USAGE}");
        return exit_codes::ERROR_USAGE;
    };

    let presenter = ProductPresenter::new(config.verbose, config.quiet);
    let started = Instant::now();

    match multiply_operands(a, b) {
        Ok((product, operand_lens)) => {
            presenter.present_product(&product, operand_lens, started.elapsed(), config.details);

            if let Some(ref path) = config.output {
                if let Err(e) = write_product(path, &product) {
                    presenter.present_error(&format!("{e:#}"));
                    return exit_codes::ERROR_GENERIC;
                }
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            presenter.present_error(&e.to_string());
            exit_code_for(&e)
        }
    }
}

/// Parse both operands and run the convolution pipeline.
///
/// Parsing errors short-circuit before any spectral work begins.
fn multiply_operands(a: &str, b: &str) -> Result<(String, (usize, usize)), MulError> {
    let a = DigitSequence::parse(a)?;
    let b = DigitSequence::parse(b)?;
    let operand_lens = (a.len(), b.len());
    let product = multiply(&a, &b)?;
    Ok((product.to_decimal(), operand_lens))
}

fn write_product(path: &str, product: &str) -> anyhow::Result<()> {
    write_to_file(path, product).with_context(|| format!("cannot write {path}"))
}
