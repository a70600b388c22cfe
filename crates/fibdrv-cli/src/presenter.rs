//! Result presentation.

use std::time::Duration;

use fibdrv_core::LIMB_DIGITS;

use crate::output::{format_duration, format_number, format_result};
use crate::ui::{print_error, print_header};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single F(n).
    fn present_result(
        &self,
        calculator: &str,
        n: u64,
        digits: &str,
        duration: Duration,
        details: bool,
    );

    /// Present one read of an offset sweep.
    fn present_sweep_entry(&self, device: &str, offset: u64, digits: &str);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    /// Create a presenter. `verbose` prints every digit; `quiet` prints the
    /// digits alone and nothing else.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed below the header for a single result.
    fn result_lines(
        &self,
        calculator: &str,
        n: u64,
        digits: &str,
        duration: Duration,
        details: bool,
    ) -> Vec<String> {
        if self.quiet {
            return vec![digits.to_string()];
        }

        let mut lines = vec![
            format!("Calculator: {calculator}"),
            format!("Duration: {}", format_duration(duration)),
        ];
        if details {
            lines.push(format!(
                "Result digits: {}",
                format_number(digits.len() as u64)
            ));
            lines.push(format!(
                "Result limbs: {}",
                digits.len().div_ceil(LIMB_DIGITS)
            ));
        }
        lines.push(format!(
            "F({}) = {}",
            format_number(n),
            format_result(digits, self.verbose)
        ));
        lines
    }

    /// The line printed for one sweep read.
    fn sweep_line(&self, device: &str, offset: u64, digits: &str) -> String {
        if self.quiet {
            digits.to_string()
        } else {
            format!("Reading from /dev/{device} at offset {offset}, returned the sequence {digits}.")
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(
        &self,
        calculator: &str,
        n: u64,
        digits: &str,
        duration: Duration,
        details: bool,
    ) {
        if !self.quiet {
            print_header(&format!("F({})", format_number(n)));
        }
        for line in self.result_lines(calculator, n, digits, duration, details) {
            println!("{line}");
        }
    }

    fn present_sweep_entry(&self, device: &str, offset: u64, digits: &str) {
        println!("{}", self.sweep_line(device, offset, digits));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
