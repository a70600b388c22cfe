//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibdrv_core::memory_budget::parse_memory_limit;
use fibdrv_core::{FibError, Options};
use fibdrv_device::MAX_LENGTH;

/// Exact Fibonacci numbers from base-10^18 limb chains.
#[derive(Parser, Debug)]
#[command(name = "fibdrv", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(short, long, default_value = "100", env = "FIBDRV_N")]
    pub n: u64,

    /// Read every offset 0..=UPTO through the device and print each result.
    #[arg(long)]
    pub upto: Option<u64>,

    /// Largest offset the device accepts; larger seeks are clamped.
    #[arg(long, default_value_t = MAX_LENGTH)]
    pub max_offset: u64,

    /// Cross-check the result against the reference calculator.
    #[arg(long)]
    pub verify: bool,

    /// Verbose output (print every digit).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Memory limit for the limb working set (e.g., "8G", "512M", "64K").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

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

    /// Calculation options derived from the flags.
    pub fn options(&self) -> Result<Options, FibError> {
        Ok(Options::default().with_memory_limit(parse_memory_limit(&self.memory_limit)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibdrv").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.upto, None);
        assert_eq!(config.max_offset, MAX_LENGTH);
        assert!(!config.verify);
        assert_eq!(config.options().unwrap(), Options::default());
    }

    #[test]
    fn memory_limit_flag() {
        let config = parse(&["--memory-limit", "64K"]);
        assert_eq!(config.options().unwrap().memory_limit, Some(64 * 1024));
    }

    #[test]
    fn invalid_memory_limit() {
        let config = parse(&["--memory-limit", "lots"]);
        assert!(matches!(config.options(), Err(FibError::InvalidInput(_))));
    }

    #[test]
    fn sweep_flags() {
        let config = parse(&["--upto", "20", "--max-offset", "92", "-q"]);
        assert_eq!(config.upto, Some(20));
        assert_eq!(config.max_offset, 92);
        assert!(config.quiet);
    }

    #[test]
    fn negative_index_rejected() {
        let result = AppConfig::try_parse_from(["fibdrv", "-n", "-3"]);
        assert!(result.is_err());
    }
}
