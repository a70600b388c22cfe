//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use fibdrv_cli::output::write_to_file;
use fibdrv_cli::presenter::{CliResultPresenter, ResultPresenter};
use fibdrv_cli::sweep_progress::SweepProgress;
use fibdrv_cli::ui::print_success;
use fibdrv_core::calculator::{verify, Calculator};
use fibdrv_core::fastdoubling::LimbFastDoubling;
use fibdrv_core::memory_budget::MemoryEstimate;
use fibdrv_core::reference::reference_fibonacci;
use fibdrv_core::{FibError, Options, LIMB_DIGITS};
use fibdrv_device::{FibDevice, Whence, DEVICE_NAME};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibdrv_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    info!(version = %full_version(), "Starting");
    let opts = config.options()?;

    if let Some(upto) = config.upto {
        return run_sweep(config, upto, &opts);
    }

    run_single(config, &opts)
}

fn run_single(config: &AppConfig, opts: &Options) -> Result<()> {
    // Memory budget check
    let estimate = MemoryEstimate::estimate(config.n);
    if !estimate.fits_in(opts.memory_limit) {
        return Err(FibError::OutOfMemory {
            limbs: estimate.result_limbs,
        })
        .with_context(|| {
            format!(
                "estimated working set of {} bytes exceeds the memory limit",
                estimate.total_bytes
            )
        });
    }

    let calc = LimbFastDoubling::new();
    let start = Instant::now();
    let digits = if config.verify {
        verify(config.n, opts)
    } else {
        calc.calculate(config.n, opts)
    }
    .with_context(|| format!("computing F({})", config.n))?;
    let duration = start.elapsed();
    info!(n = config.n, digits = digits.len(), ?duration, "Computed");

    let presenter = CliResultPresenter::new(config.verbose, config.quiet);
    presenter.present_result(calc.name(), config.n, &digits, duration, config.details);
    if config.verify && !config.quiet {
        print_success("verified against reference");
    }

    if let Some(ref path) = config.output {
        write_to_file(path, &digits)
            .with_context(|| format!("writing result to {}", path.display()))?;
    }

    Ok(())
}

/// Read offsets `0..=upto` through the device, one line per offset.
fn run_sweep(config: &AppConfig, upto: u64, opts: &Options) -> Result<()> {
    let device = FibDevice::new(config.max_offset).with_options(opts.clone());
    let mut handle = device.open()?;
    let presenter = CliResultPresenter::new(config.verbose, config.quiet);
    let progress = SweepProgress::new(upto.saturating_add(1), config.quiet);

    let mut buf = Vec::new();
    for offset in 0..=upto {
        let target = i64::try_from(offset).context("offset out of range")?;
        let pos = handle.seek(target, Whence::Set);

        let capacity = MemoryEstimate::estimate(pos).result_limbs * LIMB_DIGITS + 1;
        buf.resize(capacity, 0);
        let len = handle
            .read(&mut buf)
            .with_context(|| format!("reading offset {offset}"))?;
        let digits = std::str::from_utf8(&buf[..len - 1]).context("device returned non-UTF-8")?;

        if config.verify && digits != reference_fibonacci(pos).to_string() {
            return Err(FibError::Mismatch { n: pos }).context("sweep verification failed");
        }

        progress.advance();
        presenter.present_sweep_entry(DEVICE_NAME, offset, digits);
    }
    progress.finish();

    if config.verify && !config.quiet {
        print_success("sweep verified against reference");
    }
    Ok(())
}
