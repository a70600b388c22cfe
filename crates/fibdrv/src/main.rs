//! fibdrv: exact Fibonacci numbers from base-10^18 limb chains.

use std::process::ExitCode;

use fibdrv_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            fibdrv_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
