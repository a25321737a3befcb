//! tuskytux - command-line companion for Tusky decentralized storage.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tuskytux::cli::{execute, output, Cli};
use tuskytux::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("tuskytux=debug")
        } else {
            EnvFilter::new("tuskytux=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::fatal(&e.to_string());
        std::process::exit(1);
    }
}
