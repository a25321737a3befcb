//! Command-line interface.
//!
//! The binary takes no subcommands: it parses a few ambient options, opens
//! the store and hands control to the interactive REPL.

pub mod keys;
pub mod output;
pub mod prompt;
pub mod repl;
pub mod session;
pub mod vaults;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::api::Http;
use crate::core::constants;
use crate::error::Result;

pub use session::Session;

/// tuskytux - manage Tusky API keys and vaults from the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "tuskytux",
    about = "Your decentralized storage companion for Tusky",
    version,
    after_help = "Run without arguments to start the interactive shell."
)]
pub struct Cli {
    /// Path of the API key store
    #[arg(long, value_name = "PATH", env = constants::CONFIG_ENV, default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// Base URL of the Tusky API
    #[arg(long, value_name = "URL", env = constants::API_URL_ENV, default_value = constants::API_BASE_URL)]
    pub api_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Open the store and run the REPL on stdin.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or stdin cannot be
/// read.
pub fn execute(cli: Cli) -> Result<()> {
    debug!(config = %cli.config.display(), api_url = %cli.api_url, "starting");

    let api = Http::new(&cli.api_url)?;
    let mut session = Session::open(cli.config, api);
    let mut prompt = prompt::stdin();

    repl::run(&mut session, prompt.as_mut())
}
