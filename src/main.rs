//! keyconv - Solana wallet key format converter
//!
//! Converts private keys between base58 text and byte arrays.
//!
//! # Usage
//!
//! ```bash
//! # Decode a base58 key read from the environment
//! PHANTOM_KEY=... keyconv decode --env PHANTOM_KEY
//!
//! # Encode the key in a Solana CLI wallet file
//! keyconv encode --file ~/.config/solana/id.json
//!
//! # Prompt for a key and show its address
//! keyconv inspect
//! ```

use clap::Parser;
use keyconv::cli::{self, Cli};
use keyconv::config::{Config, LoggingConfig};
use keyconv::errors::Result;
use keyconv::security::harden_process;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_scheme(cli.scheme);
    config.validate()?;

    init_logging(&config.logging);
    debug!("keyconv v{} (scheme: {})", VERSION, config.codec.scheme);

    harden_process(config.security.disable_core_dumps);

    let stdout = io::stdout();
    cli::run(cli.command, &config, &mut stdout.lock())
}

/// Initialize logging on stderr, leaving stdout for converted keys
fn init_logging(logging: &LoggingConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase()));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
