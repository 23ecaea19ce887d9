//! cli
//!
//! Command-line interface layer for osteo.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Load configuration and build the store
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Every query is answered by
//! [`crate::core::skeletal::store::Store`]; handlers only format results.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::skeletal::store::Store;
use crate::ui::output::Verbosity;

/// Shared state for command handlers.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub store: Store,
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    setup_tracing(cli.debug);

    // Completion needs neither config nor store.
    if let args::Command::Completion { shell } = cli.command {
        return commands::completion(shell);
    }

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    let store = Store::load(&config.options).context("failed to load skeletal store")?;

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    if let Some(path) = config.loaded_from() {
        tracing::debug!(path = %path.display(), "using config file");
    }

    let ctx = Context {
        config,
        store,
        verbosity,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `--debug`.
fn setup_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("osteoref=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
