//! napp
//!
//! Bootstraps Go, HTMX and SQLite web applications.
//!
//! This is the entry point for the `napp` binary.

use std::process::ExitCode;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match napp_cli::parse() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("napp: {err:#}");
    }

    napp_cli::execute(cli)
}

/// Log to stderr, honouring `RUST_LOG` and falling back to `warn`
/// (`debug` with `--verbose`).
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
