//! pakt CLI binary.
//!
//! This is the entry point for the `pakt` command-line tool. It initializes
//! logging via `tracing`, parses arguments with `clap`, and dispatches to
//! the appropriate command handler.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    commands::dispatch(args)
}
