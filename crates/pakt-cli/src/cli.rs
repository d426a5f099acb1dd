//! CLI argument definitions for pakt.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pakt",
    version,
    about = "A packset-based package manager",
    long_about = "Pakt resolves, installs, and organises package dependencies into \
                  named packsets, so whole installed worlds can be switched at once."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a Pakt.toml for the current package
    Init,

    /// Show or switch the current packset, creating it if needed
    Use {
        /// Packset name; prints the current packset when omitted
        name: Option<String>,
    },

    /// Resolve and install the dependencies of the current package
    Install,

    /// Print the dependency tree
    Tree {
        /// Resolve versions against the local index first
        #[arg(long)]
        resolve: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
