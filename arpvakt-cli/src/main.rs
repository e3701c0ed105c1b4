//! ## arpvakt-cli
//! **Operational entrypoint for the neighbor-table monitor**
//!
//! Loads configuration, applies the command-line feature toggles, and runs
//! the poll loop (or a single cycle with `--single`).

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    commands::run(Cli::parse())
}
