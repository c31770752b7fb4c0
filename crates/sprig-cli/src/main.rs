//! sprig - compile design exports into Astro components.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize_logging(&cli)?;
    commands::execute(cli)
}
