//! Book highlights CLI.

use clap::Parser;

mod cli;
mod commands;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = highlights_cli::logging::init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if let Err(error) = commands::run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
