//! autocorrect - single-edit spelling correction
//!
//! Checks words against a dictionary and suggests corrections one edit away.

use clap::Parser;
use colored::Colorize;
use std::process;

use autocorrect::cli::commands;
use autocorrect::cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command, cli.config.as_deref()) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
