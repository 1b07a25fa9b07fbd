//! Hikkoshi Mitsumori - moving-cost estimation for a relocation service
//!
//! A CLI tool that prices a move from reference tariff data and records
//! accepted estimate requests.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
