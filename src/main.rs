//! Wondrous CLI - prints wondrous (Collatz) sequences and a few small demos

use std::path::PathBuf;

use clap::Parser;
use wondrous::common::config::Config;
use wondrous::common::logging;
use wondrous::{cli, commands::Commands};

#[derive(Parser)]
#[command(name = "wondrous", about = "Wondrous (Collatz) sequence counter")]
#[command(version, long_about = None)]
struct Cli {
    /// Path to a config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    let result = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .and_then(|config| cli::dispatch(cli.command, &config));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
