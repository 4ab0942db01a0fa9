use clap::Parser;
use std::process;
use tracing::error;

use pagefix::commands::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = pagefix::init_with_logger(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = commands::run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}
