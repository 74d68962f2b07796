mod catalog;
mod cli;
mod config;
mod logging;
mod model;
mod stakeholders;
mod storage;
mod tui;
mod wheel;
mod wizard;

use std::process;

use clap::Parser;

use cli::Cli;
use config::Config;
use logging::Sink;
use storage::Storage;

fn main() {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    // The TUI owns the terminal, so its logs go to a file.
    let sink = if cli.command.is_some() {
        Sink::Stderr
    } else {
        Sink::File(config.log_path())
    };
    if let Err(e) = logging::init(config.log_filter(), sink) {
        eprintln!("Warning: {e}");
    }

    let storage = match Storage::open(&config.database_path()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Some(command) => cli::run(command, &config, &storage),
        None => tui::run(&storage).map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
