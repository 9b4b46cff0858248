use std::path::Path;

use clap::Parser;
use todo::cli::commands::Cli;
use todo::io::config_io::{CONFIG_FILE, read_config};
use todo::io::logging::init_logging;

fn main() {
    let _cli = Cli::parse();

    let config = match read_config(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config.log);
    log::info!("todo {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = todo::tui::run(&config) {
        log::error!("fatal: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
