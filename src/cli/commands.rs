use clap::Parser;

/// No subcommands or flags beyond --help and --version: running the
/// binary opens the TUI on ./todo.csv.
#[derive(Parser)]
#[command(name = "todo", about = concat!("todo v", env!("CARGO_PKG_VERSION"), " - a keyboard-driven todo list backed by todo.csv"), version)]
pub struct Cli {}
