//! Patterns CLI - runs the vehicle factory and library catalog demos

mod app;
mod cli;
mod config;
mod demos;
mod error;
mod logging;

use clap::Parser;
use cli::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = app::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
