//! Command-line entry point
//!
//! The single place that performs output and process termination;
//! everything upstream returns values.

use clap::Parser;
use respmap::cli::Cli;
use respmap::probe;
use std::process;

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new().filter_level(level).init();

    match probe::run(&cli) {
        Ok(completion) => {
            if let Some(message) = completion.output {
                println!("{message}");
            }
            process::exit(completion.code);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
