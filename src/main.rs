//! Playprep - Google Play release preflight
//!
//! A command line tool that validates loosely-formatted release pipeline
//! configuration (app binary lists, expansion files, track and rollout
//! parameters) and resolves it into a clean upload plan before anything is
//! handed to the Google Play publishing API.

use clap::Parser;

mod applist;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod expansion;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
