//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments (the full release configuration surface)
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod check;
pub mod completions;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;

/// Playprep - Google Play release preflight
///
/// Validate release pipeline configuration and resolve the final upload plan.
#[derive(Parser, Debug)]
#[command(
    name = "playprep",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validate and prepare Android release artifacts for Google Play upload",
    long_about = "Playprep validates the release step's configuration (app binary lists, \
                  expansion files, track and rollout parameters), cross-checks it against \
                  the filesystem, and prints the resolved upload plan. It never talks to \
                  the network; the actual upload is a downstream consumer of its output.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  playprep check --app-path app.aab --track production   \x1b[90m# Validate a single bundle\x1b[0m\n   \
                  playprep check --json                                  \x1b[90m# Machine-readable upload plan\x1b[0m\n   \
                  app_path='a.apk|b.apk' track=beta playprep check       \x1b[90m# Configuration via environment\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the release configuration and print the resolved upload plan
    Check(CheckArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
