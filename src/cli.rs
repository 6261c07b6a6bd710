//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Message shown when none is given.
pub const DEFAULT_MESSAGE: &str = "Hello, I'm lil guy!";

/// An animated ASCII companion for your terminal.
///
/// Pipe anything into lil guy and he will keep you company while it scrolls
/// by. Arrow keys (or j/k) scroll, q quits.
#[derive(Debug, Clone, Parser)]
#[command(name = "lil-guy", version, about)]
pub struct Args {
    /// Message to display
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Character to use
    #[arg(short, long, default_value = crate::config::DEFAULT_CHARACTER)]
    pub character: String,

    /// Character file (defaults to ~/.config/lil-guy/characters.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Echo diagnostics before starting and log at debug level
    #[arg(long)]
    pub debug: bool,
}
