//! lil-guy: an animated ASCII companion for your terminal.
//!
//! ```text
//! cargo build 2>&1 | lil-guy -m "building..."
//! ```

use anyhow::Context;
use clap::Parser;
use lilguy::cli::Args;
use lilguy::config;
use lilguy::{logging, Engine};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // Keep the guard alive so the log is flushed on exit.
    let _log_guard = match logging::init(args.debug) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal error: {e:#}");
            eprintln!("Error: {e:#}");
            eprintln!("Error logged to: {}", logging::log_path().display());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let (path, book) = config::load_book(args.config.as_deref()).context("error loading config")?;
    if args.debug {
        eprintln!("Loaded config from: {}", path.display());
    }

    let resolved = book.resolve(&args.character);

    if args.debug {
        let names: Vec<_> = book.names().collect();
        eprintln!("Loaded characters: {names:?}");
        eprintln!("Requested character: {}", args.character);
        if resolved.fell_back {
            eprintln!("Character '{}' not found. Using default.", args.character);
        }
        eprintln!("Selected character: {} {:?}", resolved.name, resolved.character.faces);
    }
    tracing::info!(
        requested = %args.character,
        selected = %resolved.name,
        faces = resolved.character.len(),
        "character selected"
    );

    let engine = Engine::start()?;
    let state = engine.run(resolved.character, &args.message)?;
    tracing::info!(lines = state.log.len(), "session ended");
    Ok(())
}
