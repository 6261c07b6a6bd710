//! Engine: main coordinator that ties actors together.
//!
//! The engine owns the terminal, spawns the producers, and runs the
//! controller on the calling thread until the user quits.

use super::controller::Controller;
use super::messages::Event;
use super::{InputActor, LineRelay, TickerActor};
use crate::character::Character;
use crate::error::Error;
use crate::state::{EngineState, DEFAULT_WINDOW_SIZE};
use crate::terminal::{TerminalGuard, TerminalSink};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::io::{self, BufReader, IsTerminal};
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Animation period.
    pub tick_interval: Duration,
    /// Keyboard poll timeout.
    pub input_poll_timeout: Duration,
    /// Capacity of the event queue.
    pub queue_capacity: usize,
    /// Log lines visible at once.
    pub window_size: usize,
    /// Retention cap for the log (None = unbounded).
    pub max_log_lines: Option<usize>,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to relay piped standard input.
    pub relay_stdin: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(250),
            input_poll_timeout: Duration::from_millis(50),
            queue_capacity: 64,
            window_size: DEFAULT_WINDOW_SIZE,
            max_log_lines: None,
            alternate_screen: false,
            relay_stdin: true,
        }
    }
}

/// The running engine.
///
/// Dropping the engine stops every producer and restores the terminal.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Event queue, drained by the controller.
    events: Receiver<Event>,
    /// Keyboard actor.
    input_actor: Option<InputActor>,
    /// Animation clock.
    ticker: Option<TickerActor>,
    /// Piped input relay, if stdin is not a terminal.
    relay: Option<LineRelay>,
    /// Terminal ownership, released last.
    guard: Option<TerminalGuard>,
}

impl Engine {
    /// Start an engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or a thread cannot be spawned.
    pub fn start() -> Result<Self, Error> {
        Self::with_config(EngineConfig::default())
    }

    /// Start an engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or a thread cannot be spawned.
    pub fn with_config(config: EngineConfig) -> Result<Self, Error> {
        let (tx, events) = bounded::<Event>(config.queue_capacity.max(1));

        // Claim the terminal before any producer starts reading from it.
        let guard = TerminalGuard::acquire(config.alternate_screen).map_err(Error::Terminal)?;

        let mut engine = Self {
            config,
            events,
            input_actor: None,
            ticker: None,
            relay: None,
            guard: Some(guard),
        };
        // Fields already set are torn down by Drop if a spawn fails.
        engine.spawn_actors(&tx).map_err(Error::Terminal)?;
        install_signal_handler(tx);

        tracing::info!(
            tick = ?engine.config.tick_interval,
            window = engine.config.window_size,
            relay = engine.relay.is_some(),
            "engine started"
        );
        Ok(engine)
    }

    fn spawn_actors(&mut self, tx: &Sender<Event>) -> io::Result<()> {
        self.input_actor = Some(InputActor::spawn(tx.clone(), self.config.input_poll_timeout)?);
        self.ticker = Some(TickerActor::spawn(tx.clone(), self.config.tick_interval)?);

        let stdin = io::stdin();
        if self.config.relay_stdin && !stdin.is_terminal() {
            self.relay = Some(LineRelay::spawn(BufReader::new(stdin), tx.clone())?);
        } else {
            tracing::debug!("stdin is a terminal, not relaying input");
        }
        Ok(())
    }

    /// Animate `character` with `message` until the user quits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if frames persistently fail to reach the
    /// terminal.
    pub fn run(self, character: Character, message: &str) -> Result<EngineState, Error> {
        let state = EngineState::with_window(character, message, self.config.window_size)
            .with_retention(self.config.max_log_lines);

        let mut controller = Controller::new(state, TerminalSink::stdout());
        let result = controller.run(&self.events);

        // Stop producers and restore the terminal before reporting.
        drop(self);
        let (state, _) = controller.into_parts();
        result.map(|()| state)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }
        if let Some(relay) = self.relay.take() {
            relay.join();
        }
        // Restore terminal state
        drop(self.guard.take());
    }
}

/// Route SIGINT and SIGTERM into the event queue.
fn install_signal_handler(tx: Sender<Event>) {
    let result = ctrlc::set_handler(move || {
        let _ = tx.send_timeout(Event::Interrupt, Duration::from_millis(500));
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "could not install signal handler");
    }
}
