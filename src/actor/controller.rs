//! Controller: the single consumer of the event queue.
//!
//! Events are applied to the [`EngineState`] strictly one at a time, in
//! arrival order, and a new frame is presented after each one that changed
//! something. No other thread ever sees the state.

use super::messages::{Command, Event};
use crate::error::Error;
use crate::state::EngineState;
use crate::view::{self, Frame};
use crossbeam_channel::Receiver;
use std::io;

/// Consecutive presentation failures tolerated before giving up.
pub const MAX_CONSECUTIVE_PRESENT_FAILURES: u32 = 5;

/// Where frames go.
pub trait FrameSink {
    /// Current width in columns (0 if unknown).
    fn width(&self) -> u16;

    /// Current height in rows (0 if unknown).
    fn height(&self) -> u16;

    /// Display a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be written.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Outcome of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Nothing visible changed.
    Idle,
    /// Draw a new frame.
    Redraw,
    /// Draw the farewell frame and stop.
    Quit,
}

/// Sequential state machine driving the view.
pub struct Controller<S> {
    state: EngineState,
    sink: S,
    /// Size reported by the last resize, overriding the sink's own.
    size: Option<(u16, u16)>,
    failures: u32,
}

impl<S: FrameSink> Controller<S> {
    /// Create a controller owning `state` and drawing to `sink`.
    pub const fn new(state: EngineState, sink: S) -> Self {
        Self {
            state,
            sink,
            size: None,
            failures: 0,
        }
    }

    /// Current state.
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// The frame sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the controller, returning its state and sink.
    pub fn into_parts(self) -> (EngineState, S) {
        (self.state, self.sink)
    }

    /// Process events until quit, interrupt, or a closed queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] once presentation has failed
    /// [`MAX_CONSECUTIVE_PRESENT_FAILURES`] times in a row.
    pub fn run(&mut self, events: &Receiver<Event>) -> Result<(), Error> {
        self.draw()?;

        while !self.state.is_quitting() {
            let Ok(event) = events.recv() else {
                tracing::info!("event queue closed");
                self.state.quit();
                break;
            };
            match self.handle(event) {
                Flow::Redraw => self.draw()?,
                // The farewell is drawn once the loop ends.
                Flow::Quit | Flow::Idle => {}
            }
        }

        if self.state.is_quitting() {
            // Farewell; a failure here no longer matters.
            if let Err(e) = self.sink.present(&self.frame()) {
                tracing::warn!(error = %e, "failed to draw farewell");
            }
        }
        Ok(())
    }

    /// Apply a single event to the state.
    fn handle(&mut self, event: Event) -> Flow {
        if self.state.is_quitting() {
            return Flow::Idle;
        }

        match event {
            Event::Key { code, modifiers } => match Command::from_key(code, modifiers) {
                Some(command) => self.apply(command),
                None => Flow::Idle,
            },
            Event::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
                self.size = Some((width, height));
                Flow::Redraw
            }
            Event::Tick(_) => {
                self.state.tick();
                Flow::Redraw
            }
            Event::Line(line) => {
                self.state.push_line(line);
                Flow::Redraw
            }
            Event::InputClosed => {
                tracing::info!(lines = self.state.log.len(), "input exhausted");
                Flow::Idle
            }
            Event::Interrupt => {
                tracing::info!("interrupted");
                self.state.quit();
                Flow::Quit
            }
            Event::Error(message) => {
                tracing::warn!(%message, "producer error");
                Flow::Idle
            }
        }
    }

    /// Apply a key binding.
    fn apply(&mut self, command: Command) -> Flow {
        let window = self.state.log.window();
        match command {
            Command::Quit => {
                tracing::info!("quit requested");
                self.state.quit();
                return Flow::Quit;
            }
            Command::ScrollUp => self.state.scroll_up(1),
            Command::ScrollDown => self.state.scroll_down(1),
            Command::PageUp => self.state.scroll_up(window),
            Command::PageDown => self.state.scroll_down(window),
            Command::Top => self.state.scroll_to_top(),
            Command::Bottom => self.state.scroll_to_bottom(),
        }
        Flow::Redraw
    }

    /// Render the state, keeping the bottom rows that fit the terminal.
    fn frame(&self) -> Frame {
        let (width, height) = self
            .size
            .unwrap_or_else(|| (self.sink.width(), self.sink.height()));
        let mut frame = view::render(&self.state, width);
        frame.fit_height(height);
        frame
    }

    /// Present the current frame, tolerating transient failures.
    fn draw(&mut self) -> Result<(), Error> {
        let frame = self.frame();
        match self.sink.present(&frame) {
            Ok(()) => {
                self.failures = 0;
                Ok(())
            }
            Err(source) => {
                self.failures += 1;
                tracing::error!(error = %source, failures = self.failures, "failed to draw frame");
                if self.failures >= MAX_CONSECUTIVE_PRESENT_FAILURES {
                    return Err(Error::Render {
                        failures: self.failures,
                        source,
                    });
                }
                Ok(())
            }
        }
    }
}
