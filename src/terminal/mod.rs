//! Terminal output: the scoped terminal guard and the frame writer.

mod guard;
mod output;

pub use guard::TerminalGuard;
pub use output::OutputBuffer;

use crate::actor::FrameSink;
use crate::view::{Frame, LineStyle, FALLBACK_WIDTH};
use std::io::{self, Write};

/// Palette color of the character sprite (cyan).
pub const CHARACTER_COLOR: u8 = 6;

/// Palette color of piped-in lines (pink).
pub const LOG_COLOR: u8 = 205;

/// Palette color of the scroll indicator (grey).
pub const INDICATOR_COLOR: u8 = 245;

/// Writes frames to a terminal-like writer.
///
/// Each frame homes the cursor and clears the screen first, so frames of
/// different heights never leave stale lines behind. No newline follows the
/// last row: a frame as tall as the terminal must not scroll it.
pub struct TerminalSink<W> {
    writer: W,
    output: OutputBuffer,
}

impl TerminalSink<io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            output: OutputBuffer::new(),
        }
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Encode a frame into the output buffer.
    fn encode(&mut self, frame: &Frame) {
        let out = &mut self.output;
        out.clear();
        out.cursor_hide();
        out.cursor_home();
        out.clear_screen();

        for (row, line) in frame.lines.iter().enumerate() {
            if row > 0 {
                out.newline();
            }
            let color = match line.style {
                LineStyle::Plain => None,
                LineStyle::Character => Some(CHARACTER_COLOR),
                LineStyle::Log => Some(LOG_COLOR),
                LineStyle::Indicator => Some(INDICATOR_COLOR),
            };
            match color {
                Some(color) if !line.text.is_empty() => {
                    out.set_fg(color);
                    out.write_str(&line.text);
                    out.reset_attrs();
                }
                _ => out.write_str(&line.text),
            }
        }
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn width(&self) -> u16 {
        match crossterm::terminal::size() {
            Ok((width, _)) if width > 0 => width,
            _ => FALLBACK_WIDTH,
        }
    }

    fn height(&self) -> u16 {
        crossterm::terminal::size().map_or(0, |(_, height)| height)
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.encode(frame);
        self.output.flush_to(&mut self.writer)
    }
}
