//! View: projects an [`EngineState`] into a frame of text.
//!
//! Rendering is a pure function of the state and the terminal width.
//! The frame is laid out top to bottom:
//!
//! ```text
//!    Hello, I'm lil guy!          <- message, wrapped
//!
//!    < (o_o) <                    <- character with arms
//!                        line 41  <- log window
//!                        line 42
//!
//!    (2/3)                        <- scroll indicator (only when the log overflows)
//! ```

mod wrap;

pub use wrap::{clip_to_width, wrap_text};

use crate::state::EngineState;
use std::fmt;

/// Columns left of the message and the character.
pub const LEFT_PADDING: usize = 3;

/// Columns left of each log line.
pub const LOG_INDENT: usize = LEFT_PADDING + 20;

/// Width used when the terminal cannot report one.
pub const FALLBACK_WIDTH: u16 = 80;

/// Line shown once the engine is quitting.
pub const FAREWELL: &str = "Goodbye!";

/// What a frame line shows, for styling by the terminal writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Message text, blank separators, farewell.
    Plain,
    /// Part of the character sprite.
    Character,
    /// A piped-in log line.
    Log,
    /// Scroll position indicator.
    Indicator,
}

/// One line of a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    /// Line text, without a trailing newline.
    pub text: String,
    /// How the line should be styled.
    pub style: LineStyle,
}

impl FrameLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), LineStyle::Plain)
    }
}

/// A fully laid-out frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Lines, top to bottom.
    pub lines: Vec<FrameLine>,
}

impl Frame {
    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Keep only the bottom `rows` lines, so the frame fits a terminal of
    /// that height. Zero means the height is unknown and keeps everything.
    pub fn fit_height(&mut self, rows: u16) {
        let rows = usize::from(rows);
        if rows > 0 && self.lines.len() > rows {
            self.lines.drain(..self.lines.len() - rows);
        }
    }

    fn push(&mut self, text: impl Into<String>, style: LineStyle) {
        self.lines.push(FrameLine::new(text, style));
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Render the state at the given terminal width.
///
/// A width of zero means the terminal size is unknown and falls back to
/// [`FALLBACK_WIDTH`].
pub fn render(state: &EngineState, width: u16) -> Frame {
    let mut frame = Frame::default();

    if state.is_quitting() {
        frame.push(FAREWELL, LineStyle::Plain);
        return frame;
    }

    let width = usize::from(if width == 0 { FALLBACK_WIDTH } else { width });
    let pad = " ".repeat(LEFT_PADDING);

    for line in wrap_text(&state.message, width.saturating_sub(LEFT_PADDING)) {
        frame.push(format!("{pad}{line}"), LineStyle::Plain);
    }
    frame.lines.push(FrameLine::blank());

    let face = state.current_face();
    if face.contains('\n') {
        // Every row counts, including a trailing empty one.
        for line in face.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            frame.push(format!("{pad}{line}"), LineStyle::Character);
        }
    } else {
        let (left, right) = state.animation.arm_frame.arms();
        frame.push(format!("{pad}{left} {face} {right}"), LineStyle::Character);
    }

    let indent = " ".repeat(LOG_INDENT);
    let room = width.saturating_sub(LOG_INDENT);
    for line in state.log.visible() {
        frame.push(format!("{indent}{}", clip_to_width(line, room)), LineStyle::Log);
    }

    if state.log.overflows() {
        frame.lines.push(FrameLine::blank());
        frame.push(
            format!(
                "{pad}({}/{})",
                state.log.cursor() + 1,
                state.log.max_cursor() + 1
            ),
            LineStyle::Indicator,
        );
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{ArmFrame, Character};
    use pretty_assertions::assert_eq;

    fn state(faces: &[&str], message: &str) -> EngineState {
        EngineState::new(Character::new(faces.iter().copied()), message)
    }

    #[test]
    fn test_render_first_frame() {
        let state = state(&["(o_o)", "(-_-)"], "Hi");
        let frame = render(&state, 80);
        assert_eq!(frame.to_string(), "   Hi\n\n   < (o_o) <\n");
        assert_eq!(frame.lines[2].style, LineStyle::Character);
    }

    #[test]
    fn test_render_after_four_ticks() {
        let mut state = state(&["(o_o)", "(-_-)"], "Hi");
        for _ in 0..4 {
            state.tick();
        }
        assert_eq!(render(&state, 80).to_string(), "   Hi\n\n   < (-_-) <\n");
    }

    #[test]
    fn test_render_arm_frames() {
        let mut state = state(&["(o_o)"], "Hi");
        let mut rows = Vec::new();
        for _ in 0..4 {
            rows.push(render(&state, 80).lines[2].text.clone());
            state.tick();
        }
        assert_eq!(
            rows,
            vec!["   < (o_o) <", "   - (o_o) -", "   > (o_o) >", "     (o_o)  "]
        );
    }

    #[test]
    fn test_render_multiline_face_has_no_arms() {
        let mut state = state(&[" /\\_/\\\n( o.o )\n > ^ <"], "Hi");
        state.animation.arm_frame = ArmFrame::Right;
        let frame = render(&state, 80);
        assert_eq!(
            frame.to_string(),
            "   Hi\n\n    /\\_/\\\n   ( o.o )\n    > ^ <\n"
        );
    }

    #[test]
    fn test_render_multiline_face_keeps_trailing_row() {
        let state = state(&["abc\n"], "Hi");
        let frame = render(&state, 80);
        let rows: Vec<_> = frame
            .lines
            .iter()
            .filter(|l| l.style == LineStyle::Character)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(rows, vec!["   abc", "   "]);
    }

    #[test]
    fn test_fit_height_keeps_bottom_rows() {
        let mut state = state(&["(o_o)"], "Hi");
        for i in 0..100 {
            state.push_line(format!("line {i}"));
        }
        let mut frame = render(&state, 80);
        assert_eq!(frame.height(), 65);

        frame.fit_height(5);
        assert_eq!(frame.height(), 5);
        assert_eq!(frame.lines[0].text.trim(), "line 97");
        assert_eq!(frame.lines[4].text, "   (41/41)");

        let before = frame.clone();
        frame.fit_height(0);
        frame.fit_height(50);
        assert_eq!(frame, before);
    }

    #[test]
    fn test_render_wraps_message() {
        let state = state(&["(o_o)"], "one two three four");
        let frame = render(&state, 12);
        let text: Vec<_> = frame.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(&text[..3], &["   one two", "   three", "   four"]);
    }

    #[test]
    fn test_render_zero_width_falls_back() {
        let state = state(&["(o_o)"], "Hi");
        assert_eq!(render(&state, 0), render(&state, FALLBACK_WIDTH));
    }

    #[test]
    fn test_render_log_window_without_indicator() {
        let mut state = state(&["(o_o)"], "Hi");
        state.push_line("first".to_string());
        state.push_line(String::new());
        let frame = render(&state, 80);
        let indent = " ".repeat(LOG_INDENT);
        assert_eq!(
            frame.to_string(),
            format!("   Hi\n\n   < (o_o) <\n{indent}first\n{indent}\n")
        );
        assert!(frame.lines.iter().all(|l| l.style != LineStyle::Indicator));
    }

    #[test]
    fn test_render_indicator_when_overflowing() {
        let mut state = EngineState::with_window(Character::new(["(o_o)"]), "Hi", 2);
        for i in 0..5 {
            state.push_line(format!("l{i}"));
        }
        state.scroll_up(1);
        let frame = render(&state, 80);
        let last = frame.lines.last().unwrap();
        assert_eq!(last.text, "   (3/4)");
        assert_eq!(last.style, LineStyle::Indicator);

        let logs: Vec<_> = frame
            .lines
            .iter()
            .filter(|l| l.style == LineStyle::Log)
            .map(|l| l.text.trim())
            .collect();
        assert_eq!(logs, vec!["l2", "l3"]);
    }

    #[test]
    fn test_render_clips_long_log_lines() {
        let mut state = state(&["(o_o)"], "Hi");
        state.push_line("x".repeat(100));
        let frame = render(&state, 30);
        let log = frame.lines.iter().find(|l| l.style == LineStyle::Log).unwrap();
        assert_eq!(log.text, format!("{}{}", " ".repeat(LOG_INDENT), "x".repeat(7)));
    }

    #[test]
    fn test_render_quitting_is_farewell() {
        let mut state = state(&["(o_o)"], "Hi");
        state.push_line("something".to_string());
        state.quit();
        assert_eq!(render(&state, 80).to_string(), "Goodbye!\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut state = state(&["(o_o)", "(-_-)"], "Some message that wraps around");
        for i in 0..70 {
            state.push_line(format!("{i}"));
            state.tick();
        }
        assert_eq!(render(&state, 40), render(&state, 40));
    }
}
