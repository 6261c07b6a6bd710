//! Engine state: everything the view needs to draw a frame.
//!
//! The state is owned by the controller and mutated one event at a time.
//! Once the engine is quitting, every mutation is ignored.

mod log;

pub use log::OutputLog;

use crate::character::{ArmFrame, Character};

/// Window size of the scrolling log.
pub const DEFAULT_WINDOW_SIZE: usize = 60;

/// Lifecycle phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Processing events.
    #[default]
    Running,
    /// Terminal phase: nothing changes anymore.
    Quitting,
}

/// Animation position: which face, which arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    /// Index of the current face.
    pub face_index: usize,
    /// Current arm frame.
    pub arm_frame: ArmFrame,
    /// Ticks observed so far.
    pub ticks: u64,
}

impl AnimationState {
    /// Advance one tick.
    ///
    /// The arms move every tick; the face moves once per full arm cycle.
    pub fn tick(&mut self, character: &Character) {
        self.ticks += 1;
        self.arm_frame = self.arm_frame.next();
        if self.ticks % ArmFrame::CYCLE_LEN as u64 == 0 {
            let (_, next) = character.next_face(self.face_index);
            self.face_index = next;
        }
    }
}

/// Aggregate engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// The character being animated.
    pub character: Character,
    /// Message shown above the character.
    pub message: String,
    /// Animation position.
    pub animation: AnimationState,
    /// Piped-in lines.
    pub log: OutputLog,
    /// Lifecycle phase.
    pub phase: Phase,
}

impl EngineState {
    /// Create a fresh state with the default window size.
    pub fn new(character: Character, message: impl Into<String>) -> Self {
        Self::with_window(character, message, DEFAULT_WINDOW_SIZE)
    }

    /// Create a fresh state with a custom window size.
    pub fn with_window(character: Character, message: impl Into<String>, window: usize) -> Self {
        Self {
            character,
            message: message.into(),
            animation: AnimationState::default(),
            log: OutputLog::new(window),
            phase: Phase::Running,
        }
    }

    /// Cap the number of retained log lines.
    #[must_use]
    pub fn with_retention(mut self, max_lines: Option<usize>) -> Self {
        self.log = self.log.with_max_lines(max_lines);
        self
    }

    /// Check if the engine is quitting.
    pub fn is_quitting(&self) -> bool {
        self.phase == Phase::Quitting
    }

    /// The face currently on screen.
    pub fn current_face(&self) -> &str {
        self.character.face(self.animation.face_index)
    }

    /// Enter the terminal phase.
    pub fn quit(&mut self) {
        self.phase = Phase::Quitting;
    }

    /// Advance the animation one tick.
    pub fn tick(&mut self) {
        if self.is_quitting() {
            return;
        }
        self.animation.tick(&self.character);
    }

    /// Record a received line.
    pub fn push_line(&mut self, line: String) {
        if self.is_quitting() {
            return;
        }
        self.log.push(line);
    }

    /// Scroll the log view towards older lines.
    pub fn scroll_up(&mut self, lines: usize) {
        if !self.is_quitting() {
            self.log.scroll_up(lines);
        }
    }

    /// Scroll the log view towards newer lines.
    pub fn scroll_down(&mut self, lines: usize) {
        if !self.is_quitting() {
            self.log.scroll_down(lines);
        }
    }

    /// Jump to the oldest lines.
    pub fn scroll_to_top(&mut self) {
        if !self.is_quitting() {
            self.log.scroll_to_top();
        }
    }

    /// Jump to the newest lines.
    pub fn scroll_to_bottom(&mut self) {
        if !self.is_quitting() {
            self.log.scroll_to_bottom();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> EngineState {
        EngineState::new(Character::new(["(o_o)", "(-_-)"]), "Hi")
    }

    #[test]
    fn test_face_advances_every_fourth_tick() {
        let mut state = state();
        assert_eq!(state.current_face(), "(o_o)");
        assert_eq!(state.animation.arm_frame, ArmFrame::Left);

        for _ in 0..3 {
            state.tick();
            assert_eq!(state.current_face(), "(o_o)");
        }
        state.tick();
        assert_eq!(state.current_face(), "(-_-)");
        assert_eq!(state.animation.arm_frame, ArmFrame::Left);

        for _ in 0..4 {
            state.tick();
        }
        assert_eq!(state.current_face(), "(o_o)");
    }

    #[test]
    fn test_arm_frame_advances_every_tick() {
        let mut state = state();
        state.tick();
        assert_eq!(state.animation.arm_frame, ArmFrame::Level);
        state.tick();
        assert_eq!(state.animation.arm_frame, ArmFrame::Right);
        state.tick();
        assert_eq!(state.animation.arm_frame, ArmFrame::Down);
    }

    #[test]
    fn test_quitting_freezes_state() {
        let mut state = state();
        state.push_line("before".to_string());
        state.quit();
        let frozen = state.clone();

        state.tick();
        state.push_line("after".to_string());
        state.scroll_up(1);
        state.scroll_down(1);
        state.scroll_to_bottom();
        assert_eq!(state, frozen);
        assert!(state.is_quitting());
    }

    #[test]
    fn test_empty_character_ticks_safely() {
        let mut state = EngineState::new(Character::new(Vec::<String>::new()), "");
        for _ in 0..8 {
            state.tick();
        }
        assert_eq!(state.current_face(), crate::character::SENTINEL_FACE);
        assert_eq!(state.animation.face_index, 0);
    }
}
