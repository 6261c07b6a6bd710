//! Arm frames: the little wave drawn on either side of a one-line face.

use std::fmt;

/// One step of the arm-waving cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArmFrame {
    /// Arms swung left: `<`.
    #[default]
    Left,
    /// Arms level: `-`.
    Level,
    /// Arms swung right: `>`.
    Right,
    /// Arms down (blank).
    Down,
}

impl ArmFrame {
    /// The full cycle, in animation order.
    pub const CYCLE: [Self; 4] = [Self::Left, Self::Level, Self::Right, Self::Down];

    /// Number of frames in one wave.
    pub const CYCLE_LEN: usize = Self::CYCLE.len();

    /// The frame after this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Left => Self::Level,
            Self::Level => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
        }
    }

    /// Glyph for this frame.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Left => "<",
            Self::Level => "-",
            Self::Right => ">",
            Self::Down => " ",
        }
    }

    /// Parse a frame from its glyph.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::CYCLE.into_iter().find(|frame| frame.glyph() == glyph)
    }

    /// Left and right arm glyphs for this frame.
    pub const fn arms(self) -> (&'static str, &'static str) {
        match self {
            Self::Left => ("<", "<"),
            Self::Right => (">", ">"),
            other => (other.glyph(), other.glyph()),
        }
    }
}

impl fmt::Display for ArmFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
