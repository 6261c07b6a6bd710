//! Character: the faces lil guy cycles through, and the arms he waves.
//!
//! A character is an ordered list of faces. Faces are plain strings; a
//! face containing line breaks is a multi-line sprite and is drawn
//! without arms.

mod arms;

pub use arms::ArmFrame;

use serde::Deserialize;

/// Face shown when a character has nothing else to offer.
pub const SENTINEL_FACE: &str = "(o_o)";

/// A named character's animation faces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Faces in animation order.
    #[serde(default)]
    pub faces: Vec<String>,
}

impl Character {
    /// Create a character from its faces.
    pub fn new<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
        }
    }

    /// The single-face fallback character.
    pub fn sentinel() -> Self {
        Self::new([SENTINEL_FACE])
    }

    /// Check if the character has no faces at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Face at `index`, wrapping around the face list.
    ///
    /// Returns the sentinel face for an empty character.
    pub fn face(&self, index: usize) -> &str {
        if self.faces.is_empty() {
            return SENTINEL_FACE;
        }
        &self.faces[index % self.faces.len()]
    }

    /// Advance one face from `current`.
    ///
    /// Returns the next face and its index. An empty character always
    /// yields the sentinel face at index 0.
    pub fn next_face(&self, current: usize) -> (&str, usize) {
        if self.faces.is_empty() {
            return (SENTINEL_FACE, 0);
        }
        let next = (current % self.faces.len() + 1) % self.faces.len();
        (&self.faces[next], next)
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_face_cycles() {
        let guy = Character::new(["(o_o)", "(-_-)", "(^_^)"]);

        let (face, idx) = guy.next_face(0);
        assert_eq!((face, idx), ("(-_-)", 1));
        let (face, idx) = guy.next_face(idx);
        assert_eq!((face, idx), ("(^_^)", 2));
        let (face, idx) = guy.next_face(idx);
        assert_eq!((face, idx), ("(o_o)", 0));
    }

    #[test]
    fn test_next_face_periodic() {
        let guy = Character::new(["a", "b", "c", "d", "e"]);
        let mut idx = 0;
        let mut first_pass = Vec::new();
        for _ in 0..guy.len() {
            let (face, next) = guy.next_face(idx);
            first_pass.push(face.to_string());
            idx = next;
        }

        // Every face exactly once per period.
        let mut sorted = first_pass.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);

        let mut second_pass = Vec::new();
        for _ in 0..guy.len() {
            let (face, next) = guy.next_face(idx);
            second_pass.push(face.to_string());
            idx = next;
        }
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_next_face_empty_is_sentinel() {
        let empty = Character::new(Vec::<String>::new());
        for idx in [0, 1, 7, usize::MAX] {
            assert_eq!(empty.next_face(idx), (SENTINEL_FACE, 0));
        }
        assert_eq!(empty.face(3), SENTINEL_FACE);
    }

    #[test]
    fn test_next_face_out_of_range_index() {
        let guy = Character::new(["x", "y"]);
        assert_eq!(guy.next_face(usize::MAX), ("x", 0));
        assert_eq!(guy.face(5), "y");
    }

    #[test]
    fn test_single_face_stays_put() {
        let guy = Character::new(["(o_o)"]);
        assert_eq!(guy.next_face(0), ("(o_o)", 0));
    }
}
