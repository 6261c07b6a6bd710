//! Character definitions loaded from `characters.toml`.
//!
//! The file maps character names to their faces:
//!
//! ```toml
//! [default]
//! faces = ["(o_o)", "(-_-)"]
//!
//! [cat]
//! faces = [" /\\_/\\\n( o.o )\n > ^ <"]
//! ```
//!
//! A file named with `--config` must exist. Only the implicit default
//! location may be absent, in which case the built-in book (a single
//! `default` character) is used. Entries that do not decode are skipped, and
//! a `default` entry is always present after loading.

use crate::character::{Character, SENTINEL_FACE};
use crate::error::Error;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the fallback character.
pub const DEFAULT_CHARACTER: &str = "default";

/// Errors loading the character file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory to look for the config in.
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    /// The file is missing or could not be read.
    #[error("error reading {path}: {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("error decoding TOML in {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Default location: `~/.config/lil-guy/characters.toml`.
///
/// # Errors
///
/// Returns [`ConfigError::HomeDirUnavailable`] if there is no home directory.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(".config").join("lil-guy").join("characters.toml"))
}

/// Load the character book for a session.
///
/// An `explicit` path must exist. Without one, [`default_path`] is used and
/// may be absent.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be located, read or parsed.
pub fn load_book(explicit: Option<&Path>) -> Result<(PathBuf, CharacterBook), Error> {
    match explicit {
        Some(path) => Ok((path.to_path_buf(), CharacterBook::load(path)?)),
        None => {
            let path = default_path()?;
            let book = CharacterBook::load_or_builtin(&path)?;
            Ok((path, book))
        }
    }
}

/// All known characters, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterBook {
    characters: BTreeMap<String, Character>,
}

impl CharacterBook {
    /// The built-in book: just the default character.
    pub fn builtin() -> Self {
        let mut book = Self {
            characters: BTreeMap::new(),
        };
        book.ensure_default();
        book
    }

    /// Load the book from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let book = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), characters = book.len(), "loaded character file");
        Ok(book)
    }

    /// Like [`CharacterBook::load`], but a missing file yields the built-in
    /// book.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_builtin(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no character file, using built-in character");
                Ok(Self::builtin())
            }
            result => result,
        }
    }

    /// Parse a book from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if `contents` is not valid TOML.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(contents)?;

        let mut characters = BTreeMap::new();
        for (name, value) in table {
            match value.try_into::<Character>() {
                Ok(character) => {
                    characters.insert(name, character);
                }
                Err(e) => tracing::warn!(character = %name, error = %e, "skipping malformed character"),
            }
        }

        let mut book = Self { characters };
        book.ensure_default();
        Ok(book)
    }

    fn ensure_default(&mut self) {
        self.characters
            .entry(DEFAULT_CHARACTER.to_string())
            .or_insert_with(Character::sentinel);
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if the book is empty (never true after loading).
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Look up a character by name.
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    /// Character names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    /// Pick the character to animate.
    ///
    /// Unknown names and characters without faces fall back to `default`;
    /// a faceless `default` falls back to the sentinel face. The returned
    /// character always has at least one face.
    pub fn resolve(&self, name: &str) -> Resolved {
        if let Some(character) = self.get(name).filter(|c| !c.is_empty()) {
            return Resolved {
                name: name.to_string(),
                character: character.clone(),
                fell_back: false,
            };
        }

        match self.get(name) {
            Some(_) => tracing::warn!(character = %name, "no faces defined, using default"),
            None => tracing::debug!(character = %name, "character not found, using default"),
        }

        let character = self
            .get(DEFAULT_CHARACTER)
            .filter(|c| !c.is_empty())
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(face = SENTINEL_FACE, "default character has no faces");
                Character::sentinel()
            });

        Resolved {
            name: DEFAULT_CHARACTER.to_string(),
            character,
            fell_back: name != DEFAULT_CHARACTER,
        }
    }
}

impl Default for CharacterBook {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Result of [`CharacterBook::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Name of the character actually used.
    pub name: String,
    /// The character, with at least one face.
    pub character: Character,
    /// Whether the requested name was replaced by `default`.
    pub fell_back: bool,
}
