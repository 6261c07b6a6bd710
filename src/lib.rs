//! # lil guy
//!
//! An animated ASCII companion that sits in your terminal, waves, and shows
//! whatever you pipe into it.
//!
//! ## Core Concepts
//!
//! - **Actor model**: keyboard, animation clock, and piped input each run on
//!   their own thread and feed one bounded event queue
//! - **Sequential controller**: a single consumer applies events in arrival
//!   order; the state is never shared
//! - **Pure view**: every frame is a function of the state and terminal width
//! - **Scoped terminal**: raw mode and cursor visibility are restored on
//!   every exit path
//!
//! ## Example
//!
//! ```rust
//! use lilguy::{render, Character, EngineState};
//!
//! let mut state = EngineState::new(Character::new(["(o_o)", "(-_-)"]), "Hi");
//! state.push_line("compiling...".to_string());
//! let frame = render(&state, 80);
//! assert!(frame.to_string().contains("< (o_o) <"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod character;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod view;

// Re-exports for convenience
pub use actor::{Controller, Engine, EngineConfig, Event, FrameSink, KeyCode, KeyModifiers};
pub use character::{ArmFrame, Character};
pub use config::CharacterBook;
pub use error::Error;
pub use state::{EngineState, OutputLog};
pub use view::{render, Frame};
