//! Input: keys, pointer buttons and text commands mapped to game actions.
//!
//! # Invariants
//! - The input layer owns no game data; it only produces `Action`s.
//! - Every front end (windowed, terminal) goes through the same action set.

pub mod action;
pub mod bindings;
pub mod command;

pub use action::Action;
pub use bindings::{Pointer, Pose, map_key, map_pointer};
pub use command::{ParseError, parse_command};
