//! Game session: the composite Place and Remove actions over world + inventory.
//!
//! # Invariants
//! - A block is placed only after one unit of its kind was consumed.
//! - A failed placement refunds the consumed unit.
//! - Per kind, inventory count + placed count is unchanged by any action.

pub mod config;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use session::{ActionError, Game, Outcome};
