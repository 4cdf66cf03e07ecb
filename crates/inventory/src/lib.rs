//! Inventory: block counts held by the player and the current selection.
//!
//! # Invariants
//! - A count never goes negative.
//! - Every block kind always has an entry, so any selection is a ledger key.

mod ledger;
mod selection;

pub use ledger::{InventoryError, InventoryLedger};
pub use selection::{Mode, Selection, SelectionError};
