//! Developer Tooling: read-only world inspection and HUD text.
//!
//! # Invariants
//! - Tools never mutate the world or the ledger.

mod hud;
mod inspector;

pub use hud::Hud;
pub use inspector::{Bounds, WorldInspector, WorldSummary};
