use blockyard_common::BlockKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors from inventory operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("no {0} left in inventory")]
    Depleted(BlockKind),
}

/// Counts of each block kind currently held (not placed in the world).
///
/// Uses BTreeMap so iteration follows the hotbar order. Counts are `u64`
/// while starting amounts are `u32`, so crediting never saturates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<BlockKind, u64>", into = "BTreeMap<BlockKind, u64>")]
pub struct InventoryLedger {
    counts: BTreeMap<BlockKind, u64>,
}

impl InventoryLedger {
    /// A ledger holding zero of every kind.
    pub fn new() -> Self {
        Self {
            counts: BlockKind::ALL.into_iter().map(|k| (k, 0)).collect(),
        }
    }

    /// A ledger with the given counts; kinds not mentioned start at zero.
    pub fn with_counts(counts: impl IntoIterator<Item = (BlockKind, u32)>) -> Self {
        let mut ledger = Self::new();
        ledger
            .counts
            .extend(counts.into_iter().map(|(k, c)| (k, u64::from(c))));
        ledger
    }

    pub fn count(&self, kind: BlockKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Take one unit of `kind`. Must succeed before that kind is placed.
    pub fn try_consume(&mut self, kind: BlockKind) -> Result<(), InventoryError> {
        let count = self.counts.entry(kind).or_insert(0);
        if *count == 0 {
            tracing::debug!(%kind, "inventory depleted");
            return Err(InventoryError::Depleted(kind));
        }
        *count -= 1;
        Ok(())
    }

    /// Return one unit of `kind`.
    pub fn credit(&mut self, kind: BlockKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// `(kind, count)` pairs in hotbar order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, u64)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }
}

impl Default for InventoryLedger {
    /// The starting inventory of a fresh game.
    fn default() -> Self {
        Self::with_counts([
            (BlockKind::Grass, 100),
            (BlockKind::Stone, 50),
            (BlockKind::Wood, 30),
            (BlockKind::Sand, 40),
            (BlockKind::Gold, 20),
        ])
    }
}

impl From<BTreeMap<BlockKind, u64>> for InventoryLedger {
    fn from(counts: BTreeMap<BlockKind, u64>) -> Self {
        let mut ledger = Self::new();
        ledger.counts.extend(counts);
        ledger
    }
}

impl From<InventoryLedger> for BTreeMap<BlockKind, u64> {
    fn from(ledger: InventoryLedger) -> Self {
        ledger.counts
    }
}
