//! Terrain: deterministic bulk population of the world at startup.
//!
//! # Invariants
//! - Same config and seed produce the same world (`state_hash` equal).
//! - Generation writes straight into the world; it is not inventory-gated.

mod generator;

pub use generator::{
    GenerationReport, MAX_SIZE, TerrainConfig, TerrainError, TerrainGenerator, TreeStats, plant_tree,
};
