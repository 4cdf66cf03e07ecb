//! World Kernel: the authoritative sparse voxel store.
//!
//! # Invariants
//! - At most one voxel per coordinate.
//! - Nothing is placed below the bedrock floor (y < 0).
//! - The ground layer (y = 0) is never removed.
//! - All state mutations flow through explicit operations, each logging one event.

pub mod world;

pub use world::{BEDROCK_Y, VoxelWorld, WorldError, WorldEvent};
