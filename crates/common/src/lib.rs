//! Shared value types: grid coordinates, block kinds, faces, voxel records.
//!
//! # Invariants
//! - A `VoxelCoord` is the unique key of a voxel; no two voxels share one.
//! - `BlockKind::ALL` is the fixed hotbar order and never changes at runtime.

mod types;

pub use types::{BlockKind, Face, ParseBlockKindError, ParseFaceError, VoxelCoord, VoxelRecord};
