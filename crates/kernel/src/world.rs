use blockyard_common::{BlockKind, Face, VoxelCoord, VoxelRecord};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lowest y at which a voxel may be placed.
pub const BEDROCK_Y: i32 = 0;

/// An event record produced by every successful mutation of the world.
///
/// The presentation layer drains these to create or destroy the visual for
/// each voxel; it never mutates the store itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A voxel was inserted.
    Placed(VoxelRecord),
    /// A voxel was deleted. Carries the record it had.
    Removed(VoxelRecord),
}

impl WorldEvent {
    pub fn record(&self) -> VoxelRecord {
        match self {
            Self::Placed(r) | Self::Removed(r) => *r,
        }
    }
}

/// Rejected world mutations. All are expected and recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("a voxel already occupies {0}")]
    AlreadyOccupied(VoxelCoord),
    #[error("no voxel at {0}")]
    NotFound(VoxelCoord),
    #[error("{0} is below the bedrock floor")]
    BelowBedrock(VoxelCoord),
    #[error("ground voxel at {0} cannot be removed")]
    Indestructible(VoxelCoord),
    #[error("the cell past {0} on {1:?} is outside the grid")]
    OutOfRange(VoxelCoord, Face),
}

/// The authoritative voxel store.
///
/// A sparse map from grid coordinate to block kind. Lookups are O(1); use
/// [`VoxelWorld::records`] when a deterministic iteration order is needed.
#[derive(Debug, Clone, Default)]
pub struct VoxelWorld {
    voxels: HashMap<VoxelCoord, BlockKind>,
    /// Append-only log of successful mutations since the last drain.
    event_log: Vec<WorldEvent>,
}

impl VoxelWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of voxels in the world.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Insert a voxel at an empty coordinate.
    pub fn place(&mut self, coord: VoxelCoord, kind: BlockKind) -> Result<VoxelRecord, WorldError> {
        if coord.y < BEDROCK_Y {
            tracing::debug!(%coord, "placement below bedrock rejected");
            return Err(WorldError::BelowBedrock(coord));
        }
        if self.voxels.contains_key(&coord) {
            tracing::debug!(%coord, "placement on occupied cell rejected");
            return Err(WorldError::AlreadyOccupied(coord));
        }
        self.voxels.insert(coord, kind);
        let record = VoxelRecord::new(coord, kind);
        tracing::trace!(%coord, %kind, "voxel placed");
        self.event_log.push(WorldEvent::Placed(record));
        Ok(record)
    }

    /// Delete the voxel at a coordinate and return it.
    ///
    /// The ground layer is checked first, so y = 0 is refused even when empty.
    pub fn remove(&mut self, coord: VoxelCoord) -> Result<VoxelRecord, WorldError> {
        if coord.y <= BEDROCK_Y {
            tracing::debug!(%coord, "removal of ground rejected");
            return Err(WorldError::Indestructible(coord));
        }
        let kind = self
            .voxels
            .remove(&coord)
            .ok_or(WorldError::NotFound(coord))?;
        let record = VoxelRecord::new(coord, kind);
        tracing::trace!(%coord, %kind, "voxel removed");
        self.event_log.push(WorldEvent::Removed(record));
        Ok(record)
    }

    /// The voxel at a coordinate, if any.
    pub fn get(&self, coord: VoxelCoord) -> Option<VoxelRecord> {
        self.voxels
            .get(&coord)
            .map(|kind| VoxelRecord::new(coord, *kind))
    }

    pub fn contains(&self, coord: VoxelCoord) -> bool {
        self.voxels.contains_key(&coord)
    }

    /// The coordinate adjacent to `coord` across `face`.
    pub fn neighbor_of(coord: VoxelCoord, face: Face) -> Result<VoxelCoord, WorldError> {
        coord.offset(face).ok_or(WorldError::OutOfRange(coord, face))
    }

    /// The cell directly beneath an actor standing at `position`.
    pub fn dig_target(position: Vec3) -> Result<VoxelCoord, WorldError> {
        Self::neighbor_of(VoxelCoord::containing(position), Face::NegY)
    }

    /// How many placed voxels are of the given kind.
    pub fn count_of_kind(&self, kind: BlockKind) -> usize {
        self.voxels.values().filter(|k| **k == kind).count()
    }

    /// All voxels, sorted by coordinate.
    pub fn records(&self) -> Vec<VoxelRecord> {
        let mut records: Vec<VoxelRecord> = self
            .voxels
            .iter()
            .map(|(coord, kind)| VoxelRecord::new(*coord, *kind))
            .collect();
        records.sort_by_key(|r| r.coord);
        records
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Reconstruct a world from a sequence of events.
    ///
    /// Events are trusted: they were produced by a world that already
    /// enforced the floor and occupancy rules.
    pub fn replay(events: &[WorldEvent]) -> Self {
        let mut world = Self::new();
        for event in events {
            match event {
                WorldEvent::Placed(r) => {
                    world.voxels.insert(r.coord, r.kind);
                }
                WorldEvent::Removed(r) => {
                    world.voxels.remove(&r.coord);
                }
            }
        }
        world
    }

    /// Deterministic hash of the voxel contents, independent of insertion order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        for record in self.records() {
            mix(&mut h, &record.coord.x.to_le_bytes());
            mix(&mut h, &record.coord.y.to_le_bytes());
            mix(&mut h, &record.coord.z.to_le_bytes());
            mix(&mut h, &[record.kind.slot()]);
        }
        h
    }
}
