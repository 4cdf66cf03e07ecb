use blockyard_common::{BlockKind, VoxelCoord};
use blockyard_kernel::VoxelWorld;
use serde::Serialize;
use std::collections::BTreeMap;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world state for debugging
/// and the terminal front end.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &VoxelWorld) -> WorldSummary {
        let _span = tracing::debug_span!("world_summary", voxels = world.len()).entered();
        let mut per_kind: BTreeMap<BlockKind, usize> =
            BlockKind::ALL.into_iter().map(|k| (k, 0)).collect();
        let mut bounds: Option<Bounds> = None;

        for record in world.records() {
            *per_kind.entry(record.kind).or_insert(0) += 1;
            bounds = Some(match bounds {
                None => Bounds {
                    min: record.coord,
                    max: record.coord,
                },
                Some(b) => b.including(record.coord),
            });
        }

        WorldSummary {
            voxel_count: world.len(),
            per_kind,
            bounds,
            pending_events: world.events().len(),
            state_hash: world.state_hash(),
        }
    }

    /// Voxels stacked in one column, bottom to top.
    pub fn column(world: &VoxelWorld, x: i32, z: i32) -> Vec<(i32, BlockKind)> {
        world
            .records()
            .into_iter()
            .filter(|r| r.coord.x == x && r.coord.z == z)
            .map(|r| (r.coord.y, r.kind))
            .collect()
    }
}

/// Inclusive axis-aligned box around every voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: VoxelCoord,
    pub max: VoxelCoord,
}

impl Bounds {
    fn including(self, c: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(self.min.x.min(c.x), self.min.y.min(c.y), self.min.z.min(c.z)),
            max: VoxelCoord::new(self.max.x.max(c.x), self.max.y.max(c.y), self.max.z.max(c.z)),
        }
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub voxel_count: usize,
    pub per_kind: BTreeMap<BlockKind, usize>,
    pub bounds: Option<Bounds>,
    pub pending_events: usize,
    pub state_hash: u64,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: voxels={} pending_events={} hash={:#018x}",
            self.voxel_count, self.pending_events, self.state_hash
        )?;
        for (kind, count) in &self.per_kind {
            write!(f, " {kind}={count}")?;
        }
        if let Some(b) = self.bounds {
            write!(f, " bounds={}..{}", b.min, b.max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32, z: i32) -> VoxelCoord {
        VoxelCoord::new(x, y, z)
    }

    #[test]
    fn summary_empty_world() {
        let world = VoxelWorld::new();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.voxel_count, 0);
        assert_eq!(summary.bounds, None);
        assert!(summary.per_kind.values().all(|n| *n == 0));
    }

    #[test]
    fn summary_counts_kinds_and_bounds() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Grass).unwrap();
        world.place(c(3, 2, -1), BlockKind::Wood).unwrap();
        world.place(c(-2, 1, 4), BlockKind::Wood).unwrap();

        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.voxel_count, 3);
        assert_eq!(summary.per_kind[&BlockKind::Wood], 2);
        assert_eq!(summary.per_kind[&BlockKind::Gold], 0);
        assert_eq!(summary.pending_events, 3);
        assert_eq!(
            summary.bounds,
            Some(Bounds {
                min: c(-2, 0, -1),
                max: c(3, 2, 4),
            })
        );
    }

    #[test]
    fn column_lists_bottom_to_top() {
        let mut world = VoxelWorld::new();
        world.place(c(1, 3, 1), BlockKind::Wood).unwrap();
        world.place(c(1, 0, 1), BlockKind::Grass).unwrap();
        world.place(c(2, 1, 1), BlockKind::Sand).unwrap();
        assert_eq!(
            WorldInspector::column(&world, 1, 1),
            vec![(0, BlockKind::Grass), (3, BlockKind::Wood)]
        );
    }

    #[test]
    fn summary_display() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Gold).unwrap();
        let s = format!("{}", WorldInspector::summary(&world));
        assert!(s.contains("voxels=1"));
        assert!(s.contains("gold=1"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone).unwrap();
        let json = serde_json::to_value(WorldInspector::summary(&world)).unwrap();
        assert_eq!(json["voxel_count"], 1);
        assert_eq!(json["per_kind"]["stone"], 1);
    }
}
