use blockyard_common::{BlockKind, VoxelCoord};
use blockyard_kernel::{VoxelWorld, WorldError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wood blocks per trunk.
const TRUNK_HEIGHT: i32 = 3;

/// Largest accepted footprint side length.
pub const MAX_SIZE: u32 = 1024;

/// Rejected terrain parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    #[error("terrain size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: u32, max: u32 },
}

/// Terrain generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Side length of the square ground footprint (the render distance).
    pub size: u32,
    /// A column grows a tree with probability 1 in `tree_chance`. Zero disables trees.
    pub tree_chance: u32,
    /// Fixed seed for reproducible worlds. `None` draws a fresh one per run.
    pub seed: Option<u64>,
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.size > MAX_SIZE {
            return Err(TerrainError::SizeTooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 25,
            tree_chance: 30,
            seed: None,
        }
    }
}

/// What one tree contributed to the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub trunk: usize,
    pub leaves: usize,
    /// Leaf cells already taken by a neighbouring canopy.
    pub leaves_skipped: usize,
}

/// Summary of a finished generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// The seed actually used, so an unseeded run can be reproduced.
    pub seed: u64,
    pub ground: usize,
    pub trees: usize,
    pub leaves_skipped: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Terrain: seed={} ground={} trees={} leaves_skipped={}",
            self.seed, self.ground, self.trees, self.leaves_skipped
        )
    }
}

/// Populates a world with a flat grass floor and scattered trees.
pub struct TerrainGenerator {
    config: TerrainConfig,
    seed: u64,
}

impl TerrainGenerator {
    /// Validate the config and resolve the seed up front; an unseeded config
    /// gets a random one.
    pub fn new(config: TerrainConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
        Ok(Self { config, seed })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fill the `size` x `size` footprint at y = 0, rolling for a tree per column.
    ///
    /// Columns are visited z outer, x inner. Each column consumes exactly one
    /// random draw when trees are enabled, so the tree layout depends only on
    /// the seed and the footprint size.
    pub fn generate(&self, world: &mut VoxelWorld) -> GenerationReport {
        // Bounded by MAX_SIZE in `new`.
        let size = self.config.size as i32;
        let _span = tracing::info_span!("generate_terrain", size, seed = self.seed).entered();

        let mut rng = fastrand::Rng::with_seed(self.seed);
        let mut report = GenerationReport {
            seed: self.seed,
            ground: 0,
            trees: 0,
            leaves_skipped: 0,
        };

        for z in 0..size {
            for x in 0..size {
                match world.place(VoxelCoord::new(x, 0, z), BlockKind::Grass) {
                    Ok(_) => report.ground += 1,
                    Err(WorldError::AlreadyOccupied(_)) => {}
                    Err(e) => tracing::warn!("ground placement failed: {e}"),
                }

                if self.config.tree_chance > 0 && rng.u32(1..=self.config.tree_chance) == 1 {
                    let stats = plant_tree(world, VoxelCoord::new(x, 1, z));
                    report.trees += 1;
                    report.leaves_skipped += stats.leaves_skipped;
                }
            }
        }

        tracing::info!(
            ground = report.ground,
            trees = report.trees,
            voxels = world.len(),
            "terrain generated"
        );
        report
    }
}

/// Grow a tree whose trunk starts at `base`.
///
/// Three wood blocks stacked upward, then a ring of eight grass leaves on the
/// layer above the trunk, with the centre cell left open. Leaves that would
/// land on an occupied cell are skipped; the first writer keeps the cell.
/// Cells past the edge of the grid are skipped too.
pub fn plant_tree(world: &mut VoxelWorld, base: VoxelCoord) -> TreeStats {
    let mut stats = TreeStats::default();

    for dy in 0..TRUNK_HEIGHT {
        let Some(at) = base.checked_translate(0, dy, 0) else {
            continue;
        };
        match world.place(at, BlockKind::Wood) {
            Ok(_) => stats.trunk += 1,
            Err(e) => tracing::debug!("trunk block skipped: {e}"),
        }
    }

    for dx in -1..=1 {
        for dz in -1..=1 {
            if dx == 0 && dz == 0 {
                continue;
            }
            let Some(at) = base.checked_translate(dx, TRUNK_HEIGHT, dz) else {
                stats.leaves_skipped += 1;
                continue;
            };
            match world.place(at, BlockKind::Grass) {
                Ok(_) => stats.leaves += 1,
                Err(_) => stats.leaves_skipped += 1,
            }
        }
    }

    tracing::trace!(%base, leaves = stats.leaves, "tree planted");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(config: TerrainConfig) -> (VoxelWorld, GenerationReport) {
        let mut world = VoxelWorld::new();
        let report = TerrainGenerator::new(config).unwrap().generate(&mut world);
        (world, report)
    }

    #[test]
    fn oversized_footprint_is_rejected() {
        let config = TerrainConfig {
            size: u32::MAX,
            ..TerrainConfig::default()
        };
        assert_eq!(
            TerrainGenerator::new(config).err(),
            Some(TerrainError::SizeTooLarge {
                size: u32::MAX,
                max: MAX_SIZE,
            })
        );
        let largest = TerrainConfig {
            size: MAX_SIZE,
            ..TerrainConfig::default()
        };
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn tree_at_grid_top_keeps_what_fits() {
        let mut world = VoxelWorld::new();
        let stats = plant_tree(&mut world, VoxelCoord::new(0, i32::MAX - 1, 0));
        assert_eq!(stats.trunk, 2);
        assert_eq!(stats.leaves, 0);
        assert_eq!(stats.leaves_skipped, 8);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn config_defaults() {
        let config = TerrainConfig::default();
        assert_eq!(config.size, 25);
        assert_eq!(config.tree_chance, 30);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn single_column_without_trees() {
        let (world, report) = generate(TerrainConfig {
            size: 1,
            tree_chance: 0,
            seed: Some(7),
        });
        assert_eq!(world.len(), 1);
        let record = world.get(VoxelCoord::new(0, 0, 0)).unwrap();
        assert_eq!(record.kind, BlockKind::Grass);
        assert_eq!(report.ground, 1);
        assert_eq!(report.trees, 0);
    }

    #[test]
    fn flat_floor_covers_footprint() {
        let (world, report) = generate(TerrainConfig {
            size: 8,
            tree_chance: 0,
            seed: Some(1),
        });
        assert_eq!(report.ground, 64);
        assert_eq!(world.len(), 64);
        for z in 0..8 {
            for x in 0..8 {
                assert!(world.contains(VoxelCoord::new(x, 0, z)));
            }
        }
        assert!(!world.contains(VoxelCoord::new(8, 0, 0)));
    }

    #[test]
    fn tree_chance_one_plants_everywhere() {
        let (world, report) = generate(TerrainConfig {
            size: 3,
            tree_chance: 1,
            seed: Some(3),
        });
        assert_eq!(report.trees, 9);
        assert_eq!(world.count_of_kind(BlockKind::Wood), 27);
        // A neighbour's ring fills the gap above each trunk.
        assert!(world.contains(VoxelCoord::new(1, 4, 1)));
        assert!(report.leaves_skipped > 0);
    }

    #[test]
    fn same_seed_same_world() {
        let config = TerrainConfig {
            size: 20,
            tree_chance: 5,
            seed: Some(42),
        };
        let (a, ra) = generate(config.clone());
        let (b, rb) = generate(config);
        assert_eq!(ra, rb);
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn unseeded_run_reports_its_seed() {
        let (world, report) = generate(TerrainConfig {
            size: 10,
            tree_chance: 4,
            seed: None,
        });
        let (replayed, _) = generate(TerrainConfig {
            size: 10,
            tree_chance: 4,
            seed: Some(report.seed),
        });
        assert_eq!(world.state_hash(), replayed.state_hash());
    }

    #[test]
    fn plant_tree_shape() {
        let mut world = VoxelWorld::new();
        let stats = plant_tree(&mut world, VoxelCoord::new(5, 1, 5));
        assert_eq!(stats.trunk, 3);
        assert_eq!(stats.leaves, 8);
        for y in 1..=3 {
            assert_eq!(
                world.get(VoxelCoord::new(5, y, 5)).unwrap().kind,
                BlockKind::Wood
            );
        }
        assert!(!world.contains(VoxelCoord::new(5, 4, 5)));
        assert_eq!(
            world.get(VoxelCoord::new(4, 4, 6)).unwrap().kind,
            BlockKind::Grass
        );
        assert_eq!(world.len(), 11);
    }

    #[test]
    fn overlapping_canopies_keep_first_writer() {
        let mut world = VoxelWorld::new();
        plant_tree(&mut world, VoxelCoord::new(0, 1, 0));
        let second = plant_tree(&mut world, VoxelCoord::new(1, 1, 0));
        // Shared canopy cells are (0,4,±1) and (1,4,±1).
        assert_eq!(second.leaves_skipped, 4);
        assert_eq!(second.leaves, 4);
        assert_eq!(world.len(), 11 + 3 + 4);
    }

    #[test]
    fn report_display() {
        let (_, report) = generate(TerrainConfig {
            size: 2,
            tree_chance: 0,
            seed: Some(9),
        });
        let s = format!("{report}");
        assert!(s.contains("seed=9"));
        assert!(s.contains("ground=4"));
    }
}
