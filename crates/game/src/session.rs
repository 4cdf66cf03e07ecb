use blockyard_common::{BlockKind, Face, VoxelCoord, VoxelRecord};
use blockyard_input::Action;
use blockyard_inventory::{InventoryError, InventoryLedger, Mode, Selection, SelectionError};
use blockyard_kernel::{VoxelWorld, WorldError, WorldEvent};
use blockyard_terrain::{GenerationReport, TerrainError, TerrainGenerator};
use glam::Vec3;

use crate::GameConfig;

/// Errors from game actions. All are expected; the action becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Placed(VoxelRecord),
    Removed(VoxelRecord),
    /// Quick-build finished; carries how many cells were filled.
    Built(usize),
    Selected(BlockKind),
    ModeChanged(Mode),
    Quit,
    Nothing,
}

/// One player's session: the world, what they hold, and what they have selected.
///
/// Every world mutation made on the player's behalf goes through the Place and
/// Remove actions here, which keep the ledger and the world in step.
pub struct Game {
    world: VoxelWorld,
    ledger: InventoryLedger,
    selection: Selection,
    quick_build_reach: f32,
}

impl Game {
    /// Start a session on freshly generated terrain.
    ///
    /// The generated terrain is the starting state, so the event log is
    /// empty when the session begins.
    pub fn new(config: &GameConfig) -> Result<(Self, GenerationReport), TerrainError> {
        let mut world = VoxelWorld::new();
        let report = TerrainGenerator::new(config.terrain.clone())?.generate(&mut world);
        world.drain_events();
        let game = Self {
            world,
            ledger: config.inventory.clone(),
            selection: Selection::new(),
            quick_build_reach: config.quick_build_reach,
        };
        Ok((game, report))
    }

    /// Start a session on an empty world.
    pub fn empty(ledger: InventoryLedger) -> Self {
        Self::with_world(VoxelWorld::new(), ledger)
    }

    /// Start a session on an existing world.
    pub fn with_world(world: VoxelWorld, ledger: InventoryLedger) -> Self {
        Self {
            world,
            ledger,
            selection: Selection::new(),
            quick_build_reach: GameConfig::default().quick_build_reach,
        }
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drain world mutation events for the presentation layer.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        self.world.drain_events()
    }

    /// Place Action: consume one `kind`, then place it; refund if placement fails.
    pub fn place_block(
        &mut self,
        coord: VoxelCoord,
        kind: BlockKind,
    ) -> Result<VoxelRecord, ActionError> {
        self.ledger.try_consume(kind)?;
        match self.world.place(coord, kind) {
            Ok(record) => {
                tracing::debug!(%coord, %kind, left = self.ledger.count(kind), "block placed");
                Ok(record)
            }
            Err(e) => {
                self.ledger.credit(kind);
                Err(e.into())
            }
        }
    }

    /// Remove Action: remove the voxel, then credit its kind.
    pub fn remove_block(&mut self, coord: VoxelCoord) -> Result<VoxelRecord, ActionError> {
        let record = self.world.remove(coord)?;
        self.ledger.credit(record.kind);
        tracing::debug!(%coord, kind = %record.kind, "block removed");
        Ok(record)
    }

    /// Place the selected kind against `face` of an existing voxel.
    pub fn place_adjacent(
        &mut self,
        target: VoxelCoord,
        face: Face,
    ) -> Result<VoxelRecord, ActionError> {
        if !self.world.contains(target) {
            return Err(WorldError::NotFound(target).into());
        }
        let kind = self.selection.selected;
        self.place_block(VoxelWorld::neighbor_of(target, face)?, kind)
    }

    /// Lay a 3x3 platform of the selected kind centred `reach` units ahead.
    ///
    /// Each cell is its own Place Action. Occupied cells and cells past the
    /// edge of the grid are skipped; the platform stops early once the
    /// selected kind runs out.
    pub fn quick_build(&mut self, position: Vec3, forward: Vec3) -> usize {
        let centre = VoxelCoord::containing(position + forward * self.quick_build_reach);
        let kind = self.selection.selected;
        let mut placed = 0;

        'platform: for dx in -1..=1 {
            for dz in -1..=1 {
                let Some(at) = centre.checked_translate(dx, 0, dz) else {
                    continue;
                };
                match self.place_block(at, kind) {
                    Ok(_) => placed += 1,
                    Err(ActionError::Inventory(_)) => break 'platform,
                    Err(_) => {}
                }
            }
        }

        tracing::debug!(%centre, %kind, placed, "quick build");
        placed
    }

    /// Remove Action on the cell directly beneath `position`.
    pub fn dig_down(&mut self, position: Vec3) -> Result<VoxelRecord, ActionError> {
        self.remove_block(VoxelWorld::dig_target(position)?)
    }

    /// Apply an input-layer action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, ActionError> {
        let outcome = match action {
            Action::Place { target, face } => Outcome::Placed(self.place_adjacent(target, face)?),
            Action::Break { target } => Outcome::Removed(self.remove_block(target)?),
            Action::SelectSlot(slot) => Outcome::Selected(self.selection.select_slot(slot)?),
            Action::ToggleMode => Outcome::ModeChanged(self.selection.toggle_mode()),
            Action::QuickBuild { position, forward } => {
                Outcome::Built(self.quick_build(position, forward))
            }
            Action::DigDown { position } => Outcome::Removed(self.dig_down(position)?),
            Action::Quit => Outcome::Quit,
            Action::Noop => Outcome::Nothing,
        };
        Ok(outcome)
    }
}
