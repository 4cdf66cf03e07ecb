use blockyard_common::{Face, VoxelCoord};
use glam::Vec3;

/// A high-level action produced by any front end.
///
/// The game consumes actions, never raw input events, so a windowed client and
/// the terminal share the same world logic.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Place the selected block against `face` of the voxel at `target`.
    Place { target: VoxelCoord, face: Face },
    /// Break the voxel at `target`.
    Break { target: VoxelCoord },
    /// Select a hotbar slot (1-based).
    SelectSlot(u8),
    /// Flip between build and destroy mode.
    ToggleMode,
    /// Lay a 3x3 platform ahead of the actor.
    QuickBuild { position: Vec3, forward: Vec3 },
    /// Remove the voxel directly beneath the actor.
    DigDown { position: Vec3 },
    /// Leave the session.
    Quit,
    /// No-op (used for input that is recognised but not bound).
    Noop,
}

impl Action {
    /// Whether applying this action can change the world or the ledger.
    pub fn mutates_world(&self) -> bool {
        matches!(
            self,
            Self::Place { .. } | Self::Break { .. } | Self::QuickBuild { .. } | Self::DigDown { .. }
        )
    }
}
