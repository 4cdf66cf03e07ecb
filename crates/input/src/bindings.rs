use blockyard_common::{Face, VoxelCoord};
use glam::Vec3;

use crate::Action;

/// Pointer buttons the world reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// Left mouse button: place on the hovered face.
    Primary,
    /// Right mouse button: break the hovered voxel.
    Secondary,
}

/// Where the actor stands and which way it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::new(12.0, 3.0, 12.0),
            forward: Vec3::NEG_Z,
        }
    }
}

/// Map a pointer press over a hovered voxel to an action.
///
/// Placement and removal are bound to the buttons regardless of mode; the mode
/// is only shown on the HUD. A hit normal that is not axis aligned yields `Noop`.
pub fn map_pointer(button: Pointer, hovered: VoxelCoord, hit_normal: Vec3) -> Action {
    match button {
        Pointer::Primary => match Face::from_normal(hit_normal) {
            Some(face) => Action::Place {
                target: hovered,
                face,
            },
            None => {
                tracing::debug!(?hit_normal, "hit normal is not axis aligned");
                Action::Noop
            }
        },
        Pointer::Secondary => Action::Break { target: hovered },
    }
}

/// Map a key name to an action. Unbound keys return `None`.
pub fn map_key(key: &str, pose: &Pose) -> Option<Action> {
    let action = match key {
        "1" | "2" | "3" | "4" | "5" => Action::SelectSlot(key.parse().ok()?),
        "tab" => Action::ToggleMode,
        "e" => Action::QuickBuild {
            position: pose.position,
            forward: pose.forward,
        },
        "q" => Action::DigDown {
            position: pose.position,
        },
        "escape" => Action::Quit,
        // Fly and help toggles belong to the presentation layer.
        "f" | "h" => Action::Noop,
        _ => return None,
    };
    Some(action)
}
