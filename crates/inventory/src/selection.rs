use blockyard_common::BlockKind;
use serde::{Deserialize, Serialize};

/// Interaction mode shown on the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Build,
    Destroy,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Build => Self::Destroy,
            Self::Destroy => Self::Build,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Build => "BUILD",
            Self::Destroy => "DESTROY",
        }
    }
}

/// Errors from selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("hotbar slot {0} does not exist (expected 1-5)")]
    InvalidSlot(u8),
}

/// Selected block kind and interaction mode. Changed only by explicit input.
///
/// Defaults to grass in build mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected: BlockKind,
    pub mode: Mode,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, kind: BlockKind) {
        self.selected = kind;
    }

    /// Select by 1-based hotbar slot. An invalid slot leaves the selection unchanged.
    pub fn select_slot(&mut self, slot: u8) -> Result<BlockKind, SelectionError> {
        let kind = BlockKind::from_slot(slot).ok_or(SelectionError::InvalidSlot(slot))?;
        self.selected = kind;
        Ok(kind)
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggle();
        self.mode
    }
}
