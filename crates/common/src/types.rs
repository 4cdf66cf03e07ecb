use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer grid coordinate of a single voxel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The grid cell containing a continuous world position (each component floored).
    pub fn containing(position: Vec3) -> Self {
        let cell = position.floor();
        Self::new(cell.x as i32, cell.y as i32, cell.z as i32)
    }

    /// The coordinate shifted by `(dx, dy, dz)`, or `None` if it leaves the i32 grid.
    pub fn checked_translate(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// The coordinate one step away across the given face.
    ///
    /// `None` at the edge of the representable grid.
    pub fn offset(self, face: Face) -> Option<Self> {
        let n = face.normal();
        self.checked_translate(n.x, n.y, n.z)
    }
}

impl From<IVec3> for VoxelCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<VoxelCoord> for IVec3 {
    fn from(c: VoxelCoord) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Material of a voxel.
///
/// Declaration order is the hotbar order (slot 1 = grass .. slot 5 = gold), and
/// `Ord` follows it so ledgers iterate in the same order the HUD shows them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    #[default]
    Grass,
    Stone,
    Wood,
    Sand,
    Gold,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Grass,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Sand,
        BlockKind::Gold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Stone => "stone",
            Self::Wood => "wood",
            Self::Sand => "sand",
            Self::Gold => "gold",
        }
    }

    /// Hotbar slot (1-based).
    pub fn slot(self) -> u8 {
        match self {
            Self::Grass => 1,
            Self::Stone => 2,
            Self::Wood => 3,
            Self::Sand => 4,
            Self::Gold => 5,
        }
    }

    /// Kind bound to a 1-based hotbar slot, if any.
    pub fn from_slot(slot: u8) -> Option<Self> {
        let index = usize::from(slot).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a block kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block kind: {0:?}")]
pub struct ParseBlockKindError(pub String);

impl FromStr for BlockKind {
    type Err = ParseBlockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ParseBlockKindError(s.to_string()))
    }
}

/// One of the six axis-aligned faces of a voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Outward unit normal of this face.
    pub fn normal(self) -> IVec3 {
        match self {
            Self::PosX => IVec3::X,
            Self::NegX => IVec3::NEG_X,
            Self::PosY => IVec3::Y,
            Self::NegY => IVec3::NEG_Y,
            Self::PosZ => IVec3::Z,
            Self::NegZ => IVec3::NEG_Z,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Classify a hit normal reported by a picking ray.
    ///
    /// Returns `None` unless the normal rounds to exactly one unit axis.
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        if !normal.is_finite() {
            return None;
        }
        let rounded = normal.round().as_ivec3();
        Self::ALL.into_iter().find(|f| f.normal() == rounded)
    }
}

/// Error returned when a string does not name a face.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown face: {0:?} (expected +x, -x, up, down, +z or -z)")]
pub struct ParseFaceError(pub String);

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+x" | "east" => Ok(Self::PosX),
            "-x" | "west" => Ok(Self::NegX),
            "+y" | "up" | "top" => Ok(Self::PosY),
            "-y" | "down" | "bottom" => Ok(Self::NegY),
            "+z" | "south" => Ok(Self::PosZ),
            "-z" | "north" => Ok(Self::NegZ),
            _ => Err(ParseFaceError(s.to_string())),
        }
    }
}

/// A placed voxel: where it is and what it is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelRecord {
    pub coord: VoxelCoord,
    pub kind: BlockKind,
}

impl VoxelRecord {
    pub fn new(coord: VoxelCoord, kind: BlockKind) -> Self {
        Self { coord, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_floors_negative_positions() {
        let c = VoxelCoord::containing(Vec3::new(-0.5, 2.99, 3.0));
        assert_eq!(c, VoxelCoord::new(-1, 2, 3));
    }

    #[test]
    fn offset_follows_face_normal() {
        let c = VoxelCoord::new(4, 1, -2);
        assert_eq!(c.offset(Face::PosY), Some(VoxelCoord::new(4, 2, -2)));
        assert_eq!(c.offset(Face::NegX), Some(VoxelCoord::new(3, 1, -2)));
        assert_eq!(c.offset(Face::NegZ).and_then(|n| n.offset(Face::PosZ)), Some(c));
    }

    #[test]
    fn offset_stops_at_grid_edge() {
        let top = VoxelCoord::new(i32::MAX, 0, 0);
        assert_eq!(top.offset(Face::PosX), None);
        assert_eq!(top.offset(Face::NegX), Some(VoxelCoord::new(i32::MAX - 1, 0, 0)));
        let bottom = VoxelCoord::new(0, i32::MIN, 0);
        assert_eq!(bottom.offset(Face::NegY), None);
    }

    #[test]
    fn containing_saturates_huge_positions() {
        let c = VoxelCoord::containing(Vec3::new(3e9, -3e9, 0.5));
        assert_eq!(c, VoxelCoord::new(i32::MAX, i32::MIN, 0));
        assert_eq!(c.checked_translate(1, 0, 0), None);
        assert_eq!(c.checked_translate(0, 0, 1), Some(VoxelCoord::new(i32::MAX, i32::MIN, 1)));
    }

    #[test]
    fn ivec3_conversion_is_lossless() {
        let c = VoxelCoord::new(-7, 0, 12);
        let v: IVec3 = c.into();
        assert_eq!(VoxelCoord::from(v), c);
    }

    #[test]
    fn block_kind_slots_match_hotbar_order() {
        for (i, kind) in BlockKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.slot()), i + 1);
            assert_eq!(BlockKind::from_slot(kind.slot()), Some(*kind));
        }
        assert_eq!(BlockKind::from_slot(0), None);
        assert_eq!(BlockKind::from_slot(6), None);
    }

    #[test]
    fn block_kind_parses_case_insensitively() {
        assert_eq!("GOLD".parse::<BlockKind>(), Ok(BlockKind::Gold));
        assert_eq!(" wood ".parse::<BlockKind>(), Ok(BlockKind::Wood));
        assert!("dirt".parse::<BlockKind>().is_err());
    }

    #[test]
    fn face_from_normal_accepts_axis_vectors_only() {
        assert_eq!(Face::from_normal(Vec3::new(0.0, 1.0, 0.0)), Some(Face::PosY));
        assert_eq!(Face::from_normal(Vec3::new(-0.98, 0.01, 0.0)), Some(Face::NegX));
        assert_eq!(Face::from_normal(Vec3::new(0.7, 0.7, 0.0)), None);
        assert_eq!(Face::from_normal(Vec3::ZERO), None);
        assert_eq!(Face::from_normal(Vec3::NAN), None);
    }

    #[test]
    fn opposite_faces_cancel() {
        for face in Face::ALL {
            assert_eq!(face.normal() + face.opposite().normal(), IVec3::ZERO);
        }
    }

    #[test]
    fn face_parses_aliases() {
        assert_eq!("up".parse::<Face>(), Ok(Face::PosY));
        assert_eq!("-Z".parse::<Face>(), Ok(Face::NegZ));
        assert!("sideways".parse::<Face>().is_err());
    }
}
