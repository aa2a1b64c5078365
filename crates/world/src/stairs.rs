//! Wooden stairs: directional placement, collision shape, and the legacy
//! variant encoding shared with the save format and remote clients.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use voxelforge_physics::Aabb;

use crate::facing::{Face, Facing};
use crate::properties::BlockProperties;

/// Wood species a stair block can be crafted from.
///
/// The set is closed: every encoding table matches on it exhaustively, so
/// an invalid material can never reach the codec at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodKind {
    /// Oak planks.
    Oak,
    /// Spruce planks.
    Spruce,
    /// Birch planks.
    Birch,
    /// Jungle planks.
    Jungle,
    /// Acacia planks.
    Acacia,
    /// Dark oak planks.
    DarkOak,
}

impl WoodKind {
    /// Every species, in declared order.
    pub const ALL: [WoodKind; 6] = [
        WoodKind::Oak,
        WoodKind::Spruce,
        WoodKind::Birch,
        WoodKind::Jungle,
        WoodKind::Acacia,
        WoodKind::DarkOak,
    ];

    /// Legacy numeric id of this species' stair family.
    ///
    /// Part of the externally defined numbering convention (mirrored in
    /// `config/stairs.json`); changing a value breaks existing saves.
    pub fn stairs_legacy_id(self) -> u16 {
        match self {
            WoodKind::Oak => 53,
            WoodKind::Spruce => 134,
            WoodKind::Birch => 135,
            WoodKind::Jungle => 136,
            WoodKind::Acacia => 163,
            WoodKind::DarkOak => 164,
        }
    }

    /// Stable block name of this species' stair variant.
    pub fn stairs_name(self) -> &'static str {
        match self {
            WoodKind::Oak => "oak_stairs",
            WoodKind::Spruce => "spruce_stairs",
            WoodKind::Birch => "birch_stairs",
            WoodKind::Jungle => "jungle_stairs",
            WoodKind::Acacia => "acacia_stairs",
            WoodKind::DarkOak => "dark_oak_stairs",
        }
    }
}

/// Context for a single placement action.
///
/// Built by the interaction pipeline after the "can place here" check has
/// already passed; click position components are expected to be clamped to
/// [0, 1] by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementContext {
    /// Face of the adjacent block that was clicked.
    pub face: Face,
    /// Fractional click position within that face.
    pub click_pos: Vec3,
    /// Horizontal direction the placer is looking.
    pub placer_facing: Facing,
}

/// Named block state properties carried in the save/network payload.
///
/// Field names serialize verbatim and are read by independently maintained
/// clients; they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StairProperties {
    /// True when the solid half is the top of the block.
    pub upside_down_bit: bool,
    /// Legacy direction code: North 3, South 2, West 1, East 0.
    pub weirdo_direction: i32,
}

/// Persisted/network representation of one stair state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedVariant {
    /// Legacy id of the material family.
    pub legacy_id: u16,
    /// Named state properties.
    pub properties: StairProperties,
}

/// A placed wooden stair block.
///
/// Immutable once constructed: reorienting a stair means replacing it with
/// a new value. The (wood, facing, upside_down) tuple fully determines both
/// the collision shape and the encoded variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WoodStairs {
    /// Wood species (affects encoding, not geometry).
    pub wood: WoodKind,
    /// Direction the full side of the stairs is facing.
    pub facing: Facing,
    /// Whether the solid half is at the top of the block.
    pub upside_down: bool,
}

impl WoodStairs {
    /// Resolve the orientation for a placement action.
    ///
    /// The stair faces the direction the placer is looking, never the
    /// clicked face. It ends up upside down when the bottom face was
    /// clicked, or when the click landed in the upper half of a side face.
    pub fn place(wood: WoodKind, ctx: &PlacementContext) -> Self {
        let upside_down =
            ctx.face == Face::Down || (ctx.click_pos.y > 0.5 && ctx.face != Face::Up);
        Self {
            wood,
            facing: ctx.placer_facing,
            upside_down,
        }
    }

    /// Collision shape in block-local unit-cube coordinates.
    ///
    /// Always two boxes: a full-footprint half slab plus a half-footprint
    /// riser whose side of the cube is fixed by the facing. Exactly one of
    /// the two sits in the upper half of the cube; `upside_down` swaps
    /// which.
    ///
    /// Corner shapes formed where two stairs meet at an angle are not
    /// modeled; both boxes always describe the straight run.
    pub fn collision_volumes(&self) -> [Aabb; 2] {
        let (base_y, riser_y) = if self.upside_down { (0.5, 0.0) } else { (0.0, 0.5) };
        let base = Aabb::new(
            Vec3::new(0.0, base_y, 0.0),
            Vec3::new(1.0, base_y + 0.5, 1.0),
        );
        let (min_x, max_x, min_z, max_z) = match self.facing {
            Facing::North => (0.0, 1.0, 0.5, 1.0),
            Facing::South => (0.0, 1.0, 0.0, 0.5),
            Facing::West => (0.0, 0.5, 0.0, 1.0),
            Facing::East => (0.5, 1.0, 0.0, 1.0),
        };
        let riser = Aabb::new(
            Vec3::new(min_x, riser_y, min_z),
            Vec3::new(max_x, riser_y + 0.5, max_z),
        );
        [base, riser]
    }

    /// Encode this state for the save format and network payloads.
    pub fn encode(&self) -> EncodedVariant {
        EncodedVariant {
            legacy_id: self.wood.stairs_legacy_id(),
            properties: StairProperties {
                upside_down_bit: self.upside_down,
                weirdo_direction: stairs_direction(self.facing),
            },
        }
    }

    /// Stable block name of this stair's material family.
    pub fn block_name(&self) -> &'static str {
        self.wood.stairs_name()
    }

    /// Item form of this stair: the family's legacy id with zero metadata.
    pub fn encode_item(&self) -> (u16, i16) {
        (self.wood.stairs_legacy_id(), 0)
    }

    /// Breaking behavior (hardness 2, axes are effective).
    pub fn break_info(&self) -> BlockProperties {
        BlockProperties::wood_stairs()
    }

    /// Stairs never diffuse light.
    pub fn light_diffusion(&self) -> u8 {
        0
    }
}

/// Converts a facing to the legacy stair direction code.
fn stairs_direction(facing: Facing) -> i32 {
    3 - (i32::from(facing.ordinal()) - 2)
}
