//! # Block Type Module
//!
//! This module defines the closed set of voxel types a level can contain. The numeric
//! values follow the classic block numbering, which is also what the save format and
//! the network protocol carry on the wire.

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::BlockTypeSize;

/// Enumerates all block types in the voxel world.
///
/// The `FromPrimitive` derive allows conversion from the wire/storage integer through
/// [`BlockType::from_id`]. Gaps in the numbering (the still fluid variants) are not
/// part of this set.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum BlockType {
    /// Empty space.
    Air = 0,
    Stone = 1,
    Grass = 2,
    Dirt = 3,
    Cobblestone = 4,
    Wood = 5,
    Sapling = 6,
    /// The unbreakable floor of the level.
    Bedrock = 7,
    Water = 8,
    Lava = 10,
    Sand = 12,
    Gravel = 13,
    GoldOre = 14,
    IronOre = 15,
    CoalOre = 16,
    Logs = 17,
    Leaves = 18,
    /// Absorbs nearby water; removing one lets fluids flow back in.
    Sponge = 19,
    Glass = 20,
    Red = 21,
    Orange = 22,
    Yellow = 23,
    Lime = 24,
    Green = 25,
    Teal = 26,
    Aqua = 27,
    Cyan = 28,
    Blue = 29,
    Indigo = 30,
    Violet = 31,
    Magenta = 32,
    Pink = 33,
    Black = 34,
    Gray = 35,
    White = 36,
    Flower1 = 37,
    Flower2 = 38,
    Mushroom1 = 39,
    Mushroom2 = 40,
    Gold = 41,
    Iron = 42,
    DoubleSlab = 43,
    Slab = 44,
    Brick = 45,
    Tnt = 46,
    Bookshelf = 47,
    MossyRocks = 48,
    Obsidian = 49,
}

impl BlockType {
    /// Converts a stored or received id into a `BlockType`.
    ///
    /// Returns `None` for ids outside the closed set.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// The numeric id carried by saves and network packets.
    #[inline]
    pub const fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Blocks a dig ray passes straight through.
    ///
    /// Air and fluids cannot be targeted, and bedrock is never breakable.
    #[inline]
    pub const fn is_pass_through(self) -> bool {
        matches!(
            self,
            BlockType::Air | BlockType::Bedrock | BlockType::Water | BlockType::Lava
        )
    }

    /// Whether skylight continues down through this block.
    #[inline]
    pub const fn transmits_light(self) -> bool {
        matches!(
            self,
            BlockType::Air
                | BlockType::Glass
                | BlockType::Leaves
                | BlockType::Sapling
                | BlockType::Flower1
                | BlockType::Flower2
                | BlockType::Mushroom1
                | BlockType::Mushroom2
        )
    }

    /// Picks a random placeable solid block, used to sprinkle ores into demo levels.
    pub fn get_random_ore(rng: &mut fastrand::Rng) -> Self {
        match rng.u8(0..3) {
            0 => BlockType::CoalOre,
            1 => BlockType::IronOre,
            _ => BlockType::GoldOre,
        }
    }
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::Air
    }
}
