//! # Block Module
//!
//! Block type definitions and the compact storage cell the voxel grid is made of.

use block_type::BlockType;

pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is used for efficient storage and serialization of block data.
pub type BlockTypeSize = u8;

/// Represents a single voxel cell in the level.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute and the `Pod` derive let the whole grid be viewed as raw
/// bytes, which is what the level file stores.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// An air cell.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Decodes the stored id.
    ///
    /// Cells are only ever written through [`Block::new`], so an unknown id means the
    /// level data was corrupted after loading; it is read as air.
    pub fn get_type(&self) -> BlockType {
        BlockType::from_id(self.block_type).unwrap_or(BlockType::Air)
    }
}

impl From<BlockType> for Block {
    fn from(block_type: BlockType) -> Self {
        Block::new(block_type)
    }
}
