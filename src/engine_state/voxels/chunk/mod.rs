//! # Chunk Module
//!
//! A chunk is a fixed 16x16x16 region of the level. It is the unit of coarse occupancy
//! tracking (`ChunkMeta`) and of mesh regeneration (`ChunkMesh`).
//!
//! ## Chunk ids
//!
//! Mesh objects are registered under a packed column id:
//!
//! ```text
//! id = (x / 16) << 16 | ((z / 16) & 0x00FF)
//! ```
//!
//! where `x` and `z` are voxel coordinates. The id ignores `y`, so one mesh object covers
//! a full column of chunks.

use cgmath::Point3;

use super::block::block_type::BlockType;
use super::world::World;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;

/// Per-chunk summary record.
///
/// `is_full` is only true while every voxel of the chunk is non-air. Removing a block
/// clears it; setting it back is the chunk builder's job.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkMeta {
    pub is_full: bool,
}

/// Packs the chunk column containing voxel `(x, z)` into a mesh registry id.
///
/// Both chunk coordinates are narrowed to 16 bits before packing, and only the low byte
/// of the z coordinate survives.
///
/// # Examples
/// ```
/// use voxel_interaction::engine_state::voxels::chunk::chunk_id;
///
/// assert_eq!(chunk_id(0, 0), 0);
/// assert_eq!(chunk_id(33, 17), (2 << 16) | 1);
/// ```
pub fn chunk_id(x: i32, z: i32) -> u32 {
    let chunk_x = (x / CHUNK_DIMENSION) as u16 as u32;
    let chunk_z = (z / CHUNK_DIMENSION) as u16 as u32;
    chunk_x << 16 | (chunk_z & 0x00FF)
}

/// Unpacks a chunk id into the voxel coordinates of its column origin.
pub fn chunk_origin(id: u32) -> (i32, i32) {
    let chunk_x = (id >> 16) as i32;
    let chunk_z = (id & 0x00FF) as i32;
    (chunk_x * CHUNK_DIMENSION, chunk_z * CHUNK_DIMENSION)
}

/// A regenerable render mesh for one chunk column.
///
/// Mesh construction itself lives outside this crate; the world only asks for a
/// rebuild after it changed a block the mesh covers.
pub trait ChunkMesh {
    /// Rebuilds the mesh from the current world contents.
    fn generate(&mut self, world: &World);
}

/// A lightweight mesh object that records rebuilds.
///
/// It stands in for the renderer's mesh when running headless and counts the solid
/// blocks in its column footprint so callers can observe what a rebuild would see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkMeshRecord {
    pub chunk_id: u32,
    /// Number of times `generate` ran.
    pub generation: u32,
    /// Non-air blocks inside the column at the last rebuild.
    pub solid_blocks: usize,
}

impl ChunkMeshRecord {
    pub fn new(chunk_id: u32) -> Self {
        Self {
            chunk_id,
            generation: 0,
            solid_blocks: 0,
        }
    }
}

impl ChunkMesh for ChunkMeshRecord {
    fn generate(&mut self, world: &World) {
        let (origin_x, origin_z) = chunk_origin(self.chunk_id);
        let size = world.grid.size();
        let mut solid_blocks = 0;

        for y in 0..size.y {
            for z in origin_z..origin_z + CHUNK_DIMENSION {
                for x in origin_x..origin_x + CHUNK_DIMENSION {
                    let pos = Point3::new(x, y, z);
                    if world.grid.validate(pos) && world.grid.get_block(pos) != BlockType::Air {
                        solid_blocks += 1;
                    }
                }
            }
        }

        self.solid_blocks = solid_blocks;
        self.generation += 1;
        log::trace!(
            "Rebuilt chunk column {:#x} ({} solid blocks)",
            self.chunk_id,
            solid_blocks
        );
    }
}
