//! # Voxel Grid Module
//!
//! Dense storage for a fixed-size level: a flat row-major array of blocks and a parallel
//! array of per-chunk metadata.
//!
//! ## Indexing
//!
//! Blocks are linearized as `y * size.z * size.x + z * size.x + x`. Chunk metadata uses
//! the same pattern after dividing every axis (coordinate and extent) by 16, so the
//! two arrays always agree on which chunk a voxel belongs to.

use cgmath::{Point3, Vector3};

use super::block::{block_type::BlockType, Block};
use super::chunk::{ChunkMeta, CHUNK_DIMENSION};

/// A fixed-extent voxel level.
///
/// The extent is set at construction and never changes. Every axis must be a positive
/// multiple of [`CHUNK_DIMENSION`].
#[derive(Debug)]
pub struct VoxelGrid {
    size: Vector3<i32>,
    blocks: Vec<Block>,
    chunks_meta: Vec<ChunkMeta>,
}

impl VoxelGrid {
    /// Creates a level of the given extent filled with air.
    ///
    /// # Panics
    /// Panics if any axis is not a positive multiple of 16.
    pub fn new(size: Vector3<i32>) -> Self {
        assert!(
            [size.x, size.y, size.z]
                .iter()
                .all(|axis| *axis > 0 && axis % CHUNK_DIMENSION == 0),
            "world size {:?} must be positive multiples of {}",
            size,
            CHUNK_DIMENSION
        );

        let volume = (size.x * size.y * size.z) as usize;
        let chunk_count = ((size.x / CHUNK_DIMENSION)
            * (size.y / CHUNK_DIMENSION)
            * (size.z / CHUNK_DIMENSION)) as usize;

        Self {
            size,
            blocks: vec![Block::AIR; volume],
            chunks_meta: vec![ChunkMeta::default(); chunk_count],
        }
    }

    /// Creates a level from raw block cells, e.g. a loaded level file.
    ///
    /// Chunk metadata is computed from the contents.
    ///
    /// # Panics
    /// Panics if the extent is invalid or `blocks` does not hold exactly one cell per voxel.
    pub fn from_blocks(size: Vector3<i32>, blocks: Vec<Block>) -> Self {
        let mut grid = Self::new(size);
        assert_eq!(
            blocks.len(),
            grid.blocks.len(),
            "block data does not match world size {:?}",
            size
        );
        grid.blocks = blocks;
        grid.recompute_chunk_meta();
        grid
    }

    /// The level extent.
    pub fn size(&self) -> Vector3<i32> {
        self.size
    }

    /// True iff `pos` lies inside the level on every axis.
    #[inline]
    pub fn validate(&self, pos: Point3<i32>) -> bool {
        validate(pos, self.size)
    }

    /// Linear index of an in-bounds voxel.
    ///
    /// Callers must `validate` first; the result for out-of-range coordinates is
    /// meaningless.
    #[inline]
    pub fn index(&self, pos: Point3<i32>) -> usize {
        (pos.y * self.size.z * self.size.x + pos.z * self.size.x + pos.x) as usize
    }

    /// Linear index of the chunk metadata entry owning an in-bounds voxel.
    #[inline]
    pub fn chunk_meta_index(&self, pos: Point3<i32>) -> usize {
        let chunks_x = self.size.x / CHUNK_DIMENSION;
        let chunks_z = self.size.z / CHUNK_DIMENSION;
        ((pos.y / CHUNK_DIMENSION) * chunks_z * chunks_x
            + (pos.z / CHUNK_DIMENSION) * chunks_x
            + pos.x / CHUNK_DIMENSION) as usize
    }

    /// The block at an in-bounds voxel.
    ///
    /// # Panics
    /// Panics if `pos` is outside the level.
    pub fn get_block(&self, pos: Point3<i32>) -> BlockType {
        self.blocks[self.index(pos)].get_type()
    }

    /// Overwrites the block at an in-bounds voxel.
    ///
    /// Chunk metadata is left untouched; the caller decides how occupancy changes.
    ///
    /// # Panics
    /// Panics if `pos` is outside the level.
    pub fn set_block(&mut self, pos: Point3<i32>, block_type: BlockType) {
        let idx = self.index(pos);
        self.blocks[idx] = Block::new(block_type);
    }

    /// Metadata of the chunk owning `pos`.
    pub fn chunk_meta(&self, pos: Point3<i32>) -> &ChunkMeta {
        &self.chunks_meta[self.chunk_meta_index(pos)]
    }

    /// Mutable metadata of the chunk owning `pos`.
    pub fn chunk_meta_mut(&mut self, pos: Point3<i32>) -> &mut ChunkMeta {
        let idx = self.chunk_meta_index(pos);
        &mut self.chunks_meta[idx]
    }

    /// All chunk metadata entries in linear order.
    pub fn chunks_meta(&self) -> &[ChunkMeta] {
        &self.chunks_meta
    }

    /// Fills the horizontal layers `y_start..y_end` with one block type.
    pub fn fill_layers(&mut self, y_start: i32, y_end: i32, block_type: BlockType) {
        for y in y_start.max(0)..y_end.min(self.size.y) {
            for z in 0..self.size.z {
                for x in 0..self.size.x {
                    self.set_block(Point3::new(x, y, z), block_type);
                }
            }
        }
    }

    /// Rebuilds every chunk's `is_full` flag from the block contents.
    pub fn recompute_chunk_meta(&mut self) {
        for meta in self.chunks_meta.iter_mut() {
            meta.is_full = true;
        }
        for y in 0..self.size.y {
            for z in 0..self.size.z {
                for x in 0..self.size.x {
                    let pos = Point3::new(x, y, z);
                    if self.blocks[self.index(pos)] == Block::AIR {
                        let idx = self.chunk_meta_index(pos);
                        self.chunks_meta[idx].is_full = false;
                    }
                }
            }
        }
    }

    /// The raw block cells, in index order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The raw block cells viewed as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.blocks.as_slice())
    }
}

/// True iff `0 <= pos < size` on every axis.
#[inline]
pub fn validate(pos: Point3<i32>, size: Vector3<i32>) -> bool {
    (0..size.x).contains(&pos.x) && (0..size.y).contains(&pos.y) && (0..size.z).contains(&pos.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> VoxelGrid {
        VoxelGrid::new(Vector3::new(32, 16, 48))
    }

    #[test]
    fn validate_rejects_each_axis_boundary() {
        let grid = grid();
        assert!(grid.validate(Point3::new(0, 0, 0)));
        assert!(grid.validate(Point3::new(31, 15, 47)));
        assert!(!grid.validate(Point3::new(32, 0, 0)));
        assert!(!grid.validate(Point3::new(0, 16, 0)));
        assert!(!grid.validate(Point3::new(0, 0, 48)));
        assert!(!grid.validate(Point3::new(-1, 0, 0)));
    }

    #[test]
    fn index_is_row_major_y_then_z_then_x() {
        let grid = grid();
        assert_eq!(grid.index(Point3::new(1, 0, 0)), 1);
        assert_eq!(grid.index(Point3::new(0, 0, 1)), 32);
        assert_eq!(grid.index(Point3::new(0, 1, 0)), 32 * 48);
        assert_eq!(grid.index(Point3::new(31, 15, 47)), 32 * 16 * 48 - 1);
    }

    #[test]
    fn chunk_meta_index_uses_the_same_pattern_at_chunk_scale() {
        let grid = grid();
        // 2 chunks along x, 1 along y, 3 along z
        assert_eq!(grid.chunk_meta_index(Point3::new(15, 15, 15)), 0);
        assert_eq!(grid.chunk_meta_index(Point3::new(16, 0, 0)), 1);
        assert_eq!(grid.chunk_meta_index(Point3::new(0, 0, 16)), 2);
        assert_eq!(grid.chunk_meta_index(Point3::new(31, 0, 47)), 5);
        assert_eq!(grid.chunks_meta().len(), 6);
    }

    #[test]
    fn recompute_marks_only_solid_chunks_full() {
        let mut grid = VoxelGrid::new(Vector3::new(16, 32, 16));
        grid.fill_layers(0, 16, BlockType::Stone);
        grid.recompute_chunk_meta();

        assert!(grid.chunk_meta(Point3::new(0, 0, 0)).is_full);
        assert!(!grid.chunk_meta(Point3::new(0, 16, 0)).is_full);
    }

    #[test]
    fn from_blocks_round_trips_bytes() {
        let mut source = VoxelGrid::new(Vector3::new(16, 16, 16));
        source.set_block(Point3::new(3, 4, 5), BlockType::Sponge);

        let copy = VoxelGrid::from_blocks(source.size(), source.blocks().to_vec());
        assert_eq!(copy.get_block(Point3::new(3, 4, 5)), BlockType::Sponge);
        assert_eq!(copy.as_bytes().len(), 16 * 16 * 16);
    }

    #[test]
    #[should_panic]
    fn sizes_must_be_chunk_multiples() {
        VoxelGrid::new(Vector3::new(20, 16, 16));
    }
}
