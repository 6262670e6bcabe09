//! # Block Updates Module
//!
//! What happens around a voxel after it changed: column lighting, queued re-evaluation
//! of nearby blocks (fluid flow and similar simulation) and mesh invalidation of
//! neighbouring chunks.
//!
//! The dig path talks to these through [`UpdateDispatcher`] and only promises to call
//! it with the right coordinates, synchronously, in a fixed order. Scheduling policy
//! belongs to the implementation.

use std::collections::VecDeque;

use bitvec::vec::BitVec;
use cgmath::{Point3, Vector3};

use super::lighting::LightMap;
use super::voxels::chunk::{chunk_id, CHUNK_DIMENSION};
use super::voxels::voxel_grid::{self, VoxelGrid};

/// Offsets of the six face neighbours of a voxel.
const FACE_NEIGHBOURS: [Vector3<i32>; 6] = [
    Vector3::new(1, 0, 0),
    Vector3::new(-1, 0, 0),
    Vector3::new(0, 1, 0),
    Vector3::new(0, -1, 0),
    Vector3::new(0, 0, 1),
    Vector3::new(0, 0, -1),
];

/// Receives the follow-up work of a block change.
pub trait UpdateDispatcher {
    /// Recomputes vertical light propagation for column (x, z).
    fn update_lighting(&mut self, grid: &VoxelGrid, x: i32, z: i32);

    /// Queues a coordinate for later re-evaluation.
    fn add_update(&mut self, pos: Point3<i32>);

    /// Requests re-evaluation of the chunks adjacent to column (x, z).
    fn update_surroundings(&mut self, x: i32, z: i32);

    /// Requests re-evaluation of the blocks touching `pos`.
    fn update_nearby_blocks(&mut self, pos: Point3<i32>);

    /// Drains chunk ids whose meshes need rebuilding.
    fn take_dirty_chunks(&mut self) -> Vec<u32> {
        Vec::new()
    }

    /// Drains queued coordinates.
    fn take_pending_updates(&mut self) -> Vec<Point3<i32>> {
        Vec::new()
    }
}

/// The in-process dispatcher used by a local session.
///
/// - Queued coordinates are deduplicated with a bit per voxel; coordinates outside the
///   level are dropped since nothing there can change.
/// - Column lighting is delegated to a [`LightMap`].
/// - Chunk borders mark the neighbouring chunk columns dirty.
pub struct LocalUpdateDispatcher {
    size: Vector3<i32>,
    pub light_map: LightMap,
    pending: VecDeque<Point3<i32>>,
    queued: BitVec,
    dirty_chunks: Vec<u32>,
}

impl LocalUpdateDispatcher {
    /// Creates a dispatcher whose light map matches the grid's current contents.
    pub fn new(grid: &VoxelGrid) -> Self {
        let size = grid.size();
        let volume = (size.x * size.y * size.z) as usize;
        let queued: BitVec = BitVec::repeat(false, volume);

        Self {
            size,
            light_map: LightMap::from_grid(grid),
            pending: VecDeque::new(),
            queued,
            dirty_chunks: Vec::new(),
        }
    }

    fn linear_index(&self, pos: Point3<i32>) -> usize {
        (pos.y * self.size.z * self.size.x + pos.z * self.size.x + pos.x) as usize
    }

    /// Number of coordinates waiting for re-evaluation.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn mark_chunk_dirty(&mut self, x: i32, z: i32) {
        if !(0..self.size.x).contains(&x) || !(0..self.size.z).contains(&z) {
            return;
        }
        let id = chunk_id(x, z);
        if !self.dirty_chunks.contains(&id) {
            self.dirty_chunks.push(id);
        }
    }
}

impl UpdateDispatcher for LocalUpdateDispatcher {
    fn update_lighting(&mut self, grid: &VoxelGrid, x: i32, z: i32) {
        self.light_map.update_lighting(grid, x, z);
    }

    fn add_update(&mut self, pos: Point3<i32>) {
        if !voxel_grid::validate(pos, self.size) {
            return;
        }
        let idx = self.linear_index(pos);
        if !self.queued[idx] {
            self.queued.set(idx, true);
            self.pending.push_back(pos);
        }
    }

    fn update_surroundings(&mut self, x: i32, z: i32) {
        let local_x = x.rem_euclid(CHUNK_DIMENSION);
        let local_z = z.rem_euclid(CHUNK_DIMENSION);

        if local_x == 0 {
            self.mark_chunk_dirty(x - CHUNK_DIMENSION, z);
        } else if local_x == CHUNK_DIMENSION - 1 {
            self.mark_chunk_dirty(x + CHUNK_DIMENSION, z);
        }

        if local_z == 0 {
            self.mark_chunk_dirty(x, z - CHUNK_DIMENSION);
        } else if local_z == CHUNK_DIMENSION - 1 {
            self.mark_chunk_dirty(x, z + CHUNK_DIMENSION);
        }
    }

    fn update_nearby_blocks(&mut self, pos: Point3<i32>) {
        for offset in FACE_NEIGHBOURS {
            self.add_update(pos + offset);
        }
    }

    fn take_dirty_chunks(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.dirty_chunks)
    }

    fn take_pending_updates(&mut self) -> Vec<Point3<i32>> {
        let drained: Vec<_> = self.pending.drain(..).collect();
        for pos in drained.iter() {
            let idx = self.linear_index(*pos);
            self.queued.set(idx, false);
        }
        drained
    }
}
