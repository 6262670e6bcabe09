//! # World Module
//!
//! This module provides the `World` struct, the long-lived state a dig mutates: the
//! voxel grid, the chunk mesh registry, the break cooldown, the local player and the
//! collaborators that react to block changes.
//!
//! ## Ownership
//!
//! - The grid and player are owned outright.
//! - Chunk mesh objects are shared with whatever built them (usually the renderer), so
//!   the registry stores `StResource` handles.
//! - Collaborators are boxed trait objects so a session can swap in its own particle
//!   system, update dispatcher or network client.
//!
//! ## Cooldown
//!
//! `break_icd` holds [`BREAK_READY`] while digging is allowed. An accepted dig arms it
//! with a positive value, and [`World::tick`] counts it down until it drops below zero.

use std::collections::HashMap;

use web_time::Duration;

use super::chunk::{ChunkMesh, ChunkMeshRecord};
use super::voxel_grid::VoxelGrid;
use crate::core::StResource;
use crate::engine_state::block_updates::{LocalUpdateDispatcher, UpdateDispatcher};
use crate::engine_state::network::NetworkClient;
use crate::engine_state::particles::{BreakParticles, ParticleSystem};
use crate::engine_state::player::Player;

/// `break_icd` value of a world that accepts dig triggers.
pub const BREAK_READY: f32 = -1.0;

/// A shared, regenerable chunk mesh object.
pub type ChunkMeshHandle = StResource<Box<dyn ChunkMesh>>;

/// The interactive level.
pub struct World {
    /// Blocks and chunk metadata.
    pub grid: VoxelGrid,
    /// Mesh objects by chunk id, see [`super::chunk::chunk_id`].
    pub chunks: HashMap<u32, ChunkMeshHandle>,
    /// Break cooldown in seconds, [`BREAK_READY`] when ready.
    pub break_icd: f32,
    pub player: Player,
    /// Present only in multiplayer sessions.
    pub client: Option<Box<dyn NetworkClient>>,
    pub particles: Box<dyn ParticleSystem>,
    pub updates: Box<dyn UpdateDispatcher>,
}

impl World {
    /// Creates a single-player world with the default collaborators.
    pub fn new(grid: VoxelGrid, player: Player) -> Self {
        let updates = LocalUpdateDispatcher::new(&grid);
        World {
            grid,
            chunks: HashMap::new(),
            break_icd: BREAK_READY,
            player,
            client: None,
            particles: Box::new(BreakParticles::new()),
            updates: Box::new(updates),
        }
    }

    /// Turns the world into a multiplayer world replicating through `client`.
    pub fn with_client(mut self, client: Box<dyn NetworkClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_particles(mut self, particles: Box<dyn ParticleSystem>) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_updates(mut self, updates: Box<dyn UpdateDispatcher>) -> Self {
        self.updates = updates;
        self
    }

    /// Whether the world is in multiplayer mode.
    pub fn is_multiplayer(&self) -> bool {
        self.client.is_some()
    }

    /// Whether a dig trigger would be accepted right now.
    pub fn is_ready(&self) -> bool {
        self.break_icd < 0.0
    }

    /// Tracks a mesh object under `chunk_id`, replacing any previous one.
    pub fn register_chunk_mesh(&mut self, chunk_id: u32, mesh: ChunkMeshHandle) {
        self.chunks.insert(chunk_id, mesh);
    }

    /// Registers a [`ChunkMeshRecord`] for every chunk column of the grid.
    pub fn register_mesh_records(&mut self) {
        let size = self.grid.size();
        for x in (0..size.x).step_by(16) {
            for z in (0..size.z).step_by(16) {
                let id = super::chunk::chunk_id(x, z);
                let mesh: Box<dyn ChunkMesh> = Box::new(ChunkMeshRecord::new(id));
                self.register_chunk_mesh(id, StResource::new(mesh));
            }
        }
    }

    /// Advances time-driven state by `dt`.
    ///
    /// Counts the break cooldown down and ages particle bursts. Once the cooldown falls
    /// below zero it is reset to [`BREAK_READY`].
    pub fn tick(&mut self, dt: Duration) {
        let seconds = dt.as_secs_f32();
        if self.break_icd >= 0.0 {
            self.break_icd -= seconds;
            if self.break_icd < 0.0 {
                self.break_icd = BREAK_READY;
            }
        }
        self.particles.tick(seconds);
    }

    /// Rebuilds the mesh registered under `chunk_id`, if any.
    ///
    /// # Returns
    /// `true` when a mesh was registered and regenerated.
    pub fn regenerate_chunk(&mut self, chunk_id: u32) -> bool {
        let Some(mesh) = self.chunks.get(&chunk_id).cloned() else {
            return false;
        };
        mesh.get_mut().generate(self);
        true
    }

    /// Rebuilds every mesh the update dispatcher marked dirty.
    ///
    /// # Returns
    /// The number of meshes regenerated.
    pub fn regenerate_dirty_meshes(&mut self) -> usize {
        let dirty = self.updates.take_dirty_chunks();
        dirty
            .into_iter()
            .filter(|id| self.regenerate_chunk(*id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::chunk::chunk_id;
    use cgmath::{Point3, Vector3};

    fn world() -> World {
        World::new(
            VoxelGrid::new(Vector3::new(32, 16, 32)),
            Player::new(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0),
        )
    }

    #[test]
    fn cooldown_counts_down_to_ready() {
        let mut world = world();
        assert!(world.is_ready());

        world.break_icd = 0.2;
        world.tick(Duration::from_millis(150));
        assert!(!world.is_ready());
        world.tick(Duration::from_millis(100));
        assert!(world.is_ready());
        assert_eq!(world.break_icd, BREAK_READY);

        // staying ready does not drift further below zero
        world.tick(Duration::from_secs(5));
        assert_eq!(world.break_icd, BREAK_READY);
    }

    #[test]
    fn regenerate_only_touches_registered_meshes() {
        let mut world = world();
        let id = chunk_id(16, 0);
        let boxed: Box<dyn ChunkMesh> = Box::new(ChunkMeshRecord::new(id));
        let mesh: ChunkMeshHandle = StResource::new(boxed);
        world.register_chunk_mesh(id, mesh.clone());

        assert!(world.regenerate_chunk(id));
        assert!(!world.regenerate_chunk(chunk_id(0, 16)));
        assert_eq!(mesh.handle_count(), 2);
    }

    #[test]
    fn mesh_records_cover_every_column() {
        let mut world = world();
        world.register_mesh_records();
        assert_eq!(world.chunks.len(), 4);
        assert!(world.chunks.contains_key(&chunk_id(16, 16)));
    }
}
