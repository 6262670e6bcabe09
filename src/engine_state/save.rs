//! # Save Module
//!
//! Level persistence for the pause menu's "save" entry.
//!
//! ## Layout
//!
//! A save directory holds two files:
//! - `level.json`: a [`LevelHeader`] with the world extent and player state
//! - `level.dat`: the raw block cells, one byte per voxel in grid index order

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use super::voxels::block::Block;
use super::voxels::voxel_grid::VoxelGrid;
use super::voxels::world::World;

pub const HEADER_FILE: &str = "level.json";
pub const BLOCKS_FILE: &str = "level.dat";

/// Persists a world.
pub trait SaveSubsystem {
    fn save(&self, world: &World) -> anyhow::Result<()>;
}

/// Metadata written next to the block data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelHeader {
    pub world_size: [i32; 3],
    pub player_position: [f32; 3],
    /// Pitch then yaw, in degrees.
    pub player_rotation: [f32; 2],
    pub selector_idx: usize,
}

impl LevelHeader {
    pub fn from_world(world: &World) -> Self {
        let size = world.grid.size();
        let position = world.player.get_pos();
        let rotation = world.player.get_rot();

        Self {
            world_size: [size.x, size.y, size.z],
            player_position: [position.x, position.y, position.z],
            player_rotation: [rotation.x, rotation.y],
            selector_idx: world.player.selector_idx,
        }
    }
}

/// Writes levels into a directory on disk.
#[derive(Debug, Clone)]
pub struct FileSaveSubsystem {
    directory: PathBuf,
}

impl FileSaveSubsystem {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Reads a level previously written by [`SaveSubsystem::save`].
    pub fn load(&self) -> anyhow::Result<(LevelHeader, VoxelGrid)> {
        let header_path = self.directory.join(HEADER_FILE);
        let header_json = fs::read_to_string(&header_path)
            .with_context(|| format!("reading {}", header_path.display()))?;
        let header: LevelHeader = serde_json::from_str(&header_json)
            .with_context(|| format!("parsing {}", header_path.display()))?;

        let blocks_path = self.directory.join(BLOCKS_FILE);
        let bytes = fs::read(&blocks_path)
            .with_context(|| format!("reading {}", blocks_path.display()))?;

        let [x, y, z] = header.world_size;
        ensure!(
            [x, y, z].iter().all(|axis| *axis > 0 && axis % 16 == 0),
            "{} has an invalid world size {:?}",
            header_path.display(),
            header.world_size
        );
        ensure!(
            bytes.len() == (x * y * z) as usize,
            "{} holds {} blocks, expected {}",
            blocks_path.display(),
            bytes.len(),
            x * y * z
        );

        let blocks: Vec<Block> = bytemuck::cast_slice(bytes.as_slice()).to_vec();
        let grid = VoxelGrid::from_blocks(cgmath::Vector3::new(x, y, z), blocks);
        Ok((header, grid))
    }
}

impl SaveSubsystem for FileSaveSubsystem {
    fn save(&self, world: &World) -> anyhow::Result<()> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("creating {}", self.directory.display()))?;

        let header = LevelHeader::from_world(world);
        let header_path = self.directory.join(HEADER_FILE);
        let header_json = serde_json::to_string_pretty(&header)?;
        fs::write(&header_path, header_json)
            .with_context(|| format!("writing {}", header_path.display()))?;

        let blocks_path = self.directory.join(BLOCKS_FILE);
        fs::write(&blocks_path, world.grid.as_bytes())
            .with_context(|| format!("writing {}", blocks_path.display()))?;

        log::info!("Saved level to {}", self.directory.display());
        Ok(())
    }
}
