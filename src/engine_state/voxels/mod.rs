//! # Voxels
//!
//! Storage of the level and the types it is made of.
//!
//! * **Block**: the closed set of block types and the one-byte storage cell
//! * **Chunk**: 16x16x16 regions, their metadata and the mesh objects built from them
//! * **VoxelGrid**: the dense block array and its indexing rules
//! * **World**: the grid together with the player, cooldown and change collaborators

pub mod block;
pub mod chunk;
pub mod voxel_grid;
pub mod world;
