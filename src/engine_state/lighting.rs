//! # Lighting Module
//!
//! Column skylight. Each (x, z) column stores the height of its highest light-blocking
//! block; everything above it is lit, everything at or below it is in shadow.

use cgmath::{Point3, Vector3};

use super::voxels::voxel_grid::VoxelGrid;

/// Height value of a column with nothing blocking the sky.
pub const OPEN_SKY: i32 = -1;

/// Per-column skylight heights for a fixed-size level.
#[derive(Debug, Clone)]
pub struct LightMap {
    size: Vector3<i32>,
    heights: Vec<i32>,
}

impl LightMap {
    /// Creates a light map with every column open to the sky.
    pub fn new(size: Vector3<i32>) -> Self {
        Self {
            size,
            heights: vec![OPEN_SKY; (size.x * size.z) as usize],
        }
    }

    /// Builds a light map for the current grid contents.
    pub fn from_grid(grid: &VoxelGrid) -> Self {
        let size = grid.size();
        let mut light_map = Self::new(size);
        for z in 0..size.z {
            for x in 0..size.x {
                light_map.update_lighting(grid, x, z);
            }
        }
        light_map
    }

    fn column_index(&self, x: i32, z: i32) -> Option<usize> {
        if (0..self.size.x).contains(&x) && (0..self.size.z).contains(&z) {
            Some((z * self.size.x + x) as usize)
        } else {
            None
        }
    }

    /// Recomputes the skylight height of one column.
    ///
    /// Safe to call any number of times; columns outside the level are ignored.
    pub fn update_lighting(&mut self, grid: &VoxelGrid, x: i32, z: i32) {
        let Some(idx) = self.column_index(x, z) else {
            return;
        };

        self.heights[idx] = (0..grid.size().y)
            .rev()
            .find(|y| !grid.get_block(Point3::new(x, *y, z)).transmits_light())
            .unwrap_or(OPEN_SKY);
    }

    /// Height of the highest light-blocking block in a column.
    pub fn column_height(&self, x: i32, z: i32) -> Option<i32> {
        self.column_index(x, z).map(|idx| self.heights[idx])
    }

    /// Whether skylight reaches `pos`.
    pub fn is_lit(&self, pos: Point3<i32>) -> bool {
        self.column_height(pos.x, pos.z)
            .map_or(true, |height| pos.y > height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;

    fn grid() -> VoxelGrid {
        let mut grid = VoxelGrid::new(Vector3::new(16, 16, 16));
        grid.fill_layers(0, 4, BlockType::Stone);
        grid
    }

    #[test]
    fn column_height_is_the_top_opaque_block() {
        let grid = grid();
        let light_map = LightMap::from_grid(&grid);
        assert_eq!(light_map.column_height(3, 3), Some(3));
        assert!(light_map.is_lit(Point3::new(3, 4, 3)));
        assert!(!light_map.is_lit(Point3::new(3, 3, 3)));
    }

    #[test]
    fn glass_and_leaves_let_light_through() {
        let mut grid = grid();
        grid.set_block(Point3::new(2, 10, 2), BlockType::Glass);
        grid.set_block(Point3::new(2, 9, 2), BlockType::Leaves);

        let light_map = LightMap::from_grid(&grid);
        assert_eq!(light_map.column_height(2, 2), Some(3));
    }

    #[test]
    fn update_is_idempotent_and_tracks_removal() {
        let mut grid = grid();
        let mut light_map = LightMap::from_grid(&grid);

        for y in 0..4 {
            grid.set_block(Point3::new(5, y, 5), BlockType::Air);
        }
        light_map.update_lighting(&grid, 5, 5);
        light_map.update_lighting(&grid, 5, 5);

        assert_eq!(light_map.column_height(5, 5), Some(OPEN_SKY));
        assert!(light_map.is_lit(Point3::new(5, 0, 5)));
    }

    #[test]
    fn out_of_range_columns_are_ignored() {
        let grid = grid();
        let mut light_map = LightMap::from_grid(&grid);
        light_map.update_lighting(&grid, -1, 40);
        assert_eq!(light_map.column_height(-1, 40), None);
    }
}
