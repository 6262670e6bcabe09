//! # Player Module
//!
//! The local player: where it stands, where it looks, what it holds and which UI mode
//! it is in.

use cgmath::{Point3, Vector2};

use super::voxels::block::block_type::BlockType;

/// Number of quick slots on the hotbar.
pub const QUICK_SLOT_COUNT: usize = 9;
/// Columns of the inventory grid.
pub const INVENTORY_COLUMNS: usize = 9;
/// Rows of the inventory grid (the last row is only partly populated).
pub const INVENTORY_ROWS: usize = 5;
/// Populated inventory slots, indices `0..INVENTORY_SLOT_COUNT`.
pub const INVENTORY_SLOT_COUNT: usize = 42;
/// Entries of the pause menu: resume, save, quit.
pub const PAUSE_MENU_ENTRIES: usize = 3;

/// Every block a player can pick from the inventory screen, in display order.
pub const DEFAULT_INVENTORY: [BlockType; INVENTORY_SLOT_COUNT] = [
    BlockType::Stone,
    BlockType::Cobblestone,
    BlockType::Brick,
    BlockType::Dirt,
    BlockType::Wood,
    BlockType::Logs,
    BlockType::Leaves,
    BlockType::Glass,
    BlockType::Slab,
    BlockType::MossyRocks,
    BlockType::Sapling,
    BlockType::Flower1,
    BlockType::Flower2,
    BlockType::Mushroom1,
    BlockType::Mushroom2,
    BlockType::Sand,
    BlockType::Gravel,
    BlockType::Sponge,
    BlockType::Red,
    BlockType::Orange,
    BlockType::Yellow,
    BlockType::Lime,
    BlockType::Green,
    BlockType::Teal,
    BlockType::Aqua,
    BlockType::Cyan,
    BlockType::Blue,
    BlockType::Indigo,
    BlockType::Violet,
    BlockType::Magenta,
    BlockType::Pink,
    BlockType::Black,
    BlockType::Gray,
    BlockType::White,
    BlockType::CoalOre,
    BlockType::IronOre,
    BlockType::GoldOre,
    BlockType::Iron,
    BlockType::Gold,
    BlockType::Bookshelf,
    BlockType::Tnt,
    BlockType::Obsidian,
];

/// The hotbar a new player starts with.
pub const DEFAULT_QUICK_SLOTS: [BlockType; QUICK_SLOT_COUNT] = [
    BlockType::Stone,
    BlockType::Cobblestone,
    BlockType::Brick,
    BlockType::Dirt,
    BlockType::Wood,
    BlockType::Logs,
    BlockType::Leaves,
    BlockType::Glass,
    BlockType::Slab,
];

/// The local player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Eye position in world space.
    pub position: Point3<f32>,
    /// Orientation in degrees: `x` is pitch, `y` is yaw.
    pub rotation: Vector2<f32>,
    /// Index of the active quick slot.
    pub selector_idx: usize,
    /// Hotbar contents.
    pub item_selections: [BlockType; QUICK_SLOT_COUNT],
    /// Inventory screen contents.
    pub inventory_selection: [BlockType; INVENTORY_SLOT_COUNT],
    pub in_inventory: bool,
    pub in_pause: bool,
    /// Highlighted pause menu entry.
    pub pause_selection: usize,
    /// Discrete inventory cursor column, used on constrained-input platforms.
    pub in_cursor_x: i32,
    /// Discrete inventory cursor row, used on constrained-input platforms.
    pub in_cursor_y: i32,
}

impl Player {
    /// Creates a player at `position` looking along `pitch`/`yaw` (degrees).
    pub fn new(position: Point3<f32>, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            rotation: Vector2::new(pitch, yaw),
            selector_idx: 0,
            item_selections: DEFAULT_QUICK_SLOTS,
            inventory_selection: DEFAULT_INVENTORY,
            in_inventory: false,
            in_pause: false,
            pause_selection: 0,
            in_cursor_x: 0,
            in_cursor_y: 0,
        }
    }

    pub fn get_pos(&self) -> Point3<f32> {
        self.position
    }

    /// Orientation in degrees, `(pitch, yaw)`.
    pub fn get_rot(&self) -> Vector2<f32> {
        self.rotation
    }

    /// The block in the active quick slot.
    pub fn selected_item(&self) -> BlockType {
        self.item_selections[self.selector_idx]
    }

    /// Selects a quick slot, ignoring indices past the hotbar.
    pub fn select_quick_slot(&mut self, idx: usize) {
        if idx < QUICK_SLOT_COUNT {
            self.selector_idx = idx;
        }
    }

    /// Moves the discrete inventory cursor, clamped to the grid.
    pub fn move_inventory_cursor(&mut self, dx: i32, dy: i32) {
        self.in_cursor_x = (self.in_cursor_x + dx).clamp(0, INVENTORY_COLUMNS as i32 - 1);
        self.in_cursor_y = (self.in_cursor_y + dy).clamp(0, INVENTORY_ROWS as i32 - 1);
    }

    /// Moves the pause menu highlight, clamped to the menu entries.
    pub fn move_pause_selection(&mut self, delta: i32) {
        let max = PAUSE_MENU_ENTRIES as i32 - 1;
        self.pause_selection = (self.pause_selection as i32 + delta).clamp(0, max) as usize;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0)
    }
}
