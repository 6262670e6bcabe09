//! # Inventory Pointer
//!
//! Resolves a click on the open inventory screen to an inventory slot and copies the
//! slot's block into the player's selected quick slot.
//!
//! ## Layout
//!
//! With the pointer remapped to `[0, 1]` on both axes, the grid covers
//! `0.3125 < x < 0.675` and `0.3125 < y < 0.7188`. Columns are 0.04 wide and rows 0.08
//! high, giving 9 columns and up to 5 rows. Only slots `0..=41` hold items.
//!
//! Desktop builds read the pointer. Builds without a pointer move a discrete cursor
//! over the grid instead, see [`CursorSlotResolver`].

use crate::application_state::InputSource;
use crate::engine_state::player::{Player, INVENTORY_COLUMNS, INVENTORY_SLOT_COUNT};

const BAND_X_MIN: f32 = 0.3125;
const BAND_X_MAX: f32 = 0.675;
const BAND_Y_MIN: f32 = 0.3125;
const BAND_Y_MAX: f32 = 0.7188;
const COLUMN_WIDTH: f32 = 0.04;
const ROW_HEIGHT: f32 = 0.08;

/// Input device and axes the pointer is read from.
pub const POINTER_DEVICE: &str = "Mouse";
pub const POINTER_AXIS_X: &str = "X";
pub const POINTER_AXIS_Y: &str = "Y";

/// Strategy for picking the inventory slot a click refers to.
///
/// Chosen once per session from the platform profile.
pub trait SlotResolver {
    /// Returns the targeted slot, or `None` when nothing valid is targeted.
    fn resolve(&self, player: &Player, input: &dyn InputSource) -> Option<usize>;
}

/// Maps normalized pointer axes in `[-1, 1]` to an inventory slot.
///
/// # Returns
/// `None` when the pointer lies outside the grid bands or on an empty trailing slot.
///
/// # Examples
/// ```
/// use voxel_interaction::engine_state::interaction::inventory_pointer::pointer_to_slot;
///
/// // remapped (0.33, 0.35): column 0, row 0
/// assert_eq!(pointer_to_slot(-0.34, -0.3), Some(0));
/// assert_eq!(pointer_to_slot(0.9, 0.0), None);
/// ```
pub fn pointer_to_slot(axis_x: f32, axis_y: f32) -> Option<usize> {
    let cursor_x = (axis_x + 1.0) / 2.0;
    let cursor_y = (axis_y + 1.0) / 2.0;

    if !(cursor_x > BAND_X_MIN && cursor_x < BAND_X_MAX) {
        return None;
    }
    if !(cursor_y > BAND_Y_MIN && cursor_y < BAND_Y_MAX) {
        return None;
    }

    let column = ((cursor_x - BAND_X_MIN) / COLUMN_WIDTH) as usize;
    let row = ((cursor_y - BAND_Y_MIN) / ROW_HEIGHT) as usize;
    let idx = row * INVENTORY_COLUMNS + column;

    (idx < INVENTORY_SLOT_COUNT).then_some(idx)
}

/// Desktop strategy: reads the pointer axes from the input source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerSlotResolver;

impl SlotResolver for PointerSlotResolver {
    fn resolve(&self, _player: &Player, input: &dyn InputSource) -> Option<usize> {
        pointer_to_slot(
            input.get_axis(POINTER_DEVICE, POINTER_AXIS_X),
            input.get_axis(POINTER_DEVICE, POINTER_AXIS_Y),
        )
    }
}

/// Constrained-input strategy: uses the player's tracked cursor cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorSlotResolver;

impl SlotResolver for CursorSlotResolver {
    fn resolve(&self, player: &Player, _input: &dyn InputSource) -> Option<usize> {
        let column = usize::try_from(player.in_cursor_x).ok()?;
        let row = usize::try_from(player.in_cursor_y).ok()?;
        if column >= INVENTORY_COLUMNS {
            return None;
        }

        let idx = row * INVENTORY_COLUMNS + column;
        (idx < INVENTORY_SLOT_COUNT).then_some(idx)
    }
}

/// Copies inventory slot `slot` into the player's selected quick slot.
pub fn apply_slot_selection(player: &mut Player, slot: usize) {
    player.item_selections[player.selector_idx] = player.inventory_selection[slot];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_state::AxisState;
    use crate::engine_state::voxels::block::block_type::BlockType;

    /// Inverse of the `[0, 1]` remap, centred in the given cell.
    fn axes_for_cell(column: usize, row: usize) -> (f32, f32) {
        let x = BAND_X_MIN + (column as f32 + 0.5) * COLUMN_WIDTH;
        let y = BAND_Y_MIN + (row as f32 + 0.5) * ROW_HEIGHT;
        (x * 2.0 - 1.0, y * 2.0 - 1.0)
    }

    #[test]
    fn cells_map_to_row_major_slots() {
        for (column, row, expected) in [(0, 0, 0), (8, 0, 8), (0, 1, 9), (3, 2, 21), (5, 4, 41)] {
            let (x, y) = axes_for_cell(column, row);
            assert_eq!(pointer_to_slot(x, y), Some(expected));
        }
    }

    #[test]
    fn trailing_cells_of_the_last_row_are_empty() {
        let (x, y) = axes_for_cell(6, 4);
        assert_eq!(pointer_to_slot(x, y), None);
    }

    #[test]
    fn band_edges_are_exclusive() {
        let (_, y) = axes_for_cell(0, 0);
        assert_eq!(pointer_to_slot(BAND_X_MIN * 2.0 - 1.0, y), None);
        assert_eq!(pointer_to_slot(-1.0, y), None);
        assert_eq!(pointer_to_slot(1.0, y), None);

        let (x, _) = axes_for_cell(0, 0);
        assert_eq!(pointer_to_slot(x, 1.0), None);
    }

    #[test]
    fn pointer_resolver_reads_mouse_axes() {
        let (x, y) = axes_for_cell(2, 1);
        let player = Player::default();
        assert_eq!(PointerSlotResolver.resolve(&player, &AxisState::new(x, y)), Some(11));
    }

    #[test]
    fn cursor_resolver_ignores_the_pointer() {
        let mut player = Player::default();
        player.in_cursor_x = 4;
        player.in_cursor_y = 1;
        assert_eq!(CursorSlotResolver.resolve(&player, &AxisState::new(5.0, 5.0)), Some(13));

        player.in_cursor_x = 7;
        player.in_cursor_y = 4;
        assert_eq!(CursorSlotResolver.resolve(&player, &AxisState::default()), None);
    }

    #[test]
    fn selection_overwrites_only_the_selected_quick_slot() {
        let mut player = Player::default();
        player.selector_idx = 2;
        let before = player.item_selections;

        apply_slot_selection(&mut player, 17);

        assert_eq!(player.item_selections[2], BlockType::Sponge);
        for idx in (0..before.len()).filter(|idx| *idx != 2) {
            assert_eq!(player.item_selections[idx], before[idx]);
        }
    }
}
