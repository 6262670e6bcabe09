//! Inventory selection on both platform strategies, the frame driver and the default
//! collaborators wired into a world.

use cgmath::{Point3, Vector3};
use voxel_interaction::application_state::input_manager::InputManager;
use voxel_interaction::application_state::AxisState;
use voxel_interaction::config::{InteractionConfig, PlatformProfile};
use voxel_interaction::core::StResource;
use voxel_interaction::engine_state::interaction::inventory_pointer::pointer_to_slot;
use voxel_interaction::engine_state::interaction::{DigAction, DigOutcome};
use voxel_interaction::engine_state::network::{QueuedClient, SetBlockPacket, MODE_DESTROY};
use voxel_interaction::engine_state::player::{Player, DEFAULT_INVENTORY};
use voxel_interaction::engine_state::voxels::block::block_type::BlockType;
use voxel_interaction::engine_state::voxels::voxel_grid::VoxelGrid;
use voxel_interaction::engine_state::voxels::world::{World, BREAK_READY};
use voxel_interaction::engine_state::InteractionState;
use web_time::Duration;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

fn config(platform: PlatformProfile) -> InteractionConfig {
    InteractionConfig {
        platform,
        save_directory: std::env::temp_dir().join("voxel-interaction-frames"),
        ..Default::default()
    }
}

/// World with a stone block right in front of the player, who has the inventory open.
fn inventory_world() -> World {
    let mut grid = VoxelGrid::new(Vector3::new(16, 16, 16));
    grid.set_block(Point3::new(0, 0, 2), BlockType::Stone);
    let mut player = Player::new(Point3::new(0.0, 0.0, 0.0), 0.0, 180.0);
    player.in_inventory = true;
    World::new(grid, player)
}

/// Pointer axes in the middle of inventory cell (column, row).
fn axes_for_cell(column: usize, row: usize) -> AxisState {
    let x = 0.3125 + (column as f32 + 0.5) * 0.04;
    let y = 0.3125 + (row as f32 + 0.5) * 0.08;
    AxisState::new(x * 2.0 - 1.0, y * 2.0 - 1.0)
}

#[test]
fn desktop_click_copies_the_slot_into_the_quick_slot() {
    let dig = DigAction::from_config(&config(PlatformProfile::Desktop));
    let mut world = inventory_world();
    world.player.select_quick_slot(3);

    let outcome = dig.dig(&mut world, &axes_for_cell(3, 2));

    assert_eq!(outcome, DigOutcome::Inventory(Some(21)));
    assert_eq!(world.player.item_selections[3], DEFAULT_INVENTORY[21]);
    // no world mutation while the inventory is open
    assert_eq!(world.grid.get_block(Point3::new(0, 0, 2)), BlockType::Stone);
    assert!(!world.is_ready());
}

#[test]
fn desktop_click_outside_the_grid_changes_nothing() {
    let dig = DigAction::from_config(&config(PlatformProfile::Desktop));
    let mut world = inventory_world();
    let before = world.player.item_selections;

    for axes in [
        AxisState::new(0.0, 0.95),
        AxisState::new(-0.9, 0.0),
        axes_for_cell(7, 4),
    ] {
        world.break_icd = BREAK_READY;
        assert_eq!(dig.dig(&mut world, &axes), DigOutcome::Inventory(None));
    }
    assert_eq!(world.player.item_selections, before);
}

#[test]
fn constrained_input_uses_the_cursor_cell() {
    let dig = DigAction::from_config(&config(PlatformProfile::ConstrainedInput));
    let mut world = inventory_world();
    world.player.in_cursor_x = 0;
    world.player.in_cursor_y = 1;

    // the pointer is far outside the grid and must not matter
    let outcome = dig.dig(&mut world, &AxisState::new(1.0, 1.0));

    assert_eq!(outcome, DigOutcome::Inventory(Some(9)));
    assert_eq!(world.player.item_selections[0], DEFAULT_INVENTORY[9]);
}

#[test]
fn constrained_input_rejects_empty_trailing_cells() {
    let dig = DigAction::from_config(&config(PlatformProfile::ConstrainedInput));
    let mut world = inventory_world();
    world.player.in_cursor_x = 8;
    world.player.in_cursor_y = 4;
    let before = world.player.item_selections;

    assert_eq!(dig.dig(&mut world, &AxisState::default()), DigOutcome::Inventory(None));
    assert_eq!(world.player.item_selections, before);
}

#[test]
fn seeded_pointer_sweep_matches_the_band_formula() {
    let dig = DigAction::from_config(&config(PlatformProfile::Desktop));
    let mut world = inventory_world();
    let mut rng = fastrand::Rng::with_seed(0x1417);
    let mut hits = 0;

    for _ in 0..2000 {
        let axis_x = rng.f32() * 2.0 - 1.0;
        let axis_y = rng.f32() * 2.0 - 1.0;

        let cursor_x = (axis_x + 1.0) / 2.0;
        let cursor_y = (axis_y + 1.0) / 2.0;
        let in_bands = cursor_x > 0.3125 && cursor_x < 0.675 && cursor_y > 0.3125 && cursor_y < 0.7188;
        let expected = if in_bands {
            let column = ((cursor_x - 0.3125) / 0.04) as usize;
            let row = ((cursor_y - 0.3125) / 0.08) as usize;
            Some(row * 9 + column).filter(|idx| *idx <= 41)
        } else {
            None
        };
        assert_eq!(pointer_to_slot(axis_x, axis_y), expected);

        world.break_icd = BREAK_READY;
        world.player.item_selections = [BlockType::Air; 9];
        world.player.selector_idx = rng.usize(0..9);

        let outcome = dig.dig(&mut world, &AxisState::new(axis_x, axis_y));
        assert_eq!(outcome, DigOutcome::Inventory(expected));

        let changed: Vec<usize> = (0..9)
            .filter(|idx| world.player.item_selections[*idx] != BlockType::Air)
            .collect();
        match expected {
            Some(slot) => {
                hits += 1;
                assert_eq!(changed, vec![world.player.selector_idx]);
                assert_eq!(
                    world.player.item_selections[world.player.selector_idx],
                    DEFAULT_INVENTORY[slot]
                );
            }
            None => assert!(changed.is_empty()),
        }
    }

    // the grid covers a few percent of the screen
    assert!(hits > 0);
}

#[test]
fn frames_turn_window_input_into_an_inventory_pick() {
    let world = World::new(
        VoxelGrid::new(Vector3::new(16, 16, 16)),
        Player::new(Point3::new(8.0, 8.0, 8.0), 0.0, 180.0),
    );
    let mut state = InteractionState::from_config(world, &config(PlatformProfile::Desktop));
    let mut input = InputManager::new();
    input.set_window_size(PhysicalSize::new(800, 600));
    // cell (1, 0)
    input.intake_cursor_position(PhysicalPosition::new(298.0, 211.5));

    input.intake_key(KeyCode::KeyE, true);
    let frame = input.get_and_reset_processed_input();
    assert_eq!(state.process_frame(Duration::from_millis(16), &frame), None);
    assert!(state.world.player.in_inventory);

    input.intake_key(KeyCode::KeyE, false);
    input.intake_mouse_button(MouseButton::Left, true);
    let frame = input.get_and_reset_processed_input();
    assert_eq!(
        state.process_frame(Duration::from_millis(16), &frame),
        Some(DigOutcome::Inventory(Some(1)))
    );
    assert_eq!(state.world.player.item_selections[0], DEFAULT_INVENTORY[1]);
}

#[test]
fn holding_the_button_digs_once_per_cooldown() {
    let mut grid = VoxelGrid::new(Vector3::new(16, 16, 16));
    for z in 1..16 {
        grid.set_block(Point3::new(8, 8, z), BlockType::Stone);
    }
    let world = World::new(grid, Player::new(Point3::new(8.5, 8.5, 0.5), 0.0, 180.0));
    let mut state = InteractionState::from_config(world, &config(PlatformProfile::Desktop));

    let mut input = InputManager::new();
    input.intake_mouse_button(MouseButton::Left, true);

    let mut removed = 0;
    for _ in 0..10 {
        let frame = input.get_and_reset_processed_input();
        if let Some(DigOutcome::Removed { .. }) =
            state.process_frame(Duration::from_millis(50), &frame)
        {
            removed += 1;
        }
    }

    // 0.5 s of holding with a 0.2 s cooldown
    assert!((2..=3).contains(&removed), "removed {}", removed);
}

#[test]
fn default_collaborators_follow_a_removal() {
    let mut grid = VoxelGrid::new(Vector3::new(32, 32, 32));
    grid.fill_layers(0, 16, BlockType::Stone);
    grid.recompute_chunk_meta();

    // looking straight down onto the border between two chunk columns
    let player = Player::new(Point3::new(15.5, 17.5, 20.5), 90.0, 180.0);
    let client = StResource::new(QueuedClient::new());
    let mut world = World::new(grid, player).with_client(Box::new(client.clone()));
    world.register_mesh_records();

    let dig = DigAction::from_config(&config(PlatformProfile::Desktop));
    let outcome = dig.dig(&mut world, &AxisState::default());
    assert_eq!(
        outcome,
        DigOutcome::Removed {
            position: Point3::new(15, 15, 20),
            block: BlockType::Stone
        }
    );
    assert!(!world.grid.chunk_meta(Point3::new(15, 15, 20)).is_full);
    assert!(world.grid.chunk_meta(Point3::new(0, 0, 0)).is_full);

    // a destroy packet carries the held item, the default hotbar starts with stone
    assert_eq!(
        client.get_mut().drain_outbound(),
        vec![SetBlockPacket {
            x: 15,
            y: 15,
            z: 20,
            mode: MODE_DESTROY,
            block: BlockType::Stone.id()
        }]
    );

    let pending = world.updates.take_pending_updates();
    assert_eq!(pending.len(), 6);
    assert!(pending.contains(&Point3::new(16, 15, 20)));

    // x = 15 is the last column of its chunk, so the chunk column at x = 16 is rebuilt
    assert_eq!(world.regenerate_dirty_meshes(), 1);
}
