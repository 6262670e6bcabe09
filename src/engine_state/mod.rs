//! # Engine State
//!
//! The game-state side of the interaction core.
//!
//! ## Key Components
//!
//! - **InteractionState**: owns the world and the dig action and advances them once
//!   per frame from processed input
//! - **Voxels**: the level grid, chunks, blocks and the `World` that ties them to the
//!   player
//! - **Interaction**: ray casting, inventory clicks and the dig resolver
//! - **Collaborators**: lighting, block updates, particles, networking and saving
//!
//! ## Frame order
//!
//! 1. Time-driven state advances (break cooldown, particles)
//! 2. UI toggles from the frame's input are applied
//! 3. An active dig button issues one dig trigger
//! 4. Meshes the update dispatcher marked dirty are rebuilt
//! 5. Queued block updates are drained

pub mod block_updates;
pub mod interaction;
pub mod lighting;
pub mod network;
pub mod particles;
pub mod player;
pub mod save;
pub mod voxels;

use web_time::Duration;
use winit::{event::MouseButton, keyboard::KeyCode};

use crate::application_state::input_state::ProcessedInputState;
use crate::config::{InteractionConfig, PlatformProfile};
use interaction::{DigAction, DigOutcome, PauseAction};
use voxels::world::World;

const QUICK_SLOT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Per-frame driver of a play session.
pub struct InteractionState {
    pub world: World,
    pub dig_action: DigAction,
    pub platform: PlatformProfile,
    /// Actions translated from the most recent frame's input
    pub player_actions: PlayerAction,
    quit_requested: bool,
}

impl InteractionState {
    pub fn new(world: World, dig_action: DigAction, platform: PlatformProfile) -> Self {
        Self {
            world,
            dig_action,
            platform,
            player_actions: PlayerAction::default(),
            quit_requested: false,
        }
    }

    /// Builds the session's dig action and platform behaviour from `config`.
    pub fn from_config(world: World, config: &InteractionConfig) -> Self {
        Self::new(world, DigAction::from_config(config), config.platform)
    }

    /// Whether the quit entry of the pause menu ran.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Advances the session by one frame.
    ///
    /// # Arguments
    /// * `dt` - Time since the previous frame
    /// * `input` - The frame's processed input, also used as the pointer source
    ///
    /// # Returns
    /// The outcome of the dig trigger, if the dig button was active.
    pub fn process_frame(
        &mut self,
        dt: Duration,
        input: &ProcessedInputState,
    ) -> Option<DigOutcome> {
        self.world.tick(dt);

        self.player_actions = translate_processed_input(input);
        self.apply_ui_actions();

        let outcome = if self.player_actions.dig {
            let outcome = self.dig_action.dig(&mut self.world, input);
            if outcome == DigOutcome::Pause(Some(PauseAction::Quit)) {
                self.quit_requested = true;
            }
            Some(outcome)
        } else {
            None
        };

        let rebuilt = self.world.regenerate_dirty_meshes();
        if rebuilt > 0 {
            log::trace!("Rebuilt {} neighbouring chunk meshes", rebuilt);
        }

        // nothing simulates fluids yet, so queued updates do not outlive the frame
        let drained = self.world.updates.take_pending_updates();
        if !drained.is_empty() {
            log::trace!("Drained {} queued block updates", drained.len());
        }

        outcome
    }

    fn apply_ui_actions(&mut self) {
        let actions = &self.player_actions;
        let player = &mut self.world.player;

        if actions.toggle_inventory {
            player.in_inventory = !player.in_inventory;
        }
        if actions.toggle_pause && self.platform.has_pause_menu() {
            player.in_pause = !player.in_pause;
        }

        if let Some(slot) = actions.select_slot {
            player.select_quick_slot(slot);
        }

        let (dx, dy) = actions.navigate;
        if dx == 0 && dy == 0 {
            return;
        }
        match self.platform {
            PlatformProfile::Desktop if player.in_pause => player.move_pause_selection(dy),
            PlatformProfile::ConstrainedInput if player.in_inventory => {
                player.move_inventory_cursor(dx, dy)
            }
            _ => {}
        }
    }
}

/// Translates the processed input state into player actions.
///
/// Toggles and navigation only fire on the frame a key goes down; digging stays active
/// while the button is held.
pub fn translate_processed_input(input: &ProcessedInputState) -> PlayerAction {
    let pressed = |key| input.get_key_state(key).is_just_pressed();

    let mut player_action = PlayerAction {
        dig: input.get_mouse_button_state(MouseButton::Left).is_active(),
        toggle_inventory: pressed(KeyCode::KeyE),
        toggle_pause: pressed(KeyCode::Escape),
        ..Default::default()
    };

    if pressed(KeyCode::ArrowLeft) {
        player_action.navigate.0 -= 1;
    }
    if pressed(KeyCode::ArrowRight) {
        player_action.navigate.0 += 1;
    }
    if pressed(KeyCode::ArrowUp) {
        player_action.navigate.1 -= 1;
    }
    if pressed(KeyCode::ArrowDown) {
        player_action.navigate.1 += 1;
    }

    player_action.select_slot = QUICK_SLOT_KEYS.iter().position(|key| pressed(*key));

    player_action
}

/// Represents player actions derived from input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerAction {
    /// Dig button pressed or held
    pub dig: bool,
    pub toggle_inventory: bool,
    pub toggle_pause: bool,
    /// Arrow key steps, `(columns, rows)`
    pub navigate: (i32, i32),
    /// Quick slot picked with the number keys
    pub select_slot: Option<usize>,
}
