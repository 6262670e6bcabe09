//! # Dig Action
//!
//! Turns one dig trigger into at most one removed block.
//!
//! ## Flow
//!
//! 1. A trigger while the world's break cooldown is running does nothing.
//! 2. Otherwise the cooldown is armed, even if nothing ends up being dug.
//! 3. With the inventory open, the click picks an inventory slot and returns.
//! 4. With the pause menu open (desktop only), the highlighted entry is run and the
//!    call returns.
//! 5. Otherwise the facing ray is sampled. Samples outside the world or on a
//!    pass-through block are skipped. The first remaining sample is the target.
//!
//! ## Removal order
//!
//! Collaborators observe a removal in a fixed order:
//! particles, grid write, chunk metadata, network, sponge refill updates, lighting,
//! mesh regeneration, surroundings, nearby blocks.

use cgmath::Point3;

use super::inventory_pointer::{apply_slot_selection, SlotResolver};
use super::ray_cast::{CastSample, RayCast};
use crate::application_state::InputSource;
use crate::config::InteractionConfig;
use crate::engine_state::save::{FileSaveSubsystem, SaveSubsystem};
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::chunk::chunk_id;
use crate::engine_state::voxels::world::World;

pub const REACH_DISTANCE: f32 = 4.0;
pub const NUM_STEPS: u32 = 50;
/// Seconds between accepted triggers.
pub const BREAK_COOLDOWN: f32 = 0.2;

/// Horizontal half-extent of the area re-evaluated after a sponge is removed.
const SPONGE_RADIUS: i32 = 3;
/// Vertical offsets re-evaluated after a sponge is removed, in queue order.
const SPONGE_LAYERS: [i32; 5] = [0, 1, -1, 2, -2];

/// A pause menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    Save,
    Quit,
}

impl PauseAction {
    /// The entry at a pause menu index.
    pub fn from_selection(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(PauseAction::Resume),
            1 => Some(PauseAction::Save),
            2 => Some(PauseAction::Quit),
            _ => None,
        }
    }
}

/// What a dig trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    /// The cooldown was running; nothing changed.
    CoolingDown,
    /// The inventory was open. Holds the slot copied into the quick slot, if any.
    Inventory(Option<usize>),
    /// The pause menu was open. Holds the entry that ran, if any.
    Pause(Option<PauseAction>),
    /// A block was removed.
    Removed {
        position: Point3<i32>,
        block: BlockType,
    },
    /// No diggable block lies within reach.
    NoTarget,
}

/// Resolves dig triggers against a [`World`].
pub struct DigAction {
    pub reach_distance: f32,
    pub cast_steps: u32,
    pub break_cooldown: f32,
    slot_resolver: Box<dyn SlotResolver>,
    pause_menu_enabled: bool,
    saver: Box<dyn SaveSubsystem>,
}

impl DigAction {
    /// Creates a dig action with the classic reach, step count and cooldown.
    pub fn new(
        slot_resolver: Box<dyn SlotResolver>,
        pause_menu_enabled: bool,
        saver: Box<dyn SaveSubsystem>,
    ) -> Self {
        Self {
            reach_distance: REACH_DISTANCE,
            cast_steps: NUM_STEPS,
            break_cooldown: BREAK_COOLDOWN,
            slot_resolver,
            pause_menu_enabled,
            saver,
        }
    }

    /// Creates a dig action from a validated configuration.
    ///
    /// The slot strategy and pause menu follow the configured platform, and saves go to
    /// the configured directory.
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self {
            reach_distance: config.reach_distance,
            cast_steps: config.cast_steps,
            break_cooldown: config.break_cooldown,
            slot_resolver: config.platform.slot_resolver(),
            pause_menu_enabled: config.platform.has_pause_menu(),
            saver: Box::new(FileSaveSubsystem::new(&config.save_directory)),
        }
    }

    /// Replaces the save subsystem used by the pause menu.
    pub fn with_saver(mut self, saver: Box<dyn SaveSubsystem>) -> Self {
        self.saver = saver;
        self
    }

    pub fn pause_menu_enabled(&self) -> bool {
        self.pause_menu_enabled
    }

    /// Handles one dig trigger.
    ///
    /// # Arguments
    /// * `world` - The world to dig in
    /// * `input` - Pointer source for inventory clicks
    pub fn dig(&self, world: &mut World, input: &dyn InputSource) -> DigOutcome {
        if !world.is_ready() {
            return DigOutcome::CoolingDown;
        }
        world.break_icd = self.break_cooldown;

        if world.player.in_inventory {
            let slot = self.slot_resolver.resolve(&world.player, input);
            if let Some(slot) = slot {
                apply_slot_selection(&mut world.player, slot);
                log::debug!(
                    "Inventory slot {} -> quick slot {}",
                    slot,
                    world.player.selector_idx
                );
            }
            return DigOutcome::Inventory(slot);
        }

        if self.pause_menu_enabled && world.player.in_pause {
            return DigOutcome::Pause(self.run_pause_entry(world));
        }

        let cast = RayCast::from_player(&world.player, self.reach_distance, self.cast_steps);
        for sample in cast {
            if !world.grid.validate(sample.voxel) {
                continue;
            }

            let block = world.grid.get_block(sample.voxel);
            if block.is_pass_through() {
                continue;
            }

            self.remove_block(world, sample, block);
            return DigOutcome::Removed {
                position: sample.voxel,
                block,
            };
        }

        DigOutcome::NoTarget
    }

    fn run_pause_entry(&self, world: &mut World) -> Option<PauseAction> {
        let action = PauseAction::from_selection(world.player.pause_selection)?;
        log::debug!("Pause menu entry {:?}", action);

        match action {
            PauseAction::Resume => world.player.in_pause = false,
            PauseAction::Save => {
                if let Err(err) = self.saver.save(world) {
                    log::error!("Failed to save level: {:#}", err);
                }
            }
            PauseAction::Quit => log::info!("Quit requested from the pause menu"),
        }

        Some(action)
    }

    fn remove_block(&self, world: &mut World, sample: CastSample, block: BlockType) {
        let pos = sample.voxel;
        world.particles.initialize(block, sample.position);

        let id = chunk_id(pos.x, pos.z);
        let was_sponge = block == BlockType::Sponge;

        world.grid.set_block(pos, BlockType::Air);
        world.grid.chunk_meta_mut(pos).is_full = false;

        if let Some(client) = world.client.as_mut() {
            let held = world.player.selected_item().id();
            client.set_block(pos.x, pos.y, pos.z, 0, held);
        }

        // water may flow back into the space the sponge kept dry
        if was_sponge {
            for i in pos.x - SPONGE_RADIUS..=pos.x + SPONGE_RADIUS {
                for j in pos.z - SPONGE_RADIUS..=pos.z + SPONGE_RADIUS {
                    for dy in SPONGE_LAYERS {
                        world.updates.add_update(Point3::new(i, pos.y + dy, j));
                    }
                }
            }
        }

        world.updates.update_lighting(&world.grid, pos.x, pos.z);
        world.regenerate_chunk(id);
        world.updates.update_surroundings(pos.x, pos.z);
        world.updates.update_nearby_blocks(pos);

        log::trace!("Dug {:?} at {:?}", block, pos);
    }
}
