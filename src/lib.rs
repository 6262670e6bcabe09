#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Interaction
//!
//! The interaction core of a block sandbox: turning a player's dig input into a ray
//! cast against a chunked voxel grid, removing the block it hits and notifying
//! everything that depends on it.
//!
//! ## Key Modules
//!
//! * `application_state` - Input sources, input state tracking and the windowed session
//! * `config` - Session configuration loaded from JSON
//! * `core` - Shared resource handles
//! * `engine_state` - The world, the dig resolver and their collaborators
//!
//! ## Usage
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     voxel_interaction::run()
//! }
//! ```

pub mod application_state;
pub mod config;
pub mod core;
pub mod engine_state;

use anyhow::Context;
use cgmath::{Point3, Vector3};
use log::info;
use web_time::Duration;
use winit::event::MouseButton;
use winit::event_loop::{ControlFlow, EventLoop};

use application_state::input_state::{ProcessedInputState, RawInputState};
use application_state::ApplicationState;
use config::{InteractionConfig, CONFIG_ENV_VAR};
use engine_state::player::Player;
use engine_state::voxels::block::block_type::BlockType;
use engine_state::voxels::voxel_grid::VoxelGrid;
use engine_state::voxels::world::World;
use engine_state::InteractionState;

pub use engine_state::interaction::{DigAction, DigOutcome, PauseAction};

/// Seed of the demo level's decorations.
pub const DEMO_SEED: u64 = 0x5eed_b10c;

const DEMO_FRAMES: usize = 12;
const DEMO_FRAME_TIME: Duration = Duration::from_millis(100);

fn init_logger() {
    let mut log_builder = env_logger::Builder::new();
    let _ = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();
    info!("Logger initialized");
}

/// Reads the config named by [`CONFIG_ENV_VAR`], or the defaults when it is unset.
pub fn load_config() -> anyhow::Result<InteractionConfig> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => InteractionConfig::load(&path)
            .with_context(|| format!("{} is set but could not be used", CONFIG_ENV_VAR)),
        None => Ok(InteractionConfig::default()),
    }
}

/// Builds the demo level: bedrock floor, stone body, dirt and grass on top, with ores,
/// sponges and water pockets scattered deterministically.
pub fn demo_world(config: &InteractionConfig, seed: u64) -> World {
    let size = config.world_extent();
    let surface = size.y / 2;

    let mut grid = VoxelGrid::new(size);
    grid.fill_layers(0, 1, BlockType::Bedrock);
    grid.fill_layers(1, surface - 3, BlockType::Stone);
    grid.fill_layers(surface - 3, surface - 1, BlockType::Dirt);
    grid.fill_layers(surface - 1, surface, BlockType::Grass);

    let mut rng = fastrand::Rng::with_seed(seed);
    let columns = (size.x * size.z) as usize;
    for _ in 0..columns / 16 {
        let pos = Point3::new(rng.i32(0..size.x), rng.i32(1..surface - 3), rng.i32(0..size.z));
        grid.set_block(pos, BlockType::get_random_ore(&mut rng));
    }
    for _ in 0..columns / 256 + 1 {
        let pos = Point3::new(rng.i32(1..size.x - 1), surface - 2, rng.i32(1..size.z - 1));
        grid.set_block(pos, BlockType::Sponge);
        grid.set_block(pos + Vector3::unit_x(), BlockType::Water);
    }
    grid.recompute_chunk_meta();

    // standing on the surface in the middle of the level, looking down and along +Z
    let center = Point3::new(size.x as f32 / 2.0, surface as f32 + 1.6, size.z as f32 / 2.0);
    let player = Player::new(center, 60.0, 180.0);

    let mut world = World::new(grid, player);
    world.register_mesh_records();
    world
}

/// Runs a short headless session that digs into the demo level.
pub fn run() -> anyhow::Result<()> {
    init_logger();

    let config = load_config()?;
    let world = demo_world(&config, DEMO_SEED);
    let mut state = InteractionState::from_config(world, &config);

    let mut dig_held = ProcessedInputState::default();
    dig_held
        .mouse_button_states
        .insert(MouseButton::Left, RawInputState::Held);

    let mut removed = 0;
    for frame in 0..DEMO_FRAMES {
        match state.process_frame(DEMO_FRAME_TIME, &dig_held) {
            Some(DigOutcome::Removed { position, block }) => {
                removed += 1;
                info!("Frame {}: dug {:?} at {:?}", frame, block, position);
            }
            Some(outcome) => info!("Frame {}: {:?}", frame, outcome),
            None => {}
        }
    }

    info!("Demo finished, {} blocks removed", removed);
    Ok(())
}

/// Opens a window and drives the demo level from real mouse and keyboard input.
pub fn run_windowed() -> anyhow::Result<()> {
    init_logger();

    let config = load_config()?;
    let world = demo_world(&config, DEMO_SEED);
    let mut state = ApplicationState::new(InteractionState::from_config(world, &config));

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut state).context("running event loop")?;
    Ok(())
}
