//! # Application State Management
//!
//! This module handles the application side of a session:
//! - The `InputSource` seam the interaction core reads pointer axes through
//! - Input state tracking and window event intake
//! - A windowed `winit` application that feeds frames into an `InteractionState`

pub mod input_manager;
pub mod input_state;

use input_manager::InputManager;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::engine_state::interaction::DigOutcome;
use crate::engine_state::InteractionState;

/// A source of normalized input axes.
pub trait InputSource {
    /// Value of `axis` on `device`, in `[-1, 1]`. Unknown devices and axes read 0.
    fn get_axis(&self, device: &str, axis: &str) -> f32;
}

/// Fixed pointer axes, for scripted sessions and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub x: f32,
    pub y: f32,
}

impl AxisState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl InputSource for AxisState {
    fn get_axis(&self, device: &str, axis: &str) -> f32 {
        match (device, axis) {
            ("Mouse", "X") => self.x,
            ("Mouse", "Y") => self.y,
            _ => 0.0,
        }
    }
}

/// A windowed session: input comes from a real window, nothing is rendered.
pub struct ApplicationState {
    /// The session being driven
    pub interaction_state: InteractionState,

    /// Handle to the application window, once resumed
    pub window: Option<Window>,

    /// Manages input state and event processing
    pub input_manager: InputManager,

    /// Timestamp of the last frame for delta time calculations
    pub last_wait_time: web_time::Instant,
}

impl ApplicationState {
    pub fn new(interaction_state: InteractionState) -> Self {
        Self {
            interaction_state,
            window: None,
            input_manager: InputManager::new(),
            last_wait_time: web_time::Instant::now(),
        }
    }
}

impl ApplicationHandler for ApplicationState {
    /// Creates the window the first time the application is resumed.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes().with_title("voxel-interaction");
        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.input_manager.set_window_size(window.inner_size());
                self.window = Some(window);
                self.last_wait_time = web_time::Instant::now();
            }
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input_manager.intake_input(&event);

        match event {
            WindowEvent::Focused(false) => self.input_manager.reset_inputs(),
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => (),
        }
    }

    /// Runs one interaction frame before the event loop goes to sleep.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        let now = web_time::Instant::now();
        let wait_dt = now - self.last_wait_time;
        self.last_wait_time = now;

        let processed_input = self.input_manager.get_and_reset_processed_input();
        if let Some(DigOutcome::Removed { position, block }) =
            self.interaction_state.process_frame(wait_dt, &processed_input)
        {
            log::info!("Removed {:?} at {:?}", block, position);
        }

        if self.interaction_state.quit_requested() {
            event_loop.exit();
        }
    }
}
