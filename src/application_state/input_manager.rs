//! # Input Manager
//!
//! This module handles input processing for the application, including:
//! - Keyboard and mouse button state tracking
//! - Cursor position tracking and normalization against the window size
//! - Input event processing

use std::collections::HashMap;

use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{MouseInput, ProcessedInputState, RawInputState};

/// Keys the interaction core reacts to.
pub const KEY_CODES: [KeyCode; 15] = [
    KeyCode::KeyE,
    KeyCode::Escape,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
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

const MOUSE_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Maps a pixel coordinate to `[-1, 1]` across an extent.
fn normalize_axis(position: f64, extent: u32) -> f32 {
    ((position / extent as f64) * 2.0 - 1.0).clamp(-1.0, 1.0) as f32
}

/// Manages the state of all input devices and processes input events.
pub struct InputManager {
    /// Previous state of all tracked keyboard keys
    pub keyboard_inputs_old: HashMap<KeyCode, bool>,
    /// Current state of all tracked keyboard keys
    pub keyboard_inputs_new: HashMap<KeyCode, bool>,

    /// Current state of mouse inputs
    pub mouse_inputs: MouseInput,

    /// Window size the cursor position is normalized against
    pub window_size: PhysicalSize<u32>,
}

impl InputManager {
    /// Creates a new InputManager with every tracked key and button released.
    pub fn new() -> Self {
        let keyboard_inputs_old: HashMap<_, _> = KEY_CODES.iter().map(|key| (*key, false)).collect();
        let keyboard_inputs_new = keyboard_inputs_old.clone();

        let mouse_button_inputs_old: HashMap<_, _> =
            MOUSE_BUTTONS.iter().map(|button| (*button, false)).collect();
        let mouse_button_inputs_new = mouse_button_inputs_old.clone();

        Self {
            keyboard_inputs_old,
            keyboard_inputs_new,
            mouse_inputs: MouseInput {
                mouse_button_inputs_old,
                mouse_button_inputs_new,
                cursor_position: None,
            },
            window_size: PhysicalSize::new(0, 0),
        }
    }

    /// Copies the current state into the old state for the next frame's comparisons.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }

        for (button, new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            if let Some(old_state) = self.mouse_inputs.mouse_button_inputs_old.get_mut(button) {
                *old_state = *new_state;
            }
        }
    }

    /// Processes a window event and updates internal input state.
    ///
    /// # Arguments
    /// * `event` - The window event to process
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => self.intake_key(*key, *state == ElementState::Pressed),
            WindowEvent::MouseInput { button, state, .. } => {
                self.intake_mouse_button(*button, *state == ElementState::Pressed)
            }
            WindowEvent::CursorMoved { position, .. } => self.intake_cursor_position(*position),
            WindowEvent::CursorLeft { .. } => self.mouse_inputs.cursor_position = None,
            WindowEvent::Resized(size) => self.set_window_size(*size),
            _ => {}
        }
    }

    /// Records a key going down or up. Untracked keys are ignored.
    pub fn intake_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(key_state) = self.keyboard_inputs_new.get_mut(&key) {
            *key_state = pressed;
        }
    }

    /// Records a mouse button going down or up. Untracked buttons are ignored.
    pub fn intake_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let Some(button_state) = self.mouse_inputs.mouse_button_inputs_new.get_mut(&button) {
            *button_state = pressed;
        }
    }

    pub fn intake_cursor_position(&mut self, position: PhysicalPosition<f64>) {
        self.mouse_inputs.cursor_position = Some(position);
    }

    pub fn set_window_size(&mut self, size: PhysicalSize<u32>) {
        self.window_size = size;
    }

    /// The cursor position normalized to `[-1, 1]`, if it is known and the window has
    /// an area.
    pub fn normalized_pointer(&self) -> Option<(f32, f32)> {
        let position = self.mouse_inputs.cursor_position?;
        if self.window_size.width == 0 || self.window_size.height == 0 {
            return None;
        }

        Some((
            normalize_axis(position.x, self.window_size.width),
            normalize_axis(position.y, self.window_size.height),
        ))
    }

    /// Creates a processed input state from the current raw boolean states.
    pub fn create_processed_input_state(&self) -> ProcessedInputState {
        let keyboard_states = self
            .keyboard_inputs_new
            .iter()
            .map(|(key, &new_state)| {
                let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
                (*key, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        let mouse_button_states = self
            .mouse_inputs
            .mouse_button_inputs_new
            .iter()
            .map(|(button, &new_state)| {
                let old_state = self
                    .mouse_inputs
                    .mouse_button_inputs_old
                    .get(button)
                    .copied()
                    .unwrap_or(false);
                (*button, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        ProcessedInputState {
            keyboard_states,
            mouse_button_states,
            pointer: self.normalized_pointer(),
        }
    }

    /// Returns the processed input state and advances the old state.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let processed_input = self.create_processed_input_state();
        self.move_old_states();
        processed_input
    }

    /// Releases every key and button, e.g. when the window loses focus.
    pub fn reset_inputs(&mut self) {
        for state in self.keyboard_inputs_new.values_mut() {
            *state = false;
        }
        for state in self.mouse_inputs.mouse_button_inputs_new.values_mut() {
            *state = false;
        }
        self.move_old_states();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
