//! # Input State
//!
//! Button and key transitions plus the pointer snapshot a frame is processed with.

use std::collections::HashMap;

use winit::{dpi::PhysicalPosition, event::MouseButton, keyboard::KeyCode};

use super::InputSource;
use crate::engine_state::interaction::inventory_pointer::{
    POINTER_AXIS_X, POINTER_AXIS_Y, POINTER_DEVICE,
};

/// Represents the state of a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Key/button is not pressed
    #[default]
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    pub fn is_just_released(&self) -> bool {
        matches!(self, RawInputState::Released)
    }

    /// Derives the transition from the previous and current raw down states.
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// A snapshot of the processed input states for one frame.
#[derive(Debug, Clone, Default)]
pub struct ProcessedInputState {
    /// Current state of all tracked keyboard keys
    pub keyboard_states: HashMap<KeyCode, RawInputState>,

    /// Current state of mouse buttons
    pub mouse_button_states: HashMap<MouseButton, RawInputState>,

    /// Pointer position normalized to `[-1, 1]` per axis, top-left is `(-1, -1)`
    pub pointer: Option<(f32, f32)>,
}

impl ProcessedInputState {
    pub fn get_key_state(&self, key: KeyCode) -> RawInputState {
        self.keyboard_states.get(&key).copied().unwrap_or_default()
    }

    pub fn get_mouse_button_state(&self, button: MouseButton) -> RawInputState {
        self.mouse_button_states.get(&button).copied().unwrap_or_default()
    }

    pub fn get_pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }
}

impl InputSource for ProcessedInputState {
    fn get_axis(&self, device: &str, axis: &str) -> f32 {
        let Some((x, y)) = self.pointer else {
            return 0.0;
        };

        match (device, axis) {
            (POINTER_DEVICE, POINTER_AXIS_X) => x,
            (POINTER_DEVICE, POINTER_AXIS_Y) => y,
            _ => 0.0,
        }
    }
}

/// Tracks the state of mouse inputs: buttons and the cursor position.
#[derive(Debug, Default)]
pub struct MouseInput {
    /// Previous state of each mouse button (pressed/released)
    pub mouse_button_inputs_old: HashMap<MouseButton, bool>,
    /// Current state of each mouse button (pressed/released)
    pub mouse_button_inputs_new: HashMap<MouseButton, bool>,

    /// Last reported cursor position in physical pixels
    pub cursor_position: Option<PhysicalPosition<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_follow_previous_and_current_state() {
        assert_eq!(RawInputState::from_raw_states(false, true), RawInputState::Pressed);
        assert_eq!(RawInputState::from_raw_states(true, true), RawInputState::Held);
        assert_eq!(RawInputState::from_raw_states(true, false), RawInputState::Released);
        assert!(RawInputState::Held.is_active());
        assert!(!RawInputState::Released.is_active());
    }

    #[test]
    fn axes_read_the_pointer() {
        let state = ProcessedInputState {
            pointer: Some((0.25, -0.5)),
            ..Default::default()
        };
        assert_eq!(state.get_axis("Mouse", "X"), 0.25);
        assert_eq!(state.get_axis("Mouse", "Y"), -0.5);
        assert_eq!(state.get_axis("Gamepad", "X"), 0.0);
        assert_eq!(ProcessedInputState::default().get_axis("Mouse", "X"), 0.0);
    }
}
