//! # Interaction
//!
//! Player interaction with the level: sampling the facing ray, resolving inventory
//! clicks and the dig action that ties them together.

pub mod dig_action;
pub mod inventory_pointer;
pub mod ray_cast;

pub use dig_action::{DigAction, DigOutcome, PauseAction};
pub use inventory_pointer::{CursorSlotResolver, PointerSlotResolver, SlotResolver};
pub use ray_cast::{CastSample, RayCast};
