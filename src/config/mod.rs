//! # Configuration
//!
//! Session settings for the interaction core, loaded from JSON.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "platform": "constrained_input", "world_size": [128, 64, 128] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::engine_state::interaction::dig_action::{BREAK_COOLDOWN, NUM_STEPS, REACH_DISTANCE};
use crate::engine_state::interaction::inventory_pointer::{
    CursorSlotResolver, PointerSlotResolver, SlotResolver,
};
use crate::engine_state::voxels::chunk::CHUNK_DIMENSION;

/// Environment variable naming a config file for [`crate::run`].
pub const CONFIG_ENV_VAR: &str = "VOXEL_INTERACTION_CONFIG";

/// Target platform class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformProfile {
    /// Keyboard and mouse; has a pause menu.
    #[default]
    Desktop,
    /// Gamepad-style input; the inventory is navigated with a discrete cursor.
    ConstrainedInput,
}

impl PlatformProfile {
    /// Builds the inventory slot strategy for this platform.
    pub fn slot_resolver(self) -> Box<dyn SlotResolver> {
        match self {
            PlatformProfile::Desktop => Box::new(PointerSlotResolver),
            PlatformProfile::ConstrainedInput => Box::new(CursorSlotResolver),
        }
    }

    pub fn has_pause_menu(self) -> bool {
        matches!(self, PlatformProfile::Desktop)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Length of the dig ray in voxels.
    pub reach_distance: f32,
    /// Samples taken along the dig ray.
    pub cast_steps: u32,
    /// Seconds between accepted dig triggers.
    pub break_cooldown: f32,
    pub platform: PlatformProfile,
    pub world_size: [i32; 3],
    pub save_directory: PathBuf,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            reach_distance: REACH_DISTANCE,
            cast_steps: NUM_STEPS,
            break_cooldown: BREAK_COOLDOWN,
            platform: PlatformProfile::Desktop,
            world_size: [64, 64, 64],
            save_directory: PathBuf::from("saves"),
        }
    }
}

impl InteractionConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing interaction config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("loading config {}", path.display()))?;
        log::info!("Loaded interaction config from {}", path.display());
        Ok(config)
    }

    /// Checks the values the interaction core assumes.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.reach_distance > 0.0) {
            bail!("reach_distance must be positive, got {}", self.reach_distance);
        }
        if self.cast_steps == 0 {
            bail!("cast_steps must be at least 1");
        }
        if !(self.break_cooldown >= 0.0) {
            bail!("break_cooldown must not be negative, got {}", self.break_cooldown);
        }
        if let Some(axis) = self
            .world_size
            .iter()
            .find(|axis| **axis <= 0 || **axis % CHUNK_DIMENSION != 0)
        {
            bail!(
                "world_size axes must be positive multiples of {}, got {} in {:?}",
                CHUNK_DIMENSION,
                axis,
                self.world_size
            );
        }
        Ok(())
    }

    pub fn world_extent(&self) -> Vector3<i32> {
        Vector3::from(self.world_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = InteractionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, InteractionConfig::default());
        assert_eq!(config.cast_steps, 50);
        assert_eq!(config.reach_distance, 4.0);
    }

    #[test]
    fn platform_uses_snake_case_names() {
        let config =
            InteractionConfig::from_json_str(r#"{ "platform": "constrained_input" }"#).unwrap();
        assert_eq!(config.platform, PlatformProfile::ConstrainedInput);
        assert!(!config.platform.has_pause_menu());
        assert!(PlatformProfile::Desktop.has_pause_menu());
    }

    #[test]
    fn world_size_must_be_chunk_aligned() {
        let err = InteractionConfig::from_json_str(r#"{ "world_size": [64, 40, 64] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("40"));

        assert!(InteractionConfig::from_json_str(r#"{ "world_size": [0, 16, 16] }"#).is_err());
    }

    #[test]
    fn rejects_degenerate_casts() {
        assert!(InteractionConfig::from_json_str(r#"{ "cast_steps": 0 }"#).is_err());
        assert!(InteractionConfig::from_json_str(r#"{ "reach_distance": -1.0 }"#).is_err());
        assert!(InteractionConfig::from_json_str(r#"{ "break_cooldown": -0.5 }"#).is_err());
    }

    #[test]
    fn load_reports_missing_files() {
        let err = InteractionConfig::load("/nonexistent/interaction.json").unwrap_err();
        assert!(format!("{:#}", err).contains("interaction.json"));
    }
}
