//! Movement tuning: the immutable per-preset constants and RON preset loading.
//!
//! A `MovementConfig` is built once (from a preset file or `Default`) and then
//! shared read-only by every character using it; runtime retuning happens by
//! swapping the whole config, never by mutating one in place.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable locomotion constants. Units are pixels and seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,
    /// Upward speed of a jump taken from the ground or inside the coyote window.
    pub jump_velocity: f32,
    /// Upward speed of a jump taken from the limited air budget.
    pub air_jump_velocity: f32,
    /// Upward speed retained when the jump control is released early.
    pub min_jump_velocity: f32,
    /// Gravity while standing on the ground.
    pub gravity: f32,
    /// Gravity during a jump ascent, usually lighter than `gravity`.
    pub jump_gravity: f32,
    /// Gravity while descending, usually heavier than `gravity`.
    pub fall_gravity: f32,
    /// Gravity multiplier while fast-falling.
    pub fast_fall_multiplier: f32,
    /// Terminal fall speed; the vertical velocity is clamped to `-max_fall_speed`.
    pub max_fall_speed: f32,
    /// Grace window after walking off a ledge during which a jump still counts
    /// as a ground jump.
    pub coyote_time: f32,
    /// Window during which a jump pressed before landing is remembered.
    pub jump_buffer_time: f32,
    /// Air jumps available per landing (0 = no double jump, 1 = double, etc.)
    pub max_air_jumps: u8,
    /// How far below the feet the ground probe rays reach.
    pub ground_probe_distance: f32,
    /// Horizontal inset of the outer probe rays from the collider edges.
    pub ground_probe_inset: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            acceleration: 3000.0,
            deceleration: 2600.0,
            air_acceleration: 1800.0,
            air_deceleration: 1200.0,
            jump_velocity: 680.0,
            air_jump_velocity: 600.0,
            min_jump_velocity: 260.0,
            gravity: 1800.0,
            jump_gravity: 1500.0,
            fall_gravity: 2300.0,
            fast_fall_multiplier: 1.8,
            max_fall_speed: 1100.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            max_air_jumps: 1,
            ground_probe_distance: 4.0,
            ground_probe_inset: 2.0,
        }
    }
}

impl MovementConfig {
    /// Calculate the maximum height reachable from a single ground jump.
    /// Uses physics formula: h = v² / (2g), with the ascent gravity.
    pub fn single_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.jump_gravity)
    }

    /// Calculate the maximum height reachable with all available jumps.
    /// Each air jump adds its own arc (assuming optimal timing at apex).
    /// This is a conservative estimate - actual height may vary with timing.
    pub fn max_reachable_height(&self) -> f32 {
        let air_jump_height =
            self.air_jump_velocity * self.air_jump_velocity / (2.0 * self.jump_gravity);
        self.single_jump_height() + air_jump_height * self.max_air_jumps as f32
    }

    /// Calculate max reachable height with a safety margin for comfortable platforming.
    /// The margin accounts for imperfect jump timing and player collision box.
    pub fn safe_reachable_height(&self) -> f32 {
        // Use 80% of theoretical max for safe/comfortable gameplay
        self.max_reachable_height() * 0.8
    }
}

/// Error type for preset loading failures.
#[derive(Debug)]
pub struct PresetLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for PresetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a movement preset from a RON file.
pub fn load_preset(path: &Path) -> Result<MovementConfig, PresetLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| PresetLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| PresetLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load a movement preset, falling back to defaults when the file is missing
/// or malformed. Characters keep moving on a vanilla preset either way.
pub fn load_preset_or_default(path: &Path) -> MovementConfig {
    match load_preset(path) {
        Ok(config) => {
            info!("Loaded movement preset from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{}, using default movement preset", e);
            MovementConfig::default()
        }
    }
}
