//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and geometry knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity each tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_power: f32,
    /// Player's fixed left edge
    pub player_x: f32,
    pub player_radius: f32,
    /// Ground line distance from the viewport bottom
    pub ground_offset: f32,
    /// Height of the drawn ground strip
    pub ground_thickness: f32,
    pub obstacle_width: f32,
    /// Roll per unit of scroll speed while grounded
    pub grounded_spin_factor: f32,
    /// Roll per tick while airborne
    pub airborne_spin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            player_x: PLAYER_X,
            player_radius: PLAYER_RADIUS,
            ground_offset: GROUND_OFFSET,
            ground_thickness: GROUND_THICKNESS,
            obstacle_width: OBSTACLE_WIDTH,
            grounded_spin_factor: GROUNDED_SPIN_FACTOR,
            airborne_spin: AIRBORNE_SPIN,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Skip all sound cues
    pub muted: bool,
    /// Fixed RNG seed (random per process when unset)
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
