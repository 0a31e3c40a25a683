//! Tree Roller - A side-scrolling jump-the-trees arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, difficulty)
//! - `game`: Host-facing wrapper that owns the session and drives collaborators
//! - `render`: Frame composition on top of the abstract renderer
//! - `platform`: Renderer/score display abstractions and headless implementations
//! - `audio`: Sound cue abstraction

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::SessionBest;
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Upward impulse applied on jump (negative y is up)
    pub const JUMP_POWER: f32 = -15.0;
    /// Added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.8;

    /// Rolling spin per unit of scroll speed while grounded (radians/tick)
    pub const GROUNDED_SPIN_FACTOR: f32 = 0.05;
    /// Spin while airborne (radians/tick)
    pub const AIRBORNE_SPIN: f32 = 0.2;

    /// Ground line sits this far above the viewport bottom
    pub const GROUND_OFFSET: f32 = 100.0;
    /// Height of the ground strip drawn at the bottom of the viewport
    pub const GROUND_THICKNESS: f32 = 50.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const BASELINE_HEIGHT: u32 = 60;
    /// Counter value from which heights start to vary
    pub const VARIED_HEIGHT_FROM: u32 = 20;
    /// Tall obstacle height range (forced after two small ones)
    pub const TALL_HEIGHT_MIN: u32 = 90;
    pub const TALL_HEIGHT_MAX: u32 = 150;
    /// Regular obstacle height range
    pub const REGULAR_HEIGHT_MIN: u32 = 40;
    pub const REGULAR_HEIGHT_MAX: u32 = 100;

    /// Scroll speed at session start (pixels/tick)
    pub const BASE_SPEED: f32 = 6.0;
    pub const SPEED_STEP: f32 = 1.0;
    /// Speed increases once every this many passed obstacles
    pub const SPEED_TIER_SIZE: u32 = 10;

    /// Spawn intervals (ticks) by difficulty tier
    pub const SPAWN_INTERVAL_EASY: u32 = 100;
    pub const SPAWN_INTERVAL_MEDIUM: u32 = 70;
    pub const SPAWN_INTERVAL_HARD: u32 = 50;
}
