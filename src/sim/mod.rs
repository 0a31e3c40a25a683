//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collides};
pub use difficulty::{scroll_speed, spawn_interval, speed_steps};
pub use physics::{integrate, spin, try_jump};
pub use spawn::{obstacle_height, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, Viewport};
pub use tick::{TickInput, tick};
