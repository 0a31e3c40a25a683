//! Difficulty curve
//!
//! Spawn cadence and scroll speed are pure functions of the obstacle counter,
//! so they can be recomputed every tick without drifting.

use crate::consts::*;

/// Ticks between spawns for the given obstacle counter
pub fn spawn_interval(counter: u32) -> u32 {
    match counter {
        0..=10 => SPAWN_INTERVAL_EASY,
        11..=20 => SPAWN_INTERVAL_MEDIUM,
        _ => SPAWN_INTERVAL_HARD,
    }
}

/// Scroll speed after `counter` obstacles have been passed
pub fn scroll_speed(counter: u32) -> f32 {
    BASE_SPEED + SPEED_STEP * (counter / SPEED_TIER_SIZE) as f32
}

/// How many speed tiers were crossed going from `prev` to `next`
///
/// Zero unless the counter moved onto or past a multiple of the tier size,
/// so a crossing fires exactly once no matter how often it is queried.
pub fn speed_steps(prev: u32, next: u32) -> u32 {
    (next / SPEED_TIER_SIZE).saturating_sub(prev / SPEED_TIER_SIZE)
}
