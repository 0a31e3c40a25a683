//! Obstacle generation
//!
//! Heights are fixed for the first obstacles, then drawn at random with a
//! bias: two small obstacles in a row force a tall one next.

use rand::Rng;

use super::state::{Obstacle, Viewport};
use crate::consts::*;
use crate::settings::Tuning;

/// Pick the height of the next obstacle
///
/// `recent` holds the heights of the most recently spawned obstacles (at
/// most two are looked at). With fewer than two on record the "both small"
/// check holds vacuously.
pub fn obstacle_height<R: Rng + ?Sized>(counter: u32, recent: &[f32], rng: &mut R) -> f32 {
    if counter < VARIED_HEIGHT_FROM {
        return BASELINE_HEIGHT as f32;
    }

    let start = recent.len().saturating_sub(2);
    let last_two_small = recent[start..]
        .iter()
        .all(|&h| h <= BASELINE_HEIGHT as f32);

    let height = if last_two_small {
        rng.random_range(TALL_HEIGHT_MIN..TALL_HEIGHT_MAX)
    } else {
        rng.random_range(REGULAR_HEIGHT_MIN..REGULAR_HEIGHT_MAX)
    };
    height as f32
}

/// Build a new obstacle at the right edge of the viewport, on the ground line
pub fn spawn_obstacle<R: Rng + ?Sized>(
    id: u32,
    counter: u32,
    recent: &[f32],
    viewport: Viewport,
    tuning: &Tuning,
    rng: &mut R,
) -> Obstacle {
    let height = obstacle_height(counter, recent, rng);
    Obstacle::new(
        id,
        viewport.width,
        viewport.ground_y(tuning),
        tuning.obstacle_width,
        height,
    )
}
