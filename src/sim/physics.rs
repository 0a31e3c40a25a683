//! Vertical player physics
//!
//! Explicit Euler with a fixed timestep of one tick.

use super::state::Player;
use crate::settings::Tuning;

/// Advance velocity then position, landing on the ground line
pub fn integrate(player: &mut Player, ground_y: f32) {
    player.vel_y += player.gravity;
    player.pos.y += player.vel_y;

    if player.pos.y > ground_y {
        player.pos.y = ground_y;
        player.vel_y = 0.0;
        player.airborne = false;
    }
}

/// Start a jump if standing on the ground. Returns whether it happened.
pub fn try_jump(player: &mut Player) -> bool {
    if player.airborne {
        return false;
    }
    player.vel_y = player.jump_power;
    player.airborne = true;
    true
}

/// Advance the cosmetic roll angle
pub fn spin(player: &mut Player, speed: f32, tuning: &Tuning) {
    if player.airborne {
        player.angle += tuning.airborne_spin;
    } else {
        player.angle += speed * tuning.grounded_spin_factor;
    }
}
