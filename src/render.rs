//! Frame composition
//!
//! Turns the simulation state into circle/rectangle draw calls.

use glam::Vec2;

use crate::platform::{Color, Renderer};
use crate::sim::{GameState, Obstacle, Player, Viewport};

const GROUND_COLOR: Color = [0.545, 0.271, 0.075, 1.0];
const TRUNK_COLOR: Color = [0.647, 0.165, 0.165, 1.0];
const LEAF_COLOR: Color = [0.0, 0.502, 0.0, 1.0];
const PLAYER_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
const MARKER_COLOR: Color = [0.0, 0.0, 0.0, 1.0];

/// Trunk starts this far below the obstacle top, under the leaves
const TRUNK_INSET_Y: f32 = 30.0;
const TRUNK_INSET_X: f32 = 10.0;
const TRUNK_WIDTH: f32 = 10.0;
const LEAF_OFFSET: Vec2 = Vec2::new(15.0, 25.0);
const LEAF_RADIUS: f32 = 20.0;

/// Draw one complete frame
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, viewport: Viewport, renderer: &mut R) {
    renderer.clear(viewport);
    draw_ground(state, viewport, renderer);
    for obstacle in &state.obstacles {
        draw_obstacle(obstacle, renderer);
    }
    draw_player(&state.player, renderer);
}

fn draw_ground<R: Renderer + ?Sized>(state: &GameState, viewport: Viewport, renderer: &mut R) {
    let thickness = state.tuning.ground_thickness;
    renderer.fill_rect(
        Vec2::new(0.0, viewport.height - thickness),
        Vec2::new(viewport.width, thickness),
        GROUND_COLOR,
    );
}

/// A tree: trunk rectangle topped by a round crown
fn draw_obstacle<R: Renderer + ?Sized>(obstacle: &Obstacle, renderer: &mut R) {
    let trunk_height = (obstacle.height - TRUNK_INSET_Y).max(0.0);
    renderer.fill_rect(
        obstacle.pos + Vec2::new(TRUNK_INSET_X, TRUNK_INSET_Y),
        Vec2::new(TRUNK_WIDTH, trunk_height),
        TRUNK_COLOR,
    );
    renderer.fill_circle(obstacle.pos + LEAF_OFFSET, LEAF_RADIUS, LEAF_COLOR);
}

/// The ball plus a dot on its rim that shows the roll
fn draw_player<R: Renderer + ?Sized>(player: &Player, renderer: &mut R) {
    let center = player.center();
    renderer.fill_circle(center, player.radius, PLAYER_COLOR);

    let marker = center + Vec2::from_angle(player.angle) * (player.radius * 0.6);
    renderer.fill_circle(marker, player.radius * 0.2, MARKER_COLOR);
}
