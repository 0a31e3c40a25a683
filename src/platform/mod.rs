//! Platform abstraction layer
//!
//! The host provides:
//! - A renderer able to clear and fill circles/rectangles
//! - A score display for the session best
//! - Input events, forwarded to `Game::on_jump_requested`/`on_restart_requested`
//! - The viewport size each frame

use glam::Vec2;

use crate::sim::Viewport;

pub mod headless;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Minimal immediate-mode drawing surface
pub trait Renderer {
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
}

/// Sink for the session-best text, written only when a new best is set
pub trait ScoreDisplay {
    fn show_best(&mut self, text: &str);
}
