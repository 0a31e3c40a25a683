//! Headless collaborators for the native binary and tests

use glam::Vec2;

use super::{Color, Renderer, ScoreDisplay};
use crate::sim::Viewport;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Viewport),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
}

/// Keeps the draw calls of the most recent frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub commands: Vec<DrawCommand>,
    /// Frames started (number of clears)
    pub frames: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn rects(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self, viewport: Viewport) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(viewport));
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }
}

/// Score display that logs and remembers the last text shown
#[derive(Debug, Default)]
pub struct LogScoreDisplay {
    pub last: Option<String>,
    pub updates: u32,
}

impl ScoreDisplay for LogScoreDisplay {
    fn show_best(&mut self, text: &str) {
        log::info!("{}", text);
        self.last = Some(text.to_string());
        self.updates += 1;
    }
}
