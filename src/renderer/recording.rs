//! In-memory surface that records draw calls
//!
//! Used by the headless runner and tests in place of a canvas.

use glam::DVec2;
use serde::Serialize;

use super::Surface;
use crate::sim::Texture;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        size: DVec2,
    },
    FillRect {
        pos: DVec2,
        size: DVec2,
        color: String,
    },
    Image {
        texture: Texture,
        pos: DVec2,
        size: DVec2,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: DVec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_rect(&mut self, pos: DVec2, size: DVec2, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn draw_image(&mut self, texture: Texture, pos: DVec2, size: DVec2) {
        self.commands.push(DrawCommand::Image { texture, pos, size });
    }
}
