//! Drawing module
//!
//! The simulation never draws. `WorldPainter` watches a frame through the
//! `FrameObserver` hooks and issues draw calls on any `Surface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::DVec2;

use crate::consts::{PLAYER_COLOR, PLAYER_ICE_COLOR};
use crate::sim::{Body, BodyKind, FrameObserver, SurfaceMode, Texture};

/// A 2D drawing target
pub trait Surface {
    /// Wipe the whole drawing area
    fn clear(&mut self, size: DVec2);
    /// Solid rectangle, colour as a CSS colour string
    fn fill_rect(&mut self, pos: DVec2, size: DVec2, color: &str);
    /// Texture stretched over a rectangle
    fn draw_image(&mut self, texture: Texture, pos: DVec2, size: DVec2);
}

/// Player fill for the current surface mode
pub fn player_color(surface: SurfaceMode) -> &'static str {
    match surface {
        SurfaceMode::Normal => PLAYER_COLOR,
        SurfaceMode::Ice => PLAYER_ICE_COLOR,
    }
}

/// Draw one body the way it looks on screen
pub fn draw_body<S: Surface>(surface: &mut S, body: &Body, mode: SurfaceMode) {
    match &body.kind {
        BodyKind::Player => surface.fill_rect(body.pos, body.size(), player_color(mode)),
        BodyKind::Platform {
            texture: Some(texture),
            ..
        } => surface.draw_image(*texture, body.pos, body.size()),
        BodyKind::Platform { color, .. } => surface.fill_rect(body.pos, body.size(), color),
    }
}

/// Frame observer that paints every body as the frame visits it
pub struct WorldPainter<'a, S: Surface> {
    surface: &'a mut S,
    mode: SurfaceMode,
}

impl<'a, S: Surface> WorldPainter<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        Self {
            surface,
            mode: SurfaceMode::Normal,
        }
    }
}

impl<S: Surface> FrameObserver for WorldPainter<'_, S> {
    fn on_frame_start(&mut self, bounds: DVec2, surface: SurfaceMode) {
        self.mode = surface;
        self.surface.clear(bounds);
    }

    fn on_platform(&mut self, _index: usize, platform: &Body) {
        draw_body(&mut *self.surface, platform, self.mode);
    }

    fn on_player(&mut self, player: &Body, surface: SurfaceMode) {
        draw_body(&mut *self.surface, player, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{World, tick_observed};

    #[test]
    fn test_paint_order() {
        let mut world = World::new(DVec2::new(1280.0, 720.0));
        let mut surface = RecordingSurface::default();

        tick_observed(&mut world, &mut WorldPainter::new(&mut surface));

        assert_eq!(surface.commands.len(), 5);
        assert_eq!(
            surface.commands[0],
            DrawCommand::Clear {
                size: DVec2::new(1278.0, 718.0)
            }
        );
        assert_eq!(
            surface.commands[1],
            DrawCommand::FillRect {
                pos: DVec2::new(300.0, 600.0),
                size: DVec2::new(200.0, 2000.0),
                color: "#7f7".to_string(),
            }
        );
        assert_eq!(
            surface.commands[2],
            DrawCommand::Image {
                texture: Texture::BrickWall,
                pos: DVec2::new(800.0, 520.0),
                size: DVec2::new(200.0, 200.0),
            }
        );
        assert!(matches!(
            &surface.commands[3],
            DrawCommand::FillRect { color, .. } if color == "#77f"
        ));
        assert_eq!(
            surface.commands[4],
            DrawCommand::FillRect {
                pos: DVec2::new(100.0, 100.0),
                size: DVec2::splat(30.0),
                color: PLAYER_COLOR.to_string(),
            }
        );
    }

    #[test]
    fn test_player_draws_before_moving() {
        let mut world = World::new(DVec2::new(1280.0, 720.0));
        world.player.vel.y = 4.0;
        let mut surface = RecordingSurface::default();

        tick_observed(&mut world, &mut WorldPainter::new(&mut surface));

        assert_eq!(world.player.pos.y, 104.0);
        assert!(matches!(
            surface.commands.last(),
            Some(DrawCommand::FillRect { pos, .. }) if pos.y == 100.0
        ));
    }

    #[test]
    fn test_ice_player_color() {
        let mut world = World::new(DVec2::new(1280.0, 720.0));
        world.toggle_surface();
        let mut surface = RecordingSurface::default();

        tick_observed(&mut world, &mut WorldPainter::new(&mut surface));

        assert!(matches!(
            surface.commands.last(),
            Some(DrawCommand::FillRect { color, .. }) if color == PLAYER_ICE_COLOR
        ));
    }
}
