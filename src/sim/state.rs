//! World state and body types
//!
//! Everything the frame loop mutates lives on `World`; there are no globals.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::input::{InputState, Key};
use crate::consts::*;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Friction regime for resting bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceMode {
    #[default]
    Normal,
    /// Much lower friction, bodies slide
    Ice,
}

impl SurfaceMode {
    pub fn toggled(self) -> Self {
        match self {
            SurfaceMode::Normal => SurfaceMode::Ice,
            SurfaceMode::Ice => SurfaceMode::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceMode::Normal => "Normal",
            SurfaceMode::Ice => "Ice",
        }
    }
}

/// Images a platform may be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Texture {
    BrickWall,
}

/// What a body is; physics only cares whether it is the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Platform {
        color: String,
        /// Drawn instead of the fill colour when present
        texture: Option<Texture>,
    },
}

/// An axis-aligned moving rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner, y grows downward
    pub pos: DVec2,
    pub vel: DVec2,
    pub width: f64,
    pub height: f64,
    pub kind: BodyKind,
}

impl Body {
    /// Square player body at rest
    pub fn player(pos: DVec2, size: f64) -> Result<Self, ConfigError> {
        check_size(size, size)?;
        Ok(Self::at_rest(pos, DVec2::splat(size), BodyKind::Player))
    }

    /// Platform body at rest
    pub fn platform(
        pos: DVec2,
        size: DVec2,
        color: impl Into<String>,
        texture: Option<Texture>,
    ) -> Result<Self, ConfigError> {
        check_size(size.x, size.y)?;
        Ok(Self::at_rest(
            pos,
            size,
            BodyKind::Platform {
                color: color.into(),
                texture,
            },
        ))
    }

    fn at_rest(pos: DVec2, size: DVec2, kind: BodyKind) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            width: size.x,
            height: size.y,
            kind,
        }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.width
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, BodyKind::Player)
    }
}

fn check_size(width: f64, height: f64) -> Result<(), ConfigError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize { width, height })
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub player: Body,
    /// Update and draw order; platforms never collide with each other
    pub platforms: Vec<Body>,
    /// Canvas width and height
    pub bounds: DVec2,
    pub surface: SurfaceMode,
    pub input: InputState,
    pub tuning: Tuning,
    /// Frames simulated so far
    pub frame: u64,
}

impl World {
    /// Default scene for a viewport of the given size
    pub fn new(viewport: DVec2) -> Self {
        let tuning = Tuning::default();
        Self {
            player: Body::at_rest(
                PLAYER_START,
                DVec2::splat(tuning.player_size),
                BodyKind::Player,
            ),
            platforms: default_platforms(viewport.y),
            bounds: viewport - DVec2::splat(tuning.canvas_margin),
            surface: SurfaceMode::Normal,
            input: InputState::default(),
            tuning,
            frame: 0,
        }
    }

    /// Default scene with custom tuning
    pub fn with_tuning(viewport: DVec2, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let mut world = Self::new(viewport);
        world.player = Body::player(PLAYER_START, tuning.player_size)?;
        world.bounds = viewport - DVec2::splat(tuning.canvas_margin);
        world.tuning = tuning;
        Ok(world)
    }

    /// A canvas with only the player in it
    pub fn empty(bounds: DVec2, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        check_size(bounds.x, bounds.y)?;
        Ok(Self {
            player: Body::player(PLAYER_START, tuning.player_size)?,
            platforms: Vec::new(),
            bounds,
            surface: SurfaceMode::Normal,
            input: InputState::default(),
            tuning,
            frame: 0,
        })
    }

    /// Flip between normal and ice friction
    pub fn toggle_surface(&mut self) -> SurfaceMode {
        self.surface = self.surface.toggled();
        log::debug!("Surface mode: {}", self.surface.as_str());
        self.surface
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            // No grounded check: the player can jump mid-air
            Key::Jump => self.player.vel.y = -self.tuning.jump_speed,
            _ => self.input.press(key),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }
}

/// The three starting platforms. Heights hang off the viewport bottom, not the canvas.
fn default_platforms(viewport_height: f64) -> Vec<Body> {
    let layout = [
        (DVec2::new(300.0, 600.0), DVec2::new(200.0, 2000.0), PLATFORM_COLOR, None),
        (
            DVec2::new(800.0, viewport_height - 200.0),
            DVec2::new(200.0, 200.0),
            "#fa8",
            Some(Texture::BrickWall),
        ),
        (
            DVec2::new(1200.0, viewport_height - 150.0),
            DVec2::new(100.0, 150.0),
            "#77f",
            None,
        ),
    ];

    layout
        .into_iter()
        .map(|(pos, size, color, texture)| {
            Body::at_rest(
                pos,
                size,
                BodyKind::Platform {
                    color: color.to_string(),
                    texture,
                },
            )
        })
        .collect()
}
