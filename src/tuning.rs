//! Physics tuning
//!
//! Every constant the simulation reads lives here so a page can override
//! them with an inline JSON block (or the headless runner with a file).
//! Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Physics constants, in pixels and pixels-per-frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added each frame while falling
    pub gravity: f64,

    // === Bounces ===
    /// Fraction of horizontal speed kept when the player hits a side wall
    pub wall_bounce: f64,
    /// Fraction of vertical speed kept when the player hits the ceiling
    pub ceiling_bounce: f64,
    /// Fraction of vertical speed kept on a hard landing
    pub landing_bounce: f64,
    /// Downward speed above which a landing bounces instead of settling
    pub landing_bounce_threshold: f64,
    /// Fraction of horizontal speed kept when the player hits a platform side
    pub side_bounce: f64,

    // === Friction ===
    /// Horizontal speeds below this snap to zero
    pub friction_snap: f64,
    /// Per-frame horizontal decay on normal ground
    pub friction_normal: f64,
    /// Per-frame horizontal decay on ice
    pub friction_ice: f64,

    // === Controls ===
    /// Horizontal speed while a direction key is held
    pub run_speed: f64,
    /// Upward speed set by the jump key
    pub jump_speed: f64,
    /// Right key moves the player only while `x < run_band_max`
    pub run_band_max: f64,
    /// Left key moves the player only while `x > run_band_min`
    pub run_band_min: f64,

    // === Layout ===
    /// Player side length
    pub player_size: f64,
    /// Viewport pixels left out of the canvas on each axis
    pub canvas_margin: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,

            wall_bounce: 0.9,
            ceiling_bounce: 0.5,
            landing_bounce: 0.5,
            landing_bounce_threshold: 2.0,
            side_bounce: 0.9,

            friction_snap: 0.5,
            friction_normal: 0.5,
            friction_ice: 0.99,

            run_speed: 15.0,
            jump_speed: 20.0,
            run_band_max: 400.0,
            run_band_min: 200.0,

            player_size: 30.0,
            canvas_margin: 2.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every constant is finite and in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("gravity", self.gravity),
            ("landing_bounce_threshold", self.landing_bounce_threshold),
            ("friction_snap", self.friction_snap),
            ("run_speed", self.run_speed),
            ("jump_speed", self.jump_speed),
            ("canvas_margin", self.canvas_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        let unit = [
            ("wall_bounce", self.wall_bounce),
            ("ceiling_bounce", self.ceiling_bounce),
            ("landing_bounce", self.landing_bounce),
            ("side_bounce", self.side_bounce),
            ("friction_normal", self.friction_normal),
            ("friction_ice", self.friction_ice),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        if !self.player_size.is_finite() || self.player_size <= 0.0 {
            return Err(ConfigError::InvalidTuning {
                field: "player_size",
                value: self.player_size,
            });
        }

        if !(self.run_band_min < self.run_band_max) {
            return Err(ConfigError::InvalidRunBand {
                min: self.run_band_min,
                max: self.run_band_max,
            });
        }

        Ok(())
    }

    /// DOM id of the optional inline JSON override
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "tuning";

    /// Read the `<script id="tuning">` override from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning override from page");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Read a JSON override from disk (headless runner)
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading tuning from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
