//! Contact responses: horizontal friction and landing damping

use super::state::{Body, SurfaceMode};
use crate::tuning::Tuning;

/// Per-frame horizontal decay factor for the current surface
#[inline]
pub fn friction_factor(surface: SurfaceMode, tuning: &Tuning) -> f64 {
    match surface {
        SurfaceMode::Normal => tuning.friction_normal,
        SurfaceMode::Ice => tuning.friction_ice,
    }
}

/// Decay horizontal speed toward zero, snapping once it is slow enough
pub fn apply_friction(body: &mut Body, surface: SurfaceMode, tuning: &Tuning) {
    if body.vel.x.abs() < tuning.friction_snap {
        body.vel.x = 0.0;
    } else {
        body.vel.x *= friction_factor(surface, tuning);
    }
}

/// Bounce hard landings, settle soft ones
pub fn ease_landing(body: &mut Body, tuning: &Tuning) {
    if body.vel.y > tuning.landing_bounce_threshold {
        body.vel.y *= -tuning.landing_bounce;
    } else {
        body.vel.y = 0.0;
    }
}

/// Response for a body resting on a floor or platform top
pub fn settle(body: &mut Body, surface: SurfaceMode, tuning: &Tuning) {
    apply_friction(body, surface, tuning);
    ease_landing(body, tuning);
}
