//! Per-frame simulation tick
//!
//! One call advances the world by exactly one animation frame. The physics is
//! defined per frame, so there is no dt: velocities are pixels per frame.

use super::collision::{
    BoundaryContact, is_above_floor, is_side_contact, resolve_ceiling, resolve_platform,
    resolve_walls,
};
use super::input::InputState;
use super::observer::{FrameObserver, NoOpObserver};
use super::response::{apply_friction, settle};
use super::state::{Body, SurfaceMode, World};
use crate::tuning::Tuning;

/// Who the direction keys drove this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// Player runs right at full speed
    RunRight,
    /// Player runs left at full speed
    RunLeft,
    /// Player stands still and its momentum (or the held key) moves the platforms
    Scroll,
}

/// Advance the world by one frame
pub fn tick(world: &mut World) {
    tick_observed(world, &mut NoOpObserver);
}

/// Advance the world by one frame, reporting to `observer` along the way
pub fn tick_observed<O: FrameObserver>(world: &mut World, observer: &mut O) {
    observer.on_frame_start(world.bounds, world.surface);

    let World {
        player,
        platforms,
        bounds,
        surface,
        input,
        tuning,
        ..
    } = world;

    for (index, platform) in platforms.iter_mut().enumerate() {
        observer.on_platform(index, platform);
        integrate_platform(platform);

        let contact = resolve_platform(player, platform, *surface, tuning);
        if contact.any() {
            log::trace!("Platform {} contact: {:?}", index, contact);
            observer.on_platform_contact(index, contact, player);
        }
    }

    let outcome = apply_controls(player, platforms, *input, *surface, tuning);
    observer.on_controls(outcome);

    observer.on_player(player, *surface);
    let contact = integrate_player(player, bounds.x, bounds.y, *surface, tuning);
    if contact != BoundaryContact::default() {
        log::trace!("Boundary contact: {:?}", contact);
        observer.on_boundary_contact(contact);
    }

    world.frame += 1;
    observer.on_frame_end(world);
}

/// Platforms only slide horizontally; gravity does not apply to them
#[inline]
pub fn integrate_platform(platform: &mut Body) {
    platform.pos.x += platform.vel.x;
}

/// Move the player one frame and resolve it against the canvas edges.
///
/// Vertical position always moves. Horizontal position moves only when the
/// step would not reach a side wall. Gravity accumulates while the player is
/// above the floor; at the floor it takes friction and landing damping instead.
pub fn integrate_player(
    player: &mut Body,
    canvas_width: f64,
    canvas_height: f64,
    surface: SurfaceMode,
    tuning: &Tuning,
) -> BoundaryContact {
    player.pos.y += player.vel.y;

    let wall = resolve_walls(player, canvas_width, tuning);
    let ceiling = resolve_ceiling(player, tuning);

    let floor = !is_above_floor(player, canvas_height);
    if floor {
        settle(player, surface, tuning);
    } else {
        player.vel.y += tuning.gravity;
    }

    BoundaryContact {
        wall,
        ceiling,
        floor,
    }
}

/// Turn held keys into velocities.
///
/// Inside the run band the keys drive the player directly. Otherwise the
/// player stops and every platform takes the player's leftover momentum
/// (or the held key's speed) so the scene scrolls past it.
pub fn apply_controls(
    player: &mut Body,
    platforms: &mut [Body],
    input: InputState,
    surface: SurfaceMode,
    tuning: &Tuning,
) -> ControlOutcome {
    if input.right_held && player.pos.x < tuning.run_band_max {
        player.vel.x = tuning.run_speed;
        return ControlOutcome::RunRight;
    }
    if input.left_held && player.pos.x > tuning.run_band_min {
        player.vel.x = -tuning.run_speed;
        return ControlOutcome::RunLeft;
    }

    let direction = input.direction();
    for platform in platforms.iter_mut() {
        // Touching platforms get pushed along, the rest scroll the other way
        let push = if is_side_contact(player, platform) {
            1.0
        } else {
            -1.0
        };
        platform.vel.x += push * player.vel.x;
        if direction != 0.0 {
            platform.vel.x = push * direction * tuning.run_speed;
        }
        apply_friction(platform, surface, tuning);
    }
    player.vel.x = 0.0;

    ControlOutcome::Scroll
}
