//! Frame observer hooks
//!
//! The frame driver calls these at the points where the browser version
//! draws. Bodies are handed over before they integrate, so a painter sees
//! the same positions the player saw last frame.

use glam::DVec2;

use super::collision::{BoundaryContact, PlatformContact};
use super::state::{Body, SurfaceMode, World};
use super::tick::ControlOutcome;

/// Trait for watching a frame as it runs. All methods default to no-ops.
pub trait FrameObserver {
    /// Called before any body moves.
    fn on_frame_start(&mut self, _bounds: DVec2, _surface: SurfaceMode) {}

    /// Called for each platform, in order, before it integrates.
    fn on_platform(&mut self, _index: usize, _platform: &Body) {}

    /// Called after a platform was resolved against the player, if they touched.
    /// `player` already carries the response.
    fn on_platform_contact(&mut self, _index: usize, _contact: PlatformContact, _player: &Body) {}

    /// Called once the held keys have been turned into velocities.
    fn on_controls(&mut self, _outcome: ControlOutcome) {}

    /// Called with the player just before it integrates.
    fn on_player(&mut self, _player: &Body, _surface: SurfaceMode) {}

    /// Called after the player integrated, if it touched a canvas edge.
    fn on_boundary_contact(&mut self, _contact: BoundaryContact) {}

    /// Called once the frame is complete.
    fn on_frame_end(&mut self, _world: &World) {}
}

/// Observer that does nothing
pub struct NoOpObserver;

impl FrameObserver for NoOpObserver {}
