//! Collision detection and response
//!
//! Two kinds of contact: the player against the canvas edges, and the player
//! against each platform. Platforms are never tested against each other.
//! All tests look one frame ahead using the pending velocity.

use super::response::settle;
use super::state::{Body, SurfaceMode};
use crate::tuning::Tuning;

/// What the player touched on one platform this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformContact {
    /// Player came down on the platform top
    pub landed: bool,
    /// Player ran into the platform side
    pub side: bool,
}

impl PlatformContact {
    pub fn any(&self) -> bool {
        self.landed || self.side
    }
}

/// What the player touched on the canvas edges this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryContact {
    pub wall: bool,
    pub ceiling: bool,
    pub floor: bool,
}

/// Player bottom is on or above the platform top and crosses it this frame,
/// while the two overlap horizontally
pub fn is_landing(player: &Body, platform: &Body) -> bool {
    player.bottom() <= platform.pos.y
        && player.bottom() + player.vel.y >= platform.pos.y
        && player.right() >= platform.pos.x
        && player.pos.x <= platform.right()
}

/// Vertical extents overlap now and horizontal extents overlap after both
/// bodies take their pending horizontal step
pub fn is_side_contact(player: &Body, platform: &Body) -> bool {
    player.bottom() >= platform.pos.y
        && player.pos.y <= platform.bottom()
        && player.right() + player.vel.x >= platform.pos.x + platform.vel.x
        && player.pos.x + player.vel.x <= platform.right() + platform.vel.x
}

/// Resolve the player against one platform.
///
/// Landing and side contact are checked independently and can both fire.
/// Only the player reacts; the platform keeps its velocity.
pub fn resolve_platform(
    player: &mut Body,
    platform: &Body,
    surface: SurfaceMode,
    tuning: &Tuning,
) -> PlatformContact {
    let mut contact = PlatformContact::default();

    if is_landing(player, platform) {
        settle(player, surface, tuning);
        contact.landed = true;
    }

    if is_side_contact(player, platform) {
        player.vel.x *= -tuning.side_bounce;
        contact.side = true;
    }

    contact
}

/// Bounce off the left/right canvas edge, or take the horizontal step.
/// Returns true on a bounce; the player does not move that frame.
pub fn resolve_walls(player: &mut Body, canvas_width: f64, tuning: &Tuning) -> bool {
    if player.right() + player.vel.x >= canvas_width || player.pos.x + player.vel.x <= 0.0 {
        player.vel.x *= -tuning.wall_bounce;
        true
    } else {
        player.pos.x += player.vel.x;
        false
    }
}

/// Bounce off the canvas top. Position is not corrected.
pub fn resolve_ceiling(player: &mut Body, tuning: &Tuning) -> bool {
    if player.pos.y + player.vel.y <= 0.0 {
        player.vel.y *= -tuning.ceiling_bounce;
        true
    } else {
        false
    }
}

/// Player bottom stays within the canvas after the pending vertical step
#[inline]
pub fn is_above_floor(player: &Body, canvas_height: f64) -> bool {
    player.bottom() + player.vel.y <= canvas_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    fn player_at(pos: DVec2, vel: DVec2) -> Body {
        let mut player = Body::player(pos, 30.0).unwrap();
        player.vel = vel;
        player
    }

    fn platform_at(pos: DVec2, size: DVec2) -> Body {
        Body::platform(pos, size, "#7f7", None).unwrap()
    }

    #[test]
    fn test_landing_on_platform() {
        let tuning = Tuning::default();
        let platform = platform_at(DVec2::new(100.0, 200.0), DVec2::new(200.0, 50.0));
        // Bottom edge at 197, crossing 200 this frame
        let mut player = player_at(DVec2::new(150.0, 167.0), DVec2::new(0.0, 5.0));

        let contact = resolve_platform(&mut player, &platform, SurfaceMode::Normal, &tuning);

        assert!(contact.landed);
        assert_eq!(player.vel.y, -2.5);
    }

    #[test]
    fn test_soft_landing_settles() {
        let tuning = Tuning::default();
        let platform = platform_at(DVec2::new(100.0, 200.0), DVec2::new(200.0, 50.0));
        let mut player = player_at(DVec2::new(150.0, 169.0), DVec2::new(3.0, 1.5));

        let contact = resolve_platform(&mut player, &platform, SurfaceMode::Normal, &tuning);

        assert!(contact.landed);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.vel.x, 1.5);
    }

    #[test]
    fn test_no_landing_when_beside() {
        let platform = platform_at(DVec2::new(100.0, 200.0), DVec2::new(200.0, 50.0));
        let player = player_at(DVec2::new(400.0, 167.0), DVec2::new(0.0, 5.0));
        assert!(!is_landing(&player, &platform));
    }

    #[test]
    fn test_no_landing_when_not_reaching() {
        let platform = platform_at(DVec2::new(100.0, 200.0), DVec2::new(200.0, 50.0));
        let player = player_at(DVec2::new(150.0, 100.0), DVec2::new(0.0, 5.0));
        assert!(!is_landing(&player, &platform));
    }

    #[test]
    fn test_side_contact_reflects_player_only() {
        let tuning = Tuning::default();
        let mut platform = platform_at(DVec2::new(100.0, 200.0), DVec2::new(100.0, 100.0));
        platform.vel.x = -2.0;
        // Vertically inside, running right into the left face
        let mut player = player_at(DVec2::new(65.0, 220.0), DVec2::new(10.0, 0.0));

        let contact = resolve_platform(&mut player, &platform, SurfaceMode::Normal, &tuning);

        assert!(contact.side);
        assert!(!contact.landed);
        assert_eq!(player.vel.x, -9.0);
        assert_eq!(platform.vel.x, -2.0);
    }

    #[test]
    fn test_side_contact_uses_platform_velocity() {
        let platform_pos = DVec2::new(100.0, 200.0);
        let mut platform = platform_at(platform_pos, DVec2::new(100.0, 100.0));
        let player = player_at(DVec2::new(50.0, 220.0), DVec2::new(5.0, 0.0));

        // 50 + 30 + 5 = 85 < 100: clear
        assert!(!is_side_contact(&player, &platform));

        // Platform closing in reaches the player
        platform.vel.x = -16.0;
        assert!(is_side_contact(&player, &platform));
    }

    #[test]
    fn test_landing_and_side_both_fire() {
        let tuning = Tuning::default();
        let platform = platform_at(DVec2::new(100.0, 200.0), DVec2::new(200.0, 50.0));
        // Bottom edge exactly on the top: both predicates hold
        let mut player = player_at(DVec2::new(150.0, 170.0), DVec2::new(4.0, 6.0));

        let contact = resolve_platform(&mut player, &platform, SurfaceMode::Normal, &tuning);

        assert!(contact.landed);
        assert!(contact.side);
        // Friction then side bounce: 4 * 0.5 * -0.9
        assert!((player.vel.x - -1.8).abs() < 1e-12);
        assert_eq!(player.vel.y, -3.0);
    }

    #[test]
    fn test_wall_bounce_left() {
        let tuning = Tuning::default();
        let mut player = player_at(DVec2::new(0.0, 100.0), DVec2::new(-5.0, 0.0));

        assert!(resolve_walls(&mut player, 500.0, &tuning));
        assert_eq!(player.vel.x, 4.5);
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_wall_bounce_right() {
        let tuning = Tuning::default();
        let mut player = player_at(DVec2::new(465.0, 100.0), DVec2::new(5.0, 0.0));

        assert!(resolve_walls(&mut player, 500.0, &tuning));
        assert_eq!(player.vel.x, -4.5);
        assert_eq!(player.pos.x, 465.0);
    }

    #[test]
    fn test_walls_allow_free_move() {
        let tuning = Tuning::default();
        let mut player = player_at(DVec2::new(100.0, 100.0), DVec2::new(7.0, 0.0));

        assert!(!resolve_walls(&mut player, 500.0, &tuning));
        assert_eq!(player.pos.x, 107.0);
        assert_eq!(player.vel.x, 7.0);
    }

    #[test]
    fn test_ceiling_bounce() {
        let tuning = Tuning::default();
        let mut player = player_at(DVec2::new(100.0, 5.0), DVec2::new(0.0, -10.0));
        assert!(resolve_ceiling(&mut player, &tuning));
        assert_eq!(player.vel.y, 5.0);

        let mut player = player_at(DVec2::new(100.0, 50.0), DVec2::new(0.0, -10.0));
        assert!(!resolve_ceiling(&mut player, &tuning));
        assert_eq!(player.vel.y, -10.0);
    }

    #[test]
    fn test_floor_check() {
        let player = player_at(DVec2::new(100.0, 460.0), DVec2::new(0.0, 10.0));
        assert!(is_above_floor(&player, 500.0));
        let player = player_at(DVec2::new(100.0, 461.0), DVec2::new(0.0, 10.0));
        assert!(!is_above_floor(&player, 500.0));
    }

    proptest! {
        #[test]
        fn walls_keep_player_inside(x in 0.0f64..470.0, vx in -50.0f64..50.0) {
            let tuning = Tuning::default();
            let mut player = player_at(DVec2::new(x, 100.0), DVec2::new(vx, 0.0));
            resolve_walls(&mut player, 500.0, &tuning);
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.right() <= 500.0);
        }

        #[test]
        fn far_platforms_never_touch(dx in 200.0f64..1000.0, vy in 0.0f64..20.0) {
            let tuning = Tuning::default();
            let platform = platform_at(DVec2::new(0.0, 300.0), DVec2::new(100.0, 100.0));
            let mut player = player_at(DVec2::new(100.0 + dx, 250.0), DVec2::new(0.0, vy));
            let before = player.clone();
            let contact = resolve_platform(&mut player, &platform, SurfaceMode::Ice, &tuning);
            prop_assert!(!contact.any());
            prop_assert_eq!(player, before);
        }
    }
}
