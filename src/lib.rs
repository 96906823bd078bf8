//! Bounce Box - a canvas platform toy
//!
//! Core modules:
//! - `sim`: Deterministic per-frame physics (integration, collisions, controls)
//! - `renderer`: Drawing-surface abstraction and the world painter
//! - `tuning`: Data-driven physics constants
//! - `error`: Errors for tuning overrides and body construction

pub mod error;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use tuning::Tuning;

/// Layout and colour constants
pub mod consts {
    use glam::DVec2;

    /// Viewport size used by headless runs
    pub const DEFAULT_VIEWPORT: DVec2 = DVec2::new(1280.0, 720.0);

    /// Player spawn (top-left corner)
    pub const PLAYER_START: DVec2 = DVec2::new(100.0, 100.0);

    /// Player fill on normal ground
    pub const PLAYER_COLOR: &str = "#f77";
    /// Player fill while ice mode is on
    pub const PLAYER_ICE_COLOR: &str = "white";

    /// Canvas background while ice mode is on
    pub const ICE_BACKGROUND: &str = "rgb(44, 71, 96)";
    /// Canvas background on normal ground
    pub const NORMAL_BACKGROUND: &str = "transparent";

    /// Fallback platform fill
    pub const PLATFORM_COLOR: &str = "#7f7";
}
