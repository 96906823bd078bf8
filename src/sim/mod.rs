//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - One fixed step per animation frame
//! - Stable iteration order (platform insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod observer;
pub mod response;
pub mod state;
pub mod tick;

pub use collision::{
    BoundaryContact, PlatformContact, is_landing, is_side_contact, resolve_platform,
};
pub use input::{InputState, Key};
pub use observer::{FrameObserver, NoOpObserver};
pub use response::{apply_friction, ease_landing, settle};
pub use state::{Body, BodyKind, SurfaceMode, Texture, World};
pub use tick::{ControlOutcome, apply_controls, integrate_platform, integrate_player, tick, tick_observed};
