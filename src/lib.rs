//! Dohyo - A two-wrestler sumo ring simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bot decision engine, collisions, match state)
//! - `settings`: Match configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{MatchSettings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz physics)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Wrestler movement
    pub const ACCELERATION: f32 = 800.0;
    pub const MAX_SPEED: f32 = 550.0;
    /// Deceleration applied when no direction is held (units/s²)
    pub const FRICTION: f32 = 300.0;
    /// Linear damping applied to both wrestlers once the match is decided
    pub const GAME_OVER_DAMPING: f32 = 50.0;

    /// Wrestler body (disk) radius. Two bodies closing at full speed are
    /// always sampled inside `CONTROLLER_CONTACT_DISTANCE` before they touch.
    pub const WRESTLER_RADIUS: f32 = 24.0;

    /// Dohyo boundary radius, a wrestler is out once fully past it
    pub const DOHYO_RADIUS: f32 = 280.0;
    /// Start markers sit this far east/west of the dohyo center
    pub const START_MARKER_OFFSET: f32 = 160.0;

    /// Ring radius used by the bot when none was configured
    pub const FALLBACK_RING_RADIUS: f32 = 200.0;

    /// Chaser: opponent further than this from center is "near the edge"
    pub const CHASER_NEAR_EDGE: f32 = 150.0;

    /// Circler tuning
    pub const CIRCLER_IDEAL_DISTANCE: f32 = 100.0;
    pub const CIRCLER_DISTANCE_WEIGHT: f32 = 0.5;
    pub const CIRCLER_EDGE_FRACTION: f32 = 0.7;
    pub const CIRCLER_PINNED_FRACTION: f32 = 0.8;
    pub const CIRCLER_BETWEEN_DOT: f32 = 0.7;
    /// Handedness flip interval is drawn from [MIN, MAX) seconds every cycle
    pub const CIRCLER_FLIP_MIN_SECS: f32 = 2.0;
    pub const CIRCLER_FLIP_MAX_SECS: f32 = 5.0;

    /// Controller tuning
    pub const CONTROLLER_CENTER_FRACTION: f32 = 0.15;
    pub const CONTROLLER_CONTACT_DISTANCE: f32 = 70.0;
    pub const CONTROLLER_IMPULSE_DROP: f32 = 20.0;
    pub const CONTROLLER_SEPARATION_DISTANCE: f32 = 100.0;
    /// Two-state controller leaves Attacking under this distance
    pub const CONTROLLER_TWO_STATE_CONTACT: f32 = 110.0;

    /// Minimum momentum transfer factor for grazing contacts
    pub const MIN_CONTACT_COS: f32 = 0.1;
}

/// Rotate a vector by +90° in screen space (+Y down), the clockwise turn
#[inline]
pub fn perp_cw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotate a vector by -90° in screen space (+Y down), the counter-clockwise turn
#[inline]
pub fn perp_ccw(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}
