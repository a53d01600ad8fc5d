//! Rule-based wrestler bot
//!
//! The bot reads both wrestlers' positions and the ring geometry each tick and
//! proposes one of eight movement directions. It never moves a body itself.
//!
//! Per tick the host calls [`Bot::advance_timers`] first and [`Bot::get_input`]
//! second, once each.

pub mod chaser;
pub mod circler;
pub mod controller;

pub use controller::{ControllerMemory, ControllerState, ControllerVariant};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{BodyLookup, Side};
use super::direction::quantize;
use super::ring::RingGeometry;
use crate::consts::{CIRCLER_FLIP_MAX_SECS, CIRCLER_FLIP_MIN_SECS};

/// Bot decision strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BotStrategy {
    /// Advance on the opponent while holding the center
    #[default]
    Chaser,
    /// Circle the opponent and strike when they are pinned
    Circler,
    /// Take the center, attack, return
    Controller,
}

impl BotStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotStrategy::Chaser => "Chaser",
            BotStrategy::Circler => "Circler",
            BotStrategy::Controller => "Controller",
        }
    }
}

/// Mutable bot bookkeeping, cleared on every match reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BotState {
    /// Seconds since the circling direction last flipped
    pub circle_timer: f32,
    pub circle_clockwise: bool,
    /// Flip interval for the current cycle, drawn when the cycle starts
    pub circle_flip_after: Option<f32>,
    pub controller: ControllerMemory,
}

impl Default for BotState {
    fn default() -> Self {
        Self {
            circle_timer: 0.0,
            circle_clockwise: true,
            circle_flip_after: None,
            controller: ControllerMemory::default(),
        }
    }
}

/// The bot decision engine.
///
/// Generic over its random source so tests can inject a seeded generator.
#[derive(Debug, Clone)]
pub struct Bot<R: Rng = Pcg32> {
    strategy: BotStrategy,
    controller_variant: ControllerVariant,
    own: Option<Side>,
    opponent: Option<Side>,
    ring: RingGeometry,
    state: BotState,
    rng: R,
}

impl Bot<Pcg32> {
    /// Bot with a `Pcg32` seeded from `seed`
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Bot<R> {
    pub fn new(rng: R) -> Self {
        Self {
            strategy: BotStrategy::default(),
            controller_variant: ControllerVariant::default(),
            own: None,
            opponent: None,
            ring: RingGeometry::default(),
            state: BotState::default(),
            rng,
        }
    }

    /// Bind the controlled wrestler, its opponent, and the ring center.
    /// Timers and controller state are left untouched.
    pub fn initialize(&mut self, own: Side, opponent: Side, ring_center: Vec2) {
        self.own = Some(own);
        self.opponent = Some(opponent);
        self.ring.center = ring_center;
    }

    pub fn set_ring_radius(&mut self, radius: f32) {
        self.ring.radius = radius;
    }

    /// Activate `strategy`. Entering Circler (even from Circler) re-rolls the
    /// circling direction and restarts its timer.
    pub fn set_strategy(&mut self, strategy: BotStrategy) {
        self.strategy = strategy;
        if strategy == BotStrategy::Circler {
            self.state.circle_timer = 0.0;
            self.state.circle_clockwise = self.rng.random_bool(0.5);
            self.state.circle_flip_after = Some(self.draw_flip_interval());
        }
        log::info!("Bot strategy: {}", strategy.as_str());
    }

    pub fn set_controller_variant(&mut self, variant: ControllerVariant) {
        self.controller_variant = variant;
    }

    /// Back to initial bookkeeping. Strategy and bindings are kept.
    pub fn reset_state(&mut self) {
        self.state = BotState::default();
    }

    /// Advance the circling timer, flipping direction at most once per call
    pub fn advance_timers(&mut self, dt: f32) {
        if self.strategy != BotStrategy::Circler {
            return;
        }

        self.state.circle_timer += dt;
        let flip_after = match self.state.circle_flip_after {
            Some(secs) => secs,
            None => {
                let secs = self.draw_flip_interval();
                self.state.circle_flip_after = Some(secs);
                secs
            }
        };

        if self.state.circle_timer > flip_after {
            self.state.circle_clockwise = !self.state.circle_clockwise;
            self.state.circle_timer = 0.0;
            self.state.circle_flip_after = Some(self.draw_flip_interval());
            log::debug!(
                "Circler flip: clockwise={} after {:.2}s",
                self.state.circle_clockwise,
                flip_after
            );
        }
    }

    /// Quantized movement direction for this tick, or zero when unbound
    pub fn get_input<B: BodyLookup + ?Sized>(&mut self, bodies: &B) -> Vec2 {
        let (Some(own), Some(opponent)) = (self.own, self.opponent) else {
            return Vec2::ZERO;
        };
        let (Some(own), Some(opponent)) = (bodies.body(own), bodies.body(opponent)) else {
            return Vec2::ZERO;
        };

        let desired = self.desired_direction(own.position(), opponent.position());
        quantize(desired)
    }

    /// Unquantized direction from the active strategy
    pub fn desired_direction(&mut self, own: Vec2, opponent: Vec2) -> Vec2 {
        match self.strategy {
            BotStrategy::Chaser => chaser::direction(own, opponent, &self.ring),
            BotStrategy::Circler => {
                circler::direction(own, opponent, &self.ring, self.state.circle_clockwise)
            }
            BotStrategy::Controller => controller::direction(
                own,
                opponent,
                &self.ring,
                &mut self.state.controller,
                self.controller_variant,
            ),
        }
    }

    pub fn strategy(&self) -> BotStrategy {
        self.strategy
    }

    pub fn controller_variant(&self) -> ControllerVariant {
        self.controller_variant
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    pub fn ring(&self) -> &RingGeometry {
        &self.ring
    }

    fn draw_flip_interval(&mut self) -> f32 {
        self.rng
            .random_range(CIRCLER_FLIP_MIN_SECS..CIRCLER_FLIP_MAX_SECS)
    }
}
