//! Match state: the two wrestlers, the ring, the bot, and who won

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Combatant, Combatants, Side};
use super::bot::{Bot, BotStrategy, ControllerVariant};
use super::ring::RingGeometry;
use crate::consts::*;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Bout in progress
    Playing,
    /// A wrestler left the dohyo; frozen until reset
    GameOver,
}

/// Start markers for the two wrestlers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Markers {
    pub east: Vec2,
    pub west: Vec2,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            east: Vec2::new(START_MARKER_OFFSET, 0.0),
            west: Vec2::new(-START_MARKER_OFFSET, 0.0),
        }
    }
}

/// Complete match state. The bot drives the west wrestler.
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Seed the bot's generator was built from
    pub seed: u64,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
    pub markers: Markers,
    /// Ring as estimated from the markers
    pub ring: RingGeometry,
    pub combatants: Combatants,
    pub bot: Bot<Pcg32>,
    /// Simulation tick counter for the current bout
    pub time_ticks: u64,
}

impl MatchState {
    /// Create a new match on the default markers with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_markers(seed, Markers::default())
    }

    pub fn with_markers(seed: u64, markers: Markers) -> Self {
        let ring = RingGeometry::from_markers(markers.east, markers.west);

        let mut bot = Bot::from_seed(seed);
        bot.initialize(Side::West, Side::East, ring.center);
        bot.set_ring_radius(ring.radius);
        log::info!(
            "Dohyo center: ({:.1}, {:.1}), ring radius: {:.1}",
            ring.center.x,
            ring.center.y,
            ring.radius
        );

        Self {
            seed,
            phase: MatchPhase::Playing,
            winner: None,
            markers,
            ring,
            combatants: Combatants::new(Combatant::at(markers.east), Combatant::at(markers.west)),
            bot,
            time_ticks: 0,
        }
    }

    /// Builder-style strategy selection for the bot
    pub fn with_strategy(mut self, strategy: BotStrategy, variant: ControllerVariant) -> Self {
        self.bot.set_controller_variant(variant);
        self.bot.set_strategy(strategy);
        self
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    /// A wrestler has left the dohyo. The other side wins and both wrestlers
    /// are damped to a standstill. Ignored once the match is already decided.
    pub fn on_body_exited(&mut self, loser: Side) {
        if self.is_over() {
            return;
        }

        let winner = loser.opponent();
        log::info!(
            "{} wrestler lost! {} wins",
            loser.as_str(),
            winner.as_str()
        );

        self.winner = Some(winner);
        self.phase = MatchPhase::GameOver;
        self.combatants.east.linear_damping = GAME_OVER_DAMPING;
        self.combatants.west.linear_damping = GAME_OVER_DAMPING;
    }

    /// Put both wrestlers back on their markers and clear bot bookkeeping
    pub fn reset(&mut self) {
        self.combatants.east.reset_to(self.markers.east);
        self.combatants.west.reset_to(self.markers.west);
        self.bot.reset_state();
        self.winner = None;
        self.phase = MatchPhase::Playing;
        self.time_ticks = 0;
        log::info!("Match reset - wrestlers repositioned and bot state reset");
    }

    /// Side whose wrestler is fully outside the dohyo, east checked first
    pub fn exited_side(&self) -> Option<Side> {
        [Side::East, Side::West].into_iter().find(|&side| {
            self.ring.disk_outside(
                self.combatants.get(side).position,
                WRESTLER_RADIUS,
                DOHYO_RADIUS,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bot::BotState;

    #[test]
    fn test_new_match() {
        let state = MatchState::new(12345);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.winner, None);
        assert_eq!(state.ring.center, Vec2::ZERO);
        assert!((state.ring.radius - START_MARKER_OFFSET).abs() < 1e-4);
        assert_eq!(state.bot.ring(), &state.ring);
        assert_eq!(state.combatants.west.position, state.markers.west);
    }

    #[test]
    fn test_body_exit_ends_match() {
        let mut state = MatchState::new(1);
        state.on_body_exited(Side::East);
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(state.winner, Some(Side::West));
        assert_eq!(state.combatants.east.linear_damping, GAME_OVER_DAMPING);
        assert_eq!(state.combatants.west.linear_damping, GAME_OVER_DAMPING);

        // Later exits don't change the result
        state.on_body_exited(Side::West);
        assert_eq!(state.winner, Some(Side::West));
    }

    #[test]
    fn test_reset_restores_markers() {
        let mut state =
            MatchState::new(1).with_strategy(BotStrategy::Controller, ControllerVariant::ThreeState);
        state.combatants.east.position = Vec2::new(400.0, 0.0);
        state.combatants.east.velocity = Vec2::new(300.0, 0.0);
        state.combatants.west.angular_velocity = 1.5;
        state.bot.desired_direction(Vec2::new(0.0, 5.0), Vec2::new(40.0, 0.0));
        state.on_body_exited(Side::East);

        state.reset();
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.winner, None);
        assert_eq!(state.combatants.east, Combatant::at(state.markers.east));
        assert_eq!(state.combatants.west, Combatant::at(state.markers.west));
        assert_eq!(state.bot.state(), &BotState::default());
        assert_eq!(state.bot.strategy(), BotStrategy::Controller);
    }

    #[test]
    fn test_exited_side() {
        let mut state = MatchState::new(1);
        assert_eq!(state.exited_side(), None);

        state.combatants.west.position = Vec2::new(0.0, DOHYO_RADIUS + WRESTLER_RADIUS + 1.0);
        assert_eq!(state.exited_side(), Some(Side::West));
    }
}
