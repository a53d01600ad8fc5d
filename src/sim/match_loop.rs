//! Whole-bout runner
//!
//! Drives [`tick`] from a fresh [`MatchState`] until someone leaves the dohyo
//! or the tick limit runs out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Side;
use super::bot::{BotStrategy, ControllerVariant};
use super::state::MatchState;
use super::tick::{TickInput, tick};
use crate::consts::SIM_DT;
use crate::settings::MatchSettings;

/// Outcome of one bout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub strategy: BotStrategy,
    pub controller_variant: ControllerVariant,
    /// `None` when the bout ran out of ticks
    pub winner: Option<Side>,
    pub ticks: u64,
    pub east_position: Vec2,
    pub west_position: Vec2,
}

/// Run one bout to completion (or `settings.max_ticks`).
///
/// `east_input` plays the east wrestler. The west wrestler is the bot unless
/// `bot_controls_west` is off, in which case it stands still.
pub fn run_match<F>(settings: &MatchSettings, seed: u64, mut east_input: F) -> MatchSummary
where
    F: FnMut(&MatchState) -> Vec2,
{
    let mut state = MatchState::new(seed)
        .with_strategy(settings.strategy, settings.controller_variant);

    for _ in 0..settings.max_ticks {
        let input = TickInput {
            east: east_input(&state),
            west: if settings.bot_controls_west {
                None
            } else {
                Some(Vec2::ZERO)
            },
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        if state.is_over() {
            break;
        }
    }

    if state.winner.is_none() {
        log::warn!("Bout ended without a winner after {} ticks", state.time_ticks);
    }

    MatchSummary {
        seed: state.seed,
        strategy: state.bot.strategy(),
        controller_variant: state.bot.controller_variant(),
        winner: state.winner,
        ticks: state.time_ticks,
        east_position: state.combatants.east.position,
        west_position: state.combatants.west.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_respects_max_ticks() {
        let settings = MatchSettings {
            max_ticks: 10,
            bot_controls_west: false,
            ..Default::default()
        };
        let summary = run_match(&settings, 1, |_| Vec2::ZERO);
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.winner, None);
    }

    #[test]
    fn test_summary_serializes() {
        let settings = MatchSettings {
            max_ticks: 1,
            ..Default::default()
        };
        let summary = run_match(&settings, 5, |_| Vec2::ZERO);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"strategy\":\"Chaser\""));
        assert!(json.contains("\"controller_variant\":\"ThreeState\""));
    }

    #[test]
    fn test_summary_reports_configuration() {
        let settings = MatchSettings {
            strategy: BotStrategy::Controller,
            controller_variant: ControllerVariant::TwoState,
            max_ticks: 1,
            ..Default::default()
        };
        let summary = run_match(&settings, 31, |_| Vec2::ZERO);
        assert_eq!(summary.seed, 31);
        assert_eq!(summary.strategy, BotStrategy::Controller);
        assert_eq!(summary.controller_variant, ControllerVariant::TwoState);
    }
}
