//! Fixed timestep simulation tick
//!
//! Reference host loop that advances a match deterministically. Per tick:
//! host commands, bot timers, inputs, integration, contact, ring exit.

use glam::Vec2;

use super::body::Side;
use super::bot::BotStrategy;
use super::collision::{detect_contact, resolve_collision};
use super::state::{MatchPhase, MatchState};
use crate::consts::WRESTLER_RADIUS;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// East wrestler movement (player-held direction, zero for none)
    pub east: Vec2,
    /// West wrestler movement; `None` hands the west wrestler to the bot
    pub west: Option<Vec2>,
    /// Switch bot strategy
    pub strategy: Option<BotStrategy>,
    /// Restart the bout (only honored once the match is over)
    pub restart: bool,
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    if let Some(strategy) = input.strategy {
        state.bot.set_strategy(strategy);
    }

    if input.restart && state.is_over() {
        state.reset();
    }

    if state.phase == MatchPhase::GameOver {
        // Let the damping bring both wrestlers to rest
        state.combatants.east.step(dt);
        state.combatants.west.step(dt);
        return;
    }

    state.time_ticks += 1;

    // Timers first, then the direction query, once each
    state.bot.advance_timers(dt);
    let west_input = match input.west {
        Some(direction) => direction,
        None => state.bot.get_input(&state.combatants),
    };

    state.combatants.east.apply_input(input.east, dt);
    state.combatants.west.apply_input(west_input, dt);
    state.combatants.east.step(dt);
    state.combatants.west.step(dt);

    // The faster wrestler is the one making contact
    let mover = if state.combatants.west.speed() > state.combatants.east.speed() {
        Side::West
    } else {
        Side::East
    };
    let (this, other) = state.combatants.pair_mut(mover);
    if let Some(contact) = detect_contact(&*this, &*other, WRESTLER_RADIUS) {
        // Back out of the overlap before exchanging momentum
        this.position += contact.event.normal * contact.penetration;
        resolve_collision(this, other, &contact.event, dt);
    }

    if let Some(loser) = state.exited_side() {
        state.on_body_exited(loser);
    }
}
