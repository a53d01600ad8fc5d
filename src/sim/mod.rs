//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - One update order per tick (bot timers before the bot's direction query)
//! - No rendering or platform dependencies

pub mod body;
pub mod bot;
pub mod collision;
pub mod direction;
pub mod match_loop;
pub mod ring;
pub mod state;
pub mod tick;

pub use body::{Body, BodyLookup, Combatant, Combatants, Side};
pub use bot::{Bot, BotState, BotStrategy, ControllerState, ControllerVariant};
pub use collision::{Contact, ContactEvent, detect_contact, reflect_velocity, resolve_collision};
pub use direction::{DIRECTIONS, closest, quantize};
pub use match_loop::{MatchSummary, run_match};
pub use ring::RingGeometry;
pub use state::{MatchPhase, MatchState, Markers};
pub use tick::{TickInput, tick};
