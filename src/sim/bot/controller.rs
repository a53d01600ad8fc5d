//! Controller strategy: a small state machine around the ring center

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ring::RingGeometry;

/// Controller behavior states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControllerState {
    /// Taking the center of the ring
    #[default]
    CenterSeeking,
    /// Driving at the opponent from the center
    Attacking,
    /// Falling back to the center after contact
    Returning,
}

impl ControllerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerState::CenterSeeking => "CenterSeeking",
            ControllerState::Attacking => "Attacking",
            ControllerState::Returning => "Returning",
        }
    }
}

/// Which controller state machine drives the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControllerVariant {
    /// CenterSeeking -> Attacking -> Returning, with edge-triggered contact
    #[default]
    ThreeState,
    /// Reduced mode: CenterSeeking <-> Attacking, backing off under 110 units
    TwoState,
}

/// Controller bookkeeping carried between ticks
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerMemory {
    pub state: ControllerState,
    /// Set on the tick contact is registered, cleared once we separate
    pub contact_flag: bool,
    /// Opponent distance seen on the previous controller tick
    pub previous_opponent_distance: Option<f32>,
}

/// Controller: take the center, attack from it, return to it after contact.
///
/// Advances `memory` by exactly one tick and returns the desired direction.
pub fn direction(
    own: Vec2,
    opponent: Vec2,
    ring: &RingGeometry,
    memory: &mut ControllerMemory,
    variant: ControllerVariant,
) -> Vec2 {
    let to_center = ring.toward_center(own);
    let toward_opponent = (opponent - own).normalize_or_zero();
    let centered =
        ring.distance_from_center(own) <= ring.effective_radius() * CONTROLLER_CENTER_FRACTION;
    let opponent_distance = own.distance(opponent);

    // Distance collapsing between two ticks is the signature of a hit
    let impulse = memory
        .previous_opponent_distance
        .is_some_and(|previous| previous - opponent_distance > CONTROLLER_IMPULSE_DROP);
    memory.previous_opponent_distance = Some(opponent_distance);

    if memory.contact_flag && opponent_distance > CONTROLLER_SEPARATION_DISTANCE {
        memory.contact_flag = false;
    }

    match (memory.state, variant) {
        (ControllerState::CenterSeeking, _) => {
            if centered {
                transition(memory, ControllerState::Attacking);
            }
            to_center
        }
        (ControllerState::Attacking, ControllerVariant::ThreeState) => {
            let touching = impulse || opponent_distance < CONTROLLER_CONTACT_DISTANCE;
            if touching && !memory.contact_flag {
                memory.contact_flag = true;
                transition(memory, ControllerState::Returning);
            }
            toward_opponent
        }
        (ControllerState::Attacking, ControllerVariant::TwoState) => {
            if opponent_distance < CONTROLLER_TWO_STATE_CONTACT {
                transition(memory, ControllerState::CenterSeeking);
            }
            toward_opponent
        }
        (ControllerState::Returning, _) => {
            if centered {
                transition(memory, ControllerState::CenterSeeking);
            }
            to_center
        }
    }
}

fn transition(memory: &mut ControllerMemory, next: ControllerState) {
    log::debug!(
        "Controller: {} -> {}",
        memory.state.as_str(),
        next.as_str()
    );
    memory.state = next;
}
