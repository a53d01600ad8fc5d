//! Circler strategy
//!
//! Orbits the opponent at a working distance, handedness chosen by the bot.

use glam::Vec2;

use crate::consts::*;
use crate::sim::ring::RingGeometry;
use crate::{perp_ccw, perp_cw};

/// Circler: orbit the opponent at a preferred range, keep off the edge, and
/// turn into a direct attack once the opponent is pinned against the rope
/// with us on the center side.
pub fn direction(own: Vec2, opponent: Vec2, ring: &RingGeometry, clockwise: bool) -> Vec2 {
    let away = (own - opponent).normalize_or_zero();

    let perpendicular = if clockwise { perp_cw(away) } else { perp_ccw(away) };

    let distance = own.distance(opponent);
    let distance_adjust = if distance < CIRCLER_IDEAL_DISTANCE * 0.8 {
        away * CIRCLER_DISTANCE_WEIGHT
    } else if distance > CIRCLER_IDEAL_DISTANCE * 1.2 {
        -away * CIRCLER_DISTANCE_WEIGHT
    } else {
        Vec2::ZERO
    };

    let radius = ring.effective_radius();
    let edge_avoidance = if ring.distance_from_center(own) > radius * CIRCLER_EDGE_FRACTION {
        ring.toward_center(own)
    } else {
        Vec2::ZERO
    };

    let opponent_pinned = ring.distance_from_center(opponent) > radius * CIRCLER_PINNED_FRACTION;
    if opponent_pinned {
        let opponent_to_center = ring.toward_center(opponent);
        if away.dot(opponent_to_center) > CIRCLER_BETWEEN_DOT {
            return (opponent - own).normalize_or_zero();
        }
    }

    (perpendicular + distance_adjust + edge_avoidance).normalize_or_zero()
}
