//! Chaser strategy

use glam::Vec2;

use crate::consts::CHASER_NEAR_EDGE;
use crate::sim::ring::RingGeometry;

/// Chaser: advance on the opponent while holding central ground.
///
/// When the opponent is near the edge and we are the one closer to the center,
/// drop the center bias and drive straight at them.
pub fn direction(own: Vec2, opponent: Vec2, ring: &RingGeometry) -> Vec2 {
    let toward_opponent = (opponent - own).normalize_or_zero();

    let opponent_from_center = ring.distance_from_center(opponent);
    let opponent_near_edge = opponent_from_center > CHASER_NEAR_EDGE;

    if opponent_near_edge && ring.distance_from_center(own) < opponent_from_center {
        toward_opponent
    } else {
        (toward_opponent + ring.toward_center(own)).normalize_or_zero()
    }
}
