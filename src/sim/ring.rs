//! Dohyo ring geometry as seen by the bot

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::FALLBACK_RING_RADIUS;

/// Circular ring: center and radius.
///
/// The radius is an estimate taken from the two start markers and stays fixed
/// for the whole match. A radius of zero means "not configured yet".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            radius: 0.0,
        }
    }
}

impl RingGeometry {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center at the midpoint of two markers, radius the average distance to them
    pub fn from_markers(east: Vec2, west: Vec2) -> Self {
        let center = (east + west) / 2.0;
        let radius = (east.distance(center) + west.distance(center)) / 2.0;
        Self { center, radius }
    }

    /// Radius to reason with, falling back when none was configured
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        if self.radius > 0.0 {
            self.radius
        } else {
            FALLBACK_RING_RADIUS
        }
    }

    #[inline]
    pub fn distance_from_center(&self, point: Vec2) -> f32 {
        point.distance(self.center)
    }

    /// Unit vector from `point` toward the center (zero when at the center)
    #[inline]
    pub fn toward_center(&self, point: Vec2) -> Vec2 {
        (self.center - point).normalize_or_zero()
    }

    /// Whether a disk of `body_radius` at `point` lies fully outside a boundary
    /// of `boundary_radius` around this ring's center
    pub fn disk_outside(&self, point: Vec2, body_radius: f32, boundary_radius: f32) -> bool {
        self.distance_from_center(point) > boundary_radius + body_radius
    }
}
