//! Wrestler bodies and the capability interface the core drives them through
//!
//! The bot and the collision resolver never own a body. They read position and
//! velocity and request changes through [`Body`], so any physics host can
//! supply its own body type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the dohyo a wrestler started on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    East,
    West,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::East => "East",
            Side::West => "West",
        }
    }
}

/// Read/write access to a moving body owned by the physics host
pub trait Body {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Host move primitive: displace the body by `offset` this tick
    fn translate(&mut self, offset: Vec2);
}

/// Lookup of the bodies taking part in a match
pub trait BodyLookup {
    fn body(&self, side: Side) -> Option<&dyn Body>;
}

/// A wrestler body as integrated by the reference host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing (radians). Nothing spins a wrestler, kept for resets
    pub rotation: f32,
    pub angular_velocity: f32,
    pub linear_damping: f32,
}

impl Combatant {
    /// A wrestler at rest on its start marker
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            linear_damping: 0.0,
        }
    }

    /// Put the wrestler back on `marker`, motionless and undamped
    pub fn reset_to(&mut self, marker: Vec2) {
        *self = Self::at(marker);
    }

    /// Apply one tick of movement input.
    ///
    /// A held direction adds an impulse of `ACCELERATION * dt`, but only while
    /// the wrestler is under `MAX_SPEED`. With no direction held, friction
    /// slows the wrestler down without ever reversing it.
    pub fn apply_input(&mut self, direction: Vec2, dt: f32) {
        let direction = direction.normalize_or_zero();
        if direction != Vec2::ZERO {
            if self.velocity.length() < MAX_SPEED {
                self.velocity += direction * ACCELERATION * dt;
            }
        } else {
            let speed = self.velocity.length();
            let slowdown = FRICTION * dt;
            self.velocity = if speed > slowdown {
                self.velocity * ((speed - slowdown) / speed)
            } else {
                Vec2::ZERO
            };
        }
    }

    /// Integrate damping and motion over `dt`
    pub fn step(&mut self, dt: f32) {
        if self.linear_damping > 0.0 {
            let keep = (1.0 - self.linear_damping * dt).max(0.0);
            self.velocity *= keep;
            self.angular_velocity *= keep;
        }
        self.position += self.velocity * dt;
        self.rotation += self.angular_velocity * dt;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Body for Combatant {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}

/// The two wrestlers of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatants {
    pub east: Combatant,
    pub west: Combatant,
}

impl Combatants {
    pub fn new(east: Combatant, west: Combatant) -> Self {
        Self { east, west }
    }

    pub fn get(&self, side: Side) -> &Combatant {
        match side {
            Side::East => &self.east,
            Side::West => &self.west,
        }
    }

    /// Mutable access to `side` and its opponent at the same time
    pub fn pair_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        match side {
            Side::East => (&mut self.east, &mut self.west),
            Side::West => (&mut self.west, &mut self.east),
        }
    }
}

impl BodyLookup for Combatants {
    fn body(&self, side: Side) -> Option<&dyn Body> {
        Some(self.get(side))
    }
}
