//! Wrestler contact detection and response
//!
//! Response is an angle-weighted momentum exchange rather than an elastic
//! collision: the harder and more head-on a wrestler commits, the more of its
//! speed ends up in the opponent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::MIN_CONTACT_COS;

/// A single-tick contact report between the moving wrestler and another one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Unit normal pointing from the other body into the moving one
    pub normal: Vec2,
    /// The other body's velocity at contact
    pub other_velocity: Vec2,
    /// Contact angle in radians (0 = head-on)
    pub angle: f32,
}

/// Result of a narrow-phase overlap check between two wrestlers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub event: ContactEvent,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Momentum transfer factor for a contact angle, floored so grazes still push
#[inline]
pub fn contact_cos(angle: f32) -> f32 {
    angle.cos().abs().max(MIN_CONTACT_COS)
}

/// Check whether two wrestler disks overlap.
///
/// `mover` is the wrestler treated as "self": the normal points into it and
/// the angle is measured between its velocity and the direction of the push.
pub fn detect_contact<A, B>(mover: &A, other: &B, radius: f32) -> Option<Contact>
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    let offset = mover.position() - other.position();
    let distance = offset.length();
    let penetration = 2.0 * radius - distance;
    if penetration <= 0.0 {
        return None;
    }

    // Stacked exactly on top of each other: push back against the motion
    let normal = match offset.try_normalize() {
        Some(n) => n,
        None => match (-mover.velocity()).try_normalize() {
            Some(n) => n,
            None => Vec2::X,
        },
    };

    let velocity = mover.velocity();
    let angle = if velocity.length_squared() > f32::EPSILON {
        velocity.angle_to(-normal).abs()
    } else {
        0.0
    };

    Some(Contact {
        event: ContactEvent {
            normal,
            other_velocity: other.velocity(),
            angle,
        },
        penetration,
    })
}

/// Resolve one contact between `this` (the mover) and `other`.
///
/// Both bodies get new velocities and both are displaced once more within the
/// current tick: `other` along its new velocity, `this` along the bounce.
pub fn resolve_collision<S, O>(this: &mut S, other: &mut O, contact: &ContactEvent, dt: f32)
where
    S: Body + ?Sized,
    O: Body + ?Sized,
{
    let cos = contact_cos(contact.angle);
    let n = contact.normal;
    let velocity = this.velocity();

    let push_force = -n * velocity.length() * cos;
    let received_force = n * contact.other_velocity.length() * cos;

    let other_velocity = other.velocity() * (1.0 - cos) + push_force;
    other.set_velocity(other_velocity);
    other.translate(other_velocity * dt);

    let new_velocity = velocity * (1.0 - cos) + received_force;
    this.set_velocity(new_velocity);
    let bounce = reflect_velocity(new_velocity, n) * cos;
    this.translate(bounce * dt);

    log::trace!(
        "Contact: cos={:.3} push={:?} received={:?} bounce={:?}",
        cos,
        push_force,
        received_force,
        bounce
    );
}
