//! Ball kinematic state and flight outcomes
//!
//! A `BallState` lives for exactly one flight: created from a launch vector,
//! mutated only by `advance`, dropped once a terminal outcome is reported.

use glam::{Vec3, Vec3Swizzles};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Kinematic state of the ball during a flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl BallState {
    /// Start a flight from `position` with the given launch velocity.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// A ball resting on the tee.
    pub fn at_tee() -> Self {
        Self {
            position: TEE_POSITION,
            velocity: Vec3::ZERO,
        }
    }

    /// Speed over the ground plane (XZ components only).
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.xz().length()
    }

    /// Full 3-D speed.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether the ball is at (or within tolerance of) rest height.
    #[inline]
    pub fn near_ground(&self, rest_height: f32) -> bool {
        self.position.y <= rest_height + REST_TOLERANCE
    }

    /// Both vectors finite - the invariant every step must preserve.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Result of one simulation step.
///
/// `Holed` and `Stopped` are absorbing: once returned, the flight is over and
/// the caller must not advance this `BallState` again. A new flight requires
/// a fresh state from a fresh launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Flight continues; state carries into the next frame.
    Flying,
    /// Ball captured by the hole, snapped to the cup at ground level.
    Holed(Vec3),
    /// Ball came to rest on the course at the given position.
    Stopped(Vec3),
}

impl Outcome {
    /// Whether this outcome ends the flight.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Flying)
    }

    /// Final resting position, if the flight ended.
    pub fn final_position(&self) -> Option<Vec3> {
        match self {
            Outcome::Flying => None,
            Outcome::Holed(pos) | Outcome::Stopped(pos) => Some(*pos),
        }
    }
}

/// Cosmetic rolling rotation for the renderer.
///
/// Derived from horizontal motion each frame; never read back by the physics.
/// `pitch` is rotation about the travel axis, `roll` tilts with sideways
/// velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BallSpin {
    pub pitch: f32,
    pub roll: f32,
}

impl BallSpin {
    /// Accumulate roll from this frame's motion. Below the speed threshold
    /// the ball sits still rather than micro-spinning.
    pub fn integrate(&mut self, ball: &BallState, dt: f32) {
        let speed = ball.horizontal_speed();
        if speed > ROLL_SPEED_THRESHOLD {
            self.pitch += speed * dt * ROLL_RATE;
            self.roll -= ball.velocity.x * dt * ROLL_RATE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_ball_rests_at_spawn() {
        let ball = BallState::at_tee();
        assert_eq!(ball.position, TEE_POSITION);
        assert_eq!(ball.velocity, Vec3::ZERO);
        assert!(ball.near_ground(REST_HEIGHT));
    }

    #[test]
    fn horizontal_speed_ignores_vertical() {
        let ball = BallState::new(TEE_POSITION, Vec3::new(3.0, 10.0, 4.0));
        assert!((ball.horizontal_speed() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn spin_only_accumulates_above_threshold() {
        let mut spin = BallSpin::default();
        let slow = BallState::new(TEE_POSITION, Vec3::new(0.05, 0.0, 0.05));
        spin.integrate(&slow, 0.016);
        assert_eq!(spin, BallSpin::default(), "sub-threshold motion must not spin");

        let rolling = BallState::new(TEE_POSITION, Vec3::new(2.0, 0.0, -2.0));
        spin.integrate(&rolling, 0.016);
        assert!(spin.pitch > 0.0);
        assert!(spin.roll < 0.0, "positive vx rolls negative, got {}", spin.roll);
    }

    #[test]
    fn terminal_outcomes_expose_final_position() {
        assert!(Outcome::Flying.final_position().is_none());
        assert!(!Outcome::Flying.is_terminal());

        let pos = Vec3::new(0.0, 0.0, -8.0);
        assert!(Outcome::Holed(pos).is_terminal());
        assert_eq!(Outcome::Holed(pos).final_position(), Some(pos));
        assert_eq!(Outcome::Stopped(pos).final_position(), Some(pos));
    }
}
