//! Per-frame flight step
//!
//! `advance` is the single mutation entry point for a flight. The external
//! game loop calls it once per rendered frame while a flight is live and
//! stops the moment it returns a terminal outcome.

use glam::Vec3;

use super::collision;
use super::environment::Environment;
use super::state::{BallState, Outcome};
use crate::consts::MAX_FRAME_DT;

/// Advance a flight by one frame.
///
/// `dt` is clamped into `[0, MAX_FRAME_DT]` regardless of caller discipline;
/// a multi-second delta from a suspended tab must not tunnel the ball
/// through the ground or a wall.
///
/// Order per step: semi-implicit Euler integration (velocity before
/// position), ground resolution, wall resolution, then termination - hole
/// capture first, rest second. On `Holed` the ball snaps to the cup at
/// ground level.
pub fn advance(ball: &mut BallState, dt: f32, env: &Environment) -> Outcome {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    ball.velocity.y += env.gravity * dt;
    ball.position += ball.velocity * dt;

    collision::resolve_ground(ball, env);
    collision::resolve_bounds(ball, env);

    debug_assert!(ball.is_finite(), "step produced non-finite state: {ball:?}");

    if collision::hole_capture(ball, env) {
        let cup = Vec3::new(env.hole.center.x, env.ground_height, env.hole.center.y);
        ball.position = cup;
        ball.velocity = Vec3::ZERO;
        log::debug!("ball captured at ({}, {})", cup.x, cup.z);
        return Outcome::Holed(cup);
    }

    if ball.speed() < env.min_velocity && ball.near_ground(env.rest_height) {
        return Outcome::Stopped(ball.position);
    }

    Outcome::Flying
}
