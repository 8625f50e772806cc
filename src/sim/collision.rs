//! Collision resolution against the ground plane and course walls
//!
//! All helpers mutate the ball in place and are called once per step, after
//! integration. The hole test is a pure predicate; snapping into the cup is
//! the step function's job.

use glam::Vec3Swizzles;

use super::environment::Environment;
use super::state::BallState;

/// Resolve contact with the ground plane.
///
/// Clamps the ball to rest height, then either bounces (losing energy to
/// damping) or settles. A fall slower than the bounce threshold settles
/// directly, which is what keeps the ball from micro-bouncing forever.
/// Rolling friction applies only in the settled branch - never while
/// airborne, never during a bounce.
pub fn resolve_ground(ball: &mut BallState, env: &Environment) {
    if ball.position.y > env.rest_height {
        return;
    }
    ball.position.y = env.rest_height;

    if ball.velocity.y < -env.bounce_threshold {
        ball.velocity.y = -ball.velocity.y * env.bounce_damping;
    } else {
        ball.velocity.y = 0.0;
        ball.velocity.x *= env.friction;
        ball.velocity.z *= env.friction;
    }
}

/// Resolve contact with the course walls.
///
/// Each horizontal axis is clamped and reflected independently, so a corner
/// hit is two sequential 1-D reflections rather than a true 2-D rebound.
/// Known approximation, kept deliberately.
pub fn resolve_bounds(ball: &mut BallState, env: &Environment) {
    let b = &env.bounds;
    let r = env.wall_restitution;

    if ball.position.x < b.x_min {
        ball.position.x = b.x_min;
        ball.velocity.x = -ball.velocity.x * r;
    } else if ball.position.x > b.x_max {
        ball.position.x = b.x_max;
        ball.velocity.x = -ball.velocity.x * r;
    }

    if ball.position.z < b.z_min {
        ball.position.z = b.z_min;
        ball.velocity.z = -ball.velocity.z * r;
    } else if ball.position.z > b.z_max {
        ball.position.z = b.z_max;
        ball.velocity.z = -ball.velocity.z * r;
    }
}

/// Whether the ball drops into the cup this step.
///
/// Three gates, all required: horizontally inside the capture radius, low
/// enough that it isn't flying over the rim, and slow enough that it doesn't
/// skip across.
pub fn hole_capture(ball: &BallState, env: &Environment) -> bool {
    let dist = (ball.position.xz() - env.hole.center).length();
    dist < env.hole.radius
        && ball.position.y < env.hole.ceiling
        && ball.horizontal_speed() < env.hole.speed_ceiling
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn env() -> Environment {
        Environment::default()
    }

    #[test]
    fn fast_fall_bounces_with_damping() {
        let env = env();
        let mut ball = BallState::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.0, -6.0, 0.0));
        resolve_ground(&mut ball, &env);

        assert_eq!(ball.position.y, env.rest_height);
        let expected = 6.0 * env.bounce_damping;
        assert!(
            (ball.velocity.y - expected).abs() < 1e-6,
            "rebound {} != damping * impact {}",
            ball.velocity.y,
            expected
        );
    }

    #[test]
    fn slow_fall_settles_and_rolls() {
        let env = env();
        let mut ball = BallState::new(Vec3::new(0.0, 0.15, 0.0), Vec3::new(2.0, -0.5, -1.0));
        resolve_ground(&mut ball, &env);

        assert_eq!(ball.position.y, env.rest_height);
        assert_eq!(ball.velocity.y, 0.0, "sub-threshold contact must not bounce");
        assert!((ball.velocity.x - 2.0 * env.friction).abs() < 1e-6);
        assert!((ball.velocity.z - -env.friction).abs() < 1e-6);
    }

    #[test]
    fn airborne_ball_keeps_its_speed() {
        let env = env();
        let mut ball = BallState::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(3.0, -2.0, 0.0));
        let before = ball;
        resolve_ground(&mut ball, &env);
        assert_eq!(ball, before, "no ground action above rest height");
    }

    #[test]
    fn right_wall_clamps_and_reflects_with_restitution() {
        let env = env();
        let mut ball = BallState::new(Vec3::new(5.7, 1.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        resolve_bounds(&mut ball, &env);

        assert_eq!(ball.position.x, 5.5);
        assert_eq!(ball.velocity.x, -2.0, "vx must reflect to -vx * 0.5");
    }

    #[test]
    fn corner_is_two_independent_reflections() {
        let env = env();
        let mut ball = BallState::new(Vec3::new(-6.0, 1.0, 10.8), Vec3::new(-4.0, 0.0, 2.0));
        resolve_bounds(&mut ball, &env);

        assert_eq!(ball.position.x, env.bounds.x_min);
        assert_eq!(ball.position.z, env.bounds.z_max);
        assert_eq!(ball.velocity.x, 2.0);
        assert_eq!(ball.velocity.z, -1.0);
    }

    #[test]
    fn interior_ball_is_untouched_by_walls() {
        let env = env();
        let mut ball = BallState::new(Vec3::new(1.0, 0.2, -3.0), Vec3::new(1.0, 0.0, 1.0));
        let before = ball;
        resolve_bounds(&mut ball, &env);
        assert_eq!(ball, before);
    }

    #[test]
    fn capture_requires_all_three_gates() {
        let env = env();
        let over_hole = Vec3::new(0.0, 0.2, -8.0);

        // slow and low at the cup: in
        let ball = BallState::new(over_hole, Vec3::new(0.02, 0.0, 0.0));
        assert!(hole_capture(&ball, &env));

        // flying over the rim: out
        let ball = BallState::new(Vec3::new(0.0, 2.0, -8.0), Vec3::ZERO);
        assert!(!hole_capture(&ball, &env), "high ball must not capture");

        // skipping across too fast: out
        let ball = BallState::new(over_hole, Vec3::new(5.0, 0.0, 0.0));
        assert!(!hole_capture(&ball, &env), "fast ball must not capture");

        // near miss outside the radius: out
        let ball = BallState::new(Vec3::new(0.3, 0.2, -8.0), Vec3::ZERO);
        assert!(!hole_capture(&ball, &env));
    }
}
