//! Course environment configuration
//!
//! Everything the simulator reads but never writes: surface coefficients,
//! the course rectangle, and the hole geometry. The embedding game can build
//! one per course; `Default` is the original single-hole layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned course rectangle on the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl CourseBounds {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.x_min && x <= self.x_max && z >= self.z_min && z <= self.z_max
    }
}

/// Hole placement and capture gates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Cup center on the XZ plane.
    pub center: Vec2,
    /// Capture radius around the center.
    pub radius: f32,
    /// Ball must be below this height to drop in.
    pub ceiling: f32,
    /// Ball must be horizontally slower than this to drop in.
    pub speed_ceiling: f32,
}

/// Read-only physics configuration for one course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Downward acceleration (negative).
    pub gravity: f32,
    /// Horizontal velocity multiplier per grounded step.
    pub friction: f32,
    /// Fraction of vertical speed kept on a ground bounce.
    pub bounce_damping: f32,
    /// Downward speed below which contact settles instead of bouncing.
    pub bounce_threshold: f32,
    /// Total speed below which a grounded ball is stopped.
    pub min_velocity: f32,
    /// Ground plane height.
    pub ground_height: f32,
    /// Ball-center height when resting on the ground.
    pub rest_height: f32,
    /// Course walls.
    pub bounds: CourseBounds,
    /// Velocity fraction reflected off a wall.
    pub wall_restitution: f32,
    /// The cup.
    pub hole: Hole,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            bounce_damping: BOUNCE_DAMPING,
            bounce_threshold: BOUNCE_THRESHOLD,
            min_velocity: MIN_VELOCITY,
            ground_height: 0.0,
            rest_height: REST_HEIGHT,
            bounds: CourseBounds {
                x_min: COURSE_X_MIN,
                x_max: COURSE_X_MAX,
                z_min: COURSE_Z_MIN,
                z_max: COURSE_Z_MAX,
            },
            wall_restitution: WALL_RESTITUTION,
            hole: Hole {
                center: Vec2::new(HOLE_X, HOLE_Z),
                radius: HOLE_RADIUS,
                ceiling: HOLE_CEILING,
                speed_ceiling: HOLE_SPEED_CEILING,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_course_is_sane() {
        let env = Environment::default();
        assert!(env.gravity < 0.0, "gravity must pull down");
        assert!(env.friction > 0.0 && env.friction < 1.0);
        assert!(env.bounce_damping < 1.0, "bounces must lose energy");
        assert!(env.bounds.contains(env.hole.center.x, env.hole.center.y));
        assert!(env.bounds.contains(TEE_POSITION.x, TEE_POSITION.z));
    }

    #[test]
    fn environment_round_trips_through_json() {
        let env = Environment::default();
        let json = serde_json::to_string(&env).unwrap();
        let back: Environment = serde_json::from_str(&json).unwrap();
        assert_eq!(env, back);
    }

    #[test]
    fn bounds_containment() {
        let env = Environment::default();
        assert!(env.bounds.contains(0.0, 0.0));
        assert!(!env.bounds.contains(6.0, 0.0));
        assert!(!env.bounds.contains(0.0, -11.0));
    }
}
