//! Launch vector computation
//!
//! Converts the player's charged power and aim angle into the initial
//! velocity of a flight. Power drives both speed and loft, so harder shots
//! fly farther and higher. Forward is -Z; aim rotates around +Y.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Shot parameters supplied once at flight start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchInput {
    /// Charge level in [0, 100].
    pub power: f32,
    /// Aim angle in radians, clamped by the caller to ±π/3.
    pub aim_angle: f32,
}

/// Compute the initial velocity for a shot.
///
/// Pure function of its inputs. Rejecting weak charges (power ≤ 5) is the
/// caller's policy; this always produces the corresponding vector.
pub fn launch_velocity(input: LaunchInput) -> Vec3 {
    let t = input.power.clamp(0.0, 100.0) / 100.0;
    let speed = t * MAX_SPEED;
    let loft = LAUNCH_ANGLE_BASE + t * LAUNCH_ANGLE_SPAN;

    let dir_x = input.aim_angle.sin();
    let dir_z = -input.aim_angle.cos();

    Vec3::new(
        dir_x * speed,
        speed * loft.sin(),
        dir_z * speed * loft.cos(),
    )
}
