//! Par One - the ball-flight core of a mini-golf game
//!
//! Core modules:
//! - `sim`: Deterministic flight simulation (integration, collisions, hole capture)
//! - `game`: Headless shot controller (charging, aiming, stroke counting)
//!
//! Rendering, input wiring, and audio belong to the embedding shell; this
//! crate only produces a kinematic state per frame and a terminal outcome
//! per flight.

pub mod game;
pub mod sim;

pub use game::{Game, GamePhase, ShotInput};
pub use sim::{BallSpin, BallState, Environment, LaunchInput, Outcome, advance, launch_velocity};

/// Physics and gameplay constants
pub mod consts {
    use glam::Vec3;

    /// Largest frame delta the simulator will integrate in one step.
    /// Caps tab-suspension deltas that would otherwise tunnel the ball
    /// through the ground or a wall.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Gravity acceleration (units/s², negative = down).
    pub const GRAVITY: f32 = -15.0;
    /// Rolling friction multiplier applied to horizontal velocity each
    /// grounded step.
    pub const FRICTION: f32 = 0.985;
    /// Fraction of vertical speed retained on a ground bounce.
    pub const BOUNCE_DAMPING: f32 = 0.4;
    /// Downward speed below which ground contact settles instead of bouncing.
    pub const BOUNCE_THRESHOLD: f32 = 1.0;
    /// Total speed below which a grounded ball counts as stopped.
    pub const MIN_VELOCITY: f32 = 0.05;
    /// Height of the ball center when resting on the ground (ball radius
    /// folded in).
    pub const REST_HEIGHT: f32 = 0.2;
    /// Tolerance above rest height still considered "on the ground" for
    /// stop detection.
    pub const REST_TOLERANCE: f32 = 0.01;

    /// Course rectangle on the XZ plane.
    pub const COURSE_X_MIN: f32 = -5.5;
    pub const COURSE_X_MAX: f32 = 5.5;
    pub const COURSE_Z_MIN: f32 = -10.0;
    pub const COURSE_Z_MAX: f32 = 10.0;
    /// Fraction of velocity retained (reflected) off a course wall.
    pub const WALL_RESTITUTION: f32 = 0.5;

    /// Hole center on the XZ plane.
    pub const HOLE_X: f32 = 0.0;
    pub const HOLE_Z: f32 = -8.0;
    /// Capture radius - ball sinks when its center is within this distance.
    pub const HOLE_RADIUS: f32 = 0.15;
    /// Ball must be below this height to be captured (no fly-over capture).
    pub const HOLE_CEILING: f32 = 0.3;
    /// Ball must be slower than this horizontally to drop in.
    pub const HOLE_SPEED_CEILING: f32 = 3.0;

    /// Speed imparted by a full-power stroke (units/s).
    pub const MAX_SPEED: f32 = 20.0;
    /// Loft angle at zero power (radians).
    pub const LAUNCH_ANGLE_BASE: f32 = 0.4;
    /// Extra loft added at full power (radians).
    pub const LAUNCH_ANGLE_SPAN: f32 = 0.3;
    /// Aim angle is clamped to ±π/3 around the -Z axis.
    pub const MAX_AIM_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Minimum charge that actually launches a shot.
    pub const MIN_LAUNCH_POWER: f32 = 5.0;
    /// Charge ramp in power units per second (original tuning: +2 per 30 ms).
    pub const CHARGE_RATE: f32 = 2.0 / 0.03;
    /// Aim nudge per input press (radians).
    pub const AIM_STEP: f32 = 0.05;

    /// Horizontal speed above which the ball visibly rolls.
    pub const ROLL_SPEED_THRESHOLD: f32 = 0.1;
    /// Roll rotation per unit of horizontal travel (radians).
    pub const ROLL_RATE: f32 = 3.0;

    /// Tee position - where the ball spawns and returns on reset.
    pub const TEE_POSITION: Vec3 = Vec3::new(0.0, REST_HEIGHT, 8.0);
}

/// Clamp an aim angle to the playable cone around the -Z axis.
#[inline]
pub fn clamp_aim(angle: f32) -> f32 {
    angle.clamp(-consts::MAX_AIM_ANGLE, consts::MAX_AIM_ANGLE)
}
