//! Headless shot controller
//!
//! The state machine wrapped around the flight simulator: charge a stroke,
//! aim it, fly it, count it. Owns the only call site of `sim::advance` and
//! guarantees a terminated flight is never advanced again - a new stroke
//! always starts from a fresh launch.
//!
//! The embedding shell feeds a `ShotInput` snapshot and a frame delta per
//! rendered frame, and reads back ball position and spin for display.

use serde::{Deserialize, Serialize};

use crate::clamp_aim;
use crate::consts::*;
use crate::sim::{
    BallSpin, BallState, Environment, LaunchInput, Outcome, advance, launch_velocity,
};

/// Phase of play for the current hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Lining up the shot; aim inputs active.
    #[default]
    Aiming,
    /// Power charging while the stroke input is held.
    Charging,
    /// Ball in flight; the simulator runs once per frame.
    Flying,
    /// Ball at rest on the course; next stroke plays from here.
    Stopped,
    /// Ball in the cup. Only reset leaves this phase.
    Scored,
}

/// Input snapshot for a single frame.
///
/// `charge_held` is level-triggered (held across frames); the rest are
/// one-shot presses the caller sets for exactly one frame.
#[derive(Debug, Clone, Default)]
pub struct ShotInput {
    pub charge_held: bool,
    pub aim_left: bool,
    pub aim_right: bool,
    pub reset: bool,
}

/// One hole of mini-golf, from tee to cup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub phase: GamePhase,
    /// Charge level in [0, 100].
    pub power: f32,
    /// Committed aim angle, radians around +Y, clamped to ±π/3.
    pub aim_angle: f32,
    pub strokes: u32,
    pub ball: BallState,
    /// Cosmetic roll for the renderer.
    pub spin: BallSpin,
    pub env: Environment,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl Game {
    pub fn new(env: Environment) -> Self {
        Self {
            phase: GamePhase::Aiming,
            power: 0.0,
            aim_angle: 0.0,
            strokes: 0,
            ball: BallState::at_tee(),
            spin: BallSpin::default(),
            env,
        }
    }

    /// Process one frame of input and time.
    pub fn frame(&mut self, input: &ShotInput, dt: f32) {
        if input.reset {
            self.reset();
            return;
        }

        match self.phase {
            GamePhase::Aiming | GamePhase::Stopped => {
                self.apply_aim(input);
                if input.charge_held {
                    self.power = 0.0;
                    self.phase = GamePhase::Charging;
                }
            }
            GamePhase::Charging => {
                if input.charge_held {
                    self.power = (self.power + CHARGE_RATE * dt.max(0.0)).min(100.0);
                } else {
                    self.release();
                }
            }
            GamePhase::Flying => match advance(&mut self.ball, dt, &self.env) {
                Outcome::Flying => {
                    self.spin.integrate(&self.ball, dt.clamp(0.0, MAX_FRAME_DT));
                }
                Outcome::Holed(_) => {
                    log::info!("holed in {} strokes", self.strokes);
                    self.phase = GamePhase::Scored;
                }
                Outcome::Stopped(_) => {
                    self.phase = GamePhase::Stopped;
                    self.power = 0.0;
                }
            },
            // Celebration is the renderer's business; nothing to do here.
            GamePhase::Scored => {}
        }
    }

    /// Return to the tee for a fresh hole.
    pub fn reset(&mut self) {
        self.ball = BallState::at_tee();
        self.spin = BallSpin::default();
        self.strokes = 0;
        self.power = 0.0;
        self.aim_angle = 0.0;
        self.phase = GamePhase::Aiming;
    }

    fn apply_aim(&mut self, input: &ShotInput) {
        if input.aim_left {
            self.aim_angle = clamp_aim(self.aim_angle + AIM_STEP);
        }
        if input.aim_right {
            self.aim_angle = clamp_aim(self.aim_angle - AIM_STEP);
        }
    }

    /// Stroke released: launch if charged past the threshold, otherwise
    /// wave it off and return to aiming.
    fn release(&mut self) {
        if self.power > MIN_LAUNCH_POWER {
            let velocity = launch_velocity(LaunchInput {
                power: self.power,
                aim_angle: self.aim_angle,
            });
            // Fresh flight from the current lie.
            self.ball = BallState::new(self.ball.position, velocity);
            self.strokes += 1;
            self.phase = GamePhase::Flying;
            log::debug!(
                "stroke {} launched: power {:.1}, aim {:.3}",
                self.strokes,
                self.power,
                self.aim_angle
            );
        } else {
            self.power = 0.0;
            self.phase = GamePhase::Aiming;
        }
    }
}
