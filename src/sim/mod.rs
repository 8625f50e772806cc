//! Deterministic flight simulation module
//!
//! All ball physics lives here. This module must be pure and deterministic:
//! - Frame deltas are the only external input, clamped before use
//! - No rendering or platform dependencies
//! - A step is a pure transition `(state, dt, env) -> (state', outcome)`

pub mod collision;
pub mod environment;
pub mod launch;
pub mod state;
pub mod tick;

pub use environment::{CourseBounds, Environment, Hole};
pub use launch::{LaunchInput, launch_velocity};
pub use state::{BallSpin, BallState, Outcome};
pub use tick::advance;
