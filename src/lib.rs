//! Neon Pong - human vs. AI paddle arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, AI, match state)
//! - `settings`: Data-driven game tuning
//! - `audio`: Event to tone-cue mapping for the audio collaborator
//!
//! Rendering, input capture and canvas sizing live in the host. The core
//! consumes a [`sim::TickInput`] per frame and hands back a [`sim::Snapshot`]
//! plus the [`sim::GameEvent`]s raised during the tick.

pub mod audio;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Reference tuning constants (the defaults behind [`Settings`])
pub mod consts {
    /// Nominal frame rate the host scheduler drives `tick` at
    pub const FPS: u32 = 60;
    /// Milliseconds of wall-clock per tick at the nominal frame rate
    pub const FRAME_MS: f64 = 1000.0 / FPS as f64;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 900.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const AI_SPEED: f32 = 4.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    pub const BALL_MAX_SPEED: f32 = 12.0;
    /// Added to ball speed on every paddle hit
    pub const BALL_SPEED_INCREASE: f32 = 0.3;
    pub const TRAIL_LENGTH: usize = 10;

    /// AI defaults
    pub const AI_REACTION_DELAY_MS: f64 = 150.0;
    pub const AI_ERROR_MARGIN: f32 = 35.0;
    pub const AI_DEAD_ZONE: f32 = 40.0;

    /// Points needed to win a match
    pub const WIN_SCORE: u32 = 5;

    /// Particle bursts
    pub const WALL_BURST: usize = 5;
    pub const PADDLE_BURST: usize = 10;
    /// Radius multiplier applied to every particle each tick
    pub const PARTICLE_SHRINK: f32 = 0.96;
}

/// Launch velocity for a ball travelling at `speed` along `angle` (radians from
/// the horizontal), heading right when `direction` is positive.
#[inline]
pub fn launch_velocity(angle: f32, speed: f32, direction: f32) -> Vec2 {
    Vec2::new(angle.cos() * speed * direction.signum(), angle.sin() * speed)
}
