//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call
//! - Seeded RNG only, host-supplied clock only
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod bounds;
pub mod collision;
pub mod particles;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ai::update_ai;
pub use bounds::{Court, Rect, circle_overlaps_rect, clamp_span};
pub use collision::{BallEvent, advance_ball, reset_ball};
pub use snapshot::{BallView, ParticleView, Snapshot, TrailDot};
pub use state::{
    AiState, Ball, GameEvent, MatchContext, MatchPhase, Paddle, Particle, Side, TrailPoint,
};
pub use tick::{TickInput, tick};
