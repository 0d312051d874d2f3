//! Match state and core simulation types
//!
//! Everything the tick mutates lives in [`MatchContext`]; there is no ambient
//! global state. The host owns one context per match.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{Court, Rect};
use crate::settings::Settings;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the host to start; nothing simulates
    Start,
    /// Active gameplay
    Playing,
    /// Frozen mid-rally; every entity keeps its exact state
    Paused,
    /// A side reached the win score; terminal until restart
    GameOver,
}

/// Which paddle a point, hit or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Ai,
}

/// Discrete feedback for the audio/visual collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PlayerHit,
    AiHit,
    PlayerScored,
    AiScored,
    GameOver { winner: Side },
}

/// A paddle. `x` is fixed per side; only `y` moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity applied on the last update
    pub dy: f32,
    pub speed: f32,
}

impl Paddle {
    /// Paddle vertically centered on the court
    pub fn new(x: f32, width: f32, height: f32, speed: f32, court: &Court) -> Self {
        Self {
            x,
            y: court.height / 2.0 - height / 2.0,
            width,
            height,
            dy: 0.0,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully on the court
    #[inline]
    pub fn clamp_to(&mut self, court: &Court) {
        self.y = court.clamp_top(self.y, self.height);
    }

    /// Place the paddle's center at `y`, clamped to the court
    pub fn center_on(&mut self, y: f32, court: &Court) {
        self.y = y - self.height / 2.0;
        self.clamp_to(court);
    }

    pub fn recenter(&mut self, court: &Court) {
        self.dy = 0.0;
        self.center_on(court.height / 2.0, court);
    }
}

/// One remembered ball position, oldest first in [`Ball::trail`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed, kept equal to `vel.length()`
    pub speed: f32,
    /// Recent positions for rendering (oldest first)
    pub trail: VecDeque<TrailPoint>,
}

impl Ball {
    /// Resting ball at court center moving diagonally at `speed` on both axes
    pub fn new(court: &Court, radius: f32, speed: f32, trail_length: usize) -> Self {
        Self {
            pos: court.center(),
            vel: Vec2::splat(speed),
            radius,
            speed,
            trail: VecDeque::with_capacity(trail_length + 1),
        }
    }

    /// Record current position, evicting the oldest beyond `capacity`
    pub fn record_trail(&mut self, capacity: usize) {
        self.trail.push_back(TrailPoint { pos: self.pos });
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

/// A short-lived visual spark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 1.0 at spawn, removed once it reaches 0
    pub life: f32,
    /// Life lost per tick
    pub decay: f32,
}

/// AI controller memory, carried across ticks to model reaction time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    /// Host clock (ms) of the last ball sample, `None` before the first one
    pub last_reaction_ms: Option<f64>,
    /// Court y the paddle center is steering toward
    pub target_y: f32,
    /// Aim error applied on the last sample
    pub prediction_offset: f32,
}

impl AiState {
    pub fn new(court: &Court) -> Self {
        Self {
            last_reaction_ms: None,
            target_y: court.height / 2.0,
            prediction_offset: 0.0,
        }
    }
}

/// Complete match state, owned by the host's simulation loop
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub settings: Settings,
    pub court: Court,
    pub phase: MatchPhase,
    pub player_score: u32,
    pub ai_score: u32,
    pub player: Paddle,
    pub ai_paddle: Paddle,
    pub ai: AiState,
    pub ball: Ball,
    /// Visual only; never affects gameplay
    pub particles: Vec<Particle>,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl MatchContext {
    /// Fresh match in the `Start` phase. `settings` is assumed validated.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let court = Court::new(settings.court.width, settings.court.height);
        let player = Paddle::new(
            settings.player_paddle_x(),
            settings.paddle.width,
            settings.paddle.height,
            settings.paddle.speed,
            &court,
        );
        let ai_paddle = Paddle::new(
            settings.ai_paddle_x(court.width),
            settings.paddle.width,
            settings.paddle.height,
            settings.paddle.ai_speed,
            &court,
        );
        let ball = Ball::new(
            &court,
            settings.ball.radius,
            settings.ball.initial_speed,
            settings.ball.trail_length,
        );

        Self {
            court,
            phase: MatchPhase::Start,
            player_score: 0,
            ai_score: 0,
            player,
            ai_paddle,
            ai: AiState::new(&court),
            ball,
            particles: Vec::new(),
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
        }
    }

    /// Match with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Settings::default(), seed)
    }

    /// `(player, ai)` score line
    pub fn final_score(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }

    /// Winning side, only once the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.phase != MatchPhase::GameOver {
            return None;
        }
        let win = self.settings.rules.win_score;
        if self.player_score >= win {
            Some(Side::Player)
        } else if self.ai_score >= win {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let ctx = MatchContext::with_seed(1);
        assert_eq!(ctx.phase, MatchPhase::Start);
        assert_eq!(ctx.player.x, 30.0);
        assert_eq!(ctx.ai_paddle.x, 855.0);
        assert_eq!(ctx.player.y, 250.0);
        assert_eq!(ctx.ai_paddle.y, 250.0);
        assert_eq!(ctx.ball.pos, Vec2::new(450.0, 300.0));
        assert_eq!(ctx.ai.target_y, 300.0);
        assert!(ctx.ai_paddle.speed < ctx.player.speed);
        assert_eq!(ctx.winner(), None);
    }

    #[test]
    fn test_trail_is_fifo_and_bounded() {
        let court = Court::new(900.0, 600.0);
        let mut ball = Ball::new(&court, 12.0, 5.0, 10);
        for i in 0..15 {
            ball.pos = Vec2::new(i as f32, 0.0);
            ball.record_trail(10);
        }
        assert_eq!(ball.trail.len(), 10);
        // Positions 0..5 were evicted first
        assert_eq!(ball.trail.front().map(|p| p.pos.x), Some(5.0));
        assert_eq!(ball.trail.back().map(|p| p.pos.x), Some(14.0));
    }

    #[test]
    fn test_paddle_center_on_clamps() {
        let court = Court::new(900.0, 600.0);
        let mut paddle = Paddle::new(30.0, 15.0, 100.0, 8.0, &court);
        paddle.center_on(10.0, &court);
        assert_eq!(paddle.y, 0.0);
        paddle.center_on(590.0, &court);
        assert_eq!(paddle.y, 500.0);
        paddle.center_on(200.0, &court);
        assert_eq!(paddle.center_y(), 200.0);
    }
}
