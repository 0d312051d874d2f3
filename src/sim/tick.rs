//! Fixed timestep simulation tick and match lifecycle
//!
//! The host scheduler calls [`tick`] once per frame. `tick` never schedules
//! anything itself: outside `Playing` it returns immediately with no events,
//! which is how a paused or finished match stops advancing.

use super::ai::update_ai;
use super::bounds::Court;
use super::collision::{BallEvent, advance_ball, reset_ball};
use super::particles;
use super::state::{AiState, Ball, GameEvent, MatchContext, MatchPhase, Paddle, Side};

/// Input for a single tick, sampled by the host before the call
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the player paddle up (wins over `down`)
    pub up: bool,
    /// Move the player paddle down
    pub down: bool,
    /// Touch drag: court y to center the player paddle on
    pub touch_y: Option<f32>,
    /// Host clock in milliseconds, drives the AI reaction delay
    pub now_ms: f64,
}

/// Advance the match by one tick and return the events it raised
pub fn tick(ctx: &mut MatchContext, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if ctx.phase != MatchPhase::Playing {
        return events;
    }

    ctx.time_ticks += 1;

    update_player(&mut ctx.player, input, &ctx.court);

    update_ai(
        &mut ctx.ai,
        &mut ctx.ai_paddle,
        &ctx.ball,
        &ctx.court,
        &ctx.settings.ai,
        input.now_ms,
        &mut ctx.rng,
    );

    let ball_event = advance_ball(
        &mut ctx.ball,
        &ctx.player,
        &ctx.ai_paddle,
        &ctx.court,
        &ctx.settings.ball,
    );
    match ball_event {
        Some(BallEvent::WallBounce) => {
            let burst = ctx.settings.rules.wall_burst;
            particles::spawn(&mut ctx.particles, ctx.ball.pos, burst, &mut ctx.rng);
            events.push(GameEvent::WallBounce);
        }
        Some(BallEvent::PlayerHit) | Some(BallEvent::AiHit) => {
            let burst = ctx.settings.rules.paddle_burst;
            particles::spawn(&mut ctx.particles, ctx.ball.pos, burst, &mut ctx.rng);
            events.push(if ball_event == Some(BallEvent::PlayerHit) {
                GameEvent::PlayerHit
            } else {
                GameEvent::AiHit
            });
        }
        Some(BallEvent::PlayerScored) => award_point(ctx, Side::Player, &mut events),
        Some(BallEvent::AiScored) => award_point(ctx, Side::Ai, &mut events),
        None => {}
    }

    particles::update(&mut ctx.particles);

    events
}

/// Key intent moves at paddle speed; a touch drag snaps the paddle's center
fn update_player(paddle: &mut Paddle, input: &TickInput, court: &Court) {
    if let Some(y) = input.touch_y {
        paddle.dy = 0.0;
        paddle.center_on(y, court);
        return;
    }

    paddle.dy = if input.up {
        -paddle.speed
    } else if input.down {
        paddle.speed
    } else {
        0.0
    };
    paddle.y += paddle.dy;
    paddle.clamp_to(court);
}

/// Credit a point, then either end the match or serve a new ball
fn award_point(ctx: &mut MatchContext, side: Side, events: &mut Vec<GameEvent>) {
    let score = match side {
        Side::Player => {
            ctx.player_score += 1;
            events.push(GameEvent::PlayerScored);
            ctx.player_score
        }
        Side::Ai => {
            ctx.ai_score += 1;
            events.push(GameEvent::AiScored);
            ctx.ai_score
        }
    };
    log::debug!(
        "{:?} scored ({} - {})",
        side,
        ctx.player_score,
        ctx.ai_score
    );

    if score >= ctx.settings.rules.win_score {
        ctx.phase = MatchPhase::GameOver;
        events.push(GameEvent::GameOver { winner: side });
        log::info!(
            "Game over: {:?} wins {} - {}",
            side,
            ctx.player_score,
            ctx.ai_score
        );
    } else {
        reset_ball(&mut ctx.ball, &ctx.court, &ctx.settings.ball, &mut ctx.rng);
    }
}

impl MatchContext {
    /// `Start` -> `Playing`, serving a fresh ball. No-op elsewhere.
    pub fn start(&mut self) -> bool {
        if self.phase != MatchPhase::Start {
            return false;
        }
        reset_ball(&mut self.ball, &self.court, &self.settings.ball, &mut self.rng);
        self.phase = MatchPhase::Playing;
        log::info!("Match started (seed {})", self.seed);
        true
    }

    /// `Playing` -> `Paused`. No-op elsewhere.
    pub fn pause(&mut self) -> bool {
        if self.phase != MatchPhase::Playing {
            return false;
        }
        self.phase = MatchPhase::Paused;
        log::info!("Paused");
        true
    }

    /// `Paused` -> `Playing` without touching any entity. No-op elsewhere.
    pub fn resume(&mut self) -> bool {
        if self.phase != MatchPhase::Paused {
            return false;
        }
        self.phase = MatchPhase::Playing;
        log::info!("Resumed");
        true
    }

    /// Pause key: flips between `Playing` and `Paused`
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            MatchPhase::Playing => self.pause(),
            MatchPhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Back to `Start` from any phase: scores cleared, paddles recentered,
    /// ball parked at center, effects and AI memory wiped. The next rally
    /// needs an explicit [`start`](Self::start).
    pub fn restart(&mut self) {
        self.phase = MatchPhase::Start;
        self.player_score = 0;
        self.ai_score = 0;
        self.player.recenter(&self.court);
        self.ai_paddle.recenter(&self.court);
        self.ai = AiState::new(&self.court);
        self.ball = Ball::new(
            &self.court,
            self.settings.ball.radius,
            self.settings.ball.initial_speed,
            self.settings.ball.trail_length,
        );
        self.particles.clear();
        log::info!("Match reset");
    }

    /// Adopt new viewport dimensions. Positions scale proportionally, the AI
    /// paddle keeps its wall margin, and both paddles are re-clamped.
    pub fn resize(&mut self, width: f32, height: f32) {
        let court = Court::new(width, height);
        if width <= 0.0 || height <= 0.0 || court == self.court {
            return;
        }
        let scale = self.court.scale_to(&court);

        self.ball.pos *= scale;
        for point in self.ball.trail.iter_mut() {
            point.pos *= scale;
        }
        for particle in self.particles.iter_mut() {
            particle.pos *= scale;
        }

        self.player.x = self.settings.player_paddle_x();
        self.ai_paddle.x = self.settings.ai_paddle_x(court.width);
        for paddle in [&mut self.player, &mut self.ai_paddle] {
            let center = paddle.center_y() * scale.y;
            paddle.center_on(center, &court);
        }
        self.ai.target_y *= scale.y;

        log::debug!(
            "Court resized {}x{} -> {}x{}",
            self.court.width,
            self.court.height,
            width,
            height
        );
        self.court = court;
    }
}
