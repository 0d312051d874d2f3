//! Read-only per-frame view for the renderer
//!
//! Everything the drawing collaborator needs, already reduced to plain
//! positions, sizes and opacities. Serializable so hosts can ship it across
//! a boundary (e.g. to JS) as JSON.

use glam::Vec2;
use serde::Serialize;

use super::bounds::{Court, Rect};
use super::state::{MatchContext, MatchPhase};

/// Trail dot with its fade (oldest faintest)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailDot {
    pub pos: Vec2,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub trail: Vec<TrailDot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// Snapshot of a match at the end of a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: MatchPhase,
    pub player_score: u32,
    pub ai_score: u32,
    pub court: Court,
    pub player: Rect,
    pub ai: Rect,
    pub ball: BallView,
    pub particles: Vec<ParticleView>,
}

impl MatchContext {
    pub fn snapshot(&self) -> Snapshot {
        let len = self.ball.trail.len() as f32;
        let trail = self
            .ball
            .trail
            .iter()
            .enumerate()
            .map(|(i, point)| TrailDot {
                pos: point.pos,
                alpha: (i as f32 / len) * 0.5,
            })
            .collect();

        let particles = self
            .particles
            .iter()
            .map(|p| ParticleView {
                pos: p.pos,
                radius: p.radius,
                opacity: p.life.clamp(0.0, 1.0),
            })
            .collect();

        Snapshot {
            phase: self.phase,
            player_score: self.player_score,
            ai_score: self.ai_score,
            court: self.court,
            player: self.player.rect(),
            ai: self.ai_paddle.rect(),
            ball: BallView {
                pos: self.ball.pos,
                radius: self.ball.radius,
                trail,
            },
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_snapshot_of_new_match() {
        let ctx = MatchContext::with_seed(1);
        let snap = ctx.snapshot();
        assert_eq!(snap.phase, MatchPhase::Start);
        assert_eq!(snap.player, Rect::new(30.0, 250.0, 15.0, 100.0));
        assert_eq!(snap.ai, Rect::new(855.0, 250.0, 15.0, 100.0));
        assert_eq!(snap.ball.pos, Vec2::new(450.0, 300.0));
        assert!(snap.ball.trail.is_empty());
        assert!(snap.particles.is_empty());
    }

    #[test]
    fn test_trail_fades_toward_oldest() {
        let mut ctx = MatchContext::with_seed(8);
        ctx.start();
        for _ in 0..4 {
            tick(&mut ctx, &TickInput::default());
        }

        let snap = ctx.snapshot();
        let alphas: Vec<f32> = snap.ball.trail.iter().map(|d| d.alpha).collect();
        assert_eq!(alphas, vec![0.0, 0.125, 0.25, 0.375]);
    }

    #[test]
    fn test_serializes_to_json() {
        let ctx = MatchContext::with_seed(1);
        let json = serde_json::to_string(&ctx.snapshot()).expect("snapshot serializes");
        assert!(json.contains("\"phase\":\"Start\""));
        assert!(json.contains("\"player_score\":0"));
    }
}
