//! Ball motion, collision response and point detection
//!
//! One call to [`advance_ball`] moves the ball by one tick and resolves, in
//! order: top/bottom walls, the player paddle, the AI paddle, then the goal
//! lines. Walls only flip the vertical velocity (no positional correction),
//! so a fast ball can sink a little into a wall before bouncing. Paddles
//! both redirect the ball and push it flush against their face so the same
//! hit cannot trigger twice.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::{Court, circle_overlaps_rect};
use super::state::{Ball, Paddle, Side};
use crate::launch_velocity;
use crate::settings::BallSettings;

/// What the ball did this tick. At most one is reported; a later stage
/// (paddle over wall, goal over everything) supersedes an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallEvent {
    WallBounce,
    PlayerHit,
    AiHit,
    PlayerScored,
    AiScored,
}

impl BallEvent {
    /// Side that won the point, for the two goal events
    pub fn scorer(&self) -> Option<Side> {
        match self {
            BallEvent::PlayerScored => Some(Side::Player),
            BallEvent::AiScored => Some(Side::Ai),
            _ => None,
        }
    }
}

/// Advance the ball one tick against both paddles and the court edges
pub fn advance_ball(
    ball: &mut Ball,
    player: &Paddle,
    ai: &Paddle,
    court: &Court,
    settings: &BallSettings,
) -> Option<BallEvent> {
    let mut event = None;

    ball.record_trail(settings.trail_length);
    ball.pos += ball.vel;

    // Top and bottom walls
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > court.height {
        ball.vel.y = -ball.vel.y;
        event = Some(BallEvent::WallBounce);
    }

    // Player paddle (left), sends the ball right
    let rect = player.rect();
    if circle_overlaps_rect(ball.pos, ball.radius, &rect) {
        deflect(ball, player, 1.0, settings);
        ball.pos.x = rect.right() + ball.radius;
        event = Some(BallEvent::PlayerHit);
    }

    // AI paddle (right), sends the ball left
    let rect = ai.rect();
    if circle_overlaps_rect(ball.pos, ball.radius, &rect) {
        deflect(ball, ai, -1.0, settings);
        ball.pos.x = rect.x - ball.radius;
        event = Some(BallEvent::AiHit);
    }

    // Goal lines
    if ball.pos.x - ball.radius < 0.0 {
        event = Some(BallEvent::AiScored);
    } else if ball.pos.x + ball.radius > court.width {
        event = Some(BallEvent::PlayerScored);
    }

    event
}

/// Bounce off a paddle: the further from the paddle's center the ball lands,
/// the steeper it leaves (up to 45°). Every hit speeds the ball up to the cap.
fn deflect(ball: &mut Ball, paddle: &Paddle, direction: f32, settings: &BallSettings) {
    let hit_pos = ((ball.pos.y - paddle.center_y()) / (paddle.height / 2.0)).clamp(-1.0, 1.0);
    let angle = hit_pos * FRAC_PI_4;

    ball.speed = (ball.speed + settings.speed_increase).min(settings.max_speed);
    ball.vel = launch_velocity(angle, ball.speed, direction);
}

/// Serve a fresh ball from court center after a point (or at match start):
/// initial speed, a random angle within ±30°, a random side, empty trail.
pub fn reset_ball<R: Rng>(ball: &mut Ball, court: &Court, settings: &BallSettings, rng: &mut R) {
    ball.pos = court.center();
    ball.speed = settings.initial_speed;

    let angle = rng.random_range(-FRAC_PI_6..=FRAC_PI_6);
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    ball.vel = launch_velocity(angle, ball.speed, direction);

    ball.clear_trail();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Rig {
        court: Court,
        player: Paddle,
        ai: Paddle,
        ball: Ball,
        settings: BallSettings,
    }

    fn rig() -> Rig {
        let court = Court::new(900.0, 600.0);
        Rig {
            player: Paddle::new(30.0, 15.0, 100.0, 8.0, &court),
            ai: Paddle::new(855.0, 15.0, 100.0, 4.0, &court),
            ball: Ball::new(&court, 12.0, 5.0, 10),
            settings: BallSettings::default(),
            court,
        }
    }

    impl Rig {
        fn step(&mut self) -> Option<BallEvent> {
            advance_ball(
                &mut self.ball,
                &self.player,
                &self.ai,
                &self.court,
                &self.settings,
            )
        }
    }

    #[test]
    fn test_free_flight() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(400.0, 300.0);
        rig.ball.vel = Vec2::new(3.0, 4.0);

        assert_eq!(rig.step(), None);
        assert_eq!(rig.ball.pos, Vec2::new(403.0, 304.0));
        assert_eq!(rig.ball.trail.len(), 1);
        assert_eq!(rig.ball.trail[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_wall_bounce_without_correction() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(400.0, 14.0);
        rig.ball.vel = Vec2::new(3.0, -4.0);
        rig.ball.speed = 5.0;

        assert_eq!(rig.step(), Some(BallEvent::WallBounce));
        assert_eq!(rig.ball.vel, Vec2::new(3.0, 4.0));
        // Left inside the wall band, only velocity flipped
        assert_eq!(rig.ball.pos.y, 10.0);
        assert_eq!(rig.ball.speed, 5.0);
    }

    #[test]
    fn test_player_center_hit_is_horizontal() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(60.0, 300.0);
        rig.ball.vel = Vec2::new(-5.0, 0.0);

        assert_eq!(rig.step(), Some(BallEvent::PlayerHit));
        let speed = 5.0 + rig.settings.speed_increase;
        assert_eq!(rig.ball.speed, speed);
        assert_eq!(rig.ball.vel, Vec2::new(speed, 0.0));
        // Flush against the paddle face
        assert_eq!(rig.ball.pos.x, 30.0 + 15.0 + 12.0);
    }

    #[test]
    fn test_edge_hit_deflects_45_degrees() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(60.0, 350.0);
        rig.ball.vel = Vec2::new(-5.0, 0.0);

        assert_eq!(rig.step(), Some(BallEvent::PlayerHit));
        let expected = rig.ball.speed * FRAC_PI_4.sin();
        assert!((rig.ball.vel.y - expected).abs() < 1e-5);
        assert!((rig.ball.vel.x - rig.ball.speed * FRAC_PI_4.cos()).abs() < 1e-5);
        assert!((rig.ball.vel.length() - rig.ball.speed).abs() < 1e-4);
    }

    #[test]
    fn test_ai_hit_sends_ball_left() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(840.0, 280.0);
        rig.ball.vel = Vec2::new(5.0, 0.0);

        assert_eq!(rig.step(), Some(BallEvent::AiHit));
        assert!(rig.ball.vel.x < 0.0);
        // Hit above center goes up
        assert!(rig.ball.vel.y < 0.0);
        assert_eq!(rig.ball.pos.x, 855.0 - 12.0);
    }

    #[test]
    fn test_speed_capped() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(60.0, 300.0);
        rig.ball.vel = Vec2::new(-11.9, 0.0);
        rig.ball.speed = 11.9;

        rig.step();
        assert_eq!(rig.ball.speed, rig.settings.max_speed);
    }

    #[test]
    fn test_miss_above_paddle() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(60.0, 200.0);
        rig.ball.vel = Vec2::new(-5.0, 0.0);

        assert_eq!(rig.step(), None);
        assert_eq!(rig.ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_goal_lines() {
        let mut rig = rig();
        rig.ball.pos = Vec2::new(5.0, 300.0);
        rig.ball.vel = Vec2::new(-3.0, 0.0);
        assert_eq!(rig.step(), Some(BallEvent::AiScored));
        assert_eq!(BallEvent::AiScored.scorer(), Some(Side::Ai));

        let mut rig = self::rig();
        rig.ball.pos = Vec2::new(890.0, 500.0);
        rig.ball.vel = Vec2::new(3.0, 0.0);
        assert_eq!(rig.step(), Some(BallEvent::PlayerScored));
        assert_eq!(BallEvent::WallBounce.scorer(), None);
    }

    #[test]
    fn test_reset_ball() {
        let mut rig = rig();
        let mut rng = Pcg32::seed_from_u64(5);
        rig.ball.pos = Vec2::new(12.0, 34.0);
        rig.ball.speed = 11.0;
        rig.ball.record_trail(10);

        for _ in 0..50 {
            reset_ball(&mut rig.ball, &rig.court, &rig.settings, &mut rng);
            assert_eq!(rig.ball.pos, Vec2::new(450.0, 300.0));
            assert_eq!(rig.ball.speed, 5.0);
            assert!(rig.ball.trail.is_empty());

            // Launch stays within ±30° of horizontal
            let angle = (rig.ball.vel.y / rig.ball.vel.x.abs()).atan();
            assert!(angle.abs() <= FRAC_PI_6 + 1e-5);
            assert!((rig.ball.vel.length() - 5.0).abs() < 1e-4);
        }
    }
}
