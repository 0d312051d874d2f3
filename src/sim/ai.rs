//! AI opponent
//!
//! A reactive tracker, not a predictor: it samples the ball's height at most
//! once per reaction window, aims with a random error, and slides its paddle
//! toward that point at a fixed speed slower than the player's.

use rand::Rng;

use super::bounds::Court;
use super::state::{AiState, Ball, Paddle};
use crate::settings::AiSettings;

/// Steer the AI paddle for one tick. `now_ms` is the host clock.
pub fn update_ai<R: Rng>(
    ai: &mut AiState,
    paddle: &mut Paddle,
    ball: &Ball,
    court: &Court,
    settings: &AiSettings,
    now_ms: f64,
    rng: &mut R,
) {
    if ball.vel.x > 0.0 {
        // Ball incoming: re-aim only after the reaction delay
        let due = ai
            .last_reaction_ms
            .is_none_or(|last| now_ms - last >= settings.reaction_delay_ms);
        if due {
            ai.last_reaction_ms = Some(now_ms);
            let half = settings.error_margin / 2.0;
            ai.prediction_offset = rng.random_range(-half..=half);
            ai.target_y = ball.pos.y + ai.prediction_offset;
        }
    } else {
        // Ball receding: drift back to the middle
        ai.target_y = court.height / 2.0;
    }

    let diff = ai.target_y - paddle.center_y();
    paddle.dy = if diff.abs() > settings.dead_zone {
        paddle.speed * diff.signum()
    } else {
        0.0
    };
    paddle.y += paddle.dy;
    paddle.clamp_to(court);
}
