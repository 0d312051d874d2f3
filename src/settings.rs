//! Game settings and tuning
//!
//! Every number the simulation reads comes from here. Hosts may override the
//! defaults with a (partial) JSON document; nothing is written back.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Court (viewport) dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for CourtSettings {
    fn default() -> Self {
        Self {
            width: COURT_WIDTH,
            height: COURT_HEIGHT,
        }
    }
}

/// Paddle geometry and speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Distance from the side wall to the paddle's outer face
    pub margin: f32,
    /// Player paddle speed (pixels per tick)
    pub speed: f32,
    /// AI paddle speed (pixels per tick), kept below the player's
    pub ai_speed: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            margin: PADDLE_MARGIN,
            speed: PLAYER_SPEED,
            ai_speed: AI_SPEED,
        }
    }
}

/// Ball size and speed curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    pub initial_speed: f32,
    pub max_speed: f32,
    pub speed_increase: f32,
    pub trail_length: usize,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            initial_speed: BALL_START_SPEED,
            max_speed: BALL_MAX_SPEED,
            speed_increase: BALL_SPEED_INCREASE,
            trail_length: TRAIL_LENGTH,
        }
    }
}

/// AI opponent behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// Minimum time between two samples of the ball position
    pub reaction_delay_ms: f64,
    /// Width of the uniform aim error band (± half of this)
    pub error_margin: f32,
    /// Distance from target under which the paddle holds still
    pub dead_zone: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            reaction_delay_ms: AI_REACTION_DELAY_MS,
            error_margin: AI_ERROR_MARGIN,
            dead_zone: AI_DEAD_ZONE,
        }
    }
}

/// Match rules and effect sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub win_score: u32,
    pub wall_burst: usize,
    pub paddle_burst: usize,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            wall_burst: WALL_BURST,
            paddle_burst: PADDLE_BURST,
        }
    }
}

/// Full set of tuning values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub court: CourtSettings,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub ai: AiSettings,
    pub rules: RuleSettings,
}

/// Why a settings document was rejected
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "malformed settings JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for dumping the effective tuning)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        }

        if self.court.width <= 0.0 || self.court.height <= 0.0 {
            return invalid("court", "dimensions must be positive");
        }
        if self.paddle.width <= 0.0 || self.paddle.height <= 0.0 {
            return invalid("paddle", "dimensions must be positive");
        }
        if self.paddle.height > self.court.height {
            return invalid("paddle.height", "paddle taller than the court");
        }
        if self.paddle.speed <= 0.0 || self.paddle.ai_speed <= 0.0 {
            return invalid("paddle", "speeds must be positive");
        }
        if self.paddle.ai_speed >= self.paddle.speed {
            return invalid("paddle.ai_speed", "must be slower than the player paddle");
        }
        if self.ball.radius <= 0.0 {
            return invalid("ball.radius", "must be positive");
        }
        if self.ball.initial_speed <= 0.0 {
            return invalid("ball.initial_speed", "must be positive");
        }
        if self.ball.max_speed < self.ball.initial_speed {
            return invalid("ball.max_speed", "must not be below initial_speed");
        }
        if self.ball.speed_increase < 0.0 {
            return invalid("ball.speed_increase", "must not be negative");
        }
        if self.ai.reaction_delay_ms < 0.0 || self.ai.error_margin < 0.0 || self.ai.dead_zone < 0.0
        {
            return invalid("ai", "values must not be negative");
        }
        if self.rules.win_score == 0 {
            return invalid("rules.win_score", "must be at least 1");
        }
        Ok(())
    }

    /// X coordinate of the player paddle's left face
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle.margin
    }

    /// X coordinate of the AI paddle's left face for a court `width` wide
    pub fn ai_paddle_x(&self, width: f32) -> f32 {
        width - self.paddle.margin - self.paddle.width
    }
}
