//! Procedural sound cues
//!
//! The simulation only raises [`GameEvent`]s. This module turns them into
//! short tone descriptions and hands those to whatever [`AudioSink`] the host
//! provides (Web Audio, cpal, a test recorder...). Sinks may fail; failures
//! are logged here and never reach the tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, Side};

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// One tone to play `delay_ms` after the event that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneCue {
    pub frequency_hz: f32,
    pub duration_s: f32,
    pub waveform: Waveform,
    pub delay_ms: u32,
}

impl ToneCue {
    const fn new(frequency_hz: f32, duration_s: f32, waveform: Waveform, delay_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_s,
            waveform,
            delay_ms,
        }
    }
}

/// Rising C-major arpeggio
const PLAYER_WIN: [ToneCue; 3] = [
    ToneCue::new(523.0, 0.2, Waveform::Sine, 0),
    ToneCue::new(659.0, 0.2, Waveform::Sine, 100),
    ToneCue::new(784.0, 0.3, Waveform::Sine, 200),
];

/// Falling arpeggio
const AI_WIN: [ToneCue; 3] = [
    ToneCue::new(392.0, 0.2, Waveform::Sine, 0),
    ToneCue::new(330.0, 0.2, Waveform::Sine, 100),
    ToneCue::new(262.0, 0.3, Waveform::Sine, 200),
];

/// Ordered cues for an event. Only game over is staged over time; the
/// host's audio layer owns the actual scheduling.
pub fn cues_for(event: &GameEvent) -> Vec<ToneCue> {
    match event {
        GameEvent::WallBounce => vec![ToneCue::new(300.0, 0.1, Waveform::Square, 0)],
        GameEvent::PlayerHit | GameEvent::AiHit => {
            vec![ToneCue::new(440.0, 0.1, Waveform::Sine, 0)]
        }
        GameEvent::PlayerScored => vec![ToneCue::new(500.0, 0.2, Waveform::Sine, 0)],
        GameEvent::AiScored => vec![ToneCue::new(200.0, 0.2, Waveform::Sawtooth, 0)],
        GameEvent::GameOver {
            winner: Side::Player,
        } => PLAYER_WIN.to_vec(),
        GameEvent::GameOver { winner: Side::Ai } => AI_WIN.to_vec(),
    }
}

/// Failure reported by an audio backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioError(pub String);

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio playback failed: {}", self.0)
    }
}

impl std::error::Error for AudioError {}

/// Something that can play a tone
pub trait AudioSink {
    fn play(&mut self, cue: &ToneCue) -> Result<(), AudioError>;
}

/// Play every cue for `events` in order. Sink errors are logged and skipped.
/// Returns how many cues were played successfully.
pub fn dispatch<S: AudioSink + ?Sized>(sink: &mut S, events: &[GameEvent]) -> usize {
    let mut played = 0;
    for event in events {
        for cue in cues_for(event) {
            match sink.play(&cue) {
                Ok(()) => played += 1,
                Err(err) => log::warn!("{err} ({event:?} at {} Hz)", cue.frequency_hz),
            }
        }
    }
    played
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: &ToneCue) -> Result<(), AudioError> {
        log::trace!(
            "tone {} Hz {:?} {:.2}s +{}ms",
            cue.frequency_hz,
            cue.waveform,
            cue.duration_s,
            cue.delay_ms
        );
        Ok(())
    }
}
