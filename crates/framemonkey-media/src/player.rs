//! Playback engine seam and a clock-driven preview player.

use framemonkey_core::sanitize_seconds;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Notifications from a playback engine, drained by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// The media duration became known (or changed).
    DurationKnown(f64),
    /// The playback position moved.
    PositionChanged(f64),
    /// Playback reached the end of the media.
    Finished,
}

/// What the host needs from whatever actually plays the media.
pub trait PlaybackEngine {
    /// Media duration in seconds, `0.0` if unknown.
    fn duration(&self) -> f64;

    /// Current position in seconds.
    fn position(&self) -> f64;

    /// Jump to a position in seconds.
    fn seek(&mut self, seconds: f64);

    fn play(&mut self);

    fn pause(&mut self);

    fn is_playing(&self) -> bool;

    /// Stop (or resume) emitting `PositionChanged`.
    ///
    /// Hosts block signals while applying their own seek so the resulting
    /// position report does not loop back as user input.
    fn set_signals_blocked(&mut self, blocked: bool);

    /// Take all events queued since the last call.
    fn poll_events(&mut self) -> Vec<PlaybackEvent>;
}

/// Preview player that advances a clock instead of decoding frames.
///
/// Position moves with wall time while playing and stops at the duration.
#[derive(Debug)]
pub struct PreviewPlayer {
    duration: f64,
    position: f64,
    playing: bool,
    signals_blocked: bool,
    last_tick: Option<Instant>,
    events: Vec<PlaybackEvent>,
}

impl PreviewPlayer {
    /// Create an empty player with no media loaded.
    pub fn new() -> Self {
        Self {
            duration: 0.0,
            position: 0.0,
            playing: false,
            signals_blocked: false,
            last_tick: None,
            events: Vec::new(),
        }
    }

    /// Load media of the given duration and start playing from zero.
    pub fn load(&mut self, duration_seconds: f64) {
        self.duration = sanitize_seconds(duration_seconds);
        self.position = 0.0;
        self.last_tick = None;
        info!(duration = self.duration, "Preview media loaded");
        self.events.push(PlaybackEvent::DurationKnown(self.duration));
        self.emit_position();
        self.play();
    }

    /// Advance the clock to `now`.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.advance(elapsed);
    }

    /// Advance the clock by `elapsed` if playing.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.playing || elapsed.is_zero() {
            return;
        }
        let next = (self.position + elapsed.as_secs_f64()).min(self.duration);
        if next != self.position {
            self.position = next;
            self.emit_position();
        }
        if self.position >= self.duration {
            self.playing = false;
            self.events.push(PlaybackEvent::Finished);
            debug!("Preview reached end of media");
        }
    }

    fn emit_position(&mut self) {
        if !self.signals_blocked {
            self.events.push(PlaybackEvent::PositionChanged(self.position));
        }
    }
}

impl Default for PreviewPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackEngine for PreviewPlayer {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, seconds: f64) {
        self.position = sanitize_seconds(seconds).min(self.duration);
        debug!(position = self.position, "Preview seek");
        self.emit_position();
    }

    fn play(&mut self) {
        if self.duration > 0.0 && self.position < self.duration {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_signals_blocked(&mut self, blocked: bool) {
        self.signals_blocked = blocked;
    }

    fn poll_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }
}
