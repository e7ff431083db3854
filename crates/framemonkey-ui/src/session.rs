//! Host glue between a playback engine and the range selector.

use crate::range_selector::{RangeEvent, RangeSelector};
use framemonkey_core::{FrameMonkeyError, Result};
use framemonkey_media::{CompressJob, CompressOptions, PlaybackEngine, PlaybackEvent};
use framemonkey_timeline::TrimRange;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One loaded media file, its player and its trim selector.
pub struct EditorSession<P: PlaybackEngine> {
    player: P,
    selector: RangeSelector,
    media: Option<PathBuf>,
    trim: TrimRange,
}

impl<P: PlaybackEngine> EditorSession<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            selector: RangeSelector::new(),
            media: None,
            trim: TrimRange::default(),
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut RangeSelector {
        &mut self.selector
    }

    pub fn media_path(&self) -> Option<&Path> {
        self.media.as_deref()
    }

    /// Remember which file is loaded. The player reports its duration.
    pub fn set_media_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        info!(path = %path.display(), "Media selected");
        self.media = Some(path);
    }

    /// Latest trim bounds reported by the selector.
    pub fn trim(&self) -> TrimRange {
        self.trim
    }

    /// Forward queued playback events to the selector.
    ///
    /// Returns `true` if playback finished.
    pub fn sync_playback(&mut self) -> bool {
        let mut finished = false;
        for event in self.player.poll_events() {
            finished |= self.dispatch_playback(event);
        }
        finished
    }

    fn dispatch_playback(&mut self, event: PlaybackEvent) -> bool {
        match event {
            PlaybackEvent::DurationKnown(seconds) => {
                info!(duration = seconds, "Duration known");
                let reset = self.selector.set_duration(seconds);
                self.record(reset);
                false
            }
            PlaybackEvent::PositionChanged(seconds) => {
                self.selector.set_position(seconds);
                false
            }
            PlaybackEvent::Finished => true,
        }
    }

    /// Act on notifications from the selector.
    pub fn handle_range_events(&mut self, events: impl IntoIterator<Item = RangeEvent>) {
        for event in events {
            match event {
                RangeEvent::Seek { seconds } => self.apply_seek(seconds),
                other => self.record(other),
            }
        }
    }

    fn apply_seek(&mut self, seconds: f64) {
        info!(seconds, "Seeking playback");
        self.player.set_signals_blocked(true);
        self.player.seek(seconds);
        self.player.set_signals_blocked(false);
    }

    fn record(&mut self, event: RangeEvent) {
        if let RangeEvent::TrimChanged {
            start_seconds,
            end_seconds,
        } = event
        {
            debug!(start_seconds, end_seconds, "Trim changed");
            self.trim = TrimRange {
                start_seconds,
                end_seconds,
            };
        }
    }

    /// Build a compression job for the loaded media.
    ///
    /// The trim bounds are read from the selector at call time. They are
    /// applied only when `options.trim` is set, the duration is known and
    /// the markers do not already cover the whole file.
    pub fn compress_job(&self, output: impl Into<PathBuf>, options: CompressOptions) -> Result<CompressJob> {
        let input = self
            .media
            .clone()
            .ok_or_else(|| FrameMonkeyError::InvalidParameter("No input file selected".into()))?;

        let trim = options.trim;
        let mut job = CompressJob::new(input, output, options);
        let timeline = self.selector.timeline();
        if trim && !timeline.has_media() {
            warn!("Duration unknown, compressing the whole file");
        } else if trim && !timeline.is_full_range() {
            let range = self.selector.trim_range();
            info!(seconds = range.duration_seconds(), "Compressing trimmed range");
            job = job.with_range(range.start_seconds, range.end_seconds);
        }
        job.validate()?;
        Ok(job)
    }
}
