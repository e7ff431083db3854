//! Tick-space timeline with trim markers.

use framemonkey_core::sanitize_seconds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized timeline position, `0..=TICK_MAX`.
pub type Ticks = u32;

/// Number of ticks spanning the whole media duration.
pub const TICK_MAX: Ticks = 1000;

/// Minimum distance between the start and end markers (1% of duration).
pub const MIN_GAP_TICKS: Ticks = 10;

/// Trim bounds in seconds, as read back by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrimRange {
    pub start_seconds: f64,
    pub end_seconds: f64,
}

impl TrimRange {
    /// Length of the selected range.
    pub fn duration_seconds(self) -> f64 {
        (self.end_seconds - self.start_seconds).max(0.0)
    }
}

/// Duration, playback position and trim markers of one selector.
///
/// Invariants, upheld by every mutator:
/// - `position <= TICK_MAX`
/// - `start + MIN_GAP_TICKS <= end <= TICK_MAX`
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration_seconds: f64,
    position: Ticks,
    start: Ticks,
    end: Ticks,
}

impl Timeline {
    /// Empty timeline: unknown duration, full-range markers.
    pub fn new() -> Self {
        Self {
            duration_seconds: 0.0,
            position: 0,
            start: 0,
            end: TICK_MAX,
        }
    }

    /// Media duration; `0.0` means nothing is loaded.
    #[inline]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    #[inline]
    pub fn has_media(&self) -> bool {
        self.duration_seconds > 0.0
    }

    #[inline]
    pub fn position_ticks(&self) -> Ticks {
        self.position
    }

    #[inline]
    pub fn start_ticks(&self) -> Ticks {
        self.start
    }

    #[inline]
    pub fn end_ticks(&self) -> Ticks {
        self.end
    }

    /// Set a new media duration.
    ///
    /// The end marker always returns to `TICK_MAX`. The start marker is
    /// kept only if it still leaves room for the minimum gap, otherwise it
    /// resets to zero. Negative or non-finite input counts as unknown.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration_seconds = sanitize_seconds(seconds);
        self.end = TICK_MAX;
        if self.start + MIN_GAP_TICKS > self.end {
            self.start = 0;
        }
        debug!(
            duration = self.duration_seconds,
            start = self.start,
            "Timeline duration set"
        );
    }

    /// Update the playback position from a time reported by the player.
    ///
    /// Ignored while the duration is unknown. Markers are never touched.
    pub fn set_position_seconds(&mut self, seconds: f64) {
        if let Some(ticks) = self.seconds_to_ticks(seconds) {
            self.position = ticks;
        }
    }

    /// Set the playback position directly in tick space.
    pub fn set_position_ticks(&mut self, ticks: Ticks) {
        self.position = ticks.min(TICK_MAX);
    }

    /// Move the start marker toward `ticks`, stopping one gap before the end.
    ///
    /// Returns whether the marker moved.
    pub fn set_start_ticks(&mut self, ticks: Ticks) -> bool {
        let limit = self.end.saturating_sub(MIN_GAP_TICKS);
        let next = ticks.min(limit).min(TICK_MAX);
        let changed = next != self.start;
        self.start = next;
        changed
    }

    /// Move the end marker toward `ticks`, stopping one gap after the start.
    ///
    /// Returns whether the marker moved.
    pub fn set_end_ticks(&mut self, ticks: Ticks) -> bool {
        let next = ticks.max(self.start + MIN_GAP_TICKS).min(TICK_MAX);
        let changed = next != self.end;
        self.end = next;
        changed
    }

    /// Convert ticks to seconds against the current duration.
    pub fn ticks_to_seconds(&self, ticks: Ticks) -> f64 {
        if !self.has_media() {
            return 0.0;
        }
        let ticks = f64::from(ticks.min(TICK_MAX));
        let seconds = ticks * self.duration_seconds / f64::from(TICK_MAX);
        if seconds.is_finite() {
            seconds
        } else {
            // Product overflowed near f64::MAX
            ticks / f64::from(TICK_MAX) * self.duration_seconds
        }
    }

    /// Convert seconds to ticks, or `None` while the duration is unknown.
    pub fn seconds_to_ticks(&self, seconds: f64) -> Option<Ticks> {
        if !self.has_media() {
            return None;
        }
        let ratio = sanitize_seconds(seconds) / self.duration_seconds;
        let ticks = (ratio * f64::from(TICK_MAX)).round();
        Some(ticks.min(f64::from(TICK_MAX)) as Ticks)
    }

    pub fn position_seconds(&self) -> f64 {
        self.ticks_to_seconds(self.position)
    }

    pub fn start_seconds(&self) -> f64 {
        self.ticks_to_seconds(self.start)
    }

    pub fn end_seconds(&self) -> f64 {
        self.ticks_to_seconds(self.end)
    }

    /// Current trim bounds in seconds.
    pub fn trim_range(&self) -> TrimRange {
        TrimRange {
            start_seconds: self.start_seconds(),
            end_seconds: self.end_seconds(),
        }
    }

    /// Whether the markers still cover the whole media.
    pub fn is_full_range(&self) -> bool {
        self.start == 0 && self.end == TICK_MAX
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loaded(seconds: f64) -> Timeline {
        let mut tl = Timeline::new();
        tl.set_duration(seconds);
        tl
    }

    fn assert_invariants(tl: &Timeline) {
        assert!(tl.position_ticks() <= TICK_MAX);
        assert!(tl.start_ticks() + MIN_GAP_TICKS <= tl.end_ticks());
        assert!(tl.end_ticks() <= TICK_MAX);
    }

    #[test]
    fn test_new_is_full_range_without_media() {
        let tl = Timeline::new();
        assert!(!tl.has_media());
        assert!(tl.is_full_range());
        assert_eq!(tl.position_ticks(), 0);
    }

    #[test]
    fn test_time_accessors_guard_zero_duration() {
        let mut tl = Timeline::new();
        tl.set_start_ticks(200);
        assert_eq!(tl.start_seconds(), 0.0);
        assert_eq!(tl.end_seconds(), 0.0);
        assert_eq!(tl.trim_range(), TrimRange::default());
    }

    #[test]
    fn test_negative_duration_is_unknown() {
        let tl = loaded(-3.0);
        assert_eq!(tl.duration_seconds(), 0.0);
        assert!(!tl.has_media());
    }

    #[test]
    fn test_set_position_converts_seconds() {
        let mut tl = loaded(120.0);
        tl.set_position_seconds(60.0);
        assert_eq!(tl.position_ticks(), 500);
        tl.set_position_seconds(500.0);
        assert_eq!(tl.position_ticks(), TICK_MAX);
        tl.set_position_seconds(-1.0);
        assert_eq!(tl.position_ticks(), 0);
    }

    #[test]
    fn test_set_position_without_duration_is_ignored() {
        let mut tl = Timeline::new();
        tl.set_position_ticks(300);
        tl.set_position_seconds(60.0);
        assert_eq!(tl.position_ticks(), 300);
    }

    #[test]
    fn test_position_never_moves_markers() {
        let mut tl = loaded(120.0);
        tl.set_start_ticks(100);
        tl.set_end_ticks(900);
        tl.set_position_seconds(119.0);
        assert_eq!(tl.start_ticks(), 100);
        assert_eq!(tl.end_ticks(), 900);
    }

    #[test]
    fn test_start_clamps_at_gap_before_end() {
        let mut tl = loaded(120.0);
        tl.set_end_ticks(600);
        assert!(tl.set_start_ticks(800));
        assert_eq!(tl.start_ticks(), 600 - MIN_GAP_TICKS);
        assert!(!tl.set_start_ticks(595));
    }

    #[test]
    fn test_end_clamps_at_gap_after_start() {
        let mut tl = loaded(120.0);
        tl.set_start_ticks(400);
        assert!(tl.set_end_ticks(100));
        assert_eq!(tl.end_ticks(), 400 + MIN_GAP_TICKS);
    }

    #[test]
    fn test_end_clamps_to_tick_max() {
        let mut tl = loaded(120.0);
        tl.set_end_ticks(500);
        tl.set_end_ticks(5000);
        assert_eq!(tl.end_ticks(), TICK_MAX);
    }

    #[test]
    fn test_set_duration_resets_end_and_keeps_valid_start() {
        let mut tl = loaded(120.0);
        tl.set_start_ticks(200);
        tl.set_end_ticks(300);
        tl.set_duration(60.0);
        assert_eq!(tl.end_ticks(), TICK_MAX);
        assert_eq!(tl.start_ticks(), 200);
        assert_eq!(tl.start_seconds(), 12.0);
    }

    #[test]
    fn test_set_duration_keeps_start_at_gap_boundary() {
        let mut tl = loaded(120.0);
        tl.set_start_ticks(TICK_MAX);
        assert_eq!(tl.start_ticks(), TICK_MAX - MIN_GAP_TICKS);
        tl.set_duration(30.0);
        assert_eq!(tl.start_ticks(), TICK_MAX - MIN_GAP_TICKS);
        assert_invariants(&tl);
    }

    #[test]
    fn test_seconds_accessors() {
        let mut tl = loaded(120.0);
        tl.set_start_ticks(200);
        tl.set_end_ticks(750);
        assert_eq!(tl.start_seconds(), 24.0);
        assert_eq!(tl.end_seconds(), 90.0);
        assert_eq!(tl.trim_range().duration_seconds(), 66.0);
    }

    #[test]
    fn test_tiny_duration_still_honours_gap() {
        let mut tl = loaded(0.05);
        tl.set_end_ticks(0);
        assert_eq!(tl.end_ticks(), MIN_GAP_TICKS);
        assert_invariants(&tl);
    }

    #[test]
    fn test_huge_duration_stays_finite() {
        let mut tl = loaded(1e307);
        assert_eq!(tl.end_seconds(), 1e307);
        tl.set_start_ticks(500);
        assert!(tl.start_seconds().is_finite());
        assert!(tl.start_seconds() > 0.0);
        assert_eq!(tl.seconds_to_ticks(tl.end_seconds()), Some(TICK_MAX));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Duration(f64),
        Position(f64),
        Start(u32),
        End(u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-10.0f64..10_000.0).prop_map(Op::Duration),
            (-10.0f64..20_000.0).prop_map(Op::Position),
            (0u32..2000).prop_map(Op::Start),
            (0u32..2000).prop_map(Op::End),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_after_every_operation(ops in proptest::collection::vec(op(), 1..60)) {
            let mut tl = Timeline::new();
            for op in ops {
                match op {
                    Op::Duration(s) => tl.set_duration(s),
                    Op::Position(s) => tl.set_position_seconds(s),
                    Op::Start(t) => { tl.set_start_ticks(t); }
                    Op::End(t) => { tl.set_end_ticks(t); }
                }
                prop_assert!(tl.position_ticks() <= TICK_MAX);
                prop_assert!(tl.start_ticks() + MIN_GAP_TICKS <= tl.end_ticks());
                prop_assert!(tl.end_ticks() <= TICK_MAX);
            }
        }

        #[test]
        fn prop_set_duration_always_resets_end(start in 0u32..1000, end in 0u32..1000, secs in 0.0f64..5000.0) {
            let mut tl = Timeline::new();
            tl.set_duration(100.0);
            tl.set_end_ticks(end);
            tl.set_start_ticks(start);
            tl.set_duration(secs);
            prop_assert_eq!(tl.end_ticks(), TICK_MAX);
        }
    }
}
