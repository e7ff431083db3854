//! Dual-handle range selector: pointer interaction over a [`Timeline`].
//!
//! Pointer coordinates are widget-local pixels along the horizontal axis.
//! Every handler takes the current widget width, so the selector itself
//! holds no geometry beyond the tick model.

use framemonkey_core::{format_time, sanitize_seconds};
use framemonkey_timeline::{Ticks, Timeline, TrimRange, TICK_MAX};
use tracing::debug;

/// Pointer distance (pixels) within which a handle is grabbed.
pub const HIT_RADIUS_PX: f32 = 15.0;

/// Which handle, if any, the pointer is currently dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingStart,
    DraggingEnd,
}

/// Outward notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeEvent {
    /// The user clicked the track away from both handles.
    Seek { seconds: f64 },
    /// A trim marker moved.
    TrimChanged { start_seconds: f64, end_seconds: f64 },
}

/// Formatted `HH:MM:SS` labels for the time fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabels {
    pub current: String,
    pub start: String,
    pub end: String,
}

/// Map a pixel x-coordinate to a tick.
///
/// Coordinates outside the widget clamp to the ends. A non-positive
/// width maps everything to tick zero.
pub fn tick_from_pixel(x: f32, width: f32) -> Ticks {
    if width.is_nan() || width <= 0.0 || !x.is_finite() {
        return 0;
    }
    let ticks = (x * TICK_MAX as f32 / width).round();
    ticks.clamp(0.0, TICK_MAX as f32) as Ticks
}

/// Map a tick to its pixel x-coordinate.
pub fn pixel_from_tick(ticks: Ticks, width: f32) -> f32 {
    ticks.min(TICK_MAX) as f32 * width.max(0.0) / TICK_MAX as f32
}

/// Interaction controller for the trim range selector.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    timeline: Timeline,
    drag: DragState,
    labels: TimeLabels,
    needs_repaint: bool,
}

impl RangeSelector {
    pub fn new() -> Self {
        let timeline = Timeline::new();
        let labels = labels_for(&timeline);
        Self {
            timeline,
            drag: DragState::Idle,
            labels,
            needs_repaint: true,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn labels(&self) -> &TimeLabels {
        &self.labels
    }

    /// Returns and clears the repaint request raised by the last changes.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    // ── Host feeds ─────────────────────────────────────────────

    /// New media duration. The end marker returns to the full range.
    ///
    /// Reports the resulting trim so the host sees the reset.
    pub fn set_duration(&mut self, seconds: f64) -> RangeEvent {
        self.timeline.set_duration(seconds);
        self.refresh();
        self.trim_event()
    }

    /// Playback position from the engine. Never emits a seek.
    pub fn set_position(&mut self, seconds: f64) {
        let before = self.timeline.position_ticks();
        self.timeline.set_position_seconds(seconds);
        if self.timeline.has_media() {
            let reported = sanitize_seconds(seconds).min(self.timeline.duration_seconds());
            self.labels.current = format_time(reported);
        }
        if self.timeline.position_ticks() != before {
            self.needs_repaint = true;
        }
    }

    // ── Pointer events ─────────────────────────────────────────

    /// Pointer pressed at `x`.
    ///
    /// Grabs the start handle, else the end handle, else seeks. The start
    /// handle wins when both are within reach.
    pub fn pointer_down(&mut self, x: f32, width: f32) -> Option<RangeEvent> {
        let start_px = pixel_from_tick(self.timeline.start_ticks(), width);
        let end_px = pixel_from_tick(self.timeline.end_ticks(), width);

        if (x - start_px).abs() < HIT_RADIUS_PX {
            self.drag = DragState::DraggingStart;
            self.needs_repaint = true;
            debug!(x, "Start handle grabbed");
            return None;
        }
        if (x - end_px).abs() < HIT_RADIUS_PX {
            self.drag = DragState::DraggingEnd;
            self.needs_repaint = true;
            debug!(x, "End handle grabbed");
            return None;
        }

        let ticks = tick_from_pixel(x, width);
        self.timeline.set_position_ticks(ticks);
        self.labels.current = format_time(self.timeline.position_seconds());
        self.needs_repaint = true;

        let seconds = self.timeline.ticks_to_seconds(ticks);
        debug!(ticks, seconds, "Seek requested");
        Some(RangeEvent::Seek { seconds })
    }

    /// Pointer moved to `x`. Only acts while a handle is held.
    pub fn pointer_move(&mut self, x: f32, width: f32) -> Option<RangeEvent> {
        let ticks = tick_from_pixel(x, width);
        let changed = match self.drag {
            DragState::DraggingStart => self.timeline.set_start_ticks(ticks),
            DragState::DraggingEnd => self.timeline.set_end_ticks(ticks),
            DragState::Idle => false,
        };
        if !changed {
            return None;
        }
        self.refresh();
        Some(self.trim_event())
    }

    /// Pointer released; always ends any drag.
    pub fn pointer_up(&mut self) {
        if self.drag != DragState::Idle {
            debug!(
                start = self.timeline.start_ticks(),
                end = self.timeline.end_ticks(),
                "Handle released"
            );
            self.needs_repaint = true;
        }
        self.drag = DragState::Idle;
    }

    // ── Host accessors ─────────────────────────────────────────

    pub fn start_time_seconds(&self) -> f64 {
        self.timeline.start_seconds()
    }

    pub fn end_time_seconds(&self) -> f64 {
        self.timeline.end_seconds()
    }

    pub fn trim_range(&self) -> TrimRange {
        self.timeline.trim_range()
    }

    fn trim_event(&self) -> RangeEvent {
        RangeEvent::TrimChanged {
            start_seconds: self.start_time_seconds(),
            end_seconds: self.end_time_seconds(),
        }
    }

    fn refresh(&mut self) {
        self.labels = labels_for(&self.timeline);
        self.needs_repaint = true;
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn labels_for(timeline: &Timeline) -> TimeLabels {
    TimeLabels {
        current: format_time(timeline.position_seconds()),
        start: format_time(timeline.start_seconds()),
        end: format_time(timeline.end_seconds()),
    }
}
