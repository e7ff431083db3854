//! Render description for the range selector.
//!
//! A pure projection of timeline state into widget-local pixel
//! rectangles. Painting reads these; tests assert them directly.

use crate::range_selector::{pixel_from_tick, DragState, RangeSelector};
use framemonkey_core::PixelRect;
use framemonkey_timeline::Timeline;
use serde::Serialize;

/// Width of each trim handle, centered on its marker.
pub const HANDLE_WIDTH_PX: f32 = 8.0;

/// Width of the playback position indicator, centered on the position.
pub const POSITION_WIDTH_PX: f32 = 2.0;

/// Visual weight of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    Normal,
    /// The handle is being dragged.
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleShape {
    pub rect: PixelRect,
    pub emphasis: Emphasis,
}

/// Everything needed to draw the selector at one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSelectorView {
    /// Full widget background.
    pub track: PixelRect,
    /// Span between the start and end markers.
    pub selection: PixelRect,
    /// Current playback position.
    pub position: PixelRect,
    pub start_handle: HandleShape,
    pub end_handle: HandleShape,
}

impl RangeSelectorView {
    /// Describe a selector at `width` x `height` pixels.
    pub fn describe(selector: &RangeSelector, width: f32, height: f32) -> Self {
        describe_timeline(selector.timeline(), selector.drag_state(), width, height)
    }
}

/// Describe raw timeline state for a given drag state.
pub fn describe_timeline(
    timeline: &Timeline,
    drag: DragState,
    width: f32,
    height: f32,
) -> RangeSelectorView {
    let width = width.max(0.0);
    let height = height.max(0.0);

    let start_x = pixel_from_tick(timeline.start_ticks(), width);
    let end_x = pixel_from_tick(timeline.end_ticks(), width);
    let position_x = pixel_from_tick(timeline.position_ticks(), width);

    let emphasis = |active: bool| {
        if active {
            Emphasis::Active
        } else {
            Emphasis::Normal
        }
    };

    RangeSelectorView {
        track: PixelRect::new(0.0, 0.0, width, height),
        selection: PixelRect::from_edges(start_x, 0.0, end_x, height),
        position: PixelRect::centered_on_x(position_x, POSITION_WIDTH_PX, 0.0, height),
        start_handle: HandleShape {
            rect: PixelRect::centered_on_x(start_x, HANDLE_WIDTH_PX, 0.0, height),
            emphasis: emphasis(drag == DragState::DraggingStart),
        },
        end_handle: HandleShape {
            rect: PixelRect::centered_on_x(end_x, HANDLE_WIDTH_PX, 0.0, height),
            emphasis: emphasis(drag == DragState::DraggingEnd),
        },
    }
}
