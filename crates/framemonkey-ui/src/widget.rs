//! egui adapter for the range selector: pointer input in, paint out.

use crate::range_selector::{pixel_from_tick, DragState, RangeEvent, RangeSelector, HIT_RADIUS_PX};
use crate::render::{Emphasis, RangeSelectorView};
use crate::theme::Theme;
use egui::{self, Color32, CursorIcon, Pos2, Rect, Sense, Vec2};
use framemonkey_core::PixelRect;

/// Height of the selector strip.
pub const SELECTOR_HEIGHT: f32 = 28.0;

fn to_screen(rect: PixelRect, origin: Pos2) -> Rect {
    Rect::from_min_max(
        origin + Vec2::new(rect.left(), rect.top()),
        origin + Vec2::new(rect.right(), rect.bottom()),
    )
}

fn near_handle(selector: &RangeSelector, x: f32, width: f32) -> bool {
    let timeline = selector.timeline();
    [timeline.start_ticks(), timeline.end_ticks()]
        .into_iter()
        .any(|ticks| (x - pixel_from_tick(ticks, width)).abs() < HIT_RADIUS_PX)
}

/// Draw the selector across the available width and feed it pointer input.
///
/// Returns the notifications the host must act on this frame.
pub fn show_range_selector(ui: &mut egui::Ui, selector: &mut RangeSelector) -> Vec<RangeEvent> {
    let mut events = Vec::new();
    let size = Vec2::new(ui.available_width(), SELECTOR_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
    let rect = response.rect;
    let width = rect.width();

    let (pressed, released, pointer) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    if let Some(pos) = pointer {
        let local_x = pos.x - rect.left();
        if pressed && rect.contains(pos) {
            events.extend(selector.pointer_down(local_x, width));
        } else if selector.drag_state() != DragState::Idle {
            events.extend(selector.pointer_move(local_x, width));
        }

        if selector.drag_state() != DragState::Idle
            || (response.hovered() && near_handle(selector, local_x, width))
        {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
        }
    }
    if released {
        selector.pointer_up();
    }

    paint(&painter, rect.min, &RangeSelectorView::describe(selector, width, rect.height()));

    if selector.take_repaint_request() {
        ui.ctx().request_repaint();
    }

    events
}

fn handle_color(emphasis: Emphasis) -> Color32 {
    match emphasis {
        Emphasis::Normal => Theme::accent(),
        Emphasis::Active => Theme::accent_active(),
    }
}

fn paint(painter: &egui::Painter, origin: Pos2, view: &RangeSelectorView) {
    painter.rect_filled(to_screen(view.track, origin), Theme::RADIUS, Theme::bg1());
    painter.rect_filled(to_screen(view.selection, origin), 0.0, Theme::accent_fill());
    painter.rect_filled(to_screen(view.position, origin), 0.0, Theme::playhead());
    for handle in [view.start_handle, view.end_handle] {
        painter.rect_filled(
            to_screen(handle.rect, origin),
            Theme::RADIUS / 2.0,
            handle_color(handle.emphasis),
        );
    }
}
