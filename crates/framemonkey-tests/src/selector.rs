//! End-to-end range selector scenarios through the session glue.

use framemonkey_core::PixelRect;
use framemonkey_media::{PlaybackEngine, PlaybackEvent, PreviewPlayer};
use framemonkey_timeline::{MIN_GAP_TICKS, TICK_MAX};
use framemonkey_ui::{describe_timeline, DragState, EditorSession, RangeEvent, RangeSelectorView};

const WIDTH: f32 = 500.0;

// ── Helpers ────────────────────────────────────────────────────

/// Engine double that records every call the host makes.
#[derive(Default)]
struct RecordingPlayer {
    duration: f64,
    position: f64,
    blocked: bool,
    seeks: Vec<f64>,
    seeks_while_unblocked: usize,
    queued: Vec<PlaybackEvent>,
}

impl RecordingPlayer {
    fn report_duration(&mut self, seconds: f64) {
        self.duration = seconds;
        self.queued.push(PlaybackEvent::DurationKnown(seconds));
    }

    fn report_position(&mut self, seconds: f64) {
        self.position = seconds;
        self.queued.push(PlaybackEvent::PositionChanged(seconds));
    }
}

impl PlaybackEngine for RecordingPlayer {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, seconds: f64) {
        self.position = seconds;
        self.seeks.push(seconds);
        if !self.blocked {
            self.seeks_while_unblocked += 1;
            self.queued.push(PlaybackEvent::PositionChanged(seconds));
        }
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn is_playing(&self) -> bool {
        false
    }

    fn set_signals_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    fn poll_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.queued)
    }
}

fn loaded_session(duration: f64) -> EditorSession<RecordingPlayer> {
    let mut session = EditorSession::new(RecordingPlayer::default());
    session.set_media_path("/media/test.mp4");
    session.player_mut().report_duration(duration);
    session.sync_playback();
    session
}

// ── Scenarios ──────────────────────────────────────────────────

#[test]
fn click_seek_then_drag_start_handle() {
    let mut session = loaded_session(120.0);

    // Click in the middle: seek to 60s
    let events: Vec<_> = session
        .selector_mut()
        .pointer_down(250.0, WIDTH)
        .into_iter()
        .collect();
    assert_eq!(events, vec![RangeEvent::Seek { seconds: 60.0 }]);
    assert_eq!(session.selector().timeline().position_ticks(), 500);
    session.handle_range_events(events);
    assert_eq!(session.player().seeks, vec![60.0]);
    session.selector_mut().pointer_up();

    // Grab the start handle near pixel 0 and drag it to x=100
    assert!(session.selector_mut().pointer_down(2.0, WIDTH).is_none());
    assert_eq!(session.selector().drag_state(), DragState::DraggingStart);
    let moved = session.selector_mut().pointer_move(100.0, WIDTH);
    assert_eq!(session.selector().timeline().start_ticks(), 200);
    session.handle_range_events(moved);
    session.selector_mut().pointer_up();

    assert_eq!(session.selector().drag_state(), DragState::Idle);
    assert_eq!(session.selector().start_time_seconds(), 24.0);
    assert_eq!(session.trim().start_seconds, 24.0);
    assert_eq!(session.trim().end_seconds, 120.0);
}

#[test]
fn playback_position_never_fires_seek() {
    let mut session = loaded_session(120.0);
    session.player_mut().report_position(60.0);
    session.sync_playback();

    assert_eq!(session.selector().timeline().position_ticks(), 500);
    assert!(session.player().seeks.is_empty());
}

#[test]
fn host_seek_is_applied_with_signals_blocked() {
    let mut session = loaded_session(120.0);
    let events: Vec<_> = session
        .selector_mut()
        .pointer_down(400.0, WIDTH)
        .into_iter()
        .collect();
    session.handle_range_events(events);

    assert_eq!(session.player().seeks, vec![96.0]);
    assert_eq!(session.player().seeks_while_unblocked, 0);
    assert!(!session.player().blocked);
    assert!(session.player_mut().poll_events().is_empty());
}

#[test]
fn exactly_one_seek_per_click() {
    let mut session = loaded_session(30.0);
    let events: Vec<_> = session
        .selector_mut()
        .pointer_down(125.0, WIDTH)
        .into_iter()
        .collect();
    session.handle_range_events(events);
    session.selector_mut().pointer_up();
    session.sync_playback();

    assert_eq!(session.player().seeks.len(), 1);
}

#[test]
fn new_media_resets_end_marker() {
    let mut session = loaded_session(120.0);
    let sel = session.selector_mut();
    sel.pointer_down(WIDTH, WIDTH);
    sel.pointer_move(300.0, WIDTH);
    sel.pointer_up();
    sel.pointer_down(0.0, WIDTH);
    sel.pointer_move(50.0, WIDTH);
    sel.pointer_up();
    assert_eq!(session.selector().timeline().end_ticks(), 600);

    session.player_mut().report_duration(45.0);
    session.sync_playback();

    assert_eq!(session.selector().timeline().end_ticks(), TICK_MAX);
    assert_eq!(session.selector().timeline().start_ticks(), 100);
    assert_eq!(session.trim().end_seconds, 45.0);
    assert_eq!(session.trim().start_seconds, 4.5);
}

#[test]
fn dragging_handles_into_each_other_stops_at_gap() {
    let mut session = loaded_session(60.0);
    let sel = session.selector_mut();

    sel.pointer_down(0.0, WIDTH);
    sel.pointer_move(WIDTH * 2.0, WIDTH);
    sel.pointer_up();
    assert_eq!(sel.timeline().start_ticks(), TICK_MAX - MIN_GAP_TICKS);

    // end handle is unreachable behind the start handle; start wins
    sel.pointer_down(WIDTH - 1.0, WIDTH);
    assert_eq!(sel.drag_state(), DragState::DraggingStart);
    sel.pointer_move(-50.0, WIDTH);
    sel.pointer_up();
    assert_eq!(sel.timeline().start_ticks(), 0);

    sel.pointer_down(WIDTH, WIDTH);
    sel.pointer_move(-50.0, WIDTH);
    sel.pointer_up();
    assert_eq!(sel.timeline().end_ticks(), MIN_GAP_TICKS);
}

#[test]
fn render_description_tracks_interaction() {
    let mut session = loaded_session(120.0);
    let sel = session.selector_mut();
    sel.pointer_down(2.0, WIDTH);
    sel.pointer_move(100.0, WIDTH);

    let view = RangeSelectorView::describe(session.selector(), WIDTH, 30.0);
    assert_eq!(view.selection, PixelRect::new(100.0, 0.0, 400.0, 30.0));
    assert_eq!(view.start_handle.rect, PixelRect::new(96.0, 0.0, 8.0, 30.0));

    let same = describe_timeline(
        session.selector().timeline(),
        session.selector().drag_state(),
        WIDTH,
        30.0,
    );
    assert_eq!(view, same);
}

#[test]
fn preview_player_drives_position_label() {
    let mut session = EditorSession::new(PreviewPlayer::new());
    session.set_media_path("/media/test.mp4");
    session.player_mut().load(3700.0);
    session.sync_playback();
    session
        .player_mut()
        .advance(std::time::Duration::from_secs(3661));
    session.sync_playback();

    assert_eq!(session.selector().labels().current, "01:01:01");
    assert_eq!(session.selector().labels().end, "01:01:40");
}
