//! Compression job assembly from selector state.

use framemonkey_core::FrameMonkeyError;
use framemonkey_media::{CompressOptions, PlaybackEngine, PreviewPlayer};
use framemonkey_ui::EditorSession;

fn trimmed_session() -> EditorSession<PreviewPlayer> {
    let mut session = EditorSession::new(PreviewPlayer::new());
    session.set_media_path("/media/lecture.mp4");
    session.player_mut().load(3661.5);
    session.sync_playback();
    session.player_mut().pause();

    let sel = session.selector_mut();
    sel.pointer_down(0.0, 1000.0);
    let moved = sel.pointer_move(500.0, 1000.0);
    sel.pointer_up();
    session.handle_range_events(moved);
    session
}

#[test]
fn job_carries_millisecond_timestamps() {
    let session = trimmed_session();
    let job = session
        .compress_job("/media/lecture_small.mp4", CompressOptions::default())
        .unwrap();
    let args = job.script_args();

    let start = args.iter().position(|a| a == "--start").unwrap();
    assert_eq!(args[start + 1], "00:30:30.750");
    let end = args.iter().position(|a| a == "--end").unwrap();
    assert_eq!(args[end + 1], "01:01:01.500");
}

#[test]
fn untrimmed_job_omits_range_arguments() {
    let session = trimmed_session();
    let options = CompressOptions {
        trim: false,
        ..CompressOptions::default()
    };
    let args = session
        .compress_job("/media/lecture_small.mp4", options)
        .unwrap()
        .script_args();
    assert!(!args.iter().any(|a| a == "--start" || a == "--end"));
}

#[test]
fn invalid_options_are_rejected_before_spawn() {
    let session = trimmed_session();
    let options = CompressOptions {
        speed: 9,
        ..CompressOptions::default()
    };
    let err = session
        .compress_job("/media/lecture_small.mp4", options)
        .unwrap_err();
    assert!(matches!(err, FrameMonkeyError::InvalidParameter(_)));
}
