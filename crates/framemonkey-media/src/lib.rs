//! FrameMonkey Media - the collaborators around the range selector
//!
//! This crate handles:
//! - Media file probing (duration via ffprobe)
//! - The playback engine seam and a clock-driven preview player
//! - Building, launching and observing the external compression process

pub mod compress;
pub mod player;
pub mod probe;

pub use compress::{
    default_output_path, CompressEvent, CompressHandle, CompressJob, CompressOptions,
    MAX_SPEED, MIN_SPEED,
};
pub use player::{PlaybackEngine, PlaybackEvent, PreviewPlayer};
pub use probe::MediaProbe;
