//! FrameMonkey Timeline - trim timeline model
//!
//! Holds the duration of the loaded media, the playback position and the
//! two trim markers in a normalized tick space (`0..=1000`). Ticks are
//! independent of both duration and widget width; conversion to seconds
//! happens only at the accessors.

pub mod timeline;

pub use timeline::{Ticks, Timeline, TrimRange, MIN_GAP_TICKS, TICK_MAX};
