//! FrameMonkey Core - shared types for the trimmer
//!
//! This crate provides the small foundation used by every other crate:
//! - Error type and `Result` alias
//! - Clock-style time formatting (`HH:MM:SS`, `HH:MM:SS.mmm`)
//! - Pixel-space rectangles for render descriptions

pub mod error;
pub mod geometry;
pub mod time;

pub use error::{FrameMonkeyError, Result};
pub use geometry::PixelRect;
pub use time::{format_time, format_timestamp, sanitize_seconds};
