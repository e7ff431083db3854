//! FrameMonkey UI - the trim range selector and its egui surroundings
//!
//! Provides:
//! - The dual-handle range selector controller and its render description
//! - The egui widget that feeds it pointer input and paints it
//! - Session glue between a playback engine and the selector
//! - The option panels of the main window

pub mod panels;
pub mod range_selector;
pub mod render;
pub mod session;
pub mod theme;
pub mod widget;

pub use panels::{PanelAction, PanelState, Status};
pub use range_selector::{
    pixel_from_tick, tick_from_pixel, DragState, RangeEvent, RangeSelector, TimeLabels,
    HIT_RADIUS_PX,
};
pub use render::{describe_timeline, Emphasis, HandleShape, RangeSelectorView, HANDLE_WIDTH_PX};
pub use session::EditorSession;
pub use theme::Theme;
pub use widget::show_range_selector;
