pub mod app_theme;
mod main_window_view;
mod overlay_view;

pub use main_window_view::{MainWindowMessage, MainWindowView};
pub use overlay_view::{OverlayGeometryChange, OverlayMessage, OverlayView};
