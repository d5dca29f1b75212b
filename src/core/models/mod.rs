mod capture_buffer;
mod display;
mod hotkey;
mod ocr;
mod overlay_rect;
mod resize_edge;
mod user_settings;

pub use capture_buffer::CaptureBuffer;
pub use display::{CaptureRegion, DisplayDescriptor};
pub use hotkey::{HotkeyBinding, KeyModifiers};
pub use ocr::{AnnotateRequestBody, AnnotateResponseBody};
pub use overlay_rect::{OverlayRect, ScreenPoint};
pub use resize_edge::{CursorShape, InteractionMode, ResizeEdge};
pub use user_settings::{ThemeMode, UserSettings};
