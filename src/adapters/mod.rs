mod arboard_clipboard;
mod google_vision_text_detector;

pub use arboard_clipboard::ArboardClipboard;
pub use google_vision_text_detector::GoogleVisionTextDetector;
