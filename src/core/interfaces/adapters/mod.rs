mod clipboard_writer;
mod text_detector;

pub use clipboard_writer::ClipboardWriter;
pub use text_detector::TextDetector;
