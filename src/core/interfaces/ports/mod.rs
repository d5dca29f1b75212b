mod pointer_position_provider;
mod screen_capturer;

pub use pointer_position_provider::PointerPositionProvider;
pub use screen_capturer::ScreenCapturer;
