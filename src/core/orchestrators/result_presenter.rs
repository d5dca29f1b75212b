use std::sync::Arc;

use crate::core::interfaces::adapters::ClipboardWriter;
use crate::global_constants::{LOG_TAG_PRESENTER, USER_MESSAGE_NO_TEXT_DETECTED, USER_MESSAGE_READY};

/// Owns the text of the output area and mirrors recognized text to the
/// clipboard.
pub struct ResultPresenter {
    clipboard: Arc<dyn ClipboardWriter>,
    output_text: String,
}

impl ResultPresenter {
    pub fn build(clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            clipboard,
            output_text: USER_MESSAGE_READY.to_string(),
        }
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn present(&mut self, recognized_text: Option<&str>) {
        match recognized_text.filter(|text| !text.is_empty()) {
            Some(text) => {
                log::info!(
                    "{} showing {} characters of recognized text",
                    LOG_TAG_PRESENTER,
                    text.chars().count()
                );
                self.output_text = text.to_string();

                if let Err(e) = self.clipboard.set_text(text) {
                    log::error!("{} Failed to copy to clipboard: {}", LOG_TAG_PRESENTER, e);
                } else {
                    log::debug!("{} Text copied to clipboard", LOG_TAG_PRESENTER);
                }
            }
            None => {
                log::info!("{} no text detected", LOG_TAG_PRESENTER);
                self.output_text = USER_MESSAGE_NO_TEXT_DETECTED.to_string();
            }
        }
    }

    pub fn present_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{} {}", LOG_TAG_PRESENTER, message);
        self.output_text = message;
    }

    pub fn present_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{} status: {}", LOG_TAG_PRESENTER, message);
        self.output_text = message;
    }
}
