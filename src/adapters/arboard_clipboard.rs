use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ClipboardWriter;

pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .context("Failed to copy text to clipboard")?;

        log::info!("[CLIPBOARD] Copied {} characters", text.chars().count());
        Ok(())
    }
}
