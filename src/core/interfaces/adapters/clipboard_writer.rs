use anyhow::Result;

pub trait ClipboardWriter: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}
