use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Returns the recognized text, or `None` when the image holds no text.
    async fn detect_text(&self, encoded_image: &[u8]) -> Result<Option<String>>;
}
