use anyhow::Result;

use crate::core::models::{CaptureBuffer, CaptureRegion, DisplayDescriptor};

pub trait ScreenCapturer: Send + Sync {
    fn list_displays(&self) -> Result<Vec<DisplayDescriptor>>;

    fn capture_region(
        &self,
        display: &DisplayDescriptor,
        region: CaptureRegion,
    ) -> Result<CaptureBuffer>;
}
