use std::io::Cursor;
use std::sync::Arc;

use crate::core::errors::CaptureOcrError;
use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::{CaptureBuffer, CaptureRegion, DisplayDescriptor, OverlayRect, ScreenPoint};
use crate::global_constants::LOG_TAG_CAPTURE;

pub struct CaptureCoordinator {
    screen_capturer: Arc<dyn ScreenCapturer>,
}

impl CaptureCoordinator {
    pub fn build(screen_capturer: Arc<dyn ScreenCapturer>) -> Self {
        Self { screen_capturer }
    }

    pub fn resolve_target_display(
        &self,
        overlay_top_left: ScreenPoint,
    ) -> Result<DisplayDescriptor, CaptureOcrError> {
        let displays = self
            .screen_capturer
            .list_displays()
            .map_err(|e| CaptureOcrError::CapturePrimitiveFailure(format!("{:#}", e)))?;

        log::debug!(
            "{} looking for ({}, {}) among {} displays",
            LOG_TAG_CAPTURE,
            overlay_top_left.x,
            overlay_top_left.y,
            displays.len()
        );

        displays
            .into_iter()
            .find(|display| display.contains(overlay_top_left))
            .ok_or(CaptureOcrError::NoTargetDisplay {
                x: overlay_top_left.x,
                y: overlay_top_left.y,
            })
    }

    pub fn region_in_display(display: &DisplayDescriptor, overlay: OverlayRect) -> CaptureRegion {
        let local_origin = overlay.top_left().offset_from(display.origin);

        CaptureRegion {
            x: local_origin.x,
            y: local_origin.y,
            width: overlay.width.max(0) as u32,
            height: overlay.height.max(0) as u32,
        }
    }

    pub fn capture_region(
        &self,
        display: &DisplayDescriptor,
        overlay: OverlayRect,
    ) -> Result<CaptureBuffer, CaptureOcrError> {
        let region = Self::region_in_display(display, overlay);

        log::info!(
            "{} capturing {}x{} at ({}, {}) on display '{}'",
            LOG_TAG_CAPTURE,
            region.width,
            region.height,
            region.x,
            region.y,
            display.name
        );

        self.screen_capturer
            .capture_region(display, region)
            .map_err(|e| CaptureOcrError::CapturePrimitiveFailure(format!("{:#}", e)))
    }

    pub fn capture_overlay(&self, overlay: OverlayRect) -> Result<CaptureBuffer, CaptureOcrError> {
        let display = self.resolve_target_display(overlay.top_left())?;
        self.capture_region(&display, overlay)
    }
}

/// Drops the alpha channel and encodes the pixels as an RGB PNG.
pub fn to_encoded_bytes(buffer: &CaptureBuffer) -> Result<Vec<u8>, CaptureOcrError> {
    let rgba_image =
        image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.raw_rgba_data().to_vec())
            .ok_or_else(|| {
                CaptureOcrError::ImageEncodingFailure(format!(
                    "pixel data does not match {}x{}",
                    buffer.width, buffer.height
                ))
            })?;

    let rgb_image = image::DynamicImage::ImageRgba8(rgba_image).to_rgb8();

    let mut encoded = Vec::new();
    image::DynamicImage::ImageRgb8(rgb_image)
        .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
        .map_err(|e| CaptureOcrError::ImageEncodingFailure(e.to_string()))?;

    log::debug!(
        "{} encoded {}x{} capture into {} PNG bytes",
        LOG_TAG_CAPTURE,
        buffer.width,
        buffer.height,
        encoded.len()
    );

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockScreenCapturer {
        displays: Vec<DisplayDescriptor>,
        captured_regions: Mutex<Vec<(u32, CaptureRegion)>>,
        fail_capture: bool,
    }

    impl MockScreenCapturer {
        fn with_displays(displays: Vec<DisplayDescriptor>) -> Self {
            Self {
                displays,
                captured_regions: Mutex::new(Vec::new()),
                fail_capture: false,
            }
        }
    }

    impl ScreenCapturer for MockScreenCapturer {
        fn list_displays(&self) -> anyhow::Result<Vec<DisplayDescriptor>> {
            Ok(self.displays.clone())
        }

        fn capture_region(
            &self,
            display: &DisplayDescriptor,
            region: CaptureRegion,
        ) -> anyhow::Result<CaptureBuffer> {
            if self.fail_capture {
                anyhow::bail!("region out of bounds");
            }
            self.captured_regions
                .lock()
                .unwrap()
                .push((display.id, region));
            let raw_data = vec![255u8; (region.width * region.height * 4) as usize];
            Ok(CaptureBuffer::build_from_raw_data(
                1.0,
                region.width,
                region.height,
                raw_data,
            ))
        }
    }

    fn display(id: u32, x: i32, y: i32, width: u32, height: u32) -> DisplayDescriptor {
        DisplayDescriptor {
            id,
            name: format!("display-{}", id),
            origin: ScreenPoint::new(x, y),
            width,
            height,
            scale_factor: 1.0,
        }
    }

    fn coordinator_with(capturer: MockScreenCapturer) -> (CaptureCoordinator, Arc<MockScreenCapturer>) {
        let capturer = Arc::new(capturer);
        (CaptureCoordinator::build(capturer.clone()), capturer)
    }

    #[test]
    fn test_single_display_capture_uses_overlay_geometry() {
        let (coordinator, capturer) =
            coordinator_with(MockScreenCapturer::with_displays(vec![display(1, 0, 0, 1920, 1080)]));

        let buffer = coordinator
            .capture_overlay(OverlayRect::new(100, 100, 300, 300))
            .unwrap();

        assert_eq!(buffer.width, 300);
        assert_eq!(buffer.height, 300);
        let captured = capturer.captured_regions.lock().unwrap();
        assert_eq!(
            captured[0],
            (
                1,
                CaptureRegion {
                    x: 100,
                    y: 100,
                    width: 300,
                    height: 300
                }
            )
        );
    }

    #[test]
    fn test_region_is_relative_to_secondary_display_origin() {
        let (coordinator, capturer) = coordinator_with(MockScreenCapturer::with_displays(vec![
            display(1, 0, 0, 1920, 1080),
            display(2, 1920, 0, 2560, 1440),
        ]));

        coordinator
            .capture_overlay(OverlayRect::new(2000, 50, 200, 120))
            .unwrap();

        let captured = capturer.captured_regions.lock().unwrap();
        assert_eq!(captured[0].0, 2);
        assert_eq!(captured[0].1.x, 80);
        assert_eq!(captured[0].1.y, 50);
    }

    #[test]
    fn test_resolve_target_display_returns_unique_container() {
        let (coordinator, _) = coordinator_with(MockScreenCapturer::with_displays(vec![
            display(1, -1280, 0, 1280, 1024),
            display(2, 0, 0, 1920, 1080),
        ]));

        let left = coordinator
            .resolve_target_display(ScreenPoint::new(-10, 500))
            .unwrap();
        let right = coordinator
            .resolve_target_display(ScreenPoint::new(10, 500))
            .unwrap();

        assert_eq!(left.id, 1);
        assert_eq!(right.id, 2);
    }

    #[test]
    fn test_resolve_target_display_fails_when_no_display_contains_point() {
        let (coordinator, capturer) =
            coordinator_with(MockScreenCapturer::with_displays(vec![display(1, 0, 0, 1920, 1080)]));

        let result = coordinator.capture_overlay(OverlayRect::new(5000, 100, 300, 300));

        assert_eq!(
            result.unwrap_err(),
            CaptureOcrError::NoTargetDisplay { x: 5000, y: 100 }
        );
        assert!(capturer.captured_regions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_capture_failure_is_reported_not_retried() {
        let mut mock = MockScreenCapturer::with_displays(vec![display(1, 0, 0, 1920, 1080)]);
        mock.fail_capture = true;
        let (coordinator, _) = coordinator_with(mock);

        let result = coordinator.capture_overlay(OverlayRect::new(100, 100, 300, 300));

        match result {
            Err(CaptureOcrError::CapturePrimitiveFailure(message)) => {
                assert!(message.contains("out of bounds"));
            }
            other => panic!("Expected capture failure, got {:?}", other),
        }
    }

    #[test]
    fn test_to_encoded_bytes_produces_rgb_png_without_alpha() {
        let raw_data = [10u8, 20, 30, 0].repeat(4);
        let buffer = CaptureBuffer::build_from_raw_data(1.0, 2, 2, raw_data);

        let encoded = to_encoded_bytes(&buffer).unwrap();

        assert_eq!(&encoded[1..4], b"PNG");
        let decoded = image::load_from_memory(&encoded).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8().get_pixel(1, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_to_encoded_bytes_rejects_mismatched_buffer() {
        let buffer = CaptureBuffer::build_from_raw_data(1.0, 4, 4, vec![0u8; 8]);

        let result = to_encoded_bytes(&buffer);

        assert!(matches!(
            result,
            Err(CaptureOcrError::ImageEncodingFailure(_))
        ));
    }
}
