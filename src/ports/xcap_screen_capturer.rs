use anyhow::{Context, Result};

use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::{CaptureBuffer, CaptureRegion, DisplayDescriptor, ScreenPoint};
use crate::global_constants::LOG_TAG_CAPTURE;

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn describe_monitor(&self, index: usize, monitor: &xcap::Monitor) -> DisplayDescriptor {
        DisplayDescriptor {
            id: monitor.id().unwrap_or(index as u32),
            name: monitor
                .name()
                .unwrap_or_else(|_| format!("Monitor {}", index)),
            origin: ScreenPoint::new(monitor.x().unwrap_or(0), monitor.y().unwrap_or(0)),
            width: monitor.width().unwrap_or(0),
            height: monitor.height().unwrap_or(0),
            scale_factor: monitor.scale_factor().unwrap_or(1.0),
        }
    }

    fn find_monitor(&self, display: &DisplayDescriptor) -> Result<xcap::Monitor> {
        xcap::Monitor::all()
            .context("failed to enumerate monitors")?
            .into_iter()
            .find(|monitor| monitor.id().ok() == Some(display.id))
            .with_context(|| format!("monitor '{}' is no longer available", display.name))
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<xcap::image::RgbaImage> {
        monitor
            .capture_image()
            .context("Unable to capture Monitor")
    }

    fn convert_image_to_capture_buffer(
        &self,
        image: xcap::image::RgbaImage,
        scale_factor: f32,
    ) -> CaptureBuffer {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        log::debug!(
            "{} captured {}x{} screenshot, scale_factor={}",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels,
            scale_factor
        );

        CaptureBuffer::build_from_raw_data(scale_factor, width_pixels, height_pixels, raw_rgba_data)
    }

    /// Maps a display-local logical region onto the pixel grid of the
    /// captured monitor image.
    fn region_in_pixels(
        display: &DisplayDescriptor,
        region: CaptureRegion,
        buffer: &CaptureBuffer,
    ) -> Result<(u32, u32, u32, u32)> {
        if region.x < 0 || region.y < 0 {
            anyhow::bail!(
                "region origin ({}, {}) is outside display '{}'",
                region.x,
                region.y,
                display.name
            );
        }

        let scale_x = if display.width > 0 {
            buffer.width as f32 / display.width as f32
        } else {
            display.scale_factor
        };
        let scale_y = if display.height > 0 {
            buffer.height as f32 / display.height as f32
        } else {
            display.scale_factor
        };

        Ok((
            (region.x as f32 * scale_x).round() as u32,
            (region.y as f32 * scale_y).round() as u32,
            (region.width as f32 * scale_x).round() as u32,
            (region.height as f32 * scale_y).round() as u32,
        ))
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn list_displays(&self) -> Result<Vec<DisplayDescriptor>> {
        let monitors = xcap::Monitor::all().context("failed to enumerate monitors")?;

        let displays: Vec<DisplayDescriptor> = monitors
            .iter()
            .enumerate()
            .map(|(index, monitor)| self.describe_monitor(index, monitor))
            .collect();

        log::debug!("{} found {} displays", LOG_TAG_CAPTURE, displays.len());
        Ok(displays)
    }

    fn capture_region(
        &self,
        display: &DisplayDescriptor,
        region: CaptureRegion,
    ) -> Result<CaptureBuffer> {
        let monitor = self.find_monitor(display)?;
        let monitor_image = self.capture_monitor_image(&monitor)?;
        let full_buffer = self.convert_image_to_capture_buffer(monitor_image, display.scale_factor);

        let (x, y, width, height) = Self::region_in_pixels(display, region, &full_buffer)?;
        let cropped = full_buffer.crop_region(x, y, width, height)?;

        log::info!(
            "{} captured region {}x{} from display '{}'",
            LOG_TAG_CAPTURE,
            cropped.width,
            cropped.height,
            display.name
        );

        Ok(cropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_with_size(width: u32, height: u32, scale_factor: f32) -> DisplayDescriptor {
        DisplayDescriptor {
            id: 7,
            name: "test".to_string(),
            origin: ScreenPoint::new(0, 0),
            width,
            height,
            scale_factor,
        }
    }

    fn buffer_with_size(width: u32, height: u32) -> CaptureBuffer {
        CaptureBuffer::build_from_raw_data(1.0, width, height, vec![0u8; (width * height * 4) as usize])
    }

    #[test]
    fn test_initialize_creates_capturer() {
        let capturer = XcapScreenCapturer::initialize();

        assert!(std::mem::size_of_val(&capturer) == 0);
    }

    #[test]
    fn test_convert_image_to_capture_buffer_preserves_dimensions_and_scale() {
        let capturer = XcapScreenCapturer::initialize();
        let raw_data = vec![255u8; 100 * 50 * 4];
        let image = xcap::image::RgbaImage::from_raw(100, 50, raw_data).unwrap();

        let buffer = capturer.convert_image_to_capture_buffer(image, 2.0);

        assert_eq!(buffer.width, 100);
        assert_eq!(buffer.height, 50);
        assert_eq!(buffer.scale_factor, 2.0);
    }

    #[test]
    fn test_region_in_pixels_is_identity_at_unit_scale() {
        let display = display_with_size(1920, 1080, 1.0);
        let buffer = buffer_with_size(1920, 1080);
        let region = CaptureRegion {
            x: 100,
            y: 100,
            width: 300,
            height: 300,
        };

        let pixels = XcapScreenCapturer::region_in_pixels(&display, region, &buffer).unwrap();

        assert_eq!(pixels, (100, 100, 300, 300));
    }

    #[test]
    fn test_region_in_pixels_scales_for_high_dpi_capture() {
        let display = display_with_size(1440, 900, 2.0);
        let buffer = buffer_with_size(2880, 1800);
        let region = CaptureRegion {
            x: 10,
            y: 20,
            width: 300,
            height: 150,
        };

        let pixels = XcapScreenCapturer::region_in_pixels(&display, region, &buffer).unwrap();

        assert_eq!(pixels, (20, 40, 600, 300));
    }

    #[test]
    fn test_region_in_pixels_rejects_negative_origin() {
        let display = display_with_size(1920, 1080, 1.0);
        let buffer = buffer_with_size(1920, 1080);
        let region = CaptureRegion {
            x: -5,
            y: 0,
            width: 300,
            height: 300,
        };

        assert!(XcapScreenCapturer::region_in_pixels(&display, region, &buffer).is_err());
    }
}
