use anyhow::Result;
use iced::widget::image;

/// RGBA raster returned by the capture primitive.
#[derive(Clone)]
pub struct CaptureBuffer {
    pub scale_factor: f32,
    pub image_handle: image::Handle,
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("scale_factor", &self.scale_factor)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CaptureBuffer {
    pub fn build_from_raw_data(
        scale_factor: f32,
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: Vec<u8>,
    ) -> Self {
        log::debug!(
            "[CAPTURE_BUFFER] building buffer: {}x{}, scale={}",
            width_pixels,
            height_pixels,
            scale_factor
        );

        Self {
            scale_factor,
            image_handle: image::Handle::from_rgba(
                width_pixels,
                height_pixels,
                raw_rgba_data.clone(),
            ),
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn raw_rgba_data(&self) -> &[u8] {
        &self.raw_data
    }

    /// Crops a region in pixel coordinates. The origin must lie inside the
    /// buffer; the extent is clipped to the buffer edges.
    pub fn crop_region(&self, x: u32, y: u32, crop_width: u32, crop_height: u32) -> Result<Self> {
        if crop_width == 0 || crop_height == 0 {
            anyhow::bail!("Crop dimensions must be greater than zero");
        }

        if x >= self.width || y >= self.height {
            anyhow::bail!(
                "Crop origin ({}, {}) lies outside the {}x{} capture",
                x,
                y,
                self.width,
                self.height
            );
        }

        let crop_width = crop_width.min(self.width - x);
        let crop_height = crop_height.min(self.height - y);

        log::debug!(
            "[CAPTURE_BUFFER] Cropping region: {}x{} at ({}, {}) from {}x{}",
            crop_width,
            crop_height,
            x,
            y,
            self.width,
            self.height
        );

        let mut cropped_data = Vec::with_capacity((crop_width * crop_height * 4) as usize);

        for row in y..(y + crop_height) {
            let row_start = (row * self.width * 4 + x * 4) as usize;
            let row_end = row_start + (crop_width * 4) as usize;

            if row_end <= self.raw_data.len() {
                cropped_data.extend_from_slice(&self.raw_data[row_start..row_end]);
            } else {
                anyhow::bail!("Crop region exceeds image bounds");
            }
        }

        Ok(Self::build_from_raw_data(
            self.scale_factor,
            crop_width,
            crop_height,
            cropped_data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_gradient_buffer(width: u32, height: u32) -> CaptureBuffer {
        let mut raw_data = Vec::with_capacity((width * height * 4) as usize);
        for row in 0..height {
            for column in 0..width {
                raw_data.extend_from_slice(&[column as u8, row as u8, 0, 255]);
            }
        }
        CaptureBuffer::build_from_raw_data(1.0, width, height, raw_data)
    }

    #[test]
    fn test_crop_region_copies_requested_pixels() {
        let buffer = create_gradient_buffer(10, 10);

        let cropped = buffer.crop_region(2, 3, 4, 5).unwrap();

        assert_eq!(cropped.width, 4);
        assert_eq!(cropped.height, 5);
        assert_eq!(&cropped.raw_rgba_data()[0..4], &[2, 3, 0, 255]);
        assert_eq!(cropped.raw_rgba_data().len(), 4 * 5 * 4);
    }

    #[test]
    fn test_crop_region_clips_extent_to_buffer() {
        let buffer = create_gradient_buffer(10, 10);

        let cropped = buffer.crop_region(8, 8, 50, 50).unwrap();

        assert_eq!(cropped.width, 2);
        assert_eq!(cropped.height, 2);
    }

    #[test]
    fn test_crop_region_rejects_origin_outside_buffer() {
        let buffer = create_gradient_buffer(10, 10);

        let result = buffer.crop_region(10, 0, 5, 5);

        assert!(result.is_err());
    }

    #[test]
    fn test_crop_region_rejects_zero_size() {
        let buffer = create_gradient_buffer(10, 10);

        assert!(buffer.crop_region(0, 0, 0, 5).is_err());
    }
}
