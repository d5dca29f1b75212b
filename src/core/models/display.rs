use super::ScreenPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDescriptor {
    pub id: u32,
    pub name: String,
    pub origin: ScreenPoint,
    pub width: u32,
    pub height: u32,
    pub scale_factor: f32,
}

impl DisplayDescriptor {
    pub fn contains(&self, point: ScreenPoint) -> bool {
        let right = self.origin.x as i64 + self.width as i64;
        let bottom = self.origin.y as i64 + self.height as i64;

        point.x >= self.origin.x
            && point.y >= self.origin.y
            && (point.x as i64) < right
            && (point.y as i64) < bottom
    }
}

/// Rectangle handed to the capture primitive, in display-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd_display_at(x: i32, y: i32) -> DisplayDescriptor {
        DisplayDescriptor {
            id: 1,
            name: "primary".to_string(),
            origin: ScreenPoint::new(x, y),
            width: 1920,
            height: 1080,
            scale_factor: 1.0,
        }
    }

    #[test]
    fn test_contains_includes_origin_and_excludes_far_edge() {
        let display = full_hd_display_at(0, 0);

        assert!(display.contains(ScreenPoint::new(0, 0)));
        assert!(display.contains(ScreenPoint::new(1919, 1079)));
        assert!(!display.contains(ScreenPoint::new(1920, 500)));
        assert!(!display.contains(ScreenPoint::new(500, 1080)));
    }

    #[test]
    fn test_contains_handles_negative_origin() {
        let display = full_hd_display_at(-1920, 0);

        assert!(display.contains(ScreenPoint::new(-1, 10)));
        assert!(!display.contains(ScreenPoint::new(0, 10)));
    }
}
