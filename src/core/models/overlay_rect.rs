#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(&self, origin: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn translated_by(&self, offset: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x + offset.x, self.y + offset.y)
    }
}

/// Geometry of the overlay window in global screen coordinates.
///
/// `right()` and `bottom()` are exclusive, so `width == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl OverlayRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        log::debug!(
            "[OVERLAY_RECT] creating rect at ({}, {}) size {}x{}",
            x,
            y,
            width,
            height
        );

        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn moved_to(&self, top_left: ScreenPoint) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            ..*self
        }
    }

    pub fn set_left(&mut self, left: i32) {
        let right = self.right();
        self.x = left;
        self.width = right - left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.width = right - self.x;
    }

    pub fn set_top(&mut self, top: i32) {
        let bottom = self.bottom();
        self.y = top;
        self.height = bottom - top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.height = bottom - self.y;
    }
}
