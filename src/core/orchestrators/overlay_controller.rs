//! Drag and resize handling for the borderless overlay window.
//!
//! Pointer positions arrive in two spaces: `local` is relative to the
//! overlay's top-left corner and `global` is in screen coordinates.

use crate::core::models::{CursorShape, InteractionMode, OverlayRect, ResizeEdge, ScreenPoint};
use crate::global_constants::{LOG_TAG_OVERLAY, OVERLAY_HEADER_HEIGHT, OVERLAY_MINIMUM_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMoveEffect {
    Moved(OverlayRect),
    Resized(OverlayRect),
    CursorChanged(CursorShape),
}

#[derive(Debug, Clone)]
pub struct OverlayGeometryController {
    rect: OverlayRect,
    mode: InteractionMode,
    border_thickness: i32,
    header_height: i32,
    minimum_size: i32,
    drag_offset: Option<ScreenPoint>,
    locked_edge: ResizeEdge,
}

impl OverlayGeometryController {
    pub fn new(rect: OverlayRect, border_thickness: i32) -> Self {
        log::debug!(
            "{} controller created for {:?}, border={}",
            LOG_TAG_OVERLAY,
            rect,
            border_thickness
        );

        Self {
            rect,
            mode: InteractionMode::Idle,
            border_thickness,
            header_height: OVERLAY_HEADER_HEIGHT,
            minimum_size: OVERLAY_MINIMUM_SIZE,
            drag_offset: None,
            locked_edge: ResizeEdge::None,
        }
    }

    pub fn rect(&self) -> OverlayRect {
        self.rect
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn locked_edge(&self) -> ResizeEdge {
        self.locked_edge
    }

    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    pub fn header_height(&self) -> i32 {
        self.header_height
    }

    pub fn is_in_header(&self, local: ScreenPoint) -> bool {
        local.x >= 0 && local.x < self.rect.width && local.y >= 0 && local.y < self.header_height
    }

    pub fn classify_edge(&self, local: ScreenPoint) -> ResizeEdge {
        let thickness = self.border_thickness;
        let near_top = local.y < thickness;
        let near_bottom = local.y > self.rect.height - thickness;

        if local.x < thickness {
            if near_top {
                ResizeEdge::TopLeft
            } else if near_bottom {
                ResizeEdge::BottomLeft
            } else {
                ResizeEdge::Left
            }
        } else if local.x > self.rect.width - thickness {
            if near_top {
                ResizeEdge::TopRight
            } else if near_bottom {
                ResizeEdge::BottomRight
            } else {
                ResizeEdge::Right
            }
        } else if near_top {
            ResizeEdge::Top
        } else if near_bottom {
            ResizeEdge::Bottom
        } else {
            ResizeEdge::None
        }
    }

    /// Cursor to show for the current state at `local`.
    pub fn cursor_at(&self, local: ScreenPoint) -> CursorShape {
        match self.mode {
            InteractionMode::Resizing => self.locked_edge.cursor_shape(),
            InteractionMode::Dragging => CursorShape::Arrow,
            InteractionMode::Idle => self.classify_edge(local).cursor_shape(),
        }
    }

    pub fn on_pointer_down(&mut self, local: ScreenPoint, global: ScreenPoint) {
        if self.is_in_header(local) {
            let offset = global.offset_from(self.rect.top_left());
            log::debug!(
                "{} drag started, offset=({}, {})",
                LOG_TAG_OVERLAY,
                offset.x,
                offset.y
            );
            self.mode = InteractionMode::Dragging;
            self.drag_offset = Some(offset);
            self.locked_edge = ResizeEdge::None;
            return;
        }

        let edge = self.classify_edge(local);
        if edge != ResizeEdge::None {
            log::debug!("{} resize started on {:?}", LOG_TAG_OVERLAY, edge);
            self.mode = InteractionMode::Resizing;
            self.locked_edge = edge;
            self.drag_offset = None;
        }
    }

    pub fn on_pointer_move(&mut self, local: ScreenPoint, global: ScreenPoint) -> PointerMoveEffect {
        match (self.mode, self.drag_offset) {
            (InteractionMode::Dragging, Some(offset)) => {
                self.rect = self.rect.moved_to(global.offset_from(offset));
                PointerMoveEffect::Moved(self.rect)
            }
            (InteractionMode::Resizing, _) => {
                self.rect = self.resized_towards(global);
                PointerMoveEffect::Resized(self.rect)
            }
            _ => PointerMoveEffect::CursorChanged(self.classify_edge(local).cursor_shape()),
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.mode != InteractionMode::Idle {
            log::debug!(
                "{} {:?} finished at {:?}",
                LOG_TAG_OVERLAY,
                self.mode,
                self.rect
            );
        }

        self.mode = InteractionMode::Idle;
        self.drag_offset = None;
        self.locked_edge = ResizeEdge::None;
    }

    fn resized_towards(&self, global: ScreenPoint) -> OverlayRect {
        let edge = self.locked_edge;
        let mut candidate = self.rect;

        if edge.moves_left() {
            candidate.set_left(global.x);
        }
        if edge.moves_right() {
            candidate.set_right(global.x);
        }
        if edge.moves_top() {
            candidate.set_top(global.y);
        }
        if edge.moves_bottom() {
            candidate.set_bottom(global.y);
        }

        if candidate.width < self.minimum_size {
            if edge.moves_right() {
                candidate.set_right(candidate.x + self.minimum_size);
            } else {
                candidate.set_left(candidate.right() - self.minimum_size);
            }
        }
        if candidate.height < self.minimum_size {
            if edge.moves_bottom() {
                candidate.set_bottom(candidate.y + self.minimum_size);
            } else {
                candidate.set_top(candidate.bottom() - self.minimum_size);
            }
        }

        candidate
    }
}
