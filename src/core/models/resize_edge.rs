#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    #[default]
    None,
}

impl ResizeEdge {
    pub fn moves_left(&self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub fn moves_right(&self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    pub fn moves_top(&self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub fn moves_bottom(&self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    pub fn cursor_shape(&self) -> CursorShape {
        match self {
            Self::Top | Self::Bottom => CursorShape::ResizeVertical,
            Self::Left | Self::Right => CursorShape::ResizeHorizontal,
            Self::TopLeft | Self::BottomRight => CursorShape::ResizeDiagonalDown,
            Self::TopRight | Self::BottomLeft => CursorShape::ResizeDiagonalUp,
            Self::None => CursorShape::Arrow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    ResizeVertical,
    ResizeHorizontal,
    /// Top-left to bottom-right.
    ResizeDiagonalDown,
    /// Bottom-left to top-right.
    ResizeDiagonalUp,
}
