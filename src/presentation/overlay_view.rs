use std::sync::Arc;

use iced::mouse;
use iced::widget::canvas;
use iced::{Color, Element, Length, Point, Rectangle, Size};

use crate::core::interfaces::ports::PointerPositionProvider;
use crate::core::models::{CursorShape, InteractionMode, OverlayRect, ScreenPoint};
use crate::core::orchestrators::overlay_controller::{OverlayGeometryController, PointerMoveEffect};
use crate::global_constants::{LOG_TAG_OVERLAY, OVERLAY_BORDER_RGB, OVERLAY_HEADER_RGBA};

#[derive(Debug, Clone)]
pub enum OverlayMessage {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayGeometryChange {
    Moved(OverlayRect),
    Resized(OverlayRect),
}

pub struct OverlayView {
    controller: OverlayGeometryController,
    pointer_provider: Arc<dyn PointerPositionProvider>,
    cursor_shape: CursorShape,
}

impl OverlayView {
    pub fn build(
        controller: OverlayGeometryController,
        pointer_provider: Arc<dyn PointerPositionProvider>,
    ) -> Self {
        log::debug!("{} building overlay view", LOG_TAG_OVERLAY);
        Self {
            controller,
            pointer_provider,
            cursor_shape: CursorShape::Arrow,
        }
    }

    pub fn rect(&self) -> OverlayRect {
        self.controller.rect()
    }

    pub fn update(&mut self, message: OverlayMessage) -> Option<OverlayGeometryChange> {
        match message {
            OverlayMessage::PointerPressed(position) => {
                let local = Self::to_screen_point(position);
                let global = self.global_pointer_position(local);
                self.controller.on_pointer_down(local, global);
                log::trace!(
                    "{} pressed at {:?}, mode={:?}, edge={:?}",
                    LOG_TAG_OVERLAY,
                    local,
                    self.controller.mode(),
                    self.controller.locked_edge()
                );
                None
            }
            OverlayMessage::PointerMoved(position) => {
                let local = Self::to_screen_point(position);
                let global = match self.controller.mode() {
                    InteractionMode::Idle => local,
                    _ => self.global_pointer_position(local),
                };

                match self.controller.on_pointer_move(local, global) {
                    PointerMoveEffect::Moved(rect) => Some(OverlayGeometryChange::Moved(rect)),
                    PointerMoveEffect::Resized(rect) => Some(OverlayGeometryChange::Resized(rect)),
                    PointerMoveEffect::CursorChanged(shape) => {
                        self.cursor_shape = shape;
                        None
                    }
                }
            }
            OverlayMessage::PointerReleased => {
                self.controller.on_pointer_up();
                None
            }
        }
    }

    pub fn render_ui(&self) -> Element<'_, OverlayMessage> {
        canvas(self).width(Length::Fill).height(Length::Fill).into()
    }

    fn global_pointer_position(&self, local: ScreenPoint) -> ScreenPoint {
        self.pointer_provider
            .get_global_pointer_position()
            .unwrap_or_else(|_| self.controller.rect().top_left().translated_by(local))
    }

    fn to_screen_point(position: Point) -> ScreenPoint {
        ScreenPoint::new(position.x.round() as i32, position.y.round() as i32)
    }

    fn current_cursor_shape(&self) -> CursorShape {
        match self.controller.mode() {
            InteractionMode::Idle => self.cursor_shape,
            _ => self.controller.cursor_at(ScreenPoint::default()),
        }
    }

    fn to_mouse_interaction(shape: CursorShape) -> mouse::Interaction {
        match shape {
            CursorShape::Arrow => mouse::Interaction::Idle,
            CursorShape::ResizeVertical => mouse::Interaction::ResizingVertically,
            CursorShape::ResizeHorizontal => mouse::Interaction::ResizingHorizontally,
            CursorShape::ResizeDiagonalDown => mouse::Interaction::ResizingDiagonallyDown,
            CursorShape::ResizeDiagonalUp => mouse::Interaction::ResizingDiagonallyUp,
        }
    }
}

impl canvas::Program<OverlayMessage> for OverlayView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<OverlayMessage>> {
        let local_position = cursor
            .position()
            .map(|position| Point::new(position.x - bounds.x, position.y - bounds.y));

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => local_position
                .map(|position| canvas::Action::publish(OverlayMessage::PointerPressed(position))),
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => local_position
                .map(|position| canvas::Action::publish(OverlayMessage::PointerMoved(position))),
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(canvas::Action::publish(OverlayMessage::PointerReleased))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<iced::Renderer>> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let (header_r, header_g, header_b, header_a) = OVERLAY_HEADER_RGBA;
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, self.controller.header_height() as f32),
            Color::from_rgba(header_r, header_g, header_b, header_a),
        );

        let (border_r, border_g, border_b) = OVERLAY_BORDER_RGB;
        let border_stroke = canvas::Stroke::default()
            .with_color(Color::from_rgb(border_r, border_g, border_b))
            .with_width(1.0);

        for inset in 0..self.controller.border_thickness() {
            let inset = inset as f32;
            let width = bounds.width - 1.0 - 2.0 * inset;
            let height = bounds.height - 1.0 - 2.0 * inset;
            if width <= 0.0 || height <= 0.0 {
                break;
            }

            let outline = canvas::Path::rectangle(
                Point::new(inset + 0.5, inset + 0.5),
                Size::new(width, height),
            );
            frame.stroke(&outline, border_stroke);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        Self::to_mouse_interaction(self.current_cursor_shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockPointerProvider {
        positions: Mutex<Vec<ScreenPoint>>,
    }

    impl MockPointerProvider {
        fn returning(positions: Vec<ScreenPoint>) -> Self {
            Self {
                positions: Mutex::new(positions),
            }
        }
    }

    impl PointerPositionProvider for MockPointerProvider {
        fn get_global_pointer_position(&self) -> Result<ScreenPoint, String> {
            let mut positions = self.positions.lock().unwrap();
            if positions.is_empty() {
                return Err("no pointer".to_string());
            }
            Ok(positions.remove(0))
        }
    }

    fn create_view(positions: Vec<ScreenPoint>) -> OverlayView {
        let controller = OverlayGeometryController::new(OverlayRect::new(100, 100, 300, 300), 10);
        OverlayView::build(controller, Arc::new(MockPointerProvider::returning(positions)))
    }

    #[test]
    fn test_drag_through_view_reports_moved_rect() {
        let mut view = create_view(vec![ScreenPoint::new(150, 105), ScreenPoint::new(250, 305)]);

        view.update(OverlayMessage::PointerPressed(Point::new(50.0, 5.0)));
        let change = view.update(OverlayMessage::PointerMoved(Point::new(50.0, 5.0)));

        assert_eq!(
            change,
            Some(OverlayGeometryChange::Moved(OverlayRect::new(200, 300, 300, 300)))
        );
    }

    #[test]
    fn test_global_position_falls_back_to_window_relative_pointer() {
        let mut view = create_view(vec![]);

        view.update(OverlayMessage::PointerPressed(Point::new(295.0, 150.0)));
        let change = view.update(OverlayMessage::PointerMoved(Point::new(345.0, 150.0)));

        assert_eq!(
            change,
            Some(OverlayGeometryChange::Resized(OverlayRect::new(100, 100, 345, 300)))
        );
    }

    #[test]
    fn test_idle_hover_updates_cursor_only() {
        let mut view = create_view(vec![]);

        let change = view.update(OverlayMessage::PointerMoved(Point::new(5.0, 150.0)));

        assert_eq!(change, None);
        assert_eq!(view.current_cursor_shape(), CursorShape::ResizeHorizontal);
        assert_eq!(view.rect(), OverlayRect::new(100, 100, 300, 300));
    }

    #[test]
    fn test_release_returns_to_idle_cursor_tracking() {
        let mut view = create_view(vec![ScreenPoint::new(395, 395)]);
        view.update(OverlayMessage::PointerPressed(Point::new(295.0, 295.0)));
        assert_eq!(view.current_cursor_shape(), CursorShape::ResizeDiagonalDown);

        view.update(OverlayMessage::PointerReleased);
        view.update(OverlayMessage::PointerMoved(Point::new(150.0, 150.0)));

        assert_eq!(view.current_cursor_shape(), CursorShape::Arrow);
    }

    #[test]
    fn test_cursor_shapes_map_to_resize_interactions() {
        assert_eq!(
            OverlayView::to_mouse_interaction(CursorShape::ResizeVertical),
            mouse::Interaction::ResizingVertically
        );
        assert_eq!(
            OverlayView::to_mouse_interaction(CursorShape::Arrow),
            mouse::Interaction::Idle
        );
    }
}
