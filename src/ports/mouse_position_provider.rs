use crate::core::interfaces::ports::PointerPositionProvider;
use crate::core::models::ScreenPoint;
use mouse_position::mouse_position::Mouse;

const MESSAGE_MOUSE_POSITION_FAILED: &str = "failed to get mouse position";

pub struct SystemMousePositionProvider;

impl SystemMousePositionProvider {
    pub fn initialize() -> Self {
        log::debug!("[MOUSE] initializing mouse position provider");
        Self
    }

    fn query_system_mouse_position(&self) -> Mouse {
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result_to_point(&self, mouse_result: Mouse) -> Result<ScreenPoint, String> {
        match mouse_result {
            Mouse::Position { x, y } => Ok(ScreenPoint::new(x, y)),
            Mouse::Error => {
                log::warn!("[MOUSE] {}", MESSAGE_MOUSE_POSITION_FAILED);
                Err(MESSAGE_MOUSE_POSITION_FAILED.to_string())
            }
        }
    }
}

impl PointerPositionProvider for SystemMousePositionProvider {
    fn get_global_pointer_position(&self) -> Result<ScreenPoint, String> {
        let mouse_position_result = self.query_system_mouse_position();
        self.convert_mouse_result_to_point(mouse_position_result)
    }
}
