use crate::core::models::ScreenPoint;

pub trait PointerPositionProvider: Send + Sync {
    fn get_global_pointer_position(&self) -> Result<ScreenPoint, String>;
}
