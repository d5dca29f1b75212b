use iced::keyboard::{self, Key, Modifiers};

use crate::core::models::KeyModifiers;
use crate::global_constants::LOG_TAG_KEYBOARD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: String,
    pub modifiers: KeyModifiers,
}

/// Listens for key presses in every window of the application.
pub struct ApplicationKeyboardListener;

impl ApplicationKeyboardListener {
    pub fn create_subscription() -> iced::Subscription<KeyboardEvent> {
        iced::event::listen_with(|event, _status, _window_id| match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                Self::convert_key_press(&key, modifiers)
            }
            _ => None,
        })
    }

    fn convert_key_press(key: &Key, modifiers: Modifiers) -> Option<KeyboardEvent> {
        let key_name = match key {
            Key::Character(character) => character.to_lowercase(),
            Key::Named(named) => format!("{:?}", named).to_lowercase(),
            Key::Unidentified => return None,
        };

        let event = KeyboardEvent {
            key: key_name,
            modifiers: KeyModifiers {
                control: modifiers.control(),
                shift: modifiers.shift(),
                alt: modifiers.alt(),
                logo: modifiers.logo(),
            },
        };

        log::trace!("{} key pressed: {:?}", LOG_TAG_KEYBOARD, event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::HotkeyBinding;

    #[test]
    fn test_convert_character_key_with_control() {
        let event =
            ApplicationKeyboardListener::convert_key_press(&Key::Character("C".into()), Modifiers::CTRL)
                .unwrap();

        assert_eq!(event.key, "c");
        assert!(event.modifiers.control);
        assert!(!event.modifiers.shift);
    }

    #[test]
    fn test_converted_ctrl_c_matches_default_binding() {
        let binding = HotkeyBinding::parse("Ctrl+C").unwrap();

        let event =
            ApplicationKeyboardListener::convert_key_press(&Key::Character("c".into()), Modifiers::CTRL)
                .unwrap();

        assert!(binding.matches(&event.key, event.modifiers));
    }

    #[test]
    fn test_convert_named_key() {
        let event = ApplicationKeyboardListener::convert_key_press(
            &Key::Named(keyboard::key::Named::F5),
            Modifiers::empty(),
        )
        .unwrap();

        assert_eq!(event.key, "f5");
        assert_eq!(event.modifiers, KeyModifiers::default());
    }

    #[test]
    fn test_convert_unidentified_key_is_ignored() {
        let event = ApplicationKeyboardListener::convert_key_press(&Key::Unidentified, Modifiers::CTRL);

        assert!(event.is_none());
    }
}
