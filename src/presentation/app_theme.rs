use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.09),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

/// Windows are created transparent so the overlay can show the screen
/// through it; the main window paints its own background.
pub fn application_style(theme: &Theme) -> iced::theme::Style {
    iced::theme::Style {
        background_color: Color::TRANSPARENT,
        text_color: theme.palette().text,
    }
}

pub fn main_window_background_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

pub fn output_panel_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.06,
            ..palette.text
        })),
        border: Border {
            color: Color {
                a: 0.2,
                ..palette.text
            },
            width: 1.0,
            radius: 6.0.into(),
        },
        text_color: Some(palette.text),
        ..Default::default()
    }
}

pub fn capture_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => Color::from_rgb(0.85, 0.2, 0.2),
        button::Status::Hovered => Color::from_rgb(0.95, 0.3, 0.3),
        button::Status::Pressed => Color::from_rgb(0.7, 0.15, 0.15),
        button::Status::Disabled => Color::from_rgb(0.3, 0.3, 0.3),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            Color::from_rgb(0.5, 0.5, 0.5)
        } else {
            Color::WHITE
        },
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn secondary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let alpha = match status {
        button::Status::Active => 0.12,
        button::Status::Hovered => 0.2,
        button::Status::Pressed => 0.28,
        button::Status::Disabled => 0.05,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette.text
        })),
        text_color: palette.text,
        border: Border {
            color: Color {
                a: 0.3,
                ..palette.text
            },
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_light_mode_palette() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_application_style_is_transparent() {
        let style = application_style(&get_theme(&ThemeMode::Dark));

        assert_eq!(style.background_color, Color::TRANSPARENT);
    }

    #[test]
    fn test_main_window_background_is_opaque() {
        let style = main_window_background_style(&get_theme(&ThemeMode::Dark));

        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn test_capture_button_active_is_red_with_white_text() {
        let style = capture_button_style(&Theme::Dark, button::Status::Active);

        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb(0.85, 0.2, 0.2)))
        );
        assert_eq!(style.text_color, Color::WHITE);
    }
}
