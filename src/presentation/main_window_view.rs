use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::global_constants::{CREDENTIALS_INSTRUCTIONS, PREVIEW_BOX_SIZE};
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum MainWindowMessage {
    CredentialsPathChanged(String),
    ApplyCredentials,
    ToggleInstructions,
    CaptureRequested,
}

pub struct MainWindowView {
    credentials_path_input: String,
    show_instructions: bool,
    preview_handle: Option<image::Handle>,
    capture_hotkey_label: String,
}

impl MainWindowView {
    pub fn build(credentials_path: Option<String>, capture_hotkey_label: String) -> Self {
        Self {
            credentials_path_input: credentials_path.unwrap_or_default(),
            show_instructions: false,
            preview_handle: None,
            capture_hotkey_label,
        }
    }

    pub fn update(&mut self, message: MainWindowMessage) {
        match message {
            MainWindowMessage::CredentialsPathChanged(path) => {
                self.credentials_path_input = path;
            }
            MainWindowMessage::ToggleInstructions => {
                self.show_instructions = !self.show_instructions;
                log::debug!(
                    "[MAIN_VIEW] Instructions visible: {}",
                    self.show_instructions
                );
            }
            MainWindowMessage::ApplyCredentials | MainWindowMessage::CaptureRequested => {}
        }
    }

    pub fn credentials_path_input(&self) -> &str {
        self.credentials_path_input.trim()
    }

    pub fn is_showing_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn set_preview(&mut self, handle: image::Handle) {
        self.preview_handle = Some(handle);
    }

    pub fn render_ui<'a>(&'a self, output_text: &'a str) -> Element<'a, MainWindowMessage> {
        let credentials_row = row![
            text_input("Path to Cloud Vision credentials JSON", &self.credentials_path_input)
                .on_input(MainWindowMessage::CredentialsPathChanged)
                .on_submit(MainWindowMessage::ApplyCredentials)
                .padding(8)
                .width(Length::Fill),
            button(text("Apply"))
                .padding([8, 16])
                .style(app_theme::secondary_button_style)
                .on_press(MainWindowMessage::ApplyCredentials),
            button(text(if self.is_showing_instructions() {
                "Hide help"
            } else {
                "How to get a key"
            }))
            .padding([8, 16])
            .style(app_theme::secondary_button_style)
            .on_press(MainWindowMessage::ToggleInstructions),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let preview: Element<'_, MainWindowMessage> = match &self.preview_handle {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(PREVIEW_BOX_SIZE))
                .height(Length::Fixed(PREVIEW_BOX_SIZE))
                .into(),
            None => container(text("Captured image will appear here").size(14))
                .center(Length::Fixed(PREVIEW_BOX_SIZE))
                .into(),
        };

        let output_area = container(
            scrollable(text(output_text).size(16).width(Length::Fill)).height(Length::Fill),
        )
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(app_theme::output_panel_style);

        let results_section = column![preview, output_area]
            .spacing(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center);

        let capture_button = button(text(format!("Capture ({})", self.capture_hotkey_label)))
            .padding([12, 24])
            .width(Length::Fill)
            .style(app_theme::capture_button_style)
            .on_press(MainWindowMessage::CaptureRequested);

        let mut content = column![credentials_row].spacing(12).padding(20);

        if self.is_showing_instructions() {
            content = content.push(
                container(text(CREDENTIALS_INSTRUCTIONS).size(14))
                    .padding(10)
                    .width(Length::Fill)
                    .style(app_theme::output_panel_style),
            );
        }

        content = content
            .push(results_section)
            .push(Space::new().height(Length::Fixed(4.0)))
            .push(capture_button);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::main_window_background_style)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prefills_saved_credentials_path() {
        let view = MainWindowView::build(Some("/keys/vision.json".to_string()), "Ctrl+C".to_string());

        assert_eq!(view.credentials_path_input(), "/keys/vision.json");
    }

    #[test]
    fn test_credentials_path_input_is_trimmed() {
        let mut view = MainWindowView::build(None, "Ctrl+C".to_string());

        view.update(MainWindowMessage::CredentialsPathChanged("  /tmp/key.json ".to_string()));

        assert_eq!(view.credentials_path_input(), "/tmp/key.json");
    }

    #[test]
    fn test_toggle_instructions_flips_visibility() {
        let mut view = MainWindowView::build(None, "Ctrl+C".to_string());

        view.update(MainWindowMessage::ToggleInstructions);
        assert!(view.is_showing_instructions());

        view.update(MainWindowMessage::ToggleInstructions);
        assert!(!view.is_showing_instructions());
    }
}
