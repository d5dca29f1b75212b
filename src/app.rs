use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task, Theme};

use crate::adapters::ArboardClipboard;
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants::LOG_TAG_APP;
use crate::ports::{ApplicationKeyboardListener, SystemMousePositionProvider, XcapScreenCapturer};
use crate::presentation::{app_theme, MainWindowMessage};

pub struct CaptureOcrApp {
    orchestrator: AppOrchestrator,
}

impl CaptureOcrApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let has_saved_credentials = settings
            .credentials_path
            .as_deref()
            .is_some_and(|path| !path.trim().is_empty());

        let orchestrator = AppOrchestrator::build(
            Arc::new(XcapScreenCapturer::initialize()),
            Arc::new(SystemMousePositionProvider::initialize()),
            Arc::new(ArboardClipboard::new()),
            settings,
        );

        let mut tasks = vec![
            Task::done(OrchestratorMessage::OpenMainWindow),
            Task::done(OrchestratorMessage::OpenOverlay),
        ];

        if has_saved_credentials {
            log::info!("{} Loading saved credentials", LOG_TAG_APP);
            tasks.push(Task::done(OrchestratorMessage::MainWindowMsg(
                MainWindowMessage::ApplyCredentials,
            )));
        }

        (Self { orchestrator }, Task::batch(tasks))
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn render_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn render_theme(&self, _window_id: Id) -> Theme {
        self.orchestrator.get_theme()
    }

    pub fn render_style(&self, theme: &Theme) -> iced::theme::Style {
        app_theme::application_style(theme)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::Subscription::batch([
            ApplicationKeyboardListener::create_subscription().map(OrchestratorMessage::Keyboard),
            iced::event::listen_with(|event, _status, id| {
                if let iced::Event::Window(window::Event::Closed) = event {
                    return Some(OrchestratorMessage::WindowClosed(id));
                }
                None
            }),
        ])
    }
}
