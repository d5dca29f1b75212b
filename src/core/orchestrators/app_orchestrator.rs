use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::text;
use iced::window::{self, Id};
use iced::{Element, Point, Size, Task, Theme};

use crate::adapters::GoogleVisionTextDetector;
use crate::core::errors::CaptureOcrError;
use crate::core::interfaces::adapters::{ClipboardWriter, TextDetector};
use crate::core::interfaces::ports::{PointerPositionProvider, ScreenCapturer};
use crate::core::models::{HotkeyBinding, OverlayRect, UserSettings};
use crate::core::orchestrators::capture_coordinator::{self, CaptureCoordinator};
use crate::core::orchestrators::overlay_controller::OverlayGeometryController;
use crate::core::orchestrators::result_presenter::ResultPresenter;
use crate::global_constants::{
    APPLICATION_NAME, APPLICATION_TITLE, LOG_TAG_APP, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_WIDTH,
    USER_MESSAGE_CONFIGURE_CREDENTIALS, USER_MESSAGE_CREDENTIALS_LOADED,
    USER_MESSAGE_LOADING_CREDENTIALS, USER_MESSAGE_RECOGNIZING,
};
use crate::ports::KeyboardEvent;
use crate::presentation::app_theme;
use crate::presentation::{
    MainWindowMessage, MainWindowView, OverlayGeometryChange, OverlayMessage, OverlayView,
};

/// A capture that is ready to be sent for recognition. `sequence` identifies
/// the trigger that produced it; only the latest trigger's result is shown.
pub struct PendingRecognition {
    pub sequence: u64,
    pub detector: Arc<dyn TextDetector>,
    pub encoded_image: Vec<u8>,
}

pub enum AppWindow {
    Main,
    Overlay(OverlayView),
}

pub struct AppOrchestrator {
    capture_coordinator: CaptureCoordinator,
    result_presenter: ResultPresenter,
    pointer_provider: Arc<dyn PointerPositionProvider>,
    text_detector: Option<Arc<dyn TextDetector>>,
    main_window_view: MainWindowView,
    windows: HashMap<Id, AppWindow>,
    main_window_id: Option<Id>,
    overlay_window_id: Option<Id>,
    capture_hotkey: HotkeyBinding,
    settings: UserSettings,
    recognition_sequence: u64,
    credentials_sequence: u64,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    OpenOverlay,
    MainWindowMsg(MainWindowMessage),
    OverlayMsg(Id, OverlayMessage),
    Keyboard(KeyboardEvent),
    OcrComplete(u64, Result<Option<String>, String>),
    TextDetectorReady(u64, String, Arc<dyn TextDetector>),
    TextDetectorFailed(u64, String),
    WindowClosed(Id),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::OpenOverlay => write!(f, "OpenOverlay"),
            OrchestratorMessage::MainWindowMsg(msg) => write!(f, "MainWindowMsg({:?})", msg),
            OrchestratorMessage::OverlayMsg(id, _) => write!(f, "OverlayMsg({:?})", id),
            OrchestratorMessage::Keyboard(event) => write!(f, "Keyboard({:?})", event),
            OrchestratorMessage::OcrComplete(sequence, result) => {
                write!(f, "OcrComplete({}, {:?})", sequence, result.is_ok())
            }
            OrchestratorMessage::TextDetectorReady(sequence, path, _) => {
                write!(f, "TextDetectorReady({}, {})", sequence, path)
            }
            OrchestratorMessage::TextDetectorFailed(sequence, e) => {
                write!(f, "TextDetectorFailed({}, {})", sequence, e)
            }
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        screen_capturer: Arc<dyn ScreenCapturer>,
        pointer_provider: Arc<dyn PointerPositionProvider>,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: UserSettings,
    ) -> Self {
        let capture_hotkey = HotkeyBinding::parse(&settings.capture_hotkey).unwrap_or_else(|e| {
            log::warn!(
                "{} Invalid capture hotkey '{}': {:#}, falling back to default",
                LOG_TAG_APP,
                settings.capture_hotkey,
                e
            );
            HotkeyBinding::default()
        });

        let main_window_view =
            MainWindowView::build(settings.credentials_path.clone(), capture_hotkey.to_string());

        Self {
            capture_coordinator: CaptureCoordinator::build(screen_capturer),
            result_presenter: ResultPresenter::build(clipboard),
            pointer_provider,
            text_detector: None,
            main_window_view,
            windows: HashMap::new(),
            main_window_id: None,
            overlay_window_id: None,
            capture_hotkey,
            settings,
            recognition_sequence: 0,
            credentials_sequence: 0,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("{} Received message: {:?}", LOG_TAG_APP, message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::OpenOverlay => self.handle_open_overlay(),
            OrchestratorMessage::MainWindowMsg(msg) => self.handle_main_window_message(msg),
            OrchestratorMessage::OverlayMsg(window_id, msg) => {
                self.handle_overlay_message(window_id, msg)
            }
            OrchestratorMessage::Keyboard(event) => {
                if self.is_capture_hotkey(&event) {
                    log::info!("{} Capture hotkey {} pressed", LOG_TAG_APP, self.capture_hotkey);
                    return self.handle_capture_requested();
                }
                Task::none()
            }
            OrchestratorMessage::OcrComplete(sequence, result) => {
                self.finish_recognition(sequence, result);
                Task::none()
            }
            OrchestratorMessage::TextDetectorReady(sequence, credentials_path, detector) => {
                if self.is_current_credentials_load(sequence) {
                    self.handle_text_detector_ready(credentials_path, detector);
                }
                Task::none()
            }
            OrchestratorMessage::TextDetectorFailed(sequence, error) => {
                if self.is_current_credentials_load(sequence) {
                    log::error!("{} Failed to load credentials: {}", LOG_TAG_APP, error);
                    self.result_presenter
                        .present_error(format!("Failed to load credentials: {}", error));
                }
                Task::none()
            }
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        match self.windows.get(&window_id) {
            Some(AppWindow::Main) => self
                .main_window_view
                .render_ui(self.result_presenter.output_text())
                .map(OrchestratorMessage::MainWindowMsg),
            Some(AppWindow::Overlay(overlay_view)) => overlay_view
                .render_ui()
                .map(move |msg| OrchestratorMessage::OverlayMsg(window_id, msg)),
            None => text("Loading...").into(),
        }
    }

    pub fn get_window_title(&self, window_id: Id) -> String {
        match self.windows.get(&window_id) {
            Some(AppWindow::Overlay(_)) => APPLICATION_TITLE.to_string(),
            _ => APPLICATION_NAME.to_string(),
        }
    }

    pub fn get_theme(&self) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn is_capture_hotkey(&self, event: &KeyboardEvent) -> bool {
        self.capture_hotkey.matches(&event.key, event.modifiers)
    }

    /// The live overlay rectangle, or the configured one while the overlay
    /// window is not open.
    pub fn overlay_rect(&self) -> OverlayRect {
        self.overlay_window_id
            .and_then(|id| match self.windows.get(&id) {
                Some(AppWindow::Overlay(overlay_view)) => Some(overlay_view.rect()),
                _ => None,
            })
            .unwrap_or_else(|| self.settings.overlay.initial_rect())
    }

    pub fn output_text(&self) -> &str {
        self.result_presenter.output_text()
    }

    /// Captures the overlay region and encodes it for recognition. Every
    /// failure is shown in the output area and yields `None`. A successful
    /// capture supersedes any recognition still in flight.
    pub fn prepare_recognition(&mut self) -> Option<PendingRecognition> {
        let Some(detector) = self.text_detector.clone() else {
            log::warn!("{} Capture requested without a text detector", LOG_TAG_APP);
            self.result_presenter
                .present_error(CaptureOcrError::OcrClientUnavailable.to_string());
            return None;
        };

        let overlay_rect = self.overlay_rect();

        let buffer = match self.capture_coordinator.capture_overlay(overlay_rect) {
            Ok(buffer) => buffer,
            Err(e) => {
                log::error!("{} Capture failed: {}", LOG_TAG_APP, e);
                self.result_presenter.present_error(e.to_string());
                return None;
            }
        };

        self.main_window_view.set_preview(buffer.image_handle.clone());

        match capture_coordinator::to_encoded_bytes(&buffer) {
            Ok(encoded_image) => {
                self.recognition_sequence += 1;
                Some(PendingRecognition {
                    sequence: self.recognition_sequence,
                    detector,
                    encoded_image,
                })
            }
            Err(e) => {
                log::error!("{} Encoding failed: {}", LOG_TAG_APP, e);
                self.result_presenter.present_error(e.to_string());
                None
            }
        }
    }

    pub fn finish_recognition(&mut self, sequence: u64, result: Result<Option<String>, String>) {
        if sequence != self.recognition_sequence {
            log::debug!(
                "{} Dropping result of capture #{}, capture #{} is newer",
                LOG_TAG_APP,
                sequence,
                self.recognition_sequence
            );
            return;
        }

        match result {
            Ok(recognized_text) => self.result_presenter.present(recognized_text.as_deref()),
            Err(e) => {
                log::error!("{} Recognition failed: {}", LOG_TAG_APP, e);
                self.result_presenter
                    .present_error(CaptureOcrError::OcrCallFailure(e).to_string());
            }
        }
    }

    fn handle_capture_requested(&mut self) -> Task<OrchestratorMessage> {
        let Some(pending) = self.prepare_recognition() else {
            return Task::none();
        };

        self.result_presenter.present_status(USER_MESSAGE_RECOGNIZING);

        Task::future(async move {
            let result = pending
                .detector
                .detect_text(&pending.encoded_image)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::OcrComplete(pending.sequence, result)
        })
    }

    fn handle_main_window_message(&mut self, message: MainWindowMessage) -> Task<OrchestratorMessage> {
        self.main_window_view.update(message.clone());

        match message {
            MainWindowMessage::ApplyCredentials => self.handle_apply_credentials(),
            MainWindowMessage::CaptureRequested => self.handle_capture_requested(),
            MainWindowMessage::CredentialsPathChanged(_) | MainWindowMessage::ToggleInstructions => {
                Task::none()
            }
        }
    }

    fn handle_apply_credentials(&mut self) -> Task<OrchestratorMessage> {
        let credentials_path = self.main_window_view.credentials_path_input().to_string();
        if credentials_path.is_empty() {
            self.result_presenter
                .present_error(USER_MESSAGE_CONFIGURE_CREDENTIALS);
            return Task::none();
        }

        self.result_presenter
            .present_status(USER_MESSAGE_LOADING_CREDENTIALS);
        self.credentials_sequence += 1;
        let sequence = self.credentials_sequence;

        Task::future(async move {
            let path = PathBuf::from(&credentials_path);
            match GoogleVisionTextDetector::from_credentials_file(&path).await {
                Ok(detector) => OrchestratorMessage::TextDetectorReady(
                    sequence,
                    credentials_path,
                    Arc::new(detector) as Arc<dyn TextDetector>,
                ),
                Err(e) => OrchestratorMessage::TextDetectorFailed(sequence, format!("{:#}", e)),
            }
        })
    }

    fn is_current_credentials_load(&self, sequence: u64) -> bool {
        if sequence != self.credentials_sequence {
            log::debug!(
                "{} Ignoring credentials load #{}, #{} was requested since",
                LOG_TAG_APP,
                sequence,
                self.credentials_sequence
            );
            return false;
        }
        true
    }

    fn handle_text_detector_ready(
        &mut self,
        credentials_path: String,
        detector: Arc<dyn TextDetector>,
    ) {
        log::info!("{} Text detector ready", LOG_TAG_APP);
        self.text_detector = Some(detector);
        self.result_presenter
            .present_status(USER_MESSAGE_CREDENTIALS_LOADED);

        if self.settings.credentials_path.as_deref() != Some(credentials_path.as_str()) {
            self.settings.credentials_path = Some(credentials_path);
            if let Err(e) = self.settings.save() {
                log::error!("{} Failed to save settings: {:#}", LOG_TAG_APP, e);
            }
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("{} Main window already open", LOG_TAG_APP);
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        self.windows.insert(id, AppWindow::Main);
        log::info!("{} Main window created with ID: {:?}", LOG_TAG_APP, id);

        task.discard()
    }

    fn handle_open_overlay(&mut self) -> Task<OrchestratorMessage> {
        if self.overlay_window_id.is_some() {
            log::warn!("{} Overlay already open", LOG_TAG_APP);
            return Task::none();
        }

        let rect = self.settings.overlay.initial_rect();
        let controller =
            OverlayGeometryController::new(rect, self.settings.overlay.border_thickness);

        let (id, task) = window::open(window::Settings {
            size: Size::new(rect.width as f32, rect.height as f32),
            position: window::Position::Specific(Point::new(rect.x as f32, rect.y as f32)),
            resizable: false,
            decorations: false,
            transparent: true,
            level: window::Level::AlwaysOnTop,
            ..Default::default()
        });

        self.overlay_window_id = Some(id);
        self.windows.insert(
            id,
            AppWindow::Overlay(OverlayView::build(
                controller,
                Arc::clone(&self.pointer_provider),
            )),
        );
        log::info!(
            "{} Overlay created with ID: {:?} at {:?}",
            LOG_TAG_APP,
            id,
            rect
        );

        task.discard()
    }

    fn handle_overlay_message(
        &mut self,
        window_id: Id,
        message: OverlayMessage,
    ) -> Task<OrchestratorMessage> {
        let Some(AppWindow::Overlay(overlay_view)) = self.windows.get_mut(&window_id) else {
            return Task::none();
        };

        match overlay_view.update(message) {
            Some(OverlayGeometryChange::Moved(rect)) => {
                window::move_to(window_id, Point::new(rect.x as f32, rect.y as f32))
            }
            Some(OverlayGeometryChange::Resized(rect)) => Task::batch(vec![
                window::move_to(window_id, Point::new(rect.x as f32, rect.y as f32)),
                window::resize(window_id, Size::new(rect.width as f32, rect.height as f32)),
            ]),
            None => Task::none(),
        }
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("{} Window closed: {:?}", LOG_TAG_APP, id);
        self.windows.remove(&id);

        if Some(id) == self.overlay_window_id {
            self.overlay_window_id = None;
            return Task::none();
        }

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            log::info!("{} Main window closed, shutting down", LOG_TAG_APP);

            let close_overlay = match self.overlay_window_id.take() {
                Some(overlay_id) => {
                    self.windows.remove(&overlay_id);
                    window::close(overlay_id)
                }
                None => Task::none(),
            };
            return Task::batch(vec![close_overlay, iced::exit()]);
        }

        Task::none()
    }
}
