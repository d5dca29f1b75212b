#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!(
        "[MAIN] Starting {}",
        global_constants::APPLICATION_NAME
    );

    daemon(
        app::CaptureOcrApp::build,
        app::CaptureOcrApp::handle_update,
        app::CaptureOcrApp::render_view,
    )
    .title(app::CaptureOcrApp::render_title)
    .theme(app::CaptureOcrApp::render_theme)
    .style(app::CaptureOcrApp::render_style)
    .subscription(app::CaptureOcrApp::handle_subscription)
    .run()
}
