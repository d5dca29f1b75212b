pub mod app_orchestrator;
pub mod capture_coordinator;
pub mod overlay_controller;
pub mod result_presenter;
