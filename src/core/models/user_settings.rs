use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::OverlayRect;
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayGeometrySettings {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub border_thickness: i32,
}

impl Default for OverlayGeometrySettings {
    fn default() -> Self {
        Self {
            x: global_constants::DEFAULT_OVERLAY_X,
            y: global_constants::DEFAULT_OVERLAY_Y,
            width: global_constants::DEFAULT_OVERLAY_WIDTH,
            height: global_constants::DEFAULT_OVERLAY_HEIGHT,
            border_thickness: global_constants::DEFAULT_BORDER_THICKNESS,
        }
    }
}

impl OverlayGeometrySettings {
    /// Initial overlay rectangle, never smaller than the minimum overlay size.
    pub fn initial_rect(&self) -> OverlayRect {
        OverlayRect::new(
            self.x,
            self.y,
            self.width.max(global_constants::OVERLAY_MINIMUM_SIZE),
            self.height.max(global_constants::OVERLAY_MINIMUM_SIZE),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub credentials_path: Option<String>,
    pub capture_hotkey: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub overlay: OverlayGeometrySettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            credentials_path: None,
            capture_hotkey: global_constants::DEFAULT_CAPTURE_HOTKEY.to_string(),
            theme_mode: ThemeMode::default(),
            overlay: OverlayGeometrySettings::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Capture hotkey: {}", settings.capture_hotkey);
        log::debug!(
            "[SETTINGS] Credentials configured: {}",
            settings.credentials_path.is_some()
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to_path(&settings_path)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
