use crate::errors::{CarouselError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Appearance
    pub theme: Theme,
    pub background_color: BackgroundColor,
    pub accent_color: AccentColor,
    pub show_toolbar: bool,
    pub show_statusbar: bool,

    // Slides
    pub slides_folder: Option<PathBuf>,
    pub include_subfolders: bool,
    pub recent_folders: Vec<PathBuf>,
    pub max_recent_folders: usize,

    // Window state
    pub window_size: (f32, f32),

    pub carousel: CarouselSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            background_color: BackgroundColor::Dark,
            accent_color: AccentColor::Blue,
            show_toolbar: true,
            show_statusbar: true,

            slides_folder: None,
            include_subfolders: false,
            recent_folders: Vec::new(),
            max_recent_folders: 10,

            window_size: (1200.0, 760.0),

            carousel: CarouselSettings::default(),
        }
    }
}

/// Timings and thresholds of a single carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Start the repeating auto-advance timer on mount and pointer leave
    pub auto_advance: bool,
    pub auto_advance_interval_ms: u64,
    /// Must match the visual slide transition exactly
    pub transition_duration_ms: u64,
    /// Delay before auto-advance resumes after a touch ends
    pub resume_delay_ms: u64,
    /// Minimum horizontal travel of a swipe or drag, in logical pixels
    pub min_swipe_distance: f32,
    pub keyboard_scope: KeyboardScope,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            auto_advance_interval_ms: 5000,
            transition_duration_ms: 600,
            resume_delay_ms: 3000,
            min_swipe_distance: 50.0,
            keyboard_scope: KeyboardScope::Document,
        }
    }
}

impl CarouselSettings {
    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.auto_advance_interval_ms == 0 {
            return Err(CarouselError::InvalidSettings {
                message: "auto_advance_interval_ms must be greater than zero".to_string(),
            });
        }
        if self.transition_duration_ms == 0 {
            return Err(CarouselError::InvalidSettings {
                message: "transition_duration_ms must be greater than zero".to_string(),
            });
        }
        if !(self.min_swipe_distance.is_finite() && self.min_swipe_distance > 0.0) {
            return Err(CarouselError::InvalidSettings {
                message: format!(
                    "min_swipe_distance must be a positive number, got {}",
                    self.min_swipe_distance
                ),
            });
        }
        Ok(())
    }
}

/// Which element the arrow-key listener is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum KeyboardScope {
    /// Arrow keys navigate regardless of pointer position
    #[default]
    Document,
    /// Arrow keys navigate only while the pointer is over the container
    Container,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    Oled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundColor {
    Dark,
    Light,
    Gray,
    Black,
}

impl BackgroundColor {
    pub fn to_color(self) -> egui::Color32 {
        match self {
            BackgroundColor::Dark => egui::Color32::from_rgb(18, 18, 20),
            BackgroundColor::Light => egui::Color32::from_rgb(245, 245, 247),
            BackgroundColor::Gray => egui::Color32::from_rgb(80, 80, 85),
            BackgroundColor::Black => egui::Color32::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccentColor {
    Blue,
    Purple,
    Green,
    Orange,
}

impl AccentColor {
    pub fn to_color(self) -> egui::Color32 {
        match self {
            AccentColor::Blue => egui::Color32::from_rgb(70, 130, 255),
            AccentColor::Purple => egui::Color32::from_rgb(160, 90, 255),
            AccentColor::Green => egui::Color32::from_rgb(50, 205, 100),
            AccentColor::Orange => egui::Color32::from_rgb(255, 150, 50),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rcarousel", "RCarousel")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Best-effort load; falls back to defaults on any error.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!(code = e.error_code(), "{}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::warn!(code = e.error_code(), "Failed to save settings: {}", e);
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CarouselError::FileNotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn add_recent_folder(&mut self, path: PathBuf) {
        self.recent_folders.retain(|p| p != &path);
        self.recent_folders.insert(0, path);
        if self.recent_folders.len() > self.max_recent_folders {
            self.recent_folders.truncate(self.max_recent_folders);
        }
    }
}
