use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Slider container element not found")]
    MissingContainer,

    #[error("Slider track element not found")]
    MissingTrack,

    #[error("Slider has no slides")]
    NoSlides,

    #[error("Invalid carousel settings: {message}")]
    InvalidSettings { message: String },

    #[error("Failed to load slide '{path}': {message}")]
    SlideLoad { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Settings error: {message}")]
    Settings { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CarouselError>;

impl CarouselError {
    /// Returns true if this error is recoverable (user can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CarouselError::FileNotFound { .. }
                | CarouselError::SlideLoad { .. }
                | CarouselError::Io { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            CarouselError::MissingContainer | CarouselError::MissingTrack => {
                "The slider markup is incomplete. The carousel stays disabled."
            }
            CarouselError::NoSlides => "Open a folder that contains at least one image.",
            CarouselError::InvalidSettings { .. } => {
                "Check the carousel timings in settings.json. Defaults are used instead."
            }
            CarouselError::SlideLoad { .. } => {
                "The image file may be corrupted. Try opening it in another viewer."
            }
            CarouselError::FileNotFound { .. } => {
                "Check if the file exists and you have permission to access it."
            }
            CarouselError::Io { .. } => "File system error occurred. Check disk space and permissions.",
            CarouselError::Json { .. } | CarouselError::Settings { .. } => {
                "The settings file could not be read. Delete it to restore defaults."
            }
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CarouselError::MissingContainer => "MISSING_CONTAINER",
            CarouselError::MissingTrack => "MISSING_TRACK",
            CarouselError::NoSlides => "NO_SLIDES",
            CarouselError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CarouselError::SlideLoad { .. } => "SLIDE_LOAD_ERROR",
            CarouselError::FileNotFound { .. } => "FILE_NOT_FOUND",
            CarouselError::Settings { .. } => "SETTINGS_ERROR",
            CarouselError::Io { .. } => "IO_ERROR",
            CarouselError::Json { .. } => "JSON_ERROR",
        }
    }
}
