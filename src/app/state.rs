use crate::carousel::{Carousel, SliderMarkup};
use crate::registry::{CarouselId, CarouselRegistry};
use crate::settings::Settings;
use crate::slides::LoaderMessage;
use crate::ui::CarouselViewState;

use eframe::egui::{Color32, TextureHandle};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

/// What is shown on one slide panel.
pub enum SlideContent {
    Placeholder { title: String, color: Color32 },
    Pending { path: PathBuf },
    Image { path: PathBuf, texture: TextureHandle },
    Failed { path: PathBuf, message: String },
}

impl SlideContent {
    pub fn label(&self) -> String {
        match self {
            SlideContent::Placeholder { title, .. } => title.clone(),
            SlideContent::Pending { path }
            | SlideContent::Image { path, .. }
            | SlideContent::Failed { path, .. } => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

pub struct CarouselApp {
    pub settings: Settings,

    pub registry: CarouselRegistry,
    pub deck: Option<CarouselId>,
    pub slides: Vec<SlideContent>,
    pub current_folder: Option<PathBuf>,
    pub view_state: CarouselViewState,

    // Background decoding; stale generations are dropped
    pub(crate) loader_tx: Sender<LoaderMessage>,
    pub(crate) loader_rx: Receiver<LoaderMessage>,
    pub(crate) load_generation: u64,

    pub status_message: Option<(String, Instant)>,
}

impl CarouselApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load();
        crate::ui::main::theme::apply_theme(&cc.egui_ctx, &settings);

        let mut app = Self::with_settings(settings);

        // Check command line arguments for a folder
        let args: Vec<String> = std::env::args().collect();
        let folder = args
            .get(1)
            .map(PathBuf::from)
            .or_else(|| app.settings.slides_folder.clone());

        match folder {
            Some(folder) if folder.is_dir() => app.load_folder(folder),
            _ => app.load_placeholder_deck(),
        }

        app
    }

    /// An app with no deck yet and no egui context attached.
    pub fn with_settings(settings: Settings) -> Self {
        let (tx, rx) = channel();
        Self {
            settings,
            registry: CarouselRegistry::new(),
            deck: None,
            slides: Vec::new(),
            current_folder: None,
            view_state: CarouselViewState::default(),
            loader_tx: tx,
            loader_rx: rx,
            load_generation: 0,
            status_message: None,
        }
    }

    pub fn active_carousel(&self) -> Option<&Carousel> {
        self.deck.and_then(|id| self.registry.get(id))
    }

    pub fn active_carousel_mut(&mut self) -> Option<&mut Carousel> {
        let id = self.deck?;
        self.registry.get_mut(id)
    }

    /// Replaces the current deck with `slides`, mounting a fresh carousel.
    pub(crate) fn install_deck(&mut self, slides: Vec<SlideContent>) {
        if let Some(old) = self.deck.take() {
            self.registry.remove(old);
        }

        let markup = SliderMarkup::with_labels(slides.iter().map(SlideContent::label));
        let carousel = Carousel::new(markup, self.settings.carousel.clone(), Instant::now());
        if !carousel.is_mounted() {
            self.set_status_message("No slides to show".to_string());
        }

        self.slides = slides;
        self.view_state = CarouselViewState::default();
        self.deck = Some(self.registry.register(carousel));
    }

    pub fn set_status_message(&mut self, message: String) {
        log::info!("{}", message);
        self.status_message = Some((message, Instant::now()));
    }

    pub fn toggle_auto_advance(&mut self) {
        let now = Instant::now();
        let Some(carousel) = self.active_carousel_mut() else {
            return;
        };
        let enabled = !carousel.is_auto_advance_enabled();
        carousel.set_auto_advance_enabled(enabled, now);
        self.settings.carousel.auto_advance = enabled;
    }
}

pub(crate) fn placeholder_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 5] = [
        Color32::from_rgb(70, 130, 255),
        Color32::from_rgb(160, 90, 255),
        Color32::from_rgb(50, 205, 100),
        Color32::from_rgb(255, 150, 50),
        Color32::from_rgb(255, 100, 180),
    ];
    PALETTE[index % PALETTE.len()]
}
