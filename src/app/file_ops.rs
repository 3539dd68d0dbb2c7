use super::state::{placeholder_color, CarouselApp, SlideContent};
use crate::slides::{self, is_supported_image};

use anyhow::Context;
use std::path::{Path, PathBuf};

const PLACEHOLDER_TITLES: [&str; 4] = [
    "Welcome",
    "Swipe, drag or use the arrow keys",
    "Hover to pause",
    "Open a folder to show your own slides",
];

impl CarouselApp {
    pub fn open_folder_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.load_folder(path);
        }
    }

    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            if let Some(path) = &file.path {
                if path.is_dir() {
                    self.load_folder(path.clone());
                    break;
                } else if path.is_file() && is_supported_image(path) {
                    if let Some(parent) = path.parent() {
                        self.load_folder(parent.to_path_buf());
                    }
                    break;
                }
            }
        }
    }

    pub fn load_folder(&mut self, folder: PathBuf) {
        match self.scan_folder(&folder) {
            Ok(paths) if paths.is_empty() => {
                self.current_folder = Some(folder.clone());
                self.load_generation += 1;
                self.install_deck(Vec::new());
                self.set_status_message(format!("No images in {}", folder.display()));
            }
            Ok(paths) => {
                self.current_folder = Some(folder.clone());
                self.settings.slides_folder = Some(folder.clone());
                self.settings.add_recent_folder(folder);

                self.load_generation += 1;
                let slides = paths
                    .iter()
                    .map(|path| SlideContent::Pending { path: path.clone() })
                    .collect();
                self.install_deck(slides);
                self.set_status_message(format!("Loaded {} slides", paths.len()));

                slides::spawn_slide_loader(paths, self.load_generation, self.loader_tx.clone());
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.set_status_message(format!("{:#}", e));
            }
        }
    }

    fn scan_folder(&self, folder: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let paths = slides::collect_slides(folder, self.settings.include_subfolders)
            .with_context(|| format!("Failed to read slides from {}", folder.display()))?;
        Ok(paths)
    }

    pub fn load_placeholder_deck(&mut self) {
        self.current_folder = None;
        let slides = PLACEHOLDER_TITLES
            .iter()
            .enumerate()
            .map(|(i, title)| SlideContent::Placeholder {
                title: title.to_string(),
                color: placeholder_color(i),
            })
            .collect();
        self.install_deck(slides);
    }
}
