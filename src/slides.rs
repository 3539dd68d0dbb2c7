use crate::errors::{CarouselError, Result};
use image::{DynamicImage, GenericImageView};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use walkdir::WalkDir;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp",
];

/// Slides are displayed at most this large; bigger images are downscaled.
pub const MAX_SLIDE_DIMENSION: u32 = 2560;

const MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

pub enum LoaderMessage {
    SlideLoaded {
        generation: u64,
        index: usize,
        image: DynamicImage,
    },
    LoadError {
        generation: u64,
        index: usize,
        error: CarouselError,
    },
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files of `folder` in natural, case-insensitive file-name order.
pub fn collect_slides(folder: &Path, include_subfolders: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(CarouselError::FileNotFound { path: folder.to_path_buf() });
    }

    let mut slides = Vec::new();
    if include_subfolders {
        for entry in WalkDir::new(folder)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_supported_image(path) {
                slides.push(path.to_path_buf());
            }
        }
    } else {
        for entry in std::fs::read_dir(folder)?.flatten() {
            let path = entry.path();
            if path.is_file() && is_supported_image(&path) {
                slides.push(path);
            }
        }
    }

    slides.sort_by(|a, b| {
        let a_name = a.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();
        let b_name = b.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();
        natord::compare(&a_name, &b_name)
    });

    tracing::debug!(folder = %folder.display(), count = slides.len(), "collected slides");
    Ok(slides)
}

pub fn load_slide_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(CarouselError::FileNotFound { path: path.to_path_buf() });
    }

    let file_size = std::fs::metadata(path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(CarouselError::SlideLoad {
            path: path.to_path_buf(),
            message: format!("File too large: {}MB (max {}MB)", file_size / (1024 * 1024), MAX_FILE_SIZE / (1024 * 1024)),
        });
    }

    let image = image::open(path).map_err(|e| CarouselError::SlideLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    if width > MAX_SLIDE_DIMENSION || height > MAX_SLIDE_DIMENSION {
        Ok(image.thumbnail(MAX_SLIDE_DIMENSION, MAX_SLIDE_DIMENSION))
    } else {
        Ok(image)
    }
}

/// Decodes `paths` on the rayon pool from a background thread. Results
/// arrive on `tx` in completion order, tagged with their slide index.
pub fn spawn_slide_loader(paths: Vec<PathBuf>, generation: u64, tx: Sender<LoaderMessage>) {
    thread::spawn(move || {
        tracing::debug!(count = paths.len(), generation, "starting slide decode");
        paths
            .par_iter()
            .enumerate()
            .for_each_with(tx, |tx, (index, path)| {
                let message = match load_slide_image(path) {
                    Ok(image) => LoaderMessage::SlideLoaded { generation, index, image },
                    Err(error) => {
                        tracing::warn!(path = %path.display(), "{}", error);
                        LoaderMessage::LoadError { generation, index, error }
                    }
                };
                // Receiver gone means the app moved on to another folder
                let _ = tx.send(message);
            });
    });
}
