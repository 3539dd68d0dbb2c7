use crate::app::{CarouselApp, SlideContent};
use crate::slides::LoaderMessage;
use egui::ColorImage;
use image::DynamicImage;

impl CarouselApp {
    pub fn process_loader_messages(&mut self, ctx: &egui::Context) {
        // Limit the number of messages processed per frame to prevent UI blocking
        let max_messages_per_frame = 10;
        let mut messages_processed = 0;

        while messages_processed < max_messages_per_frame {
            match self.loader_rx.try_recv() {
                Ok(msg) => {
                    self.handle_loader_message(msg, ctx);
                    messages_processed += 1;
                }
                Err(_) => break,
            }
        }

        if messages_processed == max_messages_per_frame {
            ctx.request_repaint();
        }
    }

    fn handle_loader_message(&mut self, msg: LoaderMessage, ctx: &egui::Context) {
        match msg {
            LoaderMessage::SlideLoaded { generation, index, image } => {
                if generation == self.load_generation {
                    self.handle_slide_loaded(index, image, ctx);
                }
            }
            LoaderMessage::LoadError { generation, index, error } => {
                if generation == self.load_generation {
                    self.handle_load_error(index, error.to_string());
                }
            }
        }
    }

    fn handle_slide_loaded(&mut self, index: usize, image: DynamicImage, ctx: &egui::Context) {
        let Some(SlideContent::Pending { path }) = self.slides.get(index) else {
            return;
        };
        let path = path.clone();

        let size = [image.width() as usize, image.height() as usize];
        let rgba = image.to_rgba8();
        let pixels = rgba.as_flat_samples();
        let texture = ctx.load_texture(
            format!("slide_{}", path.display()),
            ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );

        self.slides[index] = SlideContent::Image { path, texture };
        ctx.request_repaint();
    }

    fn handle_load_error(&mut self, index: usize, message: String) {
        let Some(SlideContent::Pending { path }) = self.slides.get(index) else {
            return;
        };
        let path = path.clone();
        self.set_status_message(format!("Failed to load {}", path.display()));
        self.slides[index] = SlideContent::Failed { path, message };
    }
}
