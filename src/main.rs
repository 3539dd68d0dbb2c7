use eframe::egui;
use rcarousel::app::CarouselApp;
use rcarousel::logging;
use rcarousel::settings::Settings;

fn main() -> eframe::Result<()> {
    logging::init_tracing(logging::debug_requested());

    let (width, height) = Settings::load().window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 320.0])
            .with_icon(load_icon())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "rCarousel",
        native_options,
        Box::new(|cc| Ok(Box::new(CarouselApp::new(cc)))),
    )
}

fn load_icon() -> egui::IconData {
    // Three stacked panels with the middle one highlighted
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let in_band = (16..48).contains(&y);
            let panel = x / 22;
            let gap = x % 22 < 2;
            if in_band && !gap {
                let highlight = panel == 1;
                rgba[idx] = if highlight { 70 } else { 60 };
                rgba[idx + 1] = if highlight { 130 } else { 60 };
                rgba[idx + 2] = if highlight { 255 } else { 70 };
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
