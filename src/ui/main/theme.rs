use crate::settings::{Settings, Theme};
use egui::Color32;

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let mut visuals = match settings.theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
        Theme::Oled => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::BLACK;
            visuals.window_fill = Color32::BLACK;
            visuals.extreme_bg_color = Color32::BLACK;
            visuals
        }
    };

    let accent = settings.accent_color.to_color();
    visuals.selection.bg_fill = accent;
    visuals.widgets.active.bg_fill = accent;
    visuals.hyperlink_color = accent;

    ctx.set_visuals(visuals);
}
