use crate::app::CarouselApp;
use crate::carousel::NavCommand;
use egui::{self, Color32, Margin, RichText};
use std::time::Instant;

impl CarouselApp {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context, now: Instant) {
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(28, 28, 32))
                    .inner_margin(Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;

                    if ui.button("📁 Open Folder...").clicked() {
                        self.open_folder_dialog();
                    }

                    if !self.settings.recent_folders.is_empty() {
                        ui.menu_button("Recent", |ui| {
                            for folder in self.settings.recent_folders.clone() {
                                let name = folder
                                    .file_name()
                                    .map(|n| n.to_string_lossy().to_string())
                                    .unwrap_or_else(|| folder.display().to_string());
                                if ui.button(name).clicked() {
                                    self.load_folder(folder);
                                    ui.close_menu();
                                }
                            }
                        });
                    }

                    if ui.button("Demo").on_hover_text("Show the built-in slides").clicked() {
                        self.load_placeholder_deck();
                    }

                    ui.separator();

                    let mut command = None;
                    if ui.button("◀").on_hover_text("Previous (←)").clicked() {
                        command = Some(NavCommand::Prev);
                    }
                    if ui.button("▶").on_hover_text("Next (→)").clicked() {
                        command = Some(NavCommand::Next);
                    }
                    if let (Some(command), Some(carousel)) = (command, self.active_carousel_mut()) {
                        carousel.navigate(command, now);
                    }

                    let playing = self
                        .active_carousel()
                        .map(|c| c.is_auto_advance_enabled())
                        .unwrap_or(false);
                    let label = if playing { "⏸ Pause" } else { "⏵ Play" };
                    if ui.button(label).on_hover_text("Toggle auto-advance (Space)").clicked() {
                        self.toggle_auto_advance();
                    }

                    ui.separator();
                    ui.checkbox(&mut self.settings.include_subfolders, "Subfolders");

                    if let Some(folder) = &self.current_folder {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(folder.display().to_string())
                                    .color(Color32::GRAY)
                                    .size(11.0),
                            );
                        });
                    }
                });
            });
    }
}
