use crate::app::CarouselApp;
use egui::{self, Color32, Margin, RichText};
use std::time::{Duration, Instant};

const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(3);

impl CarouselApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(carousel) = self.active_carousel() {
                        if carousel.is_mounted() {
                            let index = carousel.current_index();
                            ui.label(
                                RichText::new(format!("{} / {}", index + 1, carousel.slide_count()))
                                    .color(Color32::WHITE)
                                    .size(12.0),
                            );
                            if let Some(slide) = self.slides.get(index) {
                                ui.label(RichText::new(slide.label()).color(Color32::GRAY).size(11.0));
                            }

                            let (state, color) = if carousel.is_auto_advance_active() {
                                ("Auto-advance", Color32::from_rgb(100, 200, 100))
                            } else if carousel.is_resume_pending() {
                                ("Resuming…", Color32::from_rgb(255, 200, 100))
                            } else if carousel.is_hovered() {
                                ("Paused (hover)", Color32::GRAY)
                            } else {
                                ("Paused", Color32::GRAY)
                            };
                            ui.label(RichText::new(state).color(color).size(11.0));

                            let stats = carousel.stats();
                            ui.label(
                                RichText::new(format!(
                                    "{} moves, {} ignored ({:.0}% applied)",
                                    stats.applied,
                                    stats.rejected(),
                                    stats.apply_rate() * 100.0
                                ))
                                .color(Color32::GRAY)
                                .size(11.0),
                            );
                        } else {
                            ui.label(RichText::new("Carousel disabled").color(Color32::GRAY).size(12.0));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((msg, shown_at)) = &self.status_message {
                            if let Some(remaining) = status_time_left(*shown_at, Instant::now()) {
                                ctx.request_repaint_after(remaining);
                                ui.label(
                                    RichText::new(msg)
                                        .color(Color32::from_rgb(100, 200, 100))
                                        .size(11.0),
                                );
                            }
                        }
                    });
                });
            });
    }
}

/// Time the status message stays on screen, or `None` once it has expired.
fn status_time_left(shown_at: Instant, now: Instant) -> Option<Duration> {
    STATUS_MESSAGE_DURATION
        .checked_sub(now.saturating_duration_since(shown_at))
        .filter(|left| !left.is_zero())
}
