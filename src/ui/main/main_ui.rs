use crate::app::CarouselApp;
use crate::ui::{show_carousel, CarouselStyle};
use std::time::Instant;

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Process async messages
        self.process_loader_messages(ctx);

        self.handle_dropped_files(ctx);

        // Handle keyboard input
        self.handle_keyboard(ctx, now);

        // Fire due timers before drawing so the frame shows their effect
        self.registry.tick_all(now);

        crate::ui::main::theme::apply_theme(ctx, &self.settings);

        if self.settings.show_toolbar {
            self.render_toolbar(ctx, now);
        }
        if self.settings.show_statusbar {
            self.render_statusbar(ctx);
        }
        self.render_main_view(ctx, now);

        // Wake up exactly when the next timer is due
        if let Some(deadline) = self.registry.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.registry.dispose_all();
        self.settings.save();
    }
}

impl CarouselApp {
    fn render_main_view(&mut self, ctx: &egui::Context, now: Instant) {
        let style = CarouselStyle {
            accent: self.settings.accent_color.to_color(),
            background: self.settings.background_color.to_color(),
            transition: self.settings.carousel.transition_duration(),
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let Some(id) = self.deck else {
                    return;
                };
                let Some(carousel) = self.registry.get(id) else {
                    return;
                };

                let events = show_carousel(ui, carousel, &self.slides, &mut self.view_state, &style);
                for event in events {
                    if let Some(command) = self.registry.dispatch(id, event, now) {
                        log::debug!("{:?} -> {:?}", event, command);
                    }
                }
            });
    }
}
