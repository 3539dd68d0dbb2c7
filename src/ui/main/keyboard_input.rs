use crate::app::CarouselApp;
use crate::carousel::Key;
use std::time::Instant;

impl CarouselApp {
    /// Arrow keys go through the registry so only the active carousel moves.
    pub fn handle_keyboard(&mut self, ctx: &egui::Context, now: Instant) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let keys: Vec<Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, .. } => Some(match key {
                        egui::Key::ArrowLeft => Key::ArrowLeft,
                        egui::Key::ArrowRight => Key::ArrowRight,
                        _ => Key::Other,
                    }),
                    _ => None,
                })
                .collect()
        });

        for key in keys {
            if let Some(command) = self.registry.dispatch_key(key, now) {
                log::debug!("keyboard navigation: {:?}", command);
            }
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.toggle_auto_advance();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::O) && i.modifiers.command) {
            self.open_folder_dialog();
        }
    }
}
