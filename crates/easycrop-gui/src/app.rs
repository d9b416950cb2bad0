use std::path::Path;

use anyhow::Context;
use easycrop_core::config::{CropperConfig, OverlayConfig};
use easycrop_core::image_list::Direction;
use easycrop_core::session::{CropSession, SaveOutcome};
use tracing::error;

use crate::panels;
use crate::states::{KeyBindings, UIState, ViewportState};

pub struct CropperApp {
    pub session: CropSession,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub keys: KeyBindings,
    pub overlay: OverlayConfig,
}

impl CropperApp {
    pub fn new(config: CropperConfig) -> Self {
        Self {
            session: CropSession::new(&config),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            keys: KeyBindings::from_config(&config.keys),
            overlay: config.overlay,
        }
    }

    /// Open an image and rebuild the image list around it.
    pub fn open(&mut self, path: &Path) {
        let result = self
            .session
            .open_path(path)
            .with_context(|| format!("Cannot open {}", path.display()));
        match result {
            Ok(()) => self.log_opened(),
            Err(e) => self.log_error(e),
        }
    }

    pub fn open_dropped(&mut self, raw: &str) {
        let result = self
            .session
            .open_dropped(raw)
            .with_context(|| format!("Cannot open dropped file {raw}"));
        match result {
            Ok(()) => self.log_opened(),
            Err(e) => self.log_error(e),
        }
    }

    pub fn navigate(&mut self, direction: Direction) {
        match self.session.navigate(direction) {
            Ok(true) => self.log_opened(),
            Ok(false) => {}
            Err(e) => {
                self.log_error(anyhow::Error::new(e).context(format!("Cannot load {direction} image")))
            }
        }
    }

    pub fn save_crop(&mut self) {
        match self.session.save_crop() {
            Ok(SaveOutcome::Saved { path, rect }) => {
                self.ui_state
                    .add_log(format!("Saved {} ({rect})", path.display()));
            }
            Ok(SaveOutcome::NoSelection) => {}
            Err(e) => self.log_error(anyhow::Error::new(e).context("Cannot save crop")),
        }
    }

    fn log_opened(&mut self) {
        if let Some(loaded) = self.session.loaded() {
            let list = self.session.image_list();
            let msg = format!(
                "Opened: {} ({}) [{}/{}]",
                loaded.path.display(),
                loaded.size,
                list.index() + 1,
                list.len().max(1)
            );
            self.ui_state.add_log(msg);
        }
    }

    fn log_error(&mut self, e: anyhow::Error) {
        error!("{e:#}");
        self.ui_state.add_log(format!("ERROR: {e:#}"));
    }

    /// Open the first file dropped onto the window this frame.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
        if let Some(path) = dropped {
            match path.to_str() {
                Some(raw) => self.open_dropped(raw),
                None => self.open(&path),
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let keys = self.keys;
        let (prev, next, save) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::NONE, keys.previous),
                i.consume_key(egui::Modifiers::NONE, keys.next),
                i.consume_key(egui::Modifiers::NONE, keys.save),
            )
        });

        if prev {
            self.navigate(Direction::Previous);
        }
        if next {
            self.navigate(Direction::Next);
        }
        if save {
            self.save_crop();
        }
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_shortcuts(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls_bar::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Image Cropper");
                        ui.label("Drop an image, drag a rectangle, save the crop.");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
