use easycrop_core::config::ResampleFilter;
use easycrop_core::consts::DEFAULT_IMAGE_EXTENSIONS;

use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let has_selection = app.session.selection().visible().is_some();
                if ui.add_enabled(has_selection, egui::Button::new("Save Crop")).clicked() {
                    ui.close();
                    app.save_crop();
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                ui.label("Resample filter");
                let current = app.session.resample_filter();
                for &filter in ResampleFilter::ALL {
                    if ui.radio(current == filter, filter.to_string()).clicked() && current != filter {
                        app.session.set_resample_filter(filter);
                        app.viewport.texture_key = None;
                        app.ui_state.add_log(format!("Resample filter: {filter}"));
                        ui.close();
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Blocking file picker; the session is only touched from the UI thread.
fn open_file(app: &mut CropperApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", DEFAULT_IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open(&path);
    }
}
