use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(loaded) = app.session.loaded() {
                ui.label(loaded.size.to_string());
                ui.separator();
                let list = app.session.image_list();
                if !list.is_empty() {
                    ui.label(format!("Image {}/{}", list.index() + 1, list.len()));
                    ui.separator();
                }
                if let Some(name) = loaded.path.file_name() {
                    ui.label(name.to_string_lossy().to_string());
                    ui.separator();
                }
            }
            if let Some(g) = app.session.geometry() {
                ui.label(format!("Scale: {:.0}%", g.ratio * 100.0));
                ui.separator();
            }
            ui.label(format!("Filter: {}", app.session.resample_filter()));
        });

        ui.add_space(2.0);
    });
}
