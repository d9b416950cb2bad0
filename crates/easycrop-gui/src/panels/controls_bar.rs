use easycrop_core::image_list::Direction;

use crate::app::CropperApp;

/// Bottom bar with previous/save/next buttons mirroring the keyboard shortcuts.
pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("controls_bar").show(ctx, |ui| {
        let list = app.session.image_list();
        let has_prev = list.peek(Direction::Previous).is_some();
        let has_next = list.peek(Direction::Next).is_some();
        let has_image = app.session.loaded().is_some();
        let has_selection = app.session.selection().visible().is_some();
        let keys = app.keys;

        ui.horizontal(|ui| {
            let prev = ui
                .add_enabled(has_prev, egui::Button::new("<"))
                .on_hover_text(format!("Previous image ({})", keys.previous.name()));
            let save = ui
                .add_enabled(has_image && has_selection, egui::Button::new("Save Crop"))
                .on_hover_text(format!("Crop and overwrite ({})", keys.save.name()));
            let next = ui
                .add_enabled(has_next, egui::Button::new(">"))
                .on_hover_text(format!("Next image ({})", keys.next.name()));

            if prev.clicked() {
                app.navigate(Direction::Previous);
            }
            if save.clicked() {
                app.save_crop();
            }
            if next.clicked() {
                app.navigate(Direction::Next);
            }
        });
    });
}
