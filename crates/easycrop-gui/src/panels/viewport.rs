use easycrop_core::geometry::Size;

use crate::app::CropperApp;
use crate::convert::image_to_color_image;
use crate::panels::{crop_overlay, displayed_rect, to_viewport};

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        app.session.set_viewport_size(viewport_size(rect));

        if app.session.loaded().is_none() {
            show_placeholder(ui);
            return;
        }

        refresh_texture(ctx, app);

        let response = ui.allocate_rect(rect, egui::Sense::drag());
        handle_selection_drag(ui, &response, app, rect.min);

        let Some(geometry) = app.session.geometry().copied() else {
            return;
        };

        if let Some(texture) = &app.viewport.texture {
            draw_image(ui, texture.id(), displayed_rect(rect.min, &geometry));
        }

        if let Some(selection) = app.session.selection().visible() {
            let label = selection_label(app);
            crop_overlay::draw_selection_overlay(
                ui,
                rect.min,
                &selection,
                &geometry,
                label.as_deref(),
                &app.overlay,
            );
        }

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn viewport_size(rect: egui::Rect) -> Size {
    Size::new(rect.width().max(0.0) as u32, rect.height().max(0.0) as u32)
}

/// Rebuild the texture when the image or its displayed size changed.
fn refresh_texture(ctx: &egui::Context, app: &mut CropperApp) {
    let (Some(loaded), Some(geometry)) = (app.session.loaded(), app.session.geometry()) else {
        return;
    };
    let key = (loaded.generation, geometry.displayed);
    if !app.viewport.is_stale(key) {
        return;
    }

    app.viewport.texture = app.session.display_image().map(|image| {
        ctx.load_texture(
            "viewport",
            image_to_color_image(&image),
            egui::TextureOptions::LINEAR,
        )
    });
    app.viewport.texture_key = Some(key);
}

/// Press begins, drag updates, release finalizes. Coordinates are relative to `origin`.
fn handle_selection_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut CropperApp,
    origin: egui::Pos2,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(press) = ui.input(|i| i.pointer.press_origin()) {
            app.session.begin_selection(to_viewport(origin, press));
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.session.update_selection(to_viewport(origin, pos));
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        let pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()));
        if let Some(pos) = pos {
            app.session.finalize_selection(to_viewport(origin, pos));
        }
    }
}

/// `WxH` of the selection in source pixels, clamped to the image.
fn selection_label(app: &CropperApp) -> Option<String> {
    let source = app.session.selection_source_rect()?;
    let size = app.session.loaded()?.size;
    let c = source.clamped(size);
    Some(format!("{}x{}", c.width(), c.height()))
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Drop an image here to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
