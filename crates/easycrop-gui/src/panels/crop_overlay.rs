use easycrop_core::config::OverlayConfig;
use easycrop_core::geometry::DisplayGeometry;
use easycrop_core::selection::SelectionRect;

use crate::panels::{displayed_rect, to_screen};

/// Draw the selection overlay: dim regions, dashed border, dimensions label.
pub fn draw_selection_overlay(
    ui: &egui::Ui,
    origin: egui::Pos2,
    selection: &SelectionRect,
    geometry: &DisplayGeometry,
    label: Option<&str>,
    overlay: &OverlayConfig,
) {
    let (min, max) = selection.normalized();
    let sel_screen = egui::Rect::from_min_max(to_screen(origin, min), to_screen(origin, max));
    let img_rect = displayed_rect(origin, geometry);
    let color = egui::Color32::from_rgb(overlay.color[0], overlay.color[1], overlay.color[2]);

    draw_dim_regions(ui, img_rect, sel_screen.intersect(img_rect));
    draw_dashed_border(ui, sel_screen, color, overlay);
    if let Some(label) = label {
        draw_dimensions_label(ui, label, sel_screen, color);
    }
}

fn draw_dim_regions(ui: &egui::Ui, img_rect: egui::Rect, inner: egui::Rect) {
    // The anchor may sit outside the image, leaving nothing inside it.
    if !inner.is_positive() {
        return;
    }
    let dim_color = egui::Color32::from_black_alpha(120);
    let painter = ui.painter();

    let regions = [
        egui::Rect::from_min_max(img_rect.left_top(), egui::pos2(img_rect.right(), inner.top())),
        egui::Rect::from_min_max(egui::pos2(img_rect.left(), inner.bottom()), img_rect.right_bottom()),
        egui::Rect::from_min_max(
            egui::pos2(img_rect.left(), inner.top()),
            egui::pos2(inner.left(), inner.bottom()),
        ),
        egui::Rect::from_min_max(
            egui::pos2(inner.right(), inner.top()),
            egui::pos2(img_rect.right(), inner.bottom()),
        ),
    ];
    for region in regions {
        if region.is_positive() {
            painter.rect_filled(region, 0.0, dim_color);
        }
    }
}

fn draw_dashed_border(
    ui: &egui::Ui,
    rect: egui::Rect,
    color: egui::Color32,
    overlay: &OverlayConfig,
) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    let shapes = egui::Shape::dashed_line(
        &corners,
        egui::Stroke::new(overlay.stroke_width, color),
        overlay.dash_length,
        overlay.gap_length,
    );
    ui.painter().extend(shapes);
}

fn draw_dimensions_label(ui: &egui::Ui, label: &str, rect: egui::Rect, color: egui::Color32) {
    let label_pos = egui::pos2(rect.right() - 4.0, rect.bottom() + 4.0);
    ui.painter().text(
        label_pos,
        egui::Align2::RIGHT_TOP,
        label,
        egui::FontId::proportional(12.0),
        color,
    );
}
