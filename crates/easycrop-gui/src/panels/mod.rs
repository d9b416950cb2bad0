pub mod controls_bar;
pub mod crop_overlay;
pub mod menu_bar;
pub mod status;
pub mod viewport;

use easycrop_core::geometry::{DisplayGeometry, Point};

/// Screen rect of the displayed image inside a viewport whose top-left is `origin`.
pub(crate) fn displayed_rect(origin: egui::Pos2, geometry: &DisplayGeometry) -> egui::Rect {
    egui::Rect::from_min_max(to_screen(origin, geometry.min()), to_screen(origin, geometry.max()))
}

/// Viewport-relative point to screen position.
pub(crate) fn to_screen(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

/// Screen position to viewport-relative point.
pub(crate) fn to_viewport(origin: egui::Pos2, pos: egui::Pos2) -> Point {
    Point::new(pos.x - origin.x, pos.y - origin.y)
}
