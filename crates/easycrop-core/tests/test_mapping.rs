use proptest::prelude::*;

use easycrop_core::error::CropError;
use easycrop_core::geometry::{DisplayGeometry, Point, Size};
use easycrop_core::mapping::{map_to_source_pixels, CropRect, SourceRect};
use easycrop_core::selection::SelectionRect;

fn rect(ax: f32, ay: f32, cx: f32, cy: f32) -> SelectionRect {
    SelectionRect {
        anchor: Point::new(ax, ay),
        current: Point::new(cx, cy),
    }
}

#[test]
fn test_scenario_upscaled_drag() {
    let g = DisplayGeometry::compute(Size::new(800, 600), Size::new(400, 300)).unwrap();
    let s = map_to_source_pixels(&rect(100.0, 100.0, 300.0, 250.0), &g).unwrap();
    assert_eq!(s.as_tuple(), (50, 50, 150, 125));
}

#[test]
fn test_reverse_drag_sorts_axes_independently() {
    let g = DisplayGeometry::compute(Size::new(800, 600), Size::new(400, 300)).unwrap();
    // Drag from bottom-left to top-right.
    let s = map_to_source_pixels(&rect(100.0, 250.0, 300.0, 100.0), &g).unwrap();
    assert_eq!(s.as_tuple(), (50, 50, 150, 125));
}

#[test]
fn test_offset_subtracted() {
    // 400x100 in 800x600: ratio 2, offset (0, 200).
    let g = DisplayGeometry::compute(Size::new(800, 600), Size::new(400, 100)).unwrap();
    let s = map_to_source_pixels(&rect(0.0, 200.0, 800.0, 400.0), &g).unwrap();
    assert_eq!(s.as_tuple(), (0, 0, 400, 100));
}

#[test]
fn test_unclamped_anchor_maps_outside_image() {
    let g = DisplayGeometry::compute(Size::new(800, 600), Size::new(400, 100)).unwrap();
    let s = map_to_source_pixels(&rect(100.0, 50.0, 300.0, 300.0), &g).unwrap();
    assert_eq!(s.as_tuple(), (50, -75, 150, 50));
}

#[test]
fn test_clamped_intersects_image() {
    let s = SourceRect { left: -10, top: -75, right: 150, bottom: 500 };
    let c = s.clamped(Size::new(400, 100));
    assert_eq!(c.as_tuple(), (0, 0, 150, 100));
}

#[test]
fn test_crop_rect_validated_clamps() {
    let s = SourceRect { left: 50, top: -75, right: 150, bottom: 50 };
    let crop = CropRect::validated(&s, Size::new(400, 100)).unwrap();
    assert_eq!(crop, CropRect { x: 50, y: 0, width: 100, height: 50 });
    assert_eq!(crop.to_string(), "100x50 at (50, 0)");
}

#[test]
fn test_crop_rect_zero_area_rejected() {
    let s = SourceRect { left: 20, top: 10, right: 20, bottom: 40 };
    assert!(matches!(
        CropRect::validated(&s, Size::new(100, 100)),
        Err(CropError::EmptySelection)
    ));
}

#[test]
fn test_crop_rect_entirely_outside_rejected() {
    let s = SourceRect { left: 120, top: 10, right: 180, bottom: 40 };
    assert!(matches!(
        CropRect::validated(&s, Size::new(100, 100)),
        Err(CropError::EmptySelection)
    ));
}

#[test]
fn test_degenerate_geometry_rejected() {
    let g = DisplayGeometry::compute(Size::new(0, 0), Size::new(400, 300)).unwrap();
    assert!(matches!(
        map_to_source_pixels(&rect(0.0, 0.0, 1.0, 1.0), &g),
        Err(CropError::DegenerateGeometry { .. })
    ));
}

proptest! {
    #[test]
    fn prop_swap_corners_same_result(
        ax in -100.0f32..1400.0, ay in -100.0f32..900.0,
        cx in -100.0f32..1400.0, cy in -100.0f32..900.0,
        iw in 1u32..4000, ih in 1u32..4000,
    ) {
        let g = DisplayGeometry::compute(Size::new(1280, 800), Size::new(iw, ih)).unwrap();
        let a = map_to_source_pixels(&rect(ax, ay, cx, cy), &g).unwrap();
        let b = map_to_source_pixels(&rect(cx, cy, ax, ay), &g).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(a.left <= a.right && a.top <= a.bottom);
    }

    #[test]
    fn prop_full_displayed_rect_maps_to_image(
        vw in 1u32..3000, vh in 1u32..3000,
        iw in 1u32..3000, ih in 1u32..3000,
    ) {
        let g = DisplayGeometry::compute(Size::new(vw, vh), Size::new(iw, ih)).unwrap();
        let (min, max) = (g.min(), g.max());
        let s = map_to_source_pixels(&rect(min.x, min.y, max.x, max.y), &g).unwrap();

        prop_assert_eq!((s.left, s.top), (0, 0));
        prop_assert!(s.right <= iw as i64 && s.bottom <= ih as i64);
        // Lost to flooring the displayed size: at most one displayed pixel's worth.
        let tolerance = 1.0 / g.ratio + 1.0;
        prop_assert!(((iw as i64 - s.right) as f64) <= tolerance);
        prop_assert!(((ih as i64 - s.bottom) as f64) <= tolerance);
    }
}
