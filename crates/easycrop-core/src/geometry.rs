use crate::error::{CropError, Result};

/// Width and height in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A position in viewport coordinates (pixels relative to the viewport's top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Placement of a uniformly scaled image centered inside a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayGeometry {
    /// Uniform scale from source pixels to viewport pixels. May exceed 1.
    pub ratio: f64,
    /// Image size after scaling, floored.
    pub displayed: Size,
    /// Top-left corner of the displayed image inside the viewport, floored.
    pub offset_x: u32,
    pub offset_y: u32,
    /// Viewport the geometry was computed for.
    pub viewport: Size,
}

impl DisplayGeometry {
    /// Fit `image` inside `viewport`, preserving aspect ratio and centering it.
    ///
    /// Every rounding step floors so the placement lands on the pixel grid.
    pub fn compute(viewport: Size, image: Size) -> Result<Self> {
        if image.is_empty() {
            return Err(CropError::InvalidDimensions {
                width: image.width,
                height: image.height,
            });
        }

        let ratio = (viewport.width as f64 / image.width as f64)
            .min(viewport.height as f64 / image.height as f64);

        let displayed = Size::new(
            (image.width as f64 * ratio).floor() as u32,
            (image.height as f64 * ratio).floor() as u32,
        );

        Ok(Self {
            ratio,
            displayed,
            offset_x: viewport.width.saturating_sub(displayed.width) / 2,
            offset_y: viewport.height.saturating_sub(displayed.height) / 2,
            viewport,
        })
    }

    /// Top-left corner of the displayed image.
    pub fn min(&self) -> Point {
        Point::new(self.offset_x as f32, self.offset_y as f32)
    }

    /// Bottom-right corner of the displayed image.
    pub fn max(&self) -> Point {
        Point::new(
            (self.offset_x + self.displayed.width) as f32,
            (self.offset_y + self.displayed.height) as f32,
        )
    }

    /// Clamp each axis of `p` independently into `[offset, offset + displayed]`.
    pub fn clamp_point(&self, p: Point) -> Point {
        let (min, max) = (self.min(), self.max());
        Point::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
    }

    pub fn contains(&self, p: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Map a viewport point to source pixel coordinates: `floor((v - offset) / ratio)`.
    ///
    /// The result is not clamped and may lie outside the image.
    pub fn to_source(&self, p: Point) -> Result<(i64, i64)> {
        if self.ratio <= 0.0 || !self.ratio.is_finite() {
            return Err(CropError::DegenerateGeometry {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let x = ((p.x as f64 - self.offset_x as f64) / self.ratio).floor() as i64;
        let y = ((p.y as f64 - self.offset_y as f64) / self.ratio).floor() as i64;
        Ok((x, y))
    }

    /// Map a source pixel coordinate back into the viewport.
    pub fn to_viewport(&self, x: f64, y: f64) -> Point {
        Point::new(
            (self.offset_x as f64 + x * self.ratio) as f32,
            (self.offset_y as f64 + y * self.ratio) as f32,
        )
    }
}

/// Free-function form of [`DisplayGeometry::compute`].
pub fn compute_display_geometry(viewport: Size, image: Size) -> Result<DisplayGeometry> {
    DisplayGeometry::compute(viewport, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_centers_vertically() {
        let g = DisplayGeometry::compute(Size::new(800, 600), Size::new(400, 100)).unwrap();
        assert_eq!(g.ratio, 2.0);
        assert_eq!(g.displayed, Size::new(800, 200));
        assert_eq!((g.offset_x, g.offset_y), (0, 200));
    }

    #[test]
    fn test_zero_image_rejected() {
        assert!(DisplayGeometry::compute(Size::new(10, 10), Size::new(0, 5)).is_err());
    }

    #[test]
    fn test_zero_viewport_cannot_map() {
        let g = DisplayGeometry::compute(Size::new(0, 0), Size::new(10, 10)).unwrap();
        assert_eq!(g.displayed, Size::new(0, 0));
        assert!(g.to_source(Point::new(1.0, 1.0)).is_err());
    }
}
