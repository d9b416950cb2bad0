use crate::error::{CropError, Result};
use crate::geometry::{DisplayGeometry, Size};
use crate::selection::SelectionRect;

/// A selection mapped into source pixel space, edges sorted so that
/// `left <= right` and `top <= bottom`. May extend past the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl SourceRect {
    pub fn width(&self) -> u64 {
        (self.right - self.left) as u64
    }

    pub fn height(&self) -> u64 {
        (self.bottom - self.top) as u64
    }

    pub fn as_tuple(&self) -> (i64, i64, i64, i64) {
        (self.left, self.top, self.right, self.bottom)
    }

    /// Intersect with `[0, width] x [0, height]`.
    pub fn clamped(&self, image: Size) -> SourceRect {
        let w = image.width as i64;
        let h = image.height as i64;
        SourceRect {
            left: self.left.clamp(0, w),
            top: self.top.clamp(0, h),
            right: self.right.clamp(0, w),
            bottom: self.bottom.clamp(0, h),
        }
    }
}

/// Map both corners of `rect` into source pixels and sort each axis independently.
///
/// No clamping: an anchor placed outside the displayed image maps outside the source.
pub fn map_to_source_pixels(rect: &SelectionRect, geometry: &DisplayGeometry) -> Result<SourceRect> {
    let (ax, ay) = geometry.to_source(rect.anchor)?;
    let (cx, cy) = geometry.to_source(rect.current)?;

    Ok(SourceRect {
        left: ax.min(cx),
        top: ay.min(cy),
        right: ax.max(cx),
        bottom: ay.max(cy),
    })
}

/// A crop region guaranteed to lie inside its source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Clamp `source` to the image bounds and reject an empty result.
    pub fn validated(source: &SourceRect, image: Size) -> Result<CropRect> {
        let c = source.clamped(image);
        let width = (c.right - c.left) as u32;
        let height = (c.bottom - c.top) as u32;

        if width == 0 || height == 0 {
            return Err(CropError::EmptySelection);
        }

        Ok(CropRect {
            x: c.left as u32,
            y: c.top as u32,
            width,
            height,
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
