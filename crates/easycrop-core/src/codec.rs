use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::Result;
use crate::geometry::Size;
use crate::mapping::CropRect;

/// Pixels plus the container format they were decoded from.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    /// `None` when the format could not be identified from the file contents.
    pub format: Option<ImageFormat>,
}

impl DecodedImage {
    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

/// Decode/encode seam used by the crop session.
///
/// Cropping and resizing have pixel-buffer defaults; implementors normally
/// only provide file I/O.
pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage>;

    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()>;

    fn crop(&self, image: &DynamicImage, rect: &CropRect) -> DynamicImage {
        image.crop_imm(rect.x, rect.y, rect.width, rect.height)
    }

    fn resize(&self, image: &DynamicImage, size: Size, filter: FilterType) -> DynamicImage {
        image.resize_exact(size.width, size.height, filter)
    }
}

/// Codec backed by the `image` crate, sniffing formats from file contents.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode()?;
        Ok(DecodedImage { image, format })
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        image.save_with_format(path, format)?;
        Ok(())
    }
}

/// Convert to 8-bit RGBA, the pixel layout written on normalization.
pub fn normalize(image: DynamicImage) -> DynamicImage {
    DynamicImage::ImageRgba8(image.into_rgba8())
}
