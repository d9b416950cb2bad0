#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};

use easycrop_core::codec::{DecodedImage, ImageCodec, ImageCrateCodec};
use easycrop_core::config::CropperConfig;
use easycrop_core::error::Result;
use easycrop_core::geometry::{Point, Size};
use easycrop_core::session::CropSession;
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};

/// RGBA image whose pixel at (x, y) is `[x % 256, y % 256, 0, 255]`.
pub fn pattern_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255]))
}

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    pattern_rgba(width, height)
        .save_with_format(&path, ImageFormat::Png)
        .expect("write PNG");
    path
}

pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |_, _| Rgb([120, 60, 30]))
        .save_with_format(&path, ImageFormat::Jpeg)
        .expect("write JPEG");
    path
}

/// Format sniffed from the file's bytes, ignoring its extension.
pub fn detected_format(path: &Path) -> Option<ImageFormat> {
    ImageReader::open(path)
        .expect("open image")
        .with_guessed_format()
        .expect("sniff format")
        .format()
}

/// Codec that counts calls and delegates to the `image` crate.
#[derive(Default)]
pub struct CountingCodec {
    pub decodes: Cell<usize>,
    pub encodes: Cell<usize>,
}

impl ImageCodec for CountingCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        self.decodes.set(self.decodes.get() + 1);
        ImageCrateCodec.decode(path)
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        self.encodes.set(self.encodes.get() + 1);
        ImageCrateCodec.encode(image, path, format)
    }
}

pub fn counting_session(width: u32, height: u32) -> CropSession<CountingCodec> {
    let mut session = CropSession::with_codec(CountingCodec::default(), &CropperConfig::default());
    session.set_viewport_size(Size::new(width, height));
    session
}

pub fn session(width: u32, height: u32) -> CropSession {
    let mut session = CropSession::new(&CropperConfig::default());
    session.set_viewport_size(Size::new(width, height));
    session
}

/// Press at `from`, release at `to`.
pub fn drag<C: ImageCodec>(session: &mut CropSession<C>, from: (f32, f32), to: (f32, f32)) {
    session
        .begin_selection(Point::new(from.0, from.1))
        .expect("image loaded");
    session.update_selection(Point::new(to.0, to.1));
    session.finalize_selection(Point::new(to.0, to.1));
}
