use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Display geometry has zero scale (viewport {width}x{height})")]
    DegenerateGeometry { width: u32, height: u32 },

    #[error("Selection is empty after clamping to the image")]
    EmptySelection,

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CropError>;
