use image::ImageFormat;

/// Encoding every loaded file is rewritten into, and every crop is saved as.
pub const NORMALIZED_FORMAT: ImageFormat = ImageFormat::Png;

/// File extensions (lowercase) picked up when scanning a directory for images.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp",
];

/// Default window size in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Selection outline defaults: red, 2 px, dash pattern (2, 2).
pub const DEFAULT_OVERLAY_COLOR: [u8; 3] = [255, 0, 0];
pub const DEFAULT_OVERLAY_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_OVERLAY_DASH_LENGTH: f32 = 2.0;
pub const DEFAULT_OVERLAY_GAP_LENGTH: f32 = 2.0;

/// Default key names, as understood by `egui::Key::from_name`.
pub const DEFAULT_KEY_PREVIOUS: &str = "A";
pub const DEFAULT_KEY_NEXT: &str = "D";
pub const DEFAULT_KEY_SAVE: &str = "Space";

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "easycrop";
pub const CONFIG_FILE_NAME: &str = "config.toml";
