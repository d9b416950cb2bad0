use std::fmt;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_IMAGE_EXTENSIONS, DEFAULT_KEY_NEXT,
    DEFAULT_KEY_PREVIOUS, DEFAULT_KEY_SAVE, DEFAULT_OVERLAY_COLOR, DEFAULT_OVERLAY_DASH_LENGTH,
    DEFAULT_OVERLAY_GAP_LENGTH, DEFAULT_OVERLAY_STROKE_WIDTH, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};
use crate::error::{CropError, Result};

/// Top-level settings, read from `config.toml`. Every field has a default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropperConfig {
    pub display: DisplayConfig,
    pub navigation: NavigationConfig,
    pub overlay: OverlayConfig,
    pub keys: KeyConfig,
    pub window: WindowConfig,
}

impl CropperConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| CropError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }

    /// Platform location of the config file, e.g. `~/.config/easycrop/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from [`Self::default_path`] if present; otherwise, or if the file
    /// is malformed, fall back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Filter used when scaling the image to the viewport.
    pub resample_filter: ResampleFilter,
}

/// Resampling filter for display scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub const ALL: &[Self] = &[
        Self::Nearest,
        Self::Triangle,
        Self::CatmullRom,
        Self::Gaussian,
        Self::Lanczos3,
    ];

    pub fn filter_type(&self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Triangle"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Fill the image list from the dropped file's directory.
    pub scan_directory: bool,
    /// Extensions (case-insensitive) that count as images when scanning.
    pub extensions: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scan_directory: true,
            extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub color: [u8; 3],
    pub stroke_width: f32,
    pub dash_length: f32,
    pub gap_length: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_OVERLAY_COLOR,
            stroke_width: DEFAULT_OVERLAY_STROKE_WIDTH,
            dash_length: DEFAULT_OVERLAY_DASH_LENGTH,
            gap_length: DEFAULT_OVERLAY_GAP_LENGTH,
        }
    }
}

/// Key names for the global shortcuts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub previous: String,
    pub next: String,
    pub save: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            previous: DEFAULT_KEY_PREVIOUS.into(),
            next: DEFAULT_KEY_NEXT.into(),
            save: DEFAULT_KEY_SAVE.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}
