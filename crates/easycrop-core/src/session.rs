use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::codec::{normalize, ImageCodec, ImageCrateCodec};
use crate::config::{CropperConfig, NavigationConfig, ResampleFilter};
use crate::consts::NORMALIZED_FORMAT;
use crate::error::{CropError, Result};
use crate::geometry::{DisplayGeometry, Point, Size};
use crate::image_list::{unwrap_drop_path, Direction, ImageList};
use crate::mapping::{map_to_source_pixels, CropRect, SourceRect};
use crate::selection::{Selection, SelectionRect};

/// The image currently being cropped.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub image: DynamicImage,
    pub size: Size,
    /// Bumped on every load or crop-save, so renderers can tell when to refresh.
    pub generation: u64,
}

/// Result of [`CropSession::save_crop`].
#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    /// Nothing was selected; no file was touched.
    NoSelection,
    Saved { path: PathBuf, rect: CropRect },
}

/// Crop session state: loaded image, display geometry, selection, image list.
///
/// Owned by the UI layer and driven from its single event thread. Every
/// operation runs synchronously; failed operations leave the state unchanged.
pub struct CropSession<C: ImageCodec = ImageCrateCodec> {
    codec: C,
    viewport: Size,
    loaded: Option<LoadedImage>,
    geometry: Option<DisplayGeometry>,
    selection: Selection,
    list: ImageList,
    navigation: NavigationConfig,
    filter: ResampleFilter,
    generation: u64,
}

impl CropSession<ImageCrateCodec> {
    pub fn new(config: &CropperConfig) -> Self {
        Self::with_codec(ImageCrateCodec, config)
    }
}

impl<C: ImageCodec> CropSession<C> {
    pub fn with_codec(codec: C, config: &CropperConfig) -> Self {
        Self {
            codec,
            viewport: Size::default(),
            loaded: None,
            geometry: None,
            selection: Selection::default(),
            list: ImageList::default(),
            navigation: config.navigation.clone(),
            filter: config.display.resample_filter,
            generation: 0,
        }
    }

    /// Record the viewport size. Geometry is recomputed, and any selection
    /// dropped, only when the size actually changed.
    pub fn set_viewport_size(&mut self, size: Size) {
        if size == self.viewport {
            return;
        }
        self.viewport = size;

        if let Some(loaded) = &self.loaded {
            match DisplayGeometry::compute(size, loaded.size) {
                Ok(g) => {
                    debug!(viewport = %size, ratio = g.ratio, displayed = %g.displayed, "Geometry recomputed");
                    self.geometry = Some(g);
                }
                Err(e) => warn!("Cannot fit image to viewport: {e}"),
            }
            self.selection.clear();
        }
    }

    /// Decode `path`, rewriting it as PNG first if it is stored in another
    /// format, and make it the current image.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let decoded = self.codec.decode(path)?;
        let size = decoded.size();
        // Validate dimensions before anything is written back.
        DisplayGeometry::compute(self.viewport, size)?;

        let image = if decoded.format == Some(NORMALIZED_FORMAT) {
            decoded.image
        } else {
            let image = normalize(decoded.image);
            self.codec.encode(&image, path, NORMALIZED_FORMAT)?;
            info!(path = %path.display(), from = ?decoded.format, "Rewrote image as PNG");
            image
        };

        self.replace_image(path.to_path_buf(), image)?;
        info!(path = %path.display(), size = %size, "Loaded image");
        Ok(())
    }

    /// Load `path` and rebuild the image list around it.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        self.load_image(path)?;

        self.list = if self.navigation.scan_directory {
            match ImageList::from_directory_of(path, &self.navigation.extensions) {
                Ok(list) => list,
                Err(e) => {
                    warn!(path = %path.display(), "Cannot scan directory: {e}");
                    ImageList::new(vec![path.to_path_buf()], 0)
                }
            }
        } else {
            ImageList::new(vec![path.to_path_buf()], 0)
        };
        debug!(count = self.list.len(), index = self.list.index(), "Image list rebuilt");
        Ok(())
    }

    /// Open a path as delivered by a file drop, unwrapping `{...}` if present.
    pub fn open_dropped(&mut self, raw: &str) -> Result<()> {
        let path = unwrap_drop_path(raw);
        self.open_path(&path)
    }

    /// Start a selection at `point`. Ignored when no image is loaded.
    pub fn begin_selection(&mut self, point: Point) -> Option<SelectionRect> {
        self.loaded.as_ref()?;
        Some(self.selection.begin(point))
    }

    pub fn update_selection(&mut self, point: Point) -> Option<SelectionRect> {
        let geometry = self.geometry.as_ref()?;
        self.selection.update(point, geometry)
    }

    pub fn finalize_selection(&mut self, point: Point) -> Option<SelectionRect> {
        let geometry = self.geometry.as_ref()?;
        self.selection.finalize(point, geometry)
    }

    /// The visible selection mapped to source pixels, unclamped.
    pub fn selection_source_rect(&self) -> Option<SourceRect> {
        let rect = self.selection.visible()?;
        map_to_source_pixels(&rect, self.geometry.as_ref()?).ok()
    }

    /// Crop the current image to the selection and overwrite its file as PNG.
    ///
    /// A drag still in progress is ended where it stands. The selection is
    /// clamped to the image; an empty result is rejected without writing.
    pub fn save_crop(&mut self) -> Result<SaveOutcome> {
        let Some(rect) = self.selection.settle() else {
            debug!("Save requested with no selection");
            return Ok(SaveOutcome::NoSelection);
        };
        let (Some(loaded), Some(geometry)) = (&self.loaded, &self.geometry) else {
            return Err(CropError::NoImageLoaded);
        };

        let source = map_to_source_pixels(&rect, geometry)?;
        let crop = CropRect::validated(&source, loaded.size)?;
        let cropped = self.codec.crop(&loaded.image, &crop);
        let path = loaded.path.clone();

        self.codec.encode(&cropped, &path, NORMALIZED_FORMAT)?;
        self.replace_image(path.clone(), cropped)?;
        info!(path = %path.display(), crop = %crop, "Saved crop");

        Ok(SaveOutcome::Saved { path, rect: crop })
    }

    /// Step through the image list and load the image there. Returns
    /// `false` without touching anything at a boundary or on an empty list.
    pub fn navigate(&mut self, direction: Direction) -> Result<bool> {
        let Some(target) = self.list.peek(direction) else {
            debug!(%direction, index = self.list.index(), "Navigation at boundary");
            return Ok(false);
        };
        let path = self.list.paths()[target].clone();

        self.load_image(&path)?;
        self.list.set_index(target);
        info!(%direction, index = target, total = self.list.len(), "Navigated");
        Ok(true)
    }

    /// The current image scaled to its displayed size with the configured filter.
    pub fn display_image(&self) -> Option<DynamicImage> {
        let loaded = self.loaded.as_ref()?;
        let geometry = self.geometry.as_ref()?;
        if geometry.displayed.is_empty() {
            return None;
        }
        Some(
            self.codec
                .resize(&loaded.image, geometry.displayed, self.filter.filter_type()),
        )
    }

    fn replace_image(&mut self, path: PathBuf, image: DynamicImage) -> Result<()> {
        let size = Size::new(image.width(), image.height());
        let geometry = DisplayGeometry::compute(self.viewport, size)?;

        self.generation += 1;
        self.loaded = Some(LoadedImage {
            path,
            image,
            size,
            generation: self.generation,
        });
        self.geometry = Some(geometry);
        self.selection.clear();
        Ok(())
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.as_ref()
    }

    pub fn geometry(&self) -> Option<&DisplayGeometry> {
        self.geometry.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn image_list(&self) -> &ImageList {
        &self.list
    }

    /// Replace the image list without loading anything.
    pub fn set_image_list(&mut self, list: ImageList) {
        self.list = list;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn resample_filter(&self) -> ResampleFilter {
        self.filter
    }

    pub fn set_resample_filter(&mut self, filter: ResampleFilter) {
        self.filter = filter;
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}
