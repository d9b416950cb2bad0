use easycrop_core::geometry::Size;

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    /// The current image, already scaled to its displayed size.
    pub texture: Option<egui::TextureHandle>,
    /// Image generation and displayed size the texture was built for.
    pub texture_key: Option<(u64, Size)>,
}

impl ViewportState {
    pub fn is_stale(&self, key: (u64, Size)) -> bool {
        self.texture_key != Some(key)
    }
}
