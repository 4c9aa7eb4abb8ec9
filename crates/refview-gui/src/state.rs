use std::path::PathBuf;

use refview_core::raster::Rgba;
use refview_core::zoom;

/// Overall UI state.
pub struct UiState {
    /// Path of the currently loaded reference image.
    pub file_path: Option<PathBuf>,
    /// Whether image-dependent controls are active; follows the
    /// `ImageChanged` notification.
    pub controls_enabled: bool,
    /// Slider position mirroring the controller's relative zoom.
    pub slider_pos: u32,
    /// Selected index into [`refview_core::zoom::ZOOM_PRESETS`].
    pub preset_index: usize,
    /// One-line status text shown in the status bar.
    pub status: String,
    /// Last color forwarded to the host sink, for the status swatch.
    pub foreground_color: Option<Rgba>,
    /// Bumped whenever the controller's image is replaced; the viewport
    /// panel re-uploads the texture when it trails behind.
    pub image_revision: u64,
    /// Set by a `Repaint` notification, drained once per frame.
    pub needs_repaint: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            file_path: None,
            controls_enabled: false,
            slider_pos: zoom::zoom_to_slider(1.0),
            preset_index: 0,
            status: String::new(),
            foreground_color: None,
            image_revision: 0,
            needs_repaint: false,
        }
    }
}

/// Viewport texture bookkeeping.
#[derive(Default)]
pub struct ViewportDisplay {
    pub texture: Option<egui::TextureHandle>,
    /// Image revision the current texture was uploaded from.
    pub uploaded_revision: Option<u64>,
}
