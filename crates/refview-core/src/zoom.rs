//! Logarithmic slider mapping and the zoom preset table.

use crate::consts::{SLIDER_MAX, SLIDER_ZOOM_MAX, SLIDER_ZOOM_MIN};

/// Map a slider position in `[0, SLIDER_MAX]` to a zoom factor in
/// `[SLIDER_ZOOM_MIN, SLIDER_ZOOM_MAX]`. Out-of-range positions clamp.
pub fn slider_to_zoom(slider: u32) -> f32 {
    let t = slider.min(SLIDER_MAX) as f32 / SLIDER_MAX as f32;
    SLIDER_ZOOM_MIN * (SLIDER_ZOOM_MAX / SLIDER_ZOOM_MIN).powf(t)
}

/// Inverse of [`slider_to_zoom`]. Zoom outside the slider domain clamps to
/// the nearest endpoint rather than faulting.
pub fn zoom_to_slider(zoom: f32) -> u32 {
    let z = zoom.clamp(SLIDER_ZOOM_MIN, SLIDER_ZOOM_MAX);
    let t = (z / SLIDER_ZOOM_MIN).ln() / (SLIDER_ZOOM_MAX / SLIDER_ZOOM_MIN).ln();
    (t * SLIDER_MAX as f32).round() as u32
}

/// One entry of the panel's zoom combo box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomPreset {
    /// Sentinel: re-fit the image to the viewport.
    FitView,
    /// Absolute zoom percentage.
    Percent(f32),
}

impl ZoomPreset {
    /// Combo-box label for the preset.
    pub fn label(&self) -> String {
        match self {
            Self::FitView => "Reset view".to_string(),
            Self::Percent(p) => format!("{p:.2}%"),
        }
    }
}

/// Preset list offered by the panel, fit sentinel first.
pub const ZOOM_PRESETS: &[ZoomPreset] = &[
    ZoomPreset::FitView,
    ZoomPreset::Percent(25.0),
    ZoomPreset::Percent(33.33),
    ZoomPreset::Percent(50.0),
    ZoomPreset::Percent(66.66),
    ZoomPreset::Percent(75.0),
    ZoomPreset::Percent(100.0),
    ZoomPreset::Percent(200.0),
    ZoomPreset::Percent(300.0),
    ZoomPreset::Percent(400.0),
    ZoomPreset::Percent(600.0),
    ZoomPreset::Percent(800.0),
    ZoomPreset::Percent(1000.0),
    ZoomPreset::Percent(1200.0),
    ZoomPreset::Percent(1600.0),
    ZoomPreset::Percent(2000.0),
    ZoomPreset::Percent(2400.0),
    ZoomPreset::Percent(2800.0),
    ZoomPreset::Percent(3200.0),
];
