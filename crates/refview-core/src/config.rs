use serde::{Deserialize, Serialize};

use crate::consts::{
    ABSOLUTE_ZOOM_FLOOR, DRAG_ZOOM_DIVISOR, MINIMUM_ZOOM_RATIO, TRIGGER_DISTANCE,
    WHEEL_ZOOM_DIVISOR,
};

/// Interaction tuning for the viewer panel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Vertical drag distance (px) per proportional zoom step.
    pub drag_zoom_divisor: f32,
    /// Wheel delta per proportional zoom step.
    pub wheel_zoom_divisor: f32,
    /// Gesture zoom floor as a fraction of the fit zoom.
    pub minimum_zoom_ratio: f32,
    /// Floor applied to absolute (preset) zoom changes.
    pub absolute_zoom_floor: f32,
    /// Radius of the pick ring marker (device-independent px).
    pub trigger_distance: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            drag_zoom_divisor: DRAG_ZOOM_DIVISOR,
            wheel_zoom_divisor: WHEEL_ZOOM_DIVISOR,
            minimum_zoom_ratio: MINIMUM_ZOOM_RATIO,
            absolute_zoom_floor: ABSOLUTE_ZOOM_FLOOR,
            trigger_distance: TRIGGER_DISTANCE,
        }
    }
}
