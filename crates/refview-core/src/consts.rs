/// Upper end of the integer zoom-slider range (lower end is 0).
pub const SLIDER_MAX: u32 = 10_000;

/// Zoom factor mapped to slider position 0.
pub const SLIDER_ZOOM_MIN: f32 = 0.25;

/// Zoom factor mapped to slider position `SLIDER_MAX`.
pub const SLIDER_ZOOM_MAX: f32 = 32.0;

/// Ratio of the gesture zoom floor to the fit zoom. Scaling far below the
/// fit size makes the host repaint crawl, so gestures stop at a quarter of it.
pub const MINIMUM_ZOOM_RATIO: f32 = 0.25;

/// Fixed floor for absolute (preset) zoom changes. Distinct from the gesture
/// floor so presets stay reachable after loading a very large image.
pub const ABSOLUTE_ZOOM_FLOOR: f32 = 0.25;

/// Vertical drag distance, in pixels, corresponding to one proportional zoom
/// step during a modifier-drag zoom.
pub const DRAG_ZOOM_DIVISOR: f32 = 100.0;

/// Wheel delta corresponding to one proportional zoom step.
pub const WHEEL_ZOOM_DIVISOR: f32 = 500.0;

/// Radius of the color-pick ring marker, in device-independent pixels.
pub const TRIGGER_DISTANCE: f32 = 10.0;

/// Height of the picked-color swatch strip across the top of the viewport.
pub const SWATCH_STRIP_HEIGHT: f32 = 20.0;
