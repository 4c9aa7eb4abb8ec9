use crate::geometry::Vec2;
use crate::raster::Rgba;

/// Modifier keys relevant to viewport interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Color-pick modifier (Alt in the reference panel).
    pub pick: bool,
    /// Zoom modifier (Ctrl, or Cmd on macOS).
    pub zoom: bool,
}

/// A pointer press, release, or move, in viewport coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub pos: Vec2,
    pub modifiers: Modifiers,
}

/// A scroll-wheel tick over the viewport.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    pub pos: Vec2,
    /// Vertical wheel delta; positive zooms in.
    pub delta_y: f32,
}

/// What the pointer is currently doing. Derived from drag state and
/// modifiers on every event, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Panning,
    Zooming,
    Picking,
}

/// State changes the hosting shell must react to. Returned by controller
/// operations in the order they occurred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notification {
    /// The image was replaced; payload is whether one is now present.
    ImageChanged(bool),
    /// A color was committed by pressing while picking.
    ColorPicked(Rgba),
    /// Zoom changed; payload is the zoom relative to the fit zoom, for
    /// repositioning the zoom slider.
    SliderReset(f32),
    /// Viewport contents changed and should be repainted.
    Repaint,
}
