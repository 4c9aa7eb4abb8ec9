use crate::config::ViewerConfig;
use crate::events::{InteractionMode, Modifiers, Notification, PointerEvent, WheelEvent};
use crate::geometry::{Size, Vec2};
use crate::raster::{Raster, Rgba};
use crate::zoom::ZoomPreset;

/// Snapshot taken at pointer press; drag gestures are computed against it
/// rather than accumulated per move.
#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    pointer: Vec2,
    origin: Vec2,
    zoom: f32,
}

/// Pick marker state while the pick modifier is held during a drag.
#[derive(Clone, Copy, Debug)]
pub struct PickSample {
    /// Marker position in viewport coordinates.
    pub position: Vec2,
    /// Sampled color; `None` over the letterbox margin.
    pub color: Option<Rgba>,
}

/// The viewport transform and interaction state machine.
///
/// Owns the loaded image, zoom factor, and origin offset. All mutation goes
/// through the event methods below, each of which takes an immutable event
/// description and returns the notifications the shell must dispatch.
///
/// Coordinate contract: viewport point `p` maps to image point
/// `(p - origin) / zoom`, and image point `q` maps back to
/// `origin + q * zoom`.
pub struct ViewportController {
    config: ViewerConfig,
    image: Option<Raster>,
    viewport: Size,
    zoom: f32,
    initial_zoom: f32,
    minimum_zoom: f32,
    origin: Vec2,
    anchor: Option<DragAnchor>,
    moving: bool,
    picked: Option<PickSample>,
}

impl ViewportController {
    pub fn new(config: ViewerConfig) -> Self {
        let minimum_zoom = config.minimum_zoom_ratio;
        Self {
            config,
            image: None,
            viewport: Size::default(),
            zoom: 1.0,
            initial_zoom: 1.0,
            minimum_zoom,
            origin: Vec2::ZERO,
            anchor: None,
            moving: false,
            picked: None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&Raster> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn initial_zoom(&self) -> f32 {
        self.initial_zoom
    }

    pub fn minimum_zoom(&self) -> f32 {
        self.minimum_zoom
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Whether the pointer has moved since the press that started the drag.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn picked(&self) -> Option<&PickSample> {
        self.picked.as_ref()
    }

    /// Map a viewport point to image coordinates under the current transform.
    pub fn viewport_to_image(&self, p: Vec2) -> Vec2 {
        (p - self.origin) / self.zoom
    }

    /// Map an image point to viewport coordinates under the current transform.
    pub fn image_to_viewport(&self, q: Vec2) -> Vec2 {
        self.origin + q * self.zoom
    }

    /// Color under a viewport point; `None` without an image or outside it.
    pub fn sample_color(&self, pos: Vec2) -> Option<Rgba> {
        let image = self.image.as_ref()?;
        image.pixel_at(self.viewport_to_image(pos))
    }

    /// Current mode, derived from drag state and modifiers. Pick wins over
    /// zoom, zoom over pan.
    pub fn interaction_mode(&self, modifiers: Modifiers) -> InteractionMode {
        if self.anchor.is_none() {
            InteractionMode::Idle
        } else if modifiers.pick {
            InteractionMode::Picking
        } else if modifiers.zoom {
            InteractionMode::Zooming
        } else {
            InteractionMode::Panning
        }
    }

    /// Replace the loaded image (`None` clears it) and reset the view.
    pub fn set_image(&mut self, image: Option<Raster>) -> Vec<Notification> {
        match &image {
            Some(raster) => {
                tracing::debug!("image replaced: {}x{}", raster.width(), raster.height());
            }
            None => tracing::debug!("image cleared"),
        }
        self.image = image;
        let mut notes = vec![Notification::ImageChanged(self.image.is_some())];
        notes.extend(self.reset_view());
        notes
    }

    /// Re-fit and re-center the image in the viewport.
    ///
    /// Without an image (or before the viewport has a size) only a repaint is
    /// requested and the transform is left untouched.
    pub fn reset_view(&mut self) -> Vec<Notification> {
        let Some(image) = &self.image else {
            return vec![Notification::Repaint];
        };
        if self.viewport.is_empty() {
            return vec![Notification::Repaint];
        }

        let size = image.size();
        self.initial_zoom =
            (self.viewport.width / size.width).min(self.viewport.height / size.height);
        self.minimum_zoom = self.initial_zoom * self.config.minimum_zoom_ratio;
        self.zoom = self.initial_zoom;
        let overflow = self.viewport.to_vec2() - size.to_vec2() * self.zoom;
        self.origin = (overflow / 2.0).trunc();
        vec![self.slider_reset(), Notification::Repaint]
    }

    /// Floor applied to gesture zoom. There is deliberately no ceiling here;
    /// gesture deltas are bounded, and only the slider mapping clamps above.
    pub fn clamp_zoom(&self, value: f32) -> f32 {
        self.minimum_zoom.max(value)
    }

    /// Pointer button pressed over the viewport.
    ///
    /// Records the drag anchor. With the pick modifier held this is an
    /// immediate pick-and-commit: the color under the pointer is sampled and
    /// emitted before any drag starts.
    pub fn pointer_pressed(&mut self, event: PointerEvent) -> Vec<Notification> {
        self.anchor = Some(DragAnchor {
            pointer: event.pos,
            origin: self.origin,
            zoom: self.zoom,
        });

        let mut notes = Vec::new();
        if event.modifiers.pick {
            let color = self.sample_color(event.pos);
            self.picked = Some(PickSample {
                position: event.pos,
                color,
            });
            if let Some(color) = color {
                notes.push(Notification::ColorPicked(color));
            }
        }
        notes.push(Notification::Repaint);
        notes
    }

    /// Pointer button released; ends any drag and clears the pick marker.
    /// Zoom and origin are left as the gesture set them.
    pub fn pointer_released(&mut self, _event: PointerEvent) -> Vec<Notification> {
        self.anchor = None;
        self.moving = false;
        self.picked = None;
        vec![Notification::Repaint]
    }

    /// Pointer moved. Only meaningful while a button is held; resolves to
    /// picking, zooming, or panning from the modifier state.
    pub fn pointer_moved(&mut self, event: PointerEvent) -> Vec<Notification> {
        let Some(anchor) = self.anchor else {
            return Vec::new();
        };
        self.moving = true;

        let mut notes = Vec::new();
        if event.modifiers.pick {
            self.picked = Some(PickSample {
                position: event.pos,
                color: self.sample_color(event.pos),
            });
        } else {
            self.picked = None;
            if event.modifiers.zoom {
                // The image point under the press position stays fixed under
                // that position, not under the live cursor.
                let zoom_delta = anchor.pointer.y - event.pos.y;
                let center = (anchor.pointer - anchor.origin) / anchor.zoom;
                self.zoom = self.clamp_zoom(
                    anchor.zoom + zoom_delta / self.config.drag_zoom_divisor * anchor.zoom,
                );
                self.origin = anchor.pointer - center * self.zoom;
                notes.push(self.slider_reset());
            } else {
                self.origin = anchor.origin - anchor.pointer + event.pos;
            }
        }
        notes.push(Notification::Repaint);
        notes
    }

    /// Wheel zoom. The anchor is recomputed from the live cursor on every
    /// event, keeping the image point under the cursor fixed.
    pub fn wheel(&mut self, event: WheelEvent) -> Vec<Notification> {
        let center = (event.pos - self.origin) / self.zoom;
        self.zoom = self.clamp_zoom(
            self.zoom + event.delta_y / self.config.wheel_zoom_divisor * self.zoom,
        );
        self.origin = event.pos - center * self.zoom;
        vec![self.slider_reset(), Notification::Repaint]
    }

    /// Programmatic zoom from the slider or a preset, anchored at the
    /// viewport center.
    ///
    /// `absolute` applies `new_zoom` directly, floored at the fixed
    /// `absolute_zoom_floor`; otherwise `new_zoom` is a factor relative to
    /// the fit zoom, floored by `clamp_zoom`. The slider-reset notification
    /// is only emitted when `emit` is set, so the slider's own changes do
    /// not echo back into it.
    pub fn change_zoom(&mut self, new_zoom: f32, absolute: bool, emit: bool) -> Vec<Notification> {
        let center_point = self.viewport.to_vec2() / 2.0;
        let center = (center_point - self.origin) / self.zoom;
        self.zoom = if absolute {
            self.config.absolute_zoom_floor.max(new_zoom)
        } else {
            self.clamp_zoom(self.initial_zoom * new_zoom)
        };
        self.origin = center_point - center * self.zoom;

        let mut notes = Vec::new();
        if emit {
            notes.push(self.slider_reset());
        }
        notes.push(Notification::Repaint);
        notes
    }

    /// Apply a combo-box preset.
    pub fn apply_preset(&mut self, preset: ZoomPreset) -> Vec<Notification> {
        match preset {
            ZoomPreset::FitView => self.change_zoom(1.0, false, true),
            ZoomPreset::Percent(p) => self.change_zoom(p / 100.0, true, true),
        }
    }

    /// Viewport geometry changed; re-fit and re-center.
    pub fn resized(&mut self, viewport: Size) -> Vec<Notification> {
        self.viewport = viewport;
        self.reset_view()
    }

    fn slider_reset(&self) -> Notification {
        Notification::SliderReset(self.zoom / self.initial_zoom)
    }
}
