//! Render queries: pure geometry describing what the shell should paint.

use crate::consts::SWATCH_STRIP_HEIGHT;
use crate::geometry::{Rect, Size, Vec2};
use crate::raster::Rgba;
use crate::viewport::ViewportController;

/// The portion of the image visible under the current transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRegion {
    /// Visible sub-rectangle in image pixel coordinates, clamped to bounds.
    pub source: Rect,
    /// Viewport-space rectangle `source` maps onto.
    pub dest: Rect,
    /// `source` as a fraction of the full image, for textured drawing.
    pub uv: Rect,
}

/// Compute the visible image sub-rectangle and where it lands in the
/// viewport. `None` without an image, with a degenerate viewport, or when
/// the image has been panned entirely out of view.
pub fn visible_region(controller: &ViewportController) -> Option<VisibleRegion> {
    let image = controller.image()?;
    let viewport = controller.viewport();
    let zoom = controller.zoom();
    if viewport.is_empty() || zoom <= 0.0 {
        return None;
    }

    let origin = controller.origin();
    let window = Rect::from_min_size(
        -origin / zoom,
        Size::new(viewport.width / zoom, viewport.height / zoom),
    );
    let bounds = Rect::from_min_size(Vec2::ZERO, image.size());
    let source = window.intersect(&bounds)?;

    let dest = Rect::from_min_max(
        controller.image_to_viewport(source.min),
        controller.image_to_viewport(source.max),
    );
    let size = image.size();
    let uv = Rect::from_min_max(
        Vec2::new(source.min.x / size.width, source.min.y / size.height),
        Vec2::new(source.max.x / size.width, source.max.y / size.height),
    );

    Some(VisibleRegion { source, dest, uv })
}

/// Overlay drawn while the user is picking a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickOverlay {
    /// Ring marker center in viewport coordinates.
    pub marker: Vec2,
    /// Ring radius in device-independent pixels.
    pub radius: f32,
    /// Sampled color for the swatch strip; `None` over the letterbox margin.
    pub swatch: Option<Rgba>,
    /// Height of the swatch strip across the top of the viewport.
    pub strip_height: f32,
}

/// Pick overlay description, present only while actively picking.
pub fn pick_overlay(controller: &ViewportController) -> Option<PickOverlay> {
    let picked = controller.picked()?;
    Some(PickOverlay {
        marker: picked.position,
        radius: controller.config().trigger_distance,
        swatch: picked.color,
        strip_height: SWATCH_STRIP_HEIGHT,
    })
}
