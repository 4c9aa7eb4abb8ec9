use image::RgbaImage;

use refview_core::config::ViewerConfig;
use refview_core::geometry::Size;
use refview_core::raster::Raster;
use refview_core::viewport::ViewportController;

/// Build a synthetic raster: red channel encodes the column, green the row,
/// blue fixed. Lets tests verify sampling at exact pixel positions.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 40, 255])
    });
    Raster::from_rgba(img).unwrap()
}

/// Controller with a gradient image of the given dimensions loaded into a
/// viewport of the given size (resize first, then load, as the shell does).
pub fn controller_with_image(
    viewport_w: f32,
    viewport_h: f32,
    image_w: u32,
    image_h: u32,
) -> ViewportController {
    let mut controller = ViewportController::new(ViewerConfig::default());
    controller.resized(Size::new(viewport_w, viewport_h));
    controller.set_image(Some(gradient_raster(image_w, image_h)));
    controller
}
