use refview_core::raster::Raster;

/// Convert a raster to an egui ColorImage for texture upload.
pub fn raster_to_color_image(raster: &Raster) -> egui::ColorImage {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let mut pixels = Vec::with_capacity(w * h);

    for p in raster.as_rgba().pixels() {
        pixels.push(egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]));
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
