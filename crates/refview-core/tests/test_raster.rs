use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tempfile::tempdir;

use refview_core::error::RefviewError;
use refview_core::geometry::Vec2;
use refview_core::raster::{Raster, Rgba};

mod common;
use common::gradient_raster;

#[test]
fn open_decodes_a_png_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.png");
    gradient_raster(64, 32)
        .as_rgba()
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let raster = Raster::open(&path).unwrap();

    assert_eq!((raster.width(), raster.height()), (64, 32));
    assert_eq!(
        raster.pixel_at(Vec2::new(10.0, 20.0)),
        Some(Rgba::new(10, 20, 40, 255))
    );
}

#[test]
fn from_bytes_decodes_an_encoded_buffer() {
    let mut buf = Vec::new();
    gradient_raster(16, 16)
        .as_rgba()
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();

    let raster = Raster::from_bytes(&buf).unwrap();

    assert_eq!((raster.width(), raster.height()), (16, 16));
    assert_eq!(
        raster.pixel_at(Vec2::new(3.0, 7.0)),
        Some(Rgba::new(3, 7, 40, 255))
    );
}

#[test]
fn fractional_positions_sample_the_containing_pixel() {
    let raster = gradient_raster(8, 8);

    assert_eq!(
        raster.pixel_at(Vec2::new(2.9, 3.1)),
        Some(Rgba::new(2, 3, 40, 255))
    );
}

#[test]
fn sampling_outside_bounds_is_no_color() {
    let raster = gradient_raster(8, 8);

    assert_eq!(raster.pixel_at(Vec2::new(-0.5, 2.0)), None);
    assert_eq!(raster.pixel_at(Vec2::new(2.0, -0.5)), None);
    assert_eq!(raster.pixel_at(Vec2::new(8.0, 2.0)), None);
    assert_eq!(raster.pixel_at(Vec2::new(2.0, 8.0)), None);
}

#[test]
fn open_on_a_missing_path_fails() {
    let dir = tempdir().unwrap();

    assert!(Raster::open(&dir.path().join("nope.png")).is_err());
}

#[test]
fn from_bytes_rejects_garbage() {
    assert!(matches!(
        Raster::from_bytes(b"definitely not an image"),
        Err(RefviewError::Decode(_))
    ));
}

#[test]
fn zero_sized_buffers_are_rejected() {
    assert!(matches!(
        Raster::from_rgba(RgbaImage::new(0, 0)),
        Err(RefviewError::InvalidDimensions {
            width: 0,
            height: 0
        })
    ));
}

#[test]
fn bgra_packing_reorders_channels_for_the_host() {
    let color = Rgba::new(255, 128, 0, 255);

    let bgra = color.to_bgra_f32();

    assert_eq!(bgra[0], 0.0); // blue
    assert!((bgra[1] - 128.0 / 255.0).abs() < 1e-6); // green
    assert_eq!(bgra[2], 1.0); // red
    assert_eq!(bgra[3], 1.0); // alpha
}
