use std::path::Path;

use image::RgbaImage;

use crate::error::{RefviewError, Result};
use crate::geometry::{Size, Vec2};

/// An 8-bit RGBA color sampled from the reference image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channel components as floats in `[0, 1]`, packed in the host's
    /// blue-green-red-alpha order.
    pub fn to_bgra_f32(self) -> [f32; 4] {
        [
            f32::from(self.b) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.r) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

/// The loaded reference image. Read-only after construction; the controller
/// replaces the whole raster rather than mutating it.
#[derive(Clone)]
pub struct Raster {
    data: RgbaImage,
}

impl Raster {
    /// Decode an image from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let raster = Self::from_rgba(image::open(path)?.to_rgba8())?;
        tracing::info!(
            "decoded {} ({}x{})",
            path.display(),
            raster.width(),
            raster.height()
        );
        Ok(raster)
    }

    /// Decode an image from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_rgba(image::load_from_memory(bytes)?.to_rgba8())
    }

    /// Wrap an already-decoded RGBA buffer.
    pub fn from_rgba(data: RgbaImage) -> Result<Self> {
        if data.width() == 0 || data.height() == 0 {
            return Err(RefviewError::InvalidDimensions {
                width: data.width(),
                height: data.height(),
            });
        }
        Ok(Self { data })
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Sample the color under an image-space point. `None` outside bounds.
    pub fn pixel_at(&self, pos: Vec2) -> Option<Rgba> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let (x, y) = (pos.x as u32, pos.y as u32);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.data.get_pixel(x, y);
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.data
    }
}
