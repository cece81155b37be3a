//! Headless 1bpp framebuffer
//!
//! Stands in for the panel on the desktop. Implements `DrawTarget` so the
//! widget renders into it through `GraphicsSurface`, and exports PNG
//! screenshots for visual checks.

use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use image::{GrayImage, Luma};

/// Screenshot shade of a set pixel (ink).
const INK: u8 = 0x00;
/// Screenshot shade of a clear pixel (paper).
const PAPER: u8 = 0xFF;

/// CPU framebuffer of `BinaryColor` pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<BinaryColor>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer with every pixel `Off`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BinaryColor::Off)
    }

    /// Create a framebuffer with every pixel set to `color`.
    // width * height is a display-sized pixel count.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn filled(width: u32, height: u32, color: BinaryColor) -> Self {
        Self {
            pixels: vec![color; (width * height) as usize],
            width,
            height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    #[allow(clippy::arithmetic_side_effects)] // bounds checked first
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }

    /// Pixel at `point`, or `None` off-canvas.
    pub fn pixel_at(&self, point: Point) -> Option<BinaryColor> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        self.index(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: BinaryColor) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Number of `On` pixels.
    pub fn lit_pixels(&self) -> usize {
        self.count(BinaryColor::On)
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: BinaryColor) {
        self.pixels.fill(color);
    }

    /// Render to a grayscale image, each pixel upscaled to `scale`×`scale`.
    ///
    /// `On` is drawn dark, matching a reflective panel.
    #[allow(clippy::arithmetic_side_effects)] // scale and dimensions are small
    pub fn to_image(&self, scale: u32) -> GrayImage {
        let scale = scale.max(1);
        GrayImage::from_fn(self.width * scale, self.height * scale, |x, y| {
            let shade = match self.index(x / scale, y / scale).and_then(|i| self.pixels.get(i)) {
                Some(BinaryColor::On) => INK,
                _ => PAPER,
            };
            Luma([shade])
        })
    }

    /// Save a PNG screenshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn screenshot(&self, path: impl AsRef<Path>, scale: u32) -> Result<()> {
        let path = path.as_ref();
        self.to_image(scale)
            .save(path)
            .with_context(|| format!("writing screenshot {}", path.display()))
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
