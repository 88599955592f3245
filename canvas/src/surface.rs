//! The raster surface: an owned RGBA pixel buffer and its gridded background.
//!
//! This module defines the single mutable drawing target. All coordinates are
//! surface-space pixels with the origin at the top-left. Writes outside the
//! surface bounds are clipped per pixel, so callers never need to range-check
//! before painting.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::GRID_SPACING_PX;

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Construct a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Background color of a blank surface.
pub const BACKGROUND: Rgba = Rgba::opaque(255, 255, 255);

/// Color of the background grid lines.
pub const GRID_LINE: Rgba = Rgba::opaque(0x66, 0x66, 0x66);

/// An owned RGBA8 pixel buffer, row-major, 4 bytes per pixel.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with the gridded background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        let mut surface = Self { width, height, pixels: vec![0; len] };
        surface.paint_background();
        surface
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the raw RGBA8 pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy of the raw pixel data, used as a live-preview restore base.
    #[must_use]
    pub fn clone_pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Overwrite the whole buffer from a previously cloned base.
    /// Returns false (and leaves the surface untouched) on a length mismatch.
    pub fn restore_pixels(&mut self, base: &[u8]) -> bool {
        if base.len() != self.pixels.len() {
            return false;
        }
        self.pixels.copy_from_slice(base);
        true
    }

    /// Fill the entire surface with one color.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Repaint the blank state: background fill plus grid lines at
    /// [`GRID_SPACING_PX`] intervals in both directions.
    pub fn paint_background(&mut self) {
        self.fill(BACKGROUND);
        let spacing = GRID_SPACING_PX as usize;
        for x in (0..self.width as usize).step_by(spacing) {
            for y in 0..self.height {
                self.set_pixel(x as i64, i64::from(y), GRID_LINE);
            }
        }
        for y in (0..self.height as usize).step_by(spacing) {
            for x in 0..self.width {
                self.set_pixel(i64::from(x), y as i64, GRID_LINE);
            }
        }
    }

    /// Write one pixel. Coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[allow(clippy::cast_sign_loss)]
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = color.a;
    }

    /// Read one pixel, or `None` when the coordinates are out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        })
    }
}
