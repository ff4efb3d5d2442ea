//! Packed 1-bit pixel buffer.
//!
//! Uses the SSD1306 page-major layout: the panel is split into horizontal
//! pages of 8 rows, each byte holds one column of a page with the top row in
//! bit 0. Byte index for `(x, y)` is `(y / 8) * WIDTH + x`, bit `y % 8`.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{BUFFER_LEN, SCREEN_HEIGHT, SCREEN_WIDTH};

/// A full frame at 1 bit per pixel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PixelBuffer {
    bits: [u8; BUFFER_LEN],
}

impl PixelBuffer {
    /// Width in pixels.
    pub const WIDTH: i32 = SCREEN_WIDTH as i32;

    /// Height in pixels.
    pub const HEIGHT: i32 = SCREEN_HEIGHT as i32;

    /// Create a cleared buffer.
    pub const fn new() -> Self { Self { bits: [0; BUFFER_LEN] } }

    /// Byte index and bit mask for a point, `None` when out of bounds.
    #[inline]
    const fn locate(point: Point) -> Option<(usize, u8)> {
        if point.x < 0 || point.y < 0 || point.x >= Self::WIDTH || point.y >= Self::HEIGHT {
            return None;
        }
        let index = (point.y / 8) * Self::WIDTH + point.x;
        Some((index as usize, 1 << (point.y & 7)))
    }

    /// Whether `point` is inside the buffer.
    #[inline]
    pub const fn contains(point: Point) -> bool { Self::locate(point).is_some() }

    /// Read one pixel. Out-of-range reads are off.
    #[inline]
    pub fn get(
        &self,
        point: Point,
    ) -> bool {
        Self::locate(point).is_some_and(|(index, mask)| self.bits[index] & mask != 0)
    }

    /// Write one pixel. Out-of-range writes are ignored.
    #[inline]
    pub fn set(
        &mut self,
        point: Point,
        on: bool,
    ) {
        if let Some((index, mask)) = Self::locate(point) {
            if on {
                self.bits[index] |= mask;
            } else {
                self.bits[index] &= !mask;
            }
        }
    }

    /// Set every pixel to `on`.
    pub fn fill(
        &mut self,
        on: bool,
    ) {
        self.bits.fill(if on { 0xFF } else { 0x00 });
    }

    /// Clear every pixel.
    #[inline]
    pub fn clear(&mut self) { self.fill(false); }

    /// Raw packed bytes, ready to be streamed to the panel.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BUFFER_LEN] { &self.bits }

    /// Every pixel of the frame, row by row, as a drawable iterator.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        (0..Self::HEIGHT).flat_map(move |y| {
            (0..Self::WIDTH).map(move |x| {
                let point = Point::new(x, y);
                Pixel(point, BinaryColor::from(self.get(point)))
            })
        })
    }

    /// Coordinates of every lit pixel, row by row.
    pub fn lit_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..Self::HEIGHT)
            .flat_map(|y| (0..Self::WIDTH).map(move |x| Point::new(x, y)))
            .filter(|&point| self.get(point))
    }

    /// Number of lit pixels.
    pub fn count_lit(&self) -> usize { self.bits.iter().map(|byte| byte.count_ones() as usize).sum() }

    /// Whether no pixel is lit.
    pub fn is_blank(&self) -> bool { self.bits.iter().all(|&byte| byte == 0) }

    /// Smallest rectangle containing every lit pixel, `None` for a blank frame.
    pub fn lit_bounds(&self) -> Option<Rectangle> {
        let mut points = self.lit_points();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for point in points {
            min = min.component_min(point);
            max = max.component_max(point);
        }
        Some(Rectangle::with_corners(min, max))
    }
}

impl Default for PixelBuffer {
    fn default() -> Self { Self::new() }
}
