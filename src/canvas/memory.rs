//! In-memory canvas backed by a [`PixelBuffer`].
//!
//! Used as the off-screen buffer on host builds (the simulator mirrors it into
//! a window on every present) and as the reference canvas in tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::{Canvas, PixelBuffer};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::DisplayError;

/// SSD1306 contrast after reset with the internal charge pump.
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// A canvas that only lives in RAM.
#[derive(Clone, Debug)]
pub struct MemoryCanvas {
    buffer: PixelBuffer,
    presents: u32,
    ready: bool,
    /// `None` when the panel has no contrast control.
    contrast: Option<u8>,
    dimmed: bool,
}

impl MemoryCanvas {
    /// A ready canvas without contrast control.
    pub const fn new() -> Self {
        Self {
            buffer: PixelBuffer::new(),
            presents: 0,
            ready: true,
            contrast: None,
            dimmed: false,
        }
    }

    /// A ready canvas with contrast and dim control.
    pub const fn with_contrast() -> Self {
        let mut canvas = Self::new();
        canvas.contrast = Some(DEFAULT_CONTRAST);
        canvas
    }

    /// A canvas whose panel failed to initialize. Every present fails.
    pub const fn offline() -> Self {
        let mut canvas = Self::new();
        canvas.ready = false;
        canvas
    }

    /// Current buffer contents.
    #[inline]
    pub const fn buffer(&self) -> &PixelBuffer { &self.buffer }

    /// Number of successful presents.
    #[inline]
    pub const fn present_count(&self) -> u32 { self.presents }

    /// Current contrast level, `None` without contrast control.
    #[inline]
    pub const fn contrast(&self) -> Option<u8> { self.contrast }

    /// Whether the panel is in dimmed mode.
    #[inline]
    pub const fn is_dimmed(&self) -> bool { self.dimmed }
}

impl Default for MemoryCanvas {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for MemoryCanvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for MemoryCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.buffer.set(point, color.is_on());
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.buffer.fill(color.is_on());
        Ok(())
    }
}

impl Canvas for MemoryCanvas {
    fn present(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        self.presents = self.presents.wrapping_add(1);
        Ok(())
    }

    fn pixel(
        &self,
        point: Point,
    ) -> bool {
        self.buffer.get(point)
    }

    fn is_ready(&self) -> bool { self.ready }

    fn has_contrast(&self) -> bool { self.contrast.is_some() }

    fn set_contrast(
        &mut self,
        level: u8,
    ) -> Result<(), DisplayError> {
        let contrast = self.contrast.as_mut().ok_or(DisplayError::ContrastUnavailable)?;
        *contrast = level;
        Ok(())
    }

    fn set_dimmed(
        &mut self,
        dimmed: bool,
    ) -> Result<(), DisplayError> {
        if self.contrast.is_none() {
            return Err(DisplayError::ContrastUnavailable);
        }
        self.dimmed = dimmed;
        Ok(())
    }
}
