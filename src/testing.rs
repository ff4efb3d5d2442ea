//! Test doubles for the canvas and the waiter.

use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;

use crate::canvas::{Canvas, MemoryCanvas, PixelBuffer};
use crate::error::DisplayError;

/// Canvas that keeps a copy of every presented frame and every contrast or
/// dim change.
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    inner: MemoryCanvas,
    pub frames: Vec<PixelBuffer>,
    pub contrast_log: Vec<u8>,
    pub dim_log: Vec<bool>,
    /// Presents left before every further present fails.
    present_budget: Option<u32>,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    pub fn with_contrast() -> Self {
        Self {
            inner: MemoryCanvas::with_contrast(),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            inner: MemoryCanvas::offline(),
            ..Self::default()
        }
    }

    /// A canvas with contrast control whose presents fail after `presents`
    /// successes.
    pub fn failing_after(presents: u32) -> Self {
        Self {
            present_budget: Some(presents),
            ..Self::with_contrast()
        }
    }

    pub fn buffer(&self) -> &PixelBuffer { self.inner.buffer() }

    pub fn contrast(&self) -> Option<u8> { self.inner.contrast() }

    pub fn is_dimmed(&self) -> bool { self.inner.is_dimmed() }

    pub fn last_frame(&self) -> Option<&PixelBuffer> { self.frames.last() }
}

impl OriginDimensions for RecordingCanvas {
    fn size(&self) -> Size { self.inner.size() }
}

impl DrawTarget for RecordingCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.inner.draw_iter(pixels)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.inner.clear(color)
    }
}

impl Canvas for RecordingCanvas {
    fn present(&mut self) -> Result<(), DisplayError> {
        match self.present_budget {
            Some(0) => return Err(DisplayError::Communication),
            Some(ref mut left) => *left -= 1,
            None => {}
        }
        self.inner.present()?;
        self.frames.push(self.inner.buffer().clone());
        Ok(())
    }

    fn pixel(
        &self,
        point: Point,
    ) -> bool {
        self.inner.pixel(point)
    }

    fn is_ready(&self) -> bool { self.inner.is_ready() }

    fn has_contrast(&self) -> bool { self.inner.has_contrast() }

    fn set_contrast(
        &mut self,
        level: u8,
    ) -> Result<(), DisplayError> {
        self.inner.set_contrast(level)?;
        self.contrast_log.push(level);
        Ok(())
    }

    fn set_dimmed(
        &mut self,
        dimmed: bool,
    ) -> Result<(), DisplayError> {
        self.inner.set_dimmed(dimmed)?;
        self.dim_log.push(dimmed);
        Ok(())
    }
}

/// Waiter that records requested waits instead of sleeping.
#[derive(Debug, Default)]
pub(crate) struct RecordingDelay {
    pub waits_ms: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self { Self::default() }

    pub fn total_ms(&self) -> u32 { self.waits_ms.iter().sum() }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.waits_ms.push(ms);
    }
}

/// Waiter that raises a cancel flag after a number of waits.
pub(crate) struct CancelAfter<'a> {
    flag: &'a AtomicBool,
    remaining: u32,
}

impl<'a> CancelAfter<'a> {
    pub fn new(
        flag: &'a AtomicBool,
        waits: u32,
    ) -> Self {
        Self { flag, remaining: waits }
    }
}

impl DelayNs for CancelAfter<'_> {
    fn delay_ns(
        &mut self,
        _ns: u32,
    ) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.flag.store(true, Ordering::Relaxed);
        }
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.delay_ns(ms.saturating_mul(1_000_000));
    }
}
