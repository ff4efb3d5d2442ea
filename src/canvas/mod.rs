//! Canvas Surface capability interface.
//!
//! The engine never touches a display driver directly. Everything it needs
//! from the panel is expressed by [`Canvas`]:
//!
//! - primitive drawing (pixel, line, rectangle, rounded rectangle, circle,
//!   text) comes from `embedded-graphics` through the `DrawTarget` supertrait
//! - [`Canvas::present`] pushes the buffer to the hardware
//! - [`Canvas::pixel`] reads the current buffer back, which is all the
//!   Buffer Transition Engine needs to take a [`Snapshot`]
//! - contrast/dim control is optional and reported through
//!   [`Canvas::has_contrast`]
//!
//! # Out-of-range writes
//!
//! Canvas implementations must silently ignore pixels outside their bounds
//! (as the SSD1306 buffered driver and [`MemoryCanvas`] do). Shape routines
//! rely on this for glyphs that slide partly off-screen. The transition engine
//! still bounds-checks every coordinate before it asks for a pixel.
//!
//! # Single caller
//!
//! A canvas is owned by exactly one [`Sequencer`](crate::sequencer::Sequencer)
//! or borrowed mutably by one composer call at a time. The `&mut` borrow makes
//! re-entrant animation calls from inside a draw callback impossible.

mod buffer;
mod memory;

pub use buffer::PixelBuffer;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
pub use memory::MemoryCanvas;

use crate::error::DisplayError;

/// A 1-bit display surface the engine can draw on and present.
pub trait Canvas: DrawTarget<Color = BinaryColor> + OriginDimensions {
    /// Push the current buffer to the physical display.
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Read back one pixel of the current buffer. Out-of-range reads are off.
    fn pixel(
        &self,
        point: Point,
    ) -> bool;

    /// Whether the panel came up and accepts frames.
    fn is_ready(&self) -> bool { true }

    /// Whether [`Canvas::set_contrast`] and [`Canvas::set_dimmed`] are supported.
    fn has_contrast(&self) -> bool { false }

    /// Set panel contrast (0 = darkest).
    fn set_contrast(
        &mut self,
        level: u8,
    ) -> Result<(), DisplayError> {
        let _ = level;
        Err(DisplayError::ContrastUnavailable)
    }

    /// Enter or leave the panel's dimmed mode.
    fn set_dimmed(
        &mut self,
        dimmed: bool,
    ) -> Result<(), DisplayError> {
        let _ = dimmed;
        Err(DisplayError::ContrastUnavailable)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only copy of a canvas taken before a buffer-relative transition.
///
/// Owned by the transition call that captured it and dropped when it returns.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pixels: PixelBuffer,
}

impl Snapshot {
    /// Copy the current contents of `canvas`.
    ///
    /// Only the area shared by the canvas and the configured panel size is copied.
    pub fn capture<C>(canvas: &C) -> Self
    where
        C: Canvas,
    {
        let size = canvas.size();
        let width = (size.width as i32).min(PixelBuffer::WIDTH);
        let height = (size.height as i32).min(PixelBuffer::HEIGHT);

        let mut pixels = PixelBuffer::new();
        for y in 0..height {
            for x in 0..width {
                let point = Point::new(x, y);
                if canvas.pixel(point) {
                    pixels.set(point, true);
                }
            }
        }
        Self { pixels }
    }

    /// Wrap an existing frame.
    pub const fn from_buffer(pixels: PixelBuffer) -> Self { Self { pixels } }

    /// Sample one pixel. `None` when `(x, y)` lies outside the snapshot.
    #[inline]
    pub fn sample(
        &self,
        x: i32,
        y: i32,
    ) -> Option<bool> {
        let point = Point::new(x, y);
        PixelBuffer::contains(point).then(|| self.pixels.get(point))
    }

    /// Snapshot width in pixels.
    #[inline]
    pub const fn width(&self) -> i32 { PixelBuffer::WIDTH }

    /// Snapshot height in pixels.
    #[inline]
    pub const fn height(&self) -> i32 { PixelBuffer::HEIGHT }

    /// The captured frame.
    #[inline]
    pub const fn buffer(&self) -> &PixelBuffer { &self.pixels }
}
