//! Canvas that shows every presented frame in a desktop window.
//!
//! Drawing goes to an in-memory [`MemoryCanvas`]; `present` copies it into a
//! `SimulatorDisplay<BinaryColor>` and refreshes the window. Closing the
//! window turns the next present into a [`DisplayError::Communication`], which
//! ends whatever sequence is running.
//!
//! The OLED theme cannot change brightness, so contrast is emulated: below
//! [`DITHER_LEVEL`] only every other lit pixel is shown, below [`DARK_LEVEL`]
//! nothing is. Dim mode halves the level first.

use core::convert::Infallible;
use core::fmt::Write;

use attendance_display::canvas::{Canvas, MemoryCanvas, PixelBuffer};
use attendance_display::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use attendance_display::DisplayError;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use log::{debug, info};

/// Contrast below which the emulated panel shows half of the lit pixels.
pub const DITHER_LEVEL: u8 = 128;

/// Contrast below which the emulated panel shows nothing.
pub const DARK_LEVEL: u8 = 32;

/// SSD1306 contrast after reset.
const RESET_CONTRAST: u8 = 0xCF;

pub struct WindowCanvas {
    frame: MemoryCanvas,
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
    contrast: u8,
    dimmed: bool,
    closed: bool,
}

impl WindowCanvas {
    pub fn open(scale: u32) -> Self {
        let output_settings = OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::OledBlue)
            .scale(scale)
            .build();

        let mut title: String<48> = String::new();
        let _ = write!(title, "Attendance terminal {SCREEN_WIDTH}x{SCREEN_HEIGHT} @{scale}x");

        let mut canvas = Self {
            frame: MemoryCanvas::new(),
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window: Window::new(&title, &output_settings),
            contrast: RESET_CONTRAST,
            dimmed: false,
            closed: false,
        };
        canvas.refresh();
        canvas
    }

    /// Whether the user closed the window.
    pub fn is_closed(&self) -> bool { self.closed }

    /// Keep the window responsive without presenting a new frame.
    pub fn idle(&mut self) -> bool {
        if !self.closed {
            self.refresh();
        }
        !self.closed
    }

    fn visible(
        &self,
        point: Point,
    ) -> bool {
        // dim mode halves the emulated brightness
        let level = if self.dimmed { self.contrast / 2 } else { self.contrast };
        match level {
            level if level < DARK_LEVEL => false,
            level if level < DITHER_LEVEL => (point.x + point.y) % 2 == 0,
            _ => true,
        }
    }

    fn mirror(&mut self, buffer: &PixelBuffer) {
        let _ = self.display.clear(BinaryColor::Off);
        let lit: Vec<Pixel<BinaryColor>> = buffer
            .lit_points()
            .filter(|&point| self.visible(point))
            .map(|point| Pixel(point, BinaryColor::On))
            .collect();
        let _ = self.display.draw_iter(lit);
    }

    fn refresh(&mut self) {
        self.window.update(&self.display);
        for event in self.window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                info!("window closed");
                self.closed = true;
            }
        }
    }
}

impl OriginDimensions for WindowCanvas {
    fn size(&self) -> Size { self.frame.size() }
}

impl DrawTarget for WindowCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame.draw_iter(pixels)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.frame.clear(color)
    }
}

impl Canvas for WindowCanvas {
    fn present(&mut self) -> Result<(), DisplayError> {
        if self.closed {
            return Err(DisplayError::Communication);
        }
        let buffer = self.frame.buffer().clone();
        self.mirror(&buffer);
        self.refresh();
        if self.closed { Err(DisplayError::Communication) } else { Ok(()) }
    }

    fn pixel(
        &self,
        point: Point,
    ) -> bool {
        self.frame.pixel(point)
    }

    fn is_ready(&self) -> bool { !self.closed }

    fn has_contrast(&self) -> bool { true }

    fn set_contrast(
        &mut self,
        level: u8,
    ) -> Result<(), DisplayError> {
        debug!("contrast {level}");
        self.contrast = level;
        Ok(())
    }

    fn set_dimmed(
        &mut self,
        dimmed: bool,
    ) -> Result<(), DisplayError> {
        debug!("dimmed {dimmed}");
        self.dimmed = dimmed;
        Ok(())
    }
}
