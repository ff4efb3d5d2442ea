//! Screen Composer: named full-screen layouts.
//!
//! Every layout clears the canvas, draws its glyphs and text at fixed
//! positions and presents exactly once. No animation, no waiting.
//!
//! # Layouts
//!
//! | Screen            | Glyph                 | Text                        |
//! |-------------------|-----------------------|-----------------------------|
//! | success           | happy face            | message at y 45             |
//! | error             | sad face              | message at y 45             |
//! | Wi-Fi status      | Wi-Fi symbol          | "Connected"/"Disconnected"  |
//! | card scan         | card outline          | message at y 45             |
//! | battery           | battery gauge         | percentage at y 45          |
//! | loading           | progress bar at y 40  | message at y 20             |
//! | info              | none                  | title at y 10, message at 30 |
//!
//! Text is centered horizontally from its measured width,
//! `x = (width - text_width) / 2`. Empty text draws nothing.

mod progress;
mod status;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
pub use progress::{show_battery, show_info, show_loading};
pub use status::{show_card_scan, show_error, show_success, show_wifi_status};

use crate::canvas::Canvas;
use crate::error::DisplayError;
use crate::styles::{TextScale, text_width};

/// Row of the message line under a glyph.
pub const MESSAGE_Y: i32 = 45;

/// Draw `text` horizontally centered with its top edge at `y`.
///
/// Returns the left edge, or `None` when `text` is empty and nothing was
/// drawn. Text wider than the target starts left of zero and is clipped.
pub fn draw_centered_text<D>(
    display: &mut D,
    text: &str,
    y: i32,
    scale: TextScale,
) -> Result<Option<i32>, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if text.is_empty() {
        return Ok(None);
    }
    let width = display.bounding_box().size.width as i32;
    let x = (width - text_width(text, scale) as i32) / 2;
    Text::with_baseline(text, Point::new(x, y), scale.style(), Baseline::Top).draw(display)?;
    Ok(Some(x))
}

/// Clear, draw and present once.
fn compose<C, F>(
    canvas: &mut C,
    draw: F,
) -> Result<(), DisplayError>
where
    C: Canvas,
    F: FnOnce(&mut C) -> Result<(), C::Error>,
{
    if !canvas.is_ready() {
        return Err(DisplayError::NotInitialized);
    }
    canvas.clear(BinaryColor::Off).map_err(DisplayError::draw)?;
    draw(canvas).map_err(DisplayError::draw)?;
    canvas.present()
}
