//! Text and gauge screens.

use core::fmt::Write;

use heapless::String;

use super::{MESSAGE_Y, compose, draw_centered_text};
use crate::canvas::Canvas;
use crate::error::DisplayError;
use crate::shapes::gauges::{draw_battery, draw_progress_bar};
use crate::styles::TextScale;

/// Progress bar geometry on the loading screen.
const BAR_X: i32 = 14;
const BAR_Y: i32 = 40;
const BAR_WIDTH: u32 = 100;
const BAR_HEIGHT: u32 = 8;

/// `message` at y 20 over a progress bar at `progress` percent.
pub fn show_loading<C>(
    canvas: &mut C,
    message: &str,
    progress: u8,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    compose(canvas, |c| {
        draw_centered_text(c, message, 20, TextScale::Normal)?;
        draw_progress_bar(c, BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT, progress)
    })
}

/// `title` at y 10 and `message` at y 30, both in message text.
pub fn show_info<C>(
    canvas: &mut C,
    title: &str,
    message: &str,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    compose(canvas, |c| {
        draw_centered_text(c, title, 10, TextScale::Normal)?;
        draw_centered_text(c, message, 30, TextScale::Normal)?;
        Ok(())
    })
}

/// Battery gauge over its percentage, e.g. "80%".
pub fn show_battery<C>(
    canvas: &mut C,
    percentage: u8,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    let percentage = percentage.min(100);
    let mut label: String<8> = String::new();
    // "100%" fits in 8 bytes
    let _ = write!(label, "{percentage}%");
    compose(canvas, |c| {
        draw_battery(c, percentage)?;
        draw_centered_text(c, &label, MESSAGE_Y, TextScale::Normal)?;
        Ok(())
    })
}
