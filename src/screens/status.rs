//! Glyph-over-message screens.

use super::{MESSAGE_Y, compose, draw_centered_text};
use crate::canvas::Canvas;
use crate::error::DisplayError;
use crate::shapes::faces::{Expression, draw_face};
use crate::shapes::icons;
use crate::styles::TextScale;

/// Happy face over `message`.
pub fn show_success<C>(
    canvas: &mut C,
    message: &str,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    compose(canvas, |c| {
        draw_face(c, Expression::Happy)?;
        draw_centered_text(c, message, MESSAGE_Y, TextScale::Normal)?;
        Ok(())
    })
}

/// Sad face over `message`.
pub fn show_error<C>(
    canvas: &mut C,
    message: &str,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    compose(canvas, |c| {
        draw_face(c, Expression::Sad)?;
        draw_centered_text(c, message, MESSAGE_Y, TextScale::Normal)?;
        Ok(())
    })
}

/// Wi-Fi symbol over the connection state.
pub fn show_wifi_status<C>(
    canvas: &mut C,
    connected: bool,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    let label = if connected { "Connected" } else { "Disconnected" };
    compose(canvas, |c| {
        icons::draw_wifi(c, connected)?;
        draw_centered_text(c, label, MESSAGE_Y, TextScale::Normal)?;
        Ok(())
    })
}

/// Card outline over a prompt such as "Scan your card".
pub fn show_card_scan<C>(
    canvas: &mut C,
    message: &str,
) -> Result<(), DisplayError>
where
    C: Canvas,
{
    compose(canvas, |c| {
        icons::draw_card(c)?;
        draw_centered_text(c, message, MESSAGE_Y, TextScale::Normal)?;
        Ok(())
    })
}
