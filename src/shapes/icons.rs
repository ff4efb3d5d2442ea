//! Static status symbols.
//!
//! Fixed geometry around the panel center (64, 32), except the card and lock
//! which sit higher to leave room for a message line.

use core::f32::consts::FRAC_PI_4;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::{circle, cos, fill_circle, line, offset_px, pixel, round_rect, sin};
use crate::config::{CENTER_X, CENTER_Y};

/// Wi-Fi symbol: three concentric rings and a dot, or one crossed-out ring.
pub fn draw_wifi<D>(
    display: &mut D,
    connected: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if connected {
        for radius in [16, 10, 4] {
            circle(display, CENTER_X, CENTER_Y, radius)?;
        }
        fill_circle(display, CENTER_X, CENTER_Y, 2)
    } else {
        circle(display, CENTER_X, CENTER_Y, 16)?;
        line(display, 48, 48, 80, 16)
    }
}

/// Card outline with two magnetic-stripe lines.
pub fn draw_card<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    round_rect(display, 44, 12, 40, 25, 3)?;
    line(display, 54, 22, 74, 22)?;
    line(display, 54, 27, 74, 27)
}

/// Checkmark.
pub fn draw_checkmark<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    line(display, 45, 32, 55, 42)?;
    line(display, 55, 42, 85, 22)
}

/// Cross.
pub fn draw_cross<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    line(display, 45, 22, 85, 42)?;
    line(display, 45, 42, 85, 22)
}

/// Thumbs up: stem, palm box and a thumb disc on top.
pub fn draw_thumbs_up<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    line(display, 60, 22, 60, 42)?;
    line(display, 60, 42, 68, 42)?;
    line(display, 68, 42, 68, 32)?;
    line(display, 68, 32, 60, 32)?;
    fill_circle(display, 64, 22, 4)
}

/// Thumbs down: the thumbs up flipped vertically.
pub fn draw_thumbs_down<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    line(display, 60, 22, 60, 42)?;
    line(display, 60, 22, 68, 22)?;
    line(display, 68, 22, 68, 32)?;
    line(display, 68, 32, 60, 32)?;
    fill_circle(display, 64, 42, 4)
}

/// Whether grid cell `(i, j)` (each in -6..=6) lies inside the heart curve
/// `(x² + y² - 1)³ - x²y³ <= 0` with `x = i/6`, `y = j/6`.
pub fn heart_contains(
    i: i32,
    j: i32,
) -> bool {
    let x = i as f32 / 6.0;
    let y = j as f32 / 6.0;
    let r = x * x + y * y - 1.0;
    r * r * r - x * x * y * y * y <= 0.0
}

/// Filled heart sampled on a 13x13 grid with 2 px spacing around the center.
pub fn draw_heart<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for i in -6..7 {
        for j in -6..7 {
            if heart_contains(i, j) {
                pixel(display, CENTER_X + i * 2, CENTER_Y + j * 2)?;
            }
        }
    }
    Ok(())
}

/// Padlock body with the shackle closed over it or swung open to the right.
pub fn draw_lock<D>(
    display: &mut D,
    locked: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    round_rect(display, 58, 24, 12, 16, 2)?;
    let shackle_x = if locked { 54 } else { 68 };
    round_rect(display, shackle_x, 14, 20, 12, 6)
}

/// Clock face showing three o'clock.
pub fn draw_clock<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    circle(display, CENTER_X, CENTER_Y, 16)?;
    line(display, CENTER_X, CENTER_Y, CENTER_X, CENTER_Y - 12)?;
    line(display, CENTER_X, CENTER_Y, CENTER_X + 8, CENTER_Y)?;
    fill_circle(display, CENTER_X, CENTER_Y, 2)
}

/// Gear: eight radial teeth between radius 12 and 16, rim and hub.
pub fn draw_gear<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for i in 0..8 {
        let angle = i as f32 * FRAC_PI_4;
        let (c, s) = (cos(angle), sin(angle));
        let x1 = offset_px(CENTER_X, c * 12.0);
        let y1 = offset_px(CENTER_Y, s * 12.0);
        let x2 = offset_px(CENTER_X, c * 16.0);
        let y2 = offset_px(CENTER_Y, s * 16.0);
        line(display, x1, y1, x2, y2)?;
    }
    circle(display, CENTER_X, CENTER_Y, 12)?;
    circle(display, CENTER_X, CENTER_Y, 6)
}

/// Power symbol: a full ring with a vertical bar from the top into the center.
pub fn draw_power<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    circle(display, CENTER_X, CENTER_Y, 32)?;
    line(display, CENTER_X, 12, CENTER_X, CENTER_Y)
}
