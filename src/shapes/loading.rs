//! Loading indicators.
//!
//! Each style is a pure function of its phase value; the
//! [`Sequencer`](crate::sequencer::Sequencer) owns and advances the phases.

use core::f32::consts::{FRAC_PI_4, PI};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::{cos, fill_circle, fill_rect, offset_px, pixel, rect, sin};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_WIDTH};
use crate::error::DisplayError;

/// Number of dots in the dots indicator.
pub const DOT_COUNT: u16 = 5;

/// Travel of the bar indicator's slider (track width minus slider width, plus one).
pub const BAR_TRAVEL: u16 = 33;

/// Slider advance per frame.
pub const BAR_STEP: u16 = 2;

/// Spinner rotation per frame, radians.
pub const SPINNER_STEP: f32 = 0.5;

/// Wave scroll per frame, in columns.
pub const WAVE_STEP: f32 = 0.5;

/// Wave offset period: the scroll distance after which the wave repeats.
pub const WAVE_PERIOD: f32 = 10.0 * PI;

/// Loading indicator style.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LoadingStyle {
    /// Row of five dots with one enlarged.
    #[default]
    Dots = 0,
    /// Ring of eight dots shrinking behind the leader.
    Circle = 1,
    /// Slider running along a track.
    Bar = 2,
    /// Scrolling sine wave across the panel.
    Wave = 3,
}

impl LoadingStyle {
    /// Every style, in selector order.
    pub const ALL: [Self; 4] = [Self::Dots, Self::Circle, Self::Bar, Self::Wave];
}

impl TryFrom<u8> for LoadingStyle {
    type Error = DisplayError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Dots),
            1 => Ok(Self::Circle),
            2 => Ok(Self::Bar),
            3 => Ok(Self::Wave),
            other => Err(DisplayError::UnsupportedStyle(other)),
        }
    }
}

/// Five dots at y = 32; the one at index `active` has radius 3, the rest 1.
pub fn draw_dots<D>(
    display: &mut D,
    active: u16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for i in 0..DOT_COUNT {
        let radius = if i == active { 3 } else { 1 };
        fill_circle(display, 48 + i32::from(i) * 8, CENTER_Y, radius)?;
    }
    Ok(())
}

/// Eight dots on a radius-15 ring; the leader at `angle` is largest and the
/// trailing dots shrink.
pub fn draw_circle_spinner<D>(
    display: &mut D,
    angle: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for i in 0..8u32 {
        let a = angle + i as f32 * FRAC_PI_4;
        let x = offset_px(CENTER_X, cos(a) * 15.0);
        let y = offset_px(CENTER_Y, sin(a) * 15.0);
        let radius = if i == 0 { 3 } else { 4 - i / 2 };
        if radius > 0 {
            fill_circle(display, x, y, radius)?;
        }
    }
    Ok(())
}

/// 40x4 track at (44, 30) with an 8 px slider at `position`.
pub fn draw_bar<D>(
    display: &mut D,
    position: u16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    rect(display, 44, 30, 40, 4)?;
    fill_rect(display, 44 + i32::from(position), 30, 8, 4)
}

/// One pixel per column on `y = 32 + 8 sin((x + offset) * 0.2)`.
pub fn draw_wave<D>(
    display: &mut D,
    offset: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for x in 0..SCREEN_WIDTH as i32 {
        let y = offset_px(CENTER_Y, sin((x as f32 + offset) * 0.2) * 8.0);
        pixel(display, x, y)?;
    }
    Ok(())
}
