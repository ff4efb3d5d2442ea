//! Shape Library: glyphs composed from canvas primitives.
//!
//! Every function here is generic over `DrawTarget<Color = BinaryColor>` and
//! only issues draw calls. None of them clear the buffer, present, or wait;
//! composition and pacing belong to the caller.
//!
//! - [`faces`]: face expressions on the fixed face position
//! - [`icons`]: static status symbols
//! - [`gauges`]: percentage-driven battery and progress bar
//! - [`loading`]: phase-driven loading indicators
//! - [`motion`]: phase/size-driven frames used by the bounded animations
//!
//! Parametric glyphs are pure functions of their inputs: drawing twice with
//! the same phase or size on the same cleared buffer lights the same pixels.
//! Coordinates that fall off-screen are left to the canvas, which ignores them.

pub mod faces;
pub mod gauges;
pub mod icons;
pub mod loading;
pub mod motion;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Rectangle, RoundedRectangle};
use micromath::F32;

use crate::styles::{FILL, STROKE};

/// Detail level for glyphs and animations that exist in two variants.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Detail {
    /// Plain variant.
    #[default]
    Basic,
    /// Variant with extra decoration (motion lines, pulse rings, arrowheads).
    Embellished,
}

// =============================================================================
// Primitive Helpers
// =============================================================================

/// Single lit pixel.
#[inline]
pub(crate) fn pixel<D>(
    display: &mut D,
    x: i32,
    y: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Pixel(Point::new(x, y), BinaryColor::On).draw(display)
}

/// 1 px line between two points (both inclusive).
#[inline]
pub(crate) fn line<D>(
    display: &mut D,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(Point::new(x0, y0), Point::new(x1, y1))
        .into_styled(STROKE)
        .draw(display)
}

/// Circle outline of radius `r` around `(cx, cy)` (diameter `2r + 1`).
#[inline]
pub(crate) fn circle<D>(
    display: &mut D,
    cx: i32,
    cy: i32,
    r: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(Point::new(cx, cy), 2 * r + 1)
        .into_styled(STROKE)
        .draw(display)
}

/// Filled disc of radius `r` around `(cx, cy)`.
#[inline]
pub(crate) fn fill_circle<D>(
    display: &mut D,
    cx: i32,
    cy: i32,
    r: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(Point::new(cx, cy), 2 * r + 1)
        .into_styled(FILL)
        .draw(display)
}

/// Rectangle outline with top-left corner `(x, y)`.
#[inline]
pub(crate) fn rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(STROKE)
        .draw(display)
}

/// Filled rectangle. A zero width or height draws nothing.
#[inline]
pub(crate) fn fill_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(FILL)
        .draw(display)
}

/// Rounded rectangle outline with corner radius `r`.
#[inline]
pub(crate) fn round_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    r: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    RoundedRectangle::with_equal_corners(Rectangle::new(Point::new(x, y), Size::new(w, h)), Size::new(r, r))
        .into_styled(STROKE)
        .draw(display)
}

// =============================================================================
// Math Helpers
// =============================================================================

/// Sine through `micromath` so firmware and host builds agree bit for bit.
#[inline]
pub(crate) fn sin(x: f32) -> f32 { F32(x).sin().0 }

/// Cosine through `micromath`.
#[inline]
pub(crate) fn cos(x: f32) -> f32 { F32(x).cos().0 }

/// `origin + delta` truncated toward zero as a whole, so a negative
/// fractional offset lands on the same pixel as integer C arithmetic.
#[inline]
pub(crate) fn offset_px(
    origin: i32,
    delta: f32,
) -> i32 {
    (origin as f32 + delta) as i32
}

/// Arduino-style `map`: linear integer rescale of `x` from one range to another.
///
/// Integer division truncates toward zero. An empty input range returns `out_min`.
pub const fn map_range(
    x: i32,
    in_min: i32,
    in_max: i32,
    out_min: i32,
    out_max: i32,
) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0, 0, 31, 2, 32), 2);
        assert_eq!(map_range(31, 0, 31, 2, 32), 32);
        assert_eq!(map_range(15, 0, 31, 2, 32), 16);
        assert_eq!(map_range(31, 0, 31, 0, 128), 128);
        assert_eq!(map_range(5, 3, 3, 7, 9), 7);
    }

    #[test]
    fn test_trig_helpers() {
        assert!(sin(0.0).abs() < 1e-3);
        assert!((cos(0.0) - 1.0).abs() < 1e-3);
        assert!((sin(core::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_offset_truncates_whole_sum() {
        assert_eq!(offset_px(32, -0.5), 31, "not 32 - 0");
        assert_eq!(offset_px(32, 0.5), 32);
        assert_eq!(offset_px(64, -7.9), 56);
        assert_eq!(offset_px(64, 15.0), 79);
    }
}
