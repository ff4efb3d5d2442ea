//! Percentage-driven gauges: progress bar and battery.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::{fill_rect, rect};

/// Gap between a gauge outline and its fill, on every side.
pub const GAUGE_MARGIN: u32 = 2;

/// Width of the battery fill at 100%.
pub const BATTERY_INTERIOR: u32 = 28;

/// Filled width for `percentage` of an `inner`-pixel interior, rounded to the
/// nearest pixel.
///
/// Percentages above 100 are clamped, so the result never exceeds `inner`.
pub const fn fill_width(
    percentage: u8,
    inner: u32,
) -> u32 {
    let p = if percentage > 100 { 100 } else { percentage as u32 };
    (p * inner + 50) / 100
}

/// Progress bar: 1 px outline with a fill inset by [`GAUGE_MARGIN`].
///
/// Bars too small to have an interior only draw the outline.
pub fn draw_progress_bar<D>(
    display: &mut D,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    progress: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    rect(display, x, y, width, height)?;
    let inner_w = width.saturating_sub(2 * GAUGE_MARGIN);
    let inner_h = height.saturating_sub(2 * GAUGE_MARGIN);
    let fill = fill_width(progress, inner_w);
    if fill > 0 && inner_h > 0 {
        fill_rect(display, x + GAUGE_MARGIN as i32, y + GAUGE_MARGIN as i32, fill, inner_h)?;
    }
    Ok(())
}

/// Battery: 32x16 body at (44, 12), terminal nub on the right, and a fill
/// proportional to `percentage`.
pub fn draw_battery<D>(
    display: &mut D,
    percentage: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    rect(display, 44, 12, 32, 16)?;
    fill_rect(display, 76, 16, 4, 8)?;
    let fill = fill_width(percentage, BATTERY_INTERIOR);
    if fill > 0 {
        fill_rect(display, 46, 14, fill, 12)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MemoryCanvas;

    #[test]
    fn test_fill_width_endpoints() {
        assert_eq!(fill_width(0, 96), 0);
        assert_eq!(fill_width(100, 96), 96);
        assert_eq!(fill_width(0, BATTERY_INTERIOR), 0);
        assert_eq!(fill_width(100, BATTERY_INTERIOR), BATTERY_INTERIOR);
    }

    #[test]
    fn test_fill_width_bounded_and_monotonic() {
        for inner in [0, 1, 7, 28, 96, 124] {
            let mut previous = 0;
            for p in 0..=100 {
                let width = fill_width(p, inner);
                assert!(width <= inner, "p={p} inner={inner}");
                assert!(width >= previous, "not monotonic at p={p} inner={inner}");
                previous = width;
            }
        }
    }

    #[test]
    fn test_fill_width_rounds() {
        assert_eq!(fill_width(50, 28), 14);
        assert_eq!(fill_width(1, 96), 1, "0.96 rounds up");
        assert_eq!(fill_width(33, 28), 9, "9.24 rounds down");
    }

    #[test]
    fn test_fill_width_clamps_above_hundred() {
        assert_eq!(fill_width(150, 96), 96);
        assert_eq!(fill_width(255, 28), 28);
    }

    #[test]
    fn test_progress_bar_zero_has_no_fill() {
        let mut canvas = MemoryCanvas::new();
        draw_progress_bar(&mut canvas, 14, 40, 100, 8, 0).unwrap();
        assert!(!canvas.buffer().get(Point::new(16, 42)));
        assert!(canvas.buffer().get(Point::new(14, 40)), "outline corner");
    }

    #[test]
    fn test_progress_bar_full_fills_interior() {
        let mut canvas = MemoryCanvas::new();
        draw_progress_bar(&mut canvas, 14, 40, 100, 8, 100).unwrap();
        assert!(canvas.buffer().get(Point::new(16, 42)));
        assert!(canvas.buffer().get(Point::new(111, 45)), "last interior column");
        assert!(!canvas.buffer().get(Point::new(112, 42)), "margin stays clear");
        assert!(!canvas.buffer().get(Point::new(15, 42)), "left margin stays clear");
    }

    #[test]
    fn test_battery_fill_grows() {
        let mut low = MemoryCanvas::new();
        let mut high = MemoryCanvas::new();
        draw_battery(&mut low, 20).unwrap();
        draw_battery(&mut high, 80).unwrap();
        assert!(high.buffer().count_lit() > low.buffer().count_lit());
        assert!(high.buffer().get(Point::new(46 + 21, 20)));
        assert!(!low.buffer().get(Point::new(46 + 21, 20)));
    }
}
