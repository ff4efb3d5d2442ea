//! Pre-computed text and stroke styles.
//!
//! `MonoTextStyle` and `PrimitiveStyle` values are `const`, so the draw
//! routines reference them directly instead of building style structs for
//! every frame.
//!
//! # Text Scales
//!
//! The panel uses two text sizes:
//! - [`TextScale::Normal`]: `FONT_6X10` (6 px advance), used by every screen
//! - [`TextScale::Large`]: `ProFont` 12pt, for callers composing their own
//!   headings with `draw_centered_text`
//!
//! Text is always positioned by its top-left corner ([`Baseline::Top`]) so a
//! `y` coordinate means the same thing for both scales.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::Baseline;
use embedded_graphics::text::renderer::TextRenderer;
use profont::PROFONT_12_POINT;

// =============================================================================
// Primitive Styles
// =============================================================================

/// 1 px outline in the lit color.
pub const STROKE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Solid fill in the lit color.
pub const FILL: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);

// =============================================================================
// Text Styles
// =============================================================================

/// Lit message text.
pub const TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

/// Lit title text.
pub const TITLE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_12_POINT, BinaryColor::On);

/// Font scale selector for centered text.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextScale {
    /// 6x10 message text.
    #[default]
    Normal,
    /// `ProFont` 12pt title text.
    Large,
}

impl TextScale {
    /// The text style for this scale.
    pub const fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        match self {
            Self::Normal => TEXT_STYLE,
            Self::Large => TITLE_STYLE,
        }
    }
}

/// Bounding box size of `text` rendered at `scale`.
///
/// An empty string measures as zero width.
pub fn measure_text(
    text: &str,
    scale: TextScale,
) -> Size {
    if text.is_empty() {
        return Size::zero();
    }
    scale.style().measure_string(text, Point::zero(), Baseline::Top).bounding_box.size
}

/// Width of `text` rendered at `scale`.
#[inline]
pub fn text_width(
    text: &str,
    scale: TextScale,
) -> u32 {
    measure_text(text, scale).width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_width_is_six_per_char() {
        assert_eq!(text_width("Checked In", TextScale::Normal), 60);
        assert_eq!(text_width("A", TextScale::Normal), 6);
    }

    #[test]
    fn test_empty_text_measures_zero() {
        assert_eq!(text_width("", TextScale::Normal), 0);
        assert_eq!(measure_text("", TextScale::Large), Size::zero());
    }

    #[test]
    fn test_large_is_wider() {
        assert!(text_width("Sync", TextScale::Large) > text_width("Sync", TextScale::Normal));
    }

    #[test]
    fn test_normal_height() {
        assert_eq!(measure_text("Hi", TextScale::Normal).height, 10);
    }
}
