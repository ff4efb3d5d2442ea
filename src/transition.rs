//! Buffer Transition Engine.
//!
//! Slide and zoom synthesize intermediate frames by resampling a
//! [`Snapshot`] of the presented frame instead of redrawing shapes. They only
//! need `sample(x, y)` from the snapshot and pixel writes on the target, so
//! the packed layout of the buffer never leaks in here.
//!
//! Every destination pixel is visited once per frame and its source
//! coordinate is bounds-checked by [`Snapshot::sample`] before use. Sources
//! outside the snapshot leave the destination cleared; nothing is wrapped or
//! clamped.
//!
//! Fade has no spatial component. It ramps the panel contrast, so this
//! module only provides the level sequences; the
//! [`Sequencer`](crate::sequencer::Sequencer) drives the panel.
//!
//! # Frame counts (128x64 panel)
//!
//! | Transition | Parameter            | Frames |
//! |------------|----------------------|--------|
//! | Slide      | offset 0..=128 by 8  | 17     |
//! | Zoom       | scale 100..=50 by 5  | 11 + 1 blank |
//! | Fade       | contrast 255..=0 by 5, then back | 52 + 52 |

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::canvas::Snapshot;

/// Horizontal distance a slide advances per frame.
pub const SLIDE_STRIDE: usize = 8;

/// First zoom scale, percent.
pub const ZOOM_START: u8 = 100;

/// Last zoom scale, percent.
pub const ZOOM_FLOOR: u8 = 50;

/// Zoom scale decrement per frame, percent.
pub const ZOOM_STEP: usize = 5;

/// Contrast change per fade step.
pub const FADE_STEP: usize = 5;

/// Slide direction.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlideDirection {
    /// Content moves toward x = 0.
    #[default]
    Left,
    /// Content moves toward the right edge.
    Right,
}

impl SlideDirection {
    /// Source column for destination column `x` at `offset`.
    #[inline]
    pub const fn source_x(
        self,
        x: i32,
        offset: i32,
    ) -> i32 {
        match self {
            Self::Left => x + offset,
            Self::Right => x - offset,
        }
    }
}

// =============================================================================
// Step Parameters
// =============================================================================

/// Slide offsets from 0 up to and including `width`.
///
/// The last offset pushes all content out, so the final frame is blank.
pub fn slide_offsets(width: u32) -> impl Iterator<Item = i32> { (0..=width as i32).step_by(SLIDE_STRIDE) }

/// Zoom scales in percent, from 100 down to the floor.
pub fn zoom_scales() -> impl Iterator<Item = u8> { (ZOOM_FLOOR..=ZOOM_START).rev().step_by(ZOOM_STEP) }

/// Contrast levels of the fade-out half: 255 down to 0.
pub fn fade_out_levels() -> impl Iterator<Item = u8> { (0..=u8::MAX).rev().step_by(FADE_STEP) }

/// Contrast levels of the fade-in half: 0 up to 255.
pub fn fade_in_levels() -> impl Iterator<Item = u8> { (0..=u8::MAX).step_by(FADE_STEP) }

// =============================================================================
// Frame Synthesis
// =============================================================================

fn destinations(snapshot: &Snapshot) -> impl Iterator<Item = Point> {
    let (width, height) = (snapshot.width(), snapshot.height());
    (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
}

/// Lit pixels of the slide frame at `offset`.
///
/// Destination `(x, y)` takes the snapshot pixel at `(x ± offset, y)` when
/// that source is in bounds.
pub fn slide_pixels(
    snapshot: &Snapshot,
    offset: i32,
    direction: SlideDirection,
) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
    destinations(snapshot).filter_map(move |dest| {
        let lit = snapshot.sample(direction.source_x(dest.x, offset), dest.y)?;
        lit.then_some(Pixel(dest, BinaryColor::On))
    })
}

/// Source coordinate for `dest` at `scale_percent`, scaling inversely around
/// the snapshot center. Truncates toward zero.
pub fn zoom_source(
    snapshot: &Snapshot,
    dest: Point,
    scale_percent: u8,
) -> Point {
    let scale = f32::from(scale_percent.max(1)) / 100.0;
    let (cx, cy) = (snapshot.width() / 2, snapshot.height() / 2);
    let map = |d: i32, c: i32| ((d - c) as f32 / scale + c as f32) as i32;
    Point::new(map(dest.x, cx), map(dest.y, cy))
}

/// Lit pixels of the zoom frame at `scale_percent`.
pub fn zoom_pixels(
    snapshot: &Snapshot,
    scale_percent: u8,
) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
    destinations(snapshot).filter_map(move |dest| {
        let source = zoom_source(snapshot, dest, scale_percent);
        let lit = snapshot.sample(source.x, source.y)?;
        lit.then_some(Pixel(dest, BinaryColor::On))
    })
}

/// Draw the slide frame at `offset` onto an already cleared `display`.
pub fn render_slide_frame<D>(
    display: &mut D,
    snapshot: &Snapshot,
    offset: i32,
    direction: SlideDirection,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.draw_iter(slide_pixels(snapshot, offset, direction))
}

/// Draw the zoom frame at `scale_percent` onto an already cleared `display`.
pub fn render_zoom_frame<D>(
    display: &mut D,
    snapshot: &Snapshot,
    scale_percent: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.draw_iter(zoom_pixels(snapshot, scale_percent))
}
