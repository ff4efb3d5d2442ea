//! Face expressions.
//!
//! All faces share one outline: a circle of radius 20 centered at (64, 24),
//! leaving rows 45.. free for a centered message. Mouths are sampled from a
//! [`MouthCurve`], one pixel per column.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::{circle, fill_circle, fill_rect, line, pixel, sin};

/// Center of the face outline.
pub const FACE_CENTER: Point = Point::new(64, 24);

/// Radius of the face outline.
pub const FACE_RADIUS: u32 = 20;

/// Center of the left eye.
pub const LEFT_EYE: Point = Point::new(56, 17);

/// Center of the right eye.
pub const RIGHT_EYE: Point = Point::new(72, 17);

/// Radius of an open eye.
pub const EYE_RADIUS: u32 = 3;

/// Face expression selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expression {
    /// Open eyes, smile.
    Happy,
    /// Open eyes, wide open grin.
    VeryHappy,
    /// Open eyes, frown.
    Sad,
    /// Open eyes, deep frown, tears.
    VerySad,
    /// Open eyes, flat mouth.
    Neutral,
    /// One closed eye, smile.
    Wink,
    /// Flat mouth and a thought bubble.
    Thinking,
    /// Closed eyes, small smile and a "Z".
    Sleepy,
    /// Wavy mouth and a question mark.
    Confused,
    /// Sunglasses and a stepped smile.
    Cool,
}

impl Expression {
    /// Every expression, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Happy,
        Self::VeryHappy,
        Self::Sad,
        Self::VerySad,
        Self::Neutral,
        Self::Wink,
        Self::Thinking,
        Self::Sleepy,
        Self::Confused,
        Self::Cool,
    ];
}

// =============================================================================
// Mouth Curves
// =============================================================================

/// A sinusoidal mouth: column `i` of `len` is lit at
/// `y = baseline + direction * sin((i - center) * frequency) * amplitude`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MouthCurve {
    /// Leftmost column.
    pub x: i32,
    /// Number of columns.
    pub len: i32,
    /// Row at the curve's zero crossing.
    pub baseline: f32,
    /// Column index of the zero crossing.
    pub center: i32,
    /// Radians per column.
    pub frequency: f32,
    /// Peak deviation in rows.
    pub amplitude: f32,
    /// `1.0` bends down to the right, `-1.0` mirrors it.
    pub direction: f32,
}

impl MouthCurve {
    /// Smile shared by the happy and wink faces.
    pub const SMILE: Self = Self::new(56, 15, 28.0, 7, 0.3, 3.0, 1.0);

    /// Frown of the sad face.
    pub const FROWN: Self = Self::new(56, 15, 32.0, 7, 0.3, 3.0, -1.0);

    /// Deeper frown of the very sad face.
    pub const DEEP_FROWN: Self = Self::new(56, 15, 35.0, 7, 0.4, 5.0, -1.0);

    /// Small smile of the sleepy face.
    pub const DOZE: Self = Self::new(56, 15, 28.0, 7, 0.2, 2.0, 1.0);

    /// Wavy mouth of the confused face.
    pub const WOBBLE: Self = Self::new(59, 10, 32.0, 0, 0.6, 2.0, 1.0);

    /// Create a curve.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        x: i32,
        len: i32,
        baseline: f32,
        center: i32,
        frequency: f32,
        amplitude: f32,
        direction: f32,
    ) -> Self {
        Self {
            x,
            len,
            baseline,
            center,
            frequency,
            amplitude,
            direction,
        }
    }

    /// The lit point for column `i` (truncated toward zero).
    pub fn point(
        &self,
        i: i32,
    ) -> Point {
        let offset = sin((i - self.center) as f32 * self.frequency) * self.amplitude;
        Point::new(self.x + i, (self.baseline + self.direction * offset) as i32)
    }

    /// All lit points, left to right.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ { (0..self.len).map(|i| self.point(i)) }

    /// Draw the curve.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        display.draw_iter(self.points().map(|point| Pixel(point, BinaryColor::On)))
    }
}

// =============================================================================
// Face Parts
// =============================================================================

fn outline<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    circle(display, FACE_CENTER.x, FACE_CENTER.y, FACE_RADIUS)
}

fn open_eyes<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fill_circle(display, LEFT_EYE.x, LEFT_EYE.y, EYE_RADIUS)?;
    fill_circle(display, RIGHT_EYE.x, RIGHT_EYE.y, EYE_RADIUS)
}

/// Open grin: a flat upper lip closed by a half-sine lower lip.
fn grin<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    const LEFT: i32 = 55;
    const WIDTH: i32 = 19;
    const TOP: i32 = 28;
    line(display, LEFT, TOP, LEFT + WIDTH - 1, TOP)?;
    for i in 0..WIDTH {
        let depth = sin(i as f32 * core::f32::consts::PI / (WIDTH - 1) as f32) * 6.0;
        pixel(display, LEFT + i, TOP + depth as i32)?;
    }
    Ok(())
}

/// Draw `expression` at the fixed face position.
pub fn draw_face<D>(
    display: &mut D,
    expression: Expression,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    outline(display)?;
    match expression {
        Expression::Happy => {
            open_eyes(display)?;
            MouthCurve::SMILE.draw(display)
        }
        Expression::VeryHappy => {
            open_eyes(display)?;
            grin(display)
        }
        Expression::Sad => {
            open_eyes(display)?;
            MouthCurve::FROWN.draw(display)
        }
        Expression::VerySad => {
            open_eyes(display)?;
            MouthCurve::DEEP_FROWN.draw(display)?;
            // tears
            line(display, 53, 20, 53, 28)?;
            line(display, 75, 20, 75, 28)
        }
        Expression::Neutral => {
            open_eyes(display)?;
            line(display, 56, 32, 72, 32)
        }
        Expression::Wink => {
            line(display, 54, 17, 58, 17)?;
            fill_circle(display, RIGHT_EYE.x, RIGHT_EYE.y, EYE_RADIUS)?;
            MouthCurve::SMILE.draw(display)
        }
        Expression::Thinking => {
            open_eyes(display)?;
            // thought bubble
            circle(display, 84, 14, 3)?;
            circle(display, 80, 18, 2)?;
            circle(display, 76, 20, 1)?;
            line(display, 58, 32, 70, 32)
        }
        Expression::Sleepy => {
            line(display, 54, 17, 58, 17)?;
            line(display, 70, 17, 74, 17)?;
            // Z
            line(display, 84, 14, 88, 14)?;
            line(display, 88, 14, 84, 18)?;
            line(display, 84, 18, 88, 18)?;
            MouthCurve::DOZE.draw(display)
        }
        Expression::Confused => {
            open_eyes(display)?;
            MouthCurve::WOBBLE.draw(display)?;
            // question mark
            circle(display, 84, 14, 2)?;
            pixel(display, 84, 18)
        }
        Expression::Cool => {
            // sunglasses
            fill_rect(display, 52, 15, 8, 4)?;
            fill_rect(display, 68, 15, 8, 4)?;
            line(display, 60, 17, 68, 17)?;
            for i in 0..12 {
                pixel(display, 58 + i, 30 + if i < 6 { 0 } else { 2 })?;
            }
            Ok(())
        }
    }
}
