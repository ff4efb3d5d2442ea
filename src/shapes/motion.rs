//! Frames of the moving glyphs: card swipe, heartbeat, sync, Wi-Fi
//! connecting and power on/off.
//!
//! Each function draws one frame for a given position, size or phase. The
//! matching `*_positions`/`*_sizes` iterators give the frame parameters of the
//! bounded sequences so the [`Sequencer`](crate::sequencer::Sequencer) and the
//! tests agree on the step counts.

use core::f32::consts::{FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, PI};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use micromath::F32;

use super::{Detail, circle, cos, fill_circle, line, map_range, offset_px, pixel, round_rect, sin};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_WIDTH};

// =============================================================================
// Card Swipe
// =============================================================================

/// Swiped card width.
pub const CARD_WIDTH: i32 = 30;

/// Swiped card height.
pub const CARD_HEIGHT: i32 = 20;

/// Horizontal advance per swipe frame.
pub const SWIPE_STRIDE: usize = 4;

/// Card x positions of the swipe: from fully off the left edge to just past
/// the right edge.
pub fn swipe_positions() -> impl Iterator<Item = i32> {
    (-CARD_WIDTH..=SCREEN_WIDTH as i32).step_by(SWIPE_STRIDE)
}

/// Card at `x` with its stripe; embellished adds up to three pairs of motion
/// lines trailing behind it.
pub fn draw_swipe_card<D>(
    display: &mut D,
    x: i32,
    detail: Detail,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    round_rect(display, x, 22, CARD_WIDTH as u32, CARD_HEIGHT as u32, 2)?;
    line(display, x + 5, 32, x + 25, 32)?;

    if detail == Detail::Embellished {
        for i in 1..=3 {
            let trail = x - i * 8;
            if trail > -10 {
                line(display, trail, 28, trail + 5, 28)?;
                line(display, trail, 36, trail + 5, 36)?;
            }
        }
    }
    Ok(())
}

// =============================================================================
// Heartbeat
// =============================================================================

/// Period of the ECG trace and the basic sync rotation, in frames.
pub const PULSE_PERIOD: u16 = 16;

const ECG_POINTS: i32 = 32;
const ECG_BASE: f32 = 32.0;
const ECG_AMPLITUDE: f32 = 16.0;

/// Largest pulsing heart size.
pub const HEART_MAX: i32 = 20;

/// Smallest pulsing heart size.
pub const HEART_MIN: i32 = 10;

fn ecg_y(
    i: i32,
    s: f32,
) -> i32 {
    let spike = ECG_POINTS / 2;
    let offset = match i - spike {
        0 => -ECG_AMPLITUDE * s,
        1 => ECG_AMPLITUDE * s,
        2 => -ECG_AMPLITUDE / 2.0 * s,
        _ => 0.0,
    };
    (ECG_BASE + offset) as i32
}

/// ECG trace across the panel: a flat baseline with a three-point spike in
/// the middle whose height follows `sin(frame * PI/8)`.
pub fn draw_ecg_trace<D>(
    display: &mut D,
    frame: u16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let s = sin(f32::from(frame) * FRAC_PI_8);
    let point = |i: i32| Point::new(map_range(i, 0, ECG_POINTS - 1, 0, SCREEN_WIDTH as i32), ecg_y(i, s));

    let mut previous = point(0);
    for i in 1..ECG_POINTS {
        let current = point(i);
        line(display, previous.x, previous.y, current.x, current.y)?;
        previous = current;
    }
    Ok(())
}

/// Heart sizes of the embellished heartbeat: shrink from 20 to 10, then grow
/// back. The first half carries pulse rings.
pub fn heart_sizes() -> impl Iterator<Item = (i32, bool)> {
    let contract = (HEART_MIN..=HEART_MAX).rev().map(|size| (size, true));
    let expand = (HEART_MIN..=HEART_MAX).map(|size| (size, false));
    contract.chain(expand)
}

/// Outline of 31 points on an arc of radius `size / 2` around the center.
pub fn draw_heart_outline<D>(
    display: &mut D,
    size: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let radius = (size / 2) as f32;
    for i in 0..=30 {
        let a = i as f32 * (PI / 15.0) - FRAC_PI_4;
        let x = offset_px(CENTER_X, cos(a) * radius);
        let y = offset_px(CENTER_Y, sin(a) * radius);
        pixel(display, x, y)?;
    }
    Ok(())
}

/// Up to three rings at `size + 5`, `+10`, `+15`, none larger than 35.
pub fn draw_pulse_rings<D>(
    display: &mut D,
    size: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for ring in 1..=3 {
        let radius = size + ring * 5;
        if radius <= HEART_MAX + 15 {
            circle(display, CENTER_X, CENTER_Y, radius as u32)?;
        }
    }
    Ok(())
}

// =============================================================================
// Sync
// =============================================================================

const SYNC_RADIUS: f32 = 16.0;
const SPINNER_RADIUS: f32 = 15.0;
const ARROWHEAD: f32 = 4.0;

/// Angular step of the embellished sync spinner, in degrees.
pub const SPINNER_STRIDE: usize = 30;

/// Angles of the embellished sync spinner: one full turn, 12 frames.
pub fn spinner_degrees() -> impl Iterator<Item = u16> { (0..360).step_by(SPINNER_STRIDE) }

/// Two bent arrows, half a turn apart, rotated by `frame * PI/8`.
pub fn draw_sync_arrows<D>(
    display: &mut D,
    frame: u16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let angle = f32::from(frame) * FRAC_PI_8;
    for i in 0..2 {
        let a = angle + i as f32 * PI;
        let x1 = offset_px(CENTER_X, cos(a) * SYNC_RADIUS);
        let y1 = offset_px(CENTER_Y, sin(a) * SYNC_RADIUS);
        let x2 = offset_px(CENTER_X, cos(a + FRAC_PI_4) * (SYNC_RADIUS - 8.0));
        let y2 = offset_px(CENTER_Y, sin(a + FRAC_PI_4) * (SYNC_RADIUS - 8.0));
        line(display, CENTER_X, CENTER_Y, x1, y1)?;
        line(display, x1, y1, x2, y2)?;
    }
    Ok(())
}

fn arrowhead<D>(
    display: &mut D,
    from: Point,
    tip: Point,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let delta = tip - from;
    let angle = F32(delta.y as f32).atan2(F32(delta.x as f32)).0;
    for barb in [angle - FRAC_PI_6, angle + FRAC_PI_6] {
        let x = offset_px(tip.x, -(ARROWHEAD * cos(barb)));
        let y = offset_px(tip.y, -(ARROWHEAD * sin(barb)));
        line(display, tip.x, tip.y, x, y)?;
    }
    Ok(())
}

/// Two opposite arrows from the hub at `degrees`, with arrowheads and a
/// radius-3 hub ring.
pub fn draw_sync_spinner<D>(
    display: &mut D,
    degrees: u16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = Point::new(CENTER_X, CENTER_Y);
    let angle = f32::from(degrees) * PI / 180.0;
    for a in [angle, angle + PI] {
        let tip = Point::new(
            offset_px(CENTER_X, cos(a) * SPINNER_RADIUS),
            offset_px(CENTER_Y, sin(a) * SPINNER_RADIUS),
        );
        line(display, center.x, center.y, tip.x, tip.y)?;
        arrowhead(display, center, tip)?;
    }
    circle(display, CENTER_X, CENTER_Y, 3)
}

// =============================================================================
// Wi-Fi Connecting
// =============================================================================

/// Period of the Wi-Fi connecting animation, in frames.
pub const WIFI_PERIOD: u16 = 32;

/// Number of arcs lit at `frame`: one more every eight frames.
pub const fn wifi_arc_count(frame: u16) -> u16 { (frame % WIFI_PERIOD) / 8 + 1 }

/// Concentric arcs around the center, outermost (radius 22) first, one more
/// every eight frames down to radius 4.
pub fn draw_wifi_arcs<D>(
    display: &mut D,
    frame: u16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for i in 0..wifi_arc_count(frame) {
        let radius = (3 - u32::from(i)) * 6 + 4;
        circle(display, CENTER_X, CENTER_Y, radius)?;
    }
    Ok(())
}

// =============================================================================
// Power
// =============================================================================

/// Frames of the growing/shrinking disc.
pub const POWER_DISC_FRAMES: i32 = 32;

/// Frames of the power glyph brightness ramp.
pub const POWER_GLYPH_FRAMES: i32 = 16;

/// Disc radius for disc frame `i` (0..32): 2 up to 32.
pub const fn power_disc_radius(i: i32) -> u32 { map_range(i, 0, POWER_DISC_FRAMES - 1, 2, 32) as u32 }

/// Contrast for glyph frame `i` (0..16) of a ramp from dark to full.
pub fn power_ramp_level(i: i32) -> u8 {
    let brightness = i as f32 / (POWER_GLYPH_FRAMES - 1) as f32;
    (brightness * 255.0) as u8
}

/// Filled disc of disc frame `i`.
pub fn draw_power_disc<D>(
    display: &mut D,
    i: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fill_circle(display, CENTER_X, CENTER_Y, power_disc_radius(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MemoryCanvas;

    fn render<F>(draw: F) -> MemoryCanvas
    where
        F: FnOnce(&mut MemoryCanvas) -> Result<(), core::convert::Infallible>,
    {
        let mut canvas = MemoryCanvas::new();
        draw(&mut canvas).unwrap();
        canvas
    }

    #[test]
    fn test_swipe_positions() {
        let positions: heapless::Vec<i32, 64> = swipe_positions().collect();
        assert_eq!(positions.first(), Some(&-30));
        assert_eq!(positions.last(), Some(&126));
        assert_eq!(positions.len(), 40);
    }

    #[test]
    fn test_swipe_motion_lines_only_when_embellished() {
        let basic = render(|c| draw_swipe_card(c, 40, Detail::Basic));
        let fancy = render(|c| draw_swipe_card(c, 40, Detail::Embellished));
        assert!(!basic.buffer().get(Point::new(32, 28)));
        assert!(fancy.buffer().get(Point::new(32, 28)));
        assert!(fancy.buffer().get(Point::new(16, 36)));
    }

    #[test]
    fn test_swipe_off_screen_is_clipped() {
        let canvas = render(|c| draw_swipe_card(c, -30, Detail::Basic));
        assert!(canvas.buffer().is_blank(), "card is entirely left of the panel");
    }

    #[test]
    fn test_ecg_flat_at_phase_zero() {
        let canvas = render(|c| draw_ecg_trace(c, 0));
        let bounds = canvas.buffer().lit_bounds().unwrap();
        assert!(bounds.size.height <= 2, "no spike when sin is zero");
        assert!((31..=32).contains(&bounds.top_left.y));
    }

    #[test]
    fn test_ecg_spike_at_quarter_period() {
        let canvas = render(|c| draw_ecg_trace(c, 4));
        let bounds = canvas.buffer().lit_bounds().unwrap();
        assert!(bounds.top_left.y <= 17, "spike reaches up");
        assert!(bounds.bottom_right().unwrap().y >= 47, "and down");
    }

    #[test]
    fn test_heart_sizes() {
        let sizes: heapless::Vec<(i32, bool), 32> = heart_sizes().collect();
        assert_eq!(sizes.len(), 22);
        assert_eq!(sizes[0], (20, true));
        assert_eq!(sizes[10], (10, true));
        assert_eq!(sizes[11], (10, false));
        assert_eq!(sizes[21], (20, false));
    }

    #[test]
    fn test_pulse_rings_capped() {
        let small = render(|c| draw_pulse_rings(c, 10));
        let large = render(|c| draw_pulse_rings(c, 20));
        // size 10: rings 15, 20, 25; size 20: rings 25, 30, 35
        assert!(small.buffer().get(Point::new(64 + 15, 32)));
        assert!(large.buffer().get(Point::new(64 + 35, 32)));
        assert!(!large.buffer().get(Point::new(64 + 20, 32)));
    }

    #[test]
    fn test_spinner_covers_full_turn() {
        let degrees: heapless::Vec<u16, 16> = spinner_degrees().collect();
        assert_eq!(degrees.len(), 12);
        assert_eq!(degrees.last(), Some(&330));
    }

    #[test]
    fn test_spinner_has_hub() {
        let canvas = render(|c| draw_sync_spinner(c, 90));
        assert!(canvas.buffer().get(Point::new(67, 32)), "hub ring");
    }

    #[test]
    fn test_sync_arrows_rotate() {
        let first = render(|c| draw_sync_arrows(c, 0));
        let second = render(|c| draw_sync_arrows(c, 1));
        assert_ne!(first.buffer(), second.buffer());
        assert_eq!(first.buffer(), render(|c| draw_sync_arrows(c, 0)).buffer());
    }

    #[test]
    fn test_wifi_arcs_accumulate() {
        assert_eq!(wifi_arc_count(0), 1);
        assert_eq!(wifi_arc_count(7), 1);
        assert_eq!(wifi_arc_count(8), 2);
        assert_eq!(wifi_arc_count(31), 4);
        assert_eq!(wifi_arc_count(32), 1);

        let first = render(|c| draw_wifi_arcs(c, 0));
        let last = render(|c| draw_wifi_arcs(c, 31));
        assert!(first.buffer().get(Point::new(64 + 22, 32)));
        assert!(!first.buffer().get(Point::new(64 + 4, 32)));
        assert!(last.buffer().get(Point::new(64 + 4, 32)));
    }

    #[test]
    fn test_power_disc_radius() {
        assert_eq!(power_disc_radius(0), 2);
        assert_eq!(power_disc_radius(31), 32);
    }

    #[test]
    fn test_power_ramp_level() {
        assert_eq!(power_ramp_level(0), 0);
        assert_eq!(power_ramp_level(15), 255);
        assert!(power_ramp_level(7) < power_ramp_level(8));
    }
}
