//! Scripted walk-throughs of everything the terminal can show.
//!
//! Every demo returns `Err(DisplayError::Communication)` once the window is
//! closed, which `main` treats as a normal exit.

use core::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};

use attendance_display::canvas::Canvas;
use attendance_display::shapes::faces::{Expression, draw_face};
use attendance_display::shapes::{Detail, icons};
use attendance_display::{DisplayError, LoadingStyle, SequenceReport, Sequencer, SlideDirection, screens};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use log::{debug, info};

use crate::timing::{DEMO_PAUSE, POLL_INTERVAL, POLL_STEPS, StdDelay};
use crate::window::WindowCanvas;

pub type Preview<'a> = Sequencer<'a, WindowCanvas, StdDelay>;

type Glyph = fn(&mut WindowCanvas) -> Result<(), Infallible>;

const ICONS: [(&str, Glyph); 13] = [
    ("wifi", |c: &mut WindowCanvas| icons::draw_wifi(c, true)),
    ("wifi off", |c: &mut WindowCanvas| icons::draw_wifi(c, false)),
    ("card", icons::draw_card::<WindowCanvas>),
    ("checkmark", icons::draw_checkmark::<WindowCanvas>),
    ("cross", icons::draw_cross::<WindowCanvas>),
    ("thumbs up", icons::draw_thumbs_up::<WindowCanvas>),
    ("thumbs down", icons::draw_thumbs_down::<WindowCanvas>),
    ("heart", icons::draw_heart::<WindowCanvas>),
    ("locked", |c: &mut WindowCanvas| icons::draw_lock(c, true)),
    ("unlocked", |c: &mut WindowCanvas| icons::draw_lock(c, false)),
    ("clock", icons::draw_clock::<WindowCanvas>),
    ("gear", icons::draw_gear::<WindowCanvas>),
    ("power", icons::draw_power::<WindowCanvas>),
];

// =============================================================================
// Helpers
// =============================================================================

/// Wait `duration` while keeping the window responsive.
fn pause(
    preview: &mut Preview<'_>,
    duration: Duration,
) -> Result<(), DisplayError> {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        if !preview.canvas_mut().idle() {
            return Err(DisplayError::Communication);
        }
        thread::sleep(POLL_INTERVAL.min(deadline.saturating_duration_since(Instant::now())));
    }
    Ok(())
}

fn still(
    preview: &mut Preview<'_>,
    name: &str,
    draw: impl FnOnce(&mut WindowCanvas) -> Result<(), Infallible>,
) -> Result<(), DisplayError> {
    debug!("still: {name}");
    let canvas = preview.canvas_mut();
    canvas.clear(BinaryColor::Off).map_err(DisplayError::draw)?;
    draw(canvas).map_err(DisplayError::draw)?;
    canvas.present()?;
    pause(preview, DEMO_PAUSE / 2)
}

fn played(
    name: &str,
    report: SequenceReport,
) {
    info!("{name}: {} frames{}", report.frames, if report.cancelled { " (cancelled)" } else { "" });
}

/// Drive a single-step indicator the way a polling loop would.
fn poll<'a, F>(
    preview: &mut Preview<'a>,
    name: &str,
    mut step: F,
) -> Result<(), DisplayError>
where
    F: FnMut(&mut Preview<'a>) -> Result<(), DisplayError>,
{
    info!("{name}: {POLL_STEPS} polled frames");
    for _ in 0..POLL_STEPS {
        step(preview)?;
        pause(preview, POLL_INTERVAL)?;
    }
    Ok(())
}

// =============================================================================
// Demos
// =============================================================================

/// Every named screen, then every face and icon.
pub fn run_screens(preview: &mut Preview<'_>) -> Result<(), DisplayError> {
    info!("screens");
    screens::show_card_scan(preview.canvas_mut(), "Scan your card")?;
    pause(preview, DEMO_PAUSE)?;
    screens::show_success(preview.canvas_mut(), "Welcome, Alex")?;
    pause(preview, DEMO_PAUSE)?;
    screens::show_error(preview.canvas_mut(), "Unknown card")?;
    pause(preview, DEMO_PAUSE)?;
    screens::show_wifi_status(preview.canvas_mut(), true)?;
    pause(preview, DEMO_PAUSE)?;
    screens::show_wifi_status(preview.canvas_mut(), false)?;
    pause(preview, DEMO_PAUSE)?;
    screens::show_info(preview.canvas_mut(), "Info", "Sync pending")?;
    pause(preview, DEMO_PAUSE)?;
    for progress in (0..=100).step_by(10) {
        screens::show_loading(preview.canvas_mut(), "Uploading", progress)?;
        pause(preview, POLL_INTERVAL * 2)?;
    }
    for percentage in [100, 60, 15] {
        screens::show_battery(preview.canvas_mut(), percentage)?;
        pause(preview, DEMO_PAUSE / 2)?;
    }

    for expression in Expression::ALL {
        still(preview, "face", |c| draw_face(c, expression))?;
    }
    for (name, glyph) in ICONS {
        still(preview, name, glyph)?;
    }
    Ok(())
}

/// Bounded animations in both detail levels, then the single-step indicators.
pub fn run_animations(preview: &mut Preview<'_>) -> Result<(), DisplayError> {
    info!("animations");
    played("power on", preview.animate_power_on()?);
    pause(preview, DEMO_PAUSE)?;
    played("success", preview.animate_success()?);
    pause(preview, DEMO_PAUSE)?;
    played("error", preview.animate_error()?);
    pause(preview, DEMO_PAUSE)?;

    for detail in [Detail::Basic, Detail::Embellished] {
        debug!("detail {detail:?}");
        played("card swipe", preview.animate_card_swipe(detail)?);
        played("heartbeat", preview.animate_heartbeat(detail)?);
        played("sync", preview.animate_sync(detail)?);
        pause(preview, DEMO_PAUSE / 2)?;
    }

    preview.reset_phases();
    for style in LoadingStyle::ALL {
        poll(preview, "processing", |p| p.animate_processing(style))?;
    }
    poll(preview, "wifi connecting", Preview::animate_wifi_connecting)?;
    poll(preview, "sync step", Preview::step_sync)?;
    poll(preview, "heartbeat step", Preview::step_heartbeat)?;

    played("power off", preview.animate_power_off()?);
    pause(preview, DEMO_PAUSE)
}

/// Each buffer transition, starting from a fresh screen every time.
pub fn run_transitions(preview: &mut Preview<'_>) -> Result<(), DisplayError> {
    info!("transitions");
    for direction in [SlideDirection::Left, SlideDirection::Right] {
        screens::show_success(preview.canvas_mut(), "Checked in")?;
        pause(preview, DEMO_PAUSE / 2)?;
        played("slide", preview.transition_slide(direction)?);
    }

    screens::show_card_scan(preview.canvas_mut(), "Scan your card")?;
    pause(preview, DEMO_PAUSE / 2)?;
    played("zoom", preview.transition_zoom()?);

    screens::show_info(preview.canvas_mut(), "Goodbye", "See you tomorrow")?;
    pause(preview, DEMO_PAUSE / 2)?;
    played("fade", preview.transition_fade()?);
    pause(preview, DEMO_PAUSE)
}
