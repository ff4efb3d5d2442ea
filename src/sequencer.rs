//! Frame Sequencer: timed animations and transitions on an owned canvas.
//!
//! # Sequencing Patterns
//!
//! - **Bounded sequences** (`animate_*` returning a [`SequenceReport`], and
//!   `transition_*`): clear, draw, present and wait for a fixed number of
//!   steps. They block for their whole duration.
//! - **Single steps** (`animate_processing`, `animate_wifi_connecting`,
//!   `step_sync`, `step_heartbeat`): draw and present exactly one frame, advance
//!   a phase owned by the sequencer and return without waiting. Drive these
//!   from a polling loop to keep the terminal responsive.
//!
//! # Waiting
//!
//! Every wait goes through the injected [`DelayNs`]. Durations come from the
//! sequencer's [`Timing`], except the fixed blink period of the success and
//! error animations.
//!
//! # Cancellation
//!
//! With [`Sequencer::with_cancel`], bounded sequences check the flag before
//! each step. A raised flag stops the sequence after the last presented frame
//! and the report says so. Contrast-driven sequences restore full contrast
//! when they stop early. The sequencer never clears the flag.
//!
//! # Degraded Panels
//!
//! A panel that is not ready fails every call with
//! [`DisplayError::NotInitialized`] before anything is drawn. A panel without
//! contrast control fails the fade with [`DisplayError::ContrastUnavailable`]
//! and runs power on/off without their brightness stage. Each gap is logged
//! once per sequencer.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_hal::delay::DelayNs;

use crate::canvas::{Canvas, Snapshot};
use crate::config::{BLINK_DELAY_MS, Timing};
use crate::error::DisplayError;
use crate::phase::{AngularPhase, Phase};
use crate::shapes::loading::{self, LoadingStyle};
use crate::shapes::motion::{self, POWER_DISC_FRAMES, POWER_GLYPH_FRAMES, PULSE_PERIOD, WIFI_PERIOD};
use crate::shapes::{Detail, icons};
use crate::transition::{self, SlideDirection};

/// Blink cycles of the success and error animations.
pub const BLINK_COUNT: u16 = 3;

/// Period of the frame counter shared by all processing styles.
pub const PROCESSING_PERIOD: u16 = 8;

/// Outcome of a bounded sequence.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceReport {
    /// Frames presented.
    pub frames: u16,
    /// Whether the cancel flag stopped the sequence early.
    pub cancelled: bool,
}

impl SequenceReport {
    fn merge(
        &mut self,
        other: Self,
    ) {
        self.frames += other.frames;
        self.cancelled |= other.cancelled;
    }
}

/// Phases of the four loading styles and the shared processing frame counter.
#[derive(Clone, Copy, Debug)]
struct LoadingPhases {
    dots: Phase,
    bar: Phase,
    spinner: AngularPhase,
    wave: AngularPhase,
    frame: Phase,
}

impl LoadingPhases {
    const fn new() -> Self {
        Self {
            dots: Phase::counter(loading::DOT_COUNT),
            bar: Phase::new(loading::BAR_STEP, loading::BAR_TRAVEL),
            spinner: AngularPhase::radians(loading::SPINNER_STEP),
            wave: AngularPhase::new(loading::WAVE_STEP, loading::WAVE_PERIOD),
            frame: Phase::counter(PROCESSING_PERIOD),
        }
    }
}

/// Which capability gaps have already been logged.
#[derive(Clone, Copy, Default, Debug)]
struct CapabilityLatch {
    not_ready: bool,
    no_contrast: bool,
}

/// Owns a canvas and a waiter and runs animations on them.
///
/// All animation state lives here, so independent sequencers never share
/// motion. Calls take `&mut self`: one animation runs at a time and a draw
/// callback cannot start another.
pub struct Sequencer<'a, C, D> {
    canvas: C,
    delay: D,
    timing: Timing,
    cancel: Option<&'a AtomicBool>,
    loading: LoadingPhases,
    wifi: Phase,
    sync: Phase,
    heartbeat: Phase,
    latch: CapabilityLatch,
}

impl<'a, C, D> Sequencer<'a, C, D>
where
    C: Canvas,
    D: DelayNs,
{
    /// Sequencer with default timing and no cancel flag.
    pub const fn new(
        canvas: C,
        delay: D,
    ) -> Self {
        Self {
            canvas,
            delay,
            timing: Timing::new(),
            cancel: None,
            loading: LoadingPhases::new(),
            wifi: Phase::counter(WIFI_PERIOD),
            sync: Phase::counter(PULSE_PERIOD),
            heartbeat: Phase::counter(PULSE_PERIOD),
            latch: CapabilityLatch {
                not_ready: false,
                no_contrast: false,
            },
        }
    }

    /// Replace the timing.
    #[must_use]
    pub fn with_timing(
        mut self,
        timing: Timing,
    ) -> Self {
        self.timing = timing;
        self
    }

    /// Check `flag` before every step of a bounded sequence.
    #[must_use]
    pub fn with_cancel(
        mut self,
        flag: &'a AtomicBool,
    ) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[inline]
    pub const fn timing(&self) -> Timing { self.timing }

    #[inline]
    pub const fn canvas(&self) -> &C { &self.canvas }

    /// Mutable access for composing screens on the owned canvas.
    #[inline]
    pub fn canvas_mut(&mut self) -> &mut C { &mut self.canvas }

    /// Give back the canvas and the waiter.
    pub fn into_parts(self) -> (C, D) { (self.canvas, self.delay) }

    /// Current value of the processing frame counter.
    #[inline]
    pub const fn processing_frame(&self) -> u16 { self.loading.frame.value() }

    /// Restart every single-step animation from its first frame.
    pub fn reset_phases(&mut self) {
        self.loading = LoadingPhases::new();
        self.wifi.reset();
        self.sync.reset();
        self.heartbeat.reset();
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn is_cancelled(&self) -> bool { self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) }

    fn ensure_ready(&mut self) -> Result<(), DisplayError> {
        if self.canvas.is_ready() {
            return Ok(());
        }
        if !self.latch.not_ready {
            self.latch.not_ready = true;
            warn!("display not initialized, animations disabled");
        }
        Err(DisplayError::NotInitialized)
    }

    fn require_contrast(&mut self) -> Result<(), DisplayError> {
        if self.canvas.has_contrast() {
            return Ok(());
        }
        if !self.latch.no_contrast {
            self.latch.no_contrast = true;
            warn!("display has no contrast control, brightness effects disabled");
        }
        Err(DisplayError::ContrastUnavailable)
    }

    /// Clear, draw and present one frame.
    fn frame<F>(
        &mut self,
        draw: F,
    ) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut C) -> Result<(), C::Error>,
    {
        self.canvas.clear(BinaryColor::Off).map_err(DisplayError::draw)?;
        draw(&mut self.canvas).map_err(DisplayError::draw)?;
        self.canvas.present()
    }

    /// One frame per step, each followed by a `wait_ms` wait.
    fn run_frames<I, F>(
        &mut self,
        steps: I,
        wait_ms: u32,
        mut draw: F,
    ) -> Result<SequenceReport, DisplayError>
    where
        I: IntoIterator,
        F: FnMut(&mut C, I::Item) -> Result<(), C::Error>,
    {
        let mut report = SequenceReport::default();
        for step in steps {
            if self.is_cancelled() {
                debug!("sequence cancelled after {} frames", report.frames);
                report.cancelled = true;
                break;
            }
            self.frame(|canvas| draw(canvas, step))?;
            report.frames += 1;
            self.delay.delay_ms(wait_ms);
        }
        Ok(report)
    }

    /// Full contrast, dim released.
    fn restore_brightness(&mut self) -> Result<(), DisplayError> {
        self.canvas.set_contrast(u8::MAX)?;
        self.canvas.set_dimmed(false)
    }

    // =========================================================================
    // Blink Animations
    // =========================================================================

    fn blink<F>(
        &mut self,
        glyph: F,
    ) -> Result<SequenceReport, DisplayError>
    where
        F: Fn(&mut C) -> Result<(), C::Error>,
    {
        self.ensure_ready()?;
        let mut report = self.run_frames(0..BLINK_COUNT * 2, BLINK_DELAY_MS, |canvas, step| {
            if step % 2 == 0 { glyph(canvas) } else { Ok(()) }
        })?;
        if !report.cancelled {
            self.frame(&glyph)?;
            report.frames += 1;
        }
        Ok(report)
    }

    /// Blink the checkmark three times, then leave it shown.
    pub fn animate_success(&mut self) -> Result<SequenceReport, DisplayError> {
        self.blink(|canvas: &mut C| icons::draw_checkmark(canvas))
    }

    /// Blink the cross three times, then leave it shown.
    pub fn animate_error(&mut self) -> Result<SequenceReport, DisplayError> {
        self.blink(|canvas: &mut C| icons::draw_cross(canvas))
    }

    // =========================================================================
    // Single-Step Animations
    // =========================================================================

    /// Draw one frame of the `style` loading indicator and advance its phase.
    pub fn animate_processing(
        &mut self,
        style: LoadingStyle,
    ) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let phases = self.loading;
        match style {
            LoadingStyle::Dots => {
                self.frame(|canvas| loading::draw_dots(canvas, phases.dots.value()))?;
                self.loading.dots.advance();
            }
            LoadingStyle::Circle => {
                self.frame(|canvas| loading::draw_circle_spinner(canvas, phases.spinner.value()))?;
                self.loading.spinner.advance();
            }
            LoadingStyle::Bar => {
                self.frame(|canvas| loading::draw_bar(canvas, phases.bar.value()))?;
                self.loading.bar.advance();
            }
            LoadingStyle::Wave => {
                self.frame(|canvas| loading::draw_wave(canvas, phases.wave.value()))?;
                self.loading.wave.advance();
            }
        }
        self.loading.frame.advance();
        Ok(())
    }

    /// [`Sequencer::animate_processing`] with a raw selector.
    ///
    /// Unknown selectors fail with [`DisplayError::UnsupportedStyle`] and draw
    /// nothing.
    pub fn animate_processing_raw(
        &mut self,
        selector: u8,
    ) -> Result<(), DisplayError> {
        let style = LoadingStyle::try_from(selector)?;
        self.animate_processing(style)
    }

    /// One frame of the Wi-Fi connecting arcs.
    pub fn animate_wifi_connecting(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let frame = self.wifi.value();
        self.frame(|canvas| motion::draw_wifi_arcs(canvas, frame))?;
        self.wifi.advance();
        Ok(())
    }

    /// One frame of the basic sync rotation.
    pub fn step_sync(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let frame = self.sync.value();
        self.frame(|canvas| motion::draw_sync_arrows(canvas, frame))?;
        self.sync.advance();
        Ok(())
    }

    /// One frame of the ECG trace.
    pub fn step_heartbeat(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let frame = self.heartbeat.value();
        self.frame(|canvas| motion::draw_ecg_trace(canvas, frame))?;
        self.heartbeat.advance();
        Ok(())
    }

    // =========================================================================
    // Bounded Animations
    // =========================================================================

    /// Slide a card across the panel (40 frames).
    pub fn animate_card_swipe(
        &mut self,
        detail: Detail,
    ) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        let wait = match detail {
            Detail::Basic => self.timing.quarter_frame_ms(),
            Detail::Embellished => self.timing.half_frame_ms(),
        };
        self.run_frames(motion::swipe_positions(), wait, |canvas, x| motion::draw_swipe_card(canvas, x, detail))
    }

    /// One heartbeat: a full ECG period (16 frames), or a pulsing heart that
    /// shrinks with rings and grows back (22 frames).
    pub fn animate_heartbeat(
        &mut self,
        detail: Detail,
    ) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        match detail {
            Detail::Basic => {
                let wait = self.timing.frame_delay_ms;
                self.run_frames(0..PULSE_PERIOD, wait, |canvas, frame| motion::draw_ecg_trace(canvas, frame))
            }
            Detail::Embellished => {
                let wait = self.timing.half_frame_ms();
                self.run_frames(motion::heart_sizes(), wait, |canvas, (size, rings)| {
                    motion::draw_heart_outline(canvas, size)?;
                    if rings {
                        motion::draw_pulse_rings(canvas, size)?;
                    }
                    Ok(())
                })
            }
        }
    }

    /// One full sync rotation: 16 steps of PI/8, or 12 steps of 30 degrees
    /// with arrowheads.
    pub fn animate_sync(
        &mut self,
        detail: Detail,
    ) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        let wait = self.timing.frame_delay_ms;
        match detail {
            Detail::Basic => self.run_frames(0..PULSE_PERIOD, wait, |canvas, frame| motion::draw_sync_arrows(canvas, frame)),
            Detail::Embellished => {
                self.run_frames(motion::spinner_degrees(), wait, |canvas, degrees| motion::draw_sync_spinner(canvas, degrees))
            }
        }
    }

    /// Growing disc, then the power glyph brightening from dark.
    ///
    /// Without contrast control only the disc stage runs.
    pub fn animate_power_on(&mut self) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        let wait = self.timing.half_frame_ms();
        let mut report = self.run_frames(0..POWER_DISC_FRAMES, wait, |canvas, i| motion::draw_power_disc(canvas, i))?;
        if report.cancelled || self.require_contrast().is_err() {
            return Ok(report);
        }

        self.canvas.set_dimmed(true)?;
        let glyph = self.power_glyph_ramp(motion::power_ramp_level);
        let restored = self.restore_brightness();
        report.merge(glyph?);
        restored?;
        Ok(report)
    }

    /// Power glyph fading to dark, then a shrinking disc and a blank frame.
    ///
    /// Brightness is restored as soon as the glyph has faded, so the disc is
    /// shown at full contrast and a failed present later on never leaves the
    /// panel dark. Without contrast control the fade stage is skipped.
    pub fn animate_power_off(&mut self) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        let wait = self.timing.half_frame_ms();
        let mut report = SequenceReport::default();

        if self.require_contrast().is_ok() {
            self.canvas.set_dimmed(true)?;
            let glyph = self.power_glyph_ramp(|i| motion::power_ramp_level(POWER_GLYPH_FRAMES - 1 - i));
            let restored = self.restore_brightness();
            report.merge(glyph?);
            restored?;
            if report.cancelled {
                return Ok(report);
            }
        }

        let discs = self.run_frames((0..POWER_DISC_FRAMES).rev(), wait, |canvas, i| motion::draw_power_disc(canvas, i))?;
        report.merge(discs);
        if !report.cancelled {
            self.frame(|_| Ok(()))?;
            report.frames += 1;
        }
        Ok(report)
    }

    fn power_glyph_ramp<L>(
        &mut self,
        level: L,
    ) -> Result<SequenceReport, DisplayError>
    where
        L: Fn(i32) -> u8,
    {
        let wait = self.timing.half_frame_ms();
        let mut report = SequenceReport::default();
        for i in 0..POWER_GLYPH_FRAMES {
            if self.is_cancelled() {
                report.cancelled = true;
                break;
            }
            self.canvas.set_contrast(level(i))?;
            self.frame(|canvas| icons::draw_power(canvas))?;
            report.frames += 1;
            self.delay.delay_ms(wait);
        }
        Ok(report)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Slide the presented frame out of the panel (17 frames, the last blank).
    pub fn transition_slide(
        &mut self,
        direction: SlideDirection,
    ) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        let snapshot = Snapshot::capture(&self.canvas);
        let width = self.canvas.size().width;
        trace!("slide transition over {} columns", width);
        let wait = self.timing.transition_delay_ms;
        self.run_frames(transition::slide_offsets(width), wait, |canvas, offset| {
            transition::render_slide_frame(canvas, &snapshot, offset, direction)
        })
    }

    /// Zoom the presented frame out toward the center, then blank the panel.
    pub fn transition_zoom(&mut self) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        let snapshot = Snapshot::capture(&self.canvas);
        let wait = self.timing.transition_delay_ms;
        let mut report = self.run_frames(transition::zoom_scales(), wait, |canvas, scale| {
            transition::render_zoom_frame(canvas, &snapshot, scale)
        })?;
        if !report.cancelled {
            self.frame(|_| Ok(()))?;
            report.frames += 1;
        }
        Ok(report)
    }

    /// Ramp contrast down to zero, blank the panel, ramp back up.
    ///
    /// Fails with [`DisplayError::ContrastUnavailable`] without touching the
    /// buffer when the panel has no contrast control.
    pub fn transition_fade(&mut self) -> Result<SequenceReport, DisplayError> {
        self.ensure_ready()?;
        self.require_contrast()?;
        self.canvas.set_dimmed(true)?;
        let ramp = self.fade_ramp();
        let restored = self.restore_brightness();
        let report = ramp?;
        restored?;
        Ok(report)
    }

    fn fade_ramp(&mut self) -> Result<SequenceReport, DisplayError> {
        let wait = self.timing.fade_step_ms();
        let mut report = SequenceReport::default();
        for level in transition::fade_out_levels() {
            if self.is_cancelled() {
                report.cancelled = true;
                return Ok(report);
            }
            self.canvas.set_contrast(level)?;
            self.canvas.present()?;
            report.frames += 1;
            self.delay.delay_ms(wait);
        }
        self.canvas.clear(BinaryColor::Off).map_err(DisplayError::draw)?;
        for level in transition::fade_in_levels() {
            if self.is_cancelled() {
                report.cancelled = true;
                return Ok(report);
            }
            self.canvas.set_contrast(level)?;
            self.canvas.present()?;
            report.frames += 1;
            self.delay.delay_ms(wait);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::config::{FRAME_DELAY_MS, TRANSITION_DELAY_MS};
    use crate::testing::{CancelAfter, RecordingCanvas, RecordingDelay};

    type TestSequencer<'a> = Sequencer<'a, RecordingCanvas, RecordingDelay>;

    fn sequencer<'a>() -> TestSequencer<'a> { Sequencer::new(RecordingCanvas::new(), RecordingDelay::new()) }

    fn with_contrast<'a>() -> TestSequencer<'a> { Sequencer::new(RecordingCanvas::with_contrast(), RecordingDelay::new()) }

    fn lit(
        canvas: &mut RecordingCanvas,
        x: i32,
        y: i32,
    ) {
        Pixel(Point::new(x, y), BinaryColor::On).draw(canvas).unwrap();
    }

    #[test]
    fn test_success_blinks_then_shows() {
        let mut seq = sequencer();
        let report = seq.animate_success().unwrap();
        assert_eq!(report, SequenceReport { frames: 7, cancelled: false });

        let (canvas, delay) = seq.into_parts();
        assert_eq!(canvas.frames.len(), 7);
        for (i, frame) in canvas.frames.iter().enumerate() {
            let on = i % 2 == 0;
            assert_eq!(!frame.is_blank(), on, "frame {i}");
        }
        assert!(canvas.buffer().get(Point::new(55, 42)), "checkmark left on screen");
        assert_eq!(delay.waits_ms, [BLINK_DELAY_MS; 6]);
    }

    #[test]
    fn test_error_shows_cross() {
        let mut seq = sequencer();
        seq.animate_error().unwrap();
        assert!(seq.canvas().buffer().get(Point::new(45, 22)));
        assert!(seq.canvas().buffer().get(Point::new(85, 22)));
    }

    #[test]
    fn test_processing_single_frame_no_wait() {
        let mut seq = sequencer();
        seq.animate_processing(LoadingStyle::Dots).unwrap();
        assert_eq!(seq.processing_frame(), 1);
        let (canvas, delay) = seq.into_parts();
        assert_eq!(canvas.frames.len(), 1);
        assert!(delay.waits_ms.is_empty());
    }

    #[test]
    fn test_processing_advances_only_selected_style() {
        let mut seq = sequencer();
        seq.animate_processing(LoadingStyle::Dots).unwrap();
        seq.animate_processing(LoadingStyle::Bar).unwrap();
        seq.animate_processing(LoadingStyle::Dots).unwrap();

        let frames = &seq.canvas().frames;
        // dots: first frame enlarges dot 0, third frame dot 1
        assert!(frames[0].get(Point::new(48, 35)));
        assert!(frames[2].get(Point::new(56, 35)));
        assert!(!frames[2].get(Point::new(48, 35)));
        // bar drew its slider at position 0
        assert!(frames[1].get(Point::new(46, 31)));
        assert_eq!(seq.processing_frame(), 3);
    }

    #[test]
    fn test_processing_dots_period() {
        let mut seq = sequencer();
        for _ in 0..5 {
            seq.animate_processing(LoadingStyle::Dots).unwrap();
        }
        seq.animate_processing(LoadingStyle::Dots).unwrap();
        let frames = &seq.canvas().frames;
        assert_eq!(frames[0], frames[5], "dots repeat after five steps");
        assert_ne!(frames[0], frames[1]);
    }

    #[test]
    fn test_processing_frame_counter_wraps() {
        let mut seq = sequencer();
        for _ in 0..PROCESSING_PERIOD {
            seq.animate_processing(LoadingStyle::Wave).unwrap();
        }
        assert_eq!(seq.processing_frame(), 0);
    }

    #[test]
    fn test_unknown_selector_draws_nothing() {
        let mut seq = sequencer();
        assert_eq!(seq.animate_processing_raw(9), Err(DisplayError::UnsupportedStyle(9)));
        assert!(seq.canvas().frames.is_empty());
        assert_eq!(seq.processing_frame(), 0);

        seq.animate_processing_raw(1).unwrap();
        assert_eq!(seq.canvas().frames.len(), 1);
    }

    #[test]
    fn test_independent_sequencers_do_not_share_phase() {
        let mut a = sequencer();
        let mut b = sequencer();
        a.animate_processing(LoadingStyle::Dots).unwrap();
        a.animate_processing(LoadingStyle::Dots).unwrap();
        b.animate_processing(LoadingStyle::Dots).unwrap();
        assert_eq!(b.canvas().frames[0], a.canvas().frames[0]);
    }

    #[test]
    fn test_reset_phases() {
        let mut seq = sequencer();
        seq.step_sync().unwrap();
        seq.step_sync().unwrap();
        seq.reset_phases();
        seq.step_sync().unwrap();
        let frames = &seq.canvas().frames;
        assert_eq!(frames[0], frames[2]);
    }

    #[test]
    fn test_wifi_connecting_cycle() {
        let mut seq = sequencer();
        for _ in 0..=WIFI_PERIOD {
            seq.animate_wifi_connecting().unwrap();
        }
        let frames = &seq.canvas().frames;
        assert_eq!(frames.len(), 33);
        assert!(frames[8].count_lit() > frames[7].count_lit(), "second arc appears at step 8");
        assert_eq!(frames[0], frames[32], "cycle restarts after 32 steps");
        assert!(seq.into_parts().1.waits_ms.is_empty());
    }

    #[test]
    fn test_step_heartbeat_returns_after_period() {
        let mut seq = sequencer();
        for _ in 0..=PULSE_PERIOD {
            seq.step_heartbeat().unwrap();
        }
        let frames = &seq.canvas().frames;
        assert_eq!(frames[0], frames[16]);
        assert_ne!(frames[0], frames[4]);
    }

    #[test]
    fn test_card_swipe_frame_counts_and_waits() {
        let mut basic = sequencer();
        assert_eq!(basic.animate_card_swipe(Detail::Basic).unwrap().frames, 40);
        let (_, delay) = basic.into_parts();
        assert!(delay.waits_ms.iter().all(|&ms| ms == FRAME_DELAY_MS / 4));

        let mut fancy = sequencer();
        assert_eq!(fancy.animate_card_swipe(Detail::Embellished).unwrap().frames, 40);
        let (_, delay) = fancy.into_parts();
        assert!(delay.waits_ms.iter().all(|&ms| ms == FRAME_DELAY_MS / 2));
    }

    #[test]
    fn test_heartbeat_frame_counts() {
        assert_eq!(sequencer().animate_heartbeat(Detail::Basic).unwrap().frames, 16);
        assert_eq!(sequencer().animate_heartbeat(Detail::Embellished).unwrap().frames, 22);
    }

    #[test]
    fn test_sync_frame_counts() {
        let mut seq = sequencer();
        let report = seq.animate_sync(Detail::Embellished).unwrap();
        assert_eq!(report.frames, 12);
        assert_eq!(seq.into_parts().1.total_ms(), 12 * FRAME_DELAY_MS);

        assert_eq!(sequencer().animate_sync(Detail::Basic).unwrap().frames, 16);
    }

    #[test]
    fn test_bounded_sequences_are_deterministic() {
        let mut a = sequencer();
        let mut b = sequencer();
        a.animate_sync(Detail::Basic).unwrap();
        b.animate_sync(Detail::Basic).unwrap();
        assert_eq!(a.canvas().frames, b.canvas().frames);
    }

    #[test]
    fn test_custom_timing() {
        let timing = Timing {
            frame_delay_ms: 40,
            transition_delay_ms: 8,
        };
        let mut seq = sequencer().with_timing(timing);
        seq.animate_sync(Detail::Embellished).unwrap();
        seq.transition_slide(SlideDirection::Left).unwrap();
        let (_, delay) = seq.into_parts();
        assert_eq!(delay.total_ms(), 12 * 40 + 17 * 8);
    }

    #[test]
    fn test_slide_left_scenario() {
        let mut seq = sequencer();
        lit(seq.canvas_mut(), 10, 5);
        let report = seq.transition_slide(SlideDirection::Left).unwrap();
        assert_eq!(report.frames, 17);

        let frames = &seq.canvas().frames;
        for (k, frame) in frames.iter().enumerate() {
            let x = 10 - 8 * k as i32;
            if x >= 0 {
                assert!(frame.get(Point::new(x, 5)), "step {k}");
                assert_eq!(frame.count_lit(), 1, "step {k}");
            } else {
                assert!(frame.is_blank(), "step {k}");
            }
        }
        assert_eq!(seq.into_parts().1.waits_ms, [TRANSITION_DELAY_MS; 17]);
    }

    #[test]
    fn test_slide_right_moves_right() {
        let mut seq = sequencer();
        lit(seq.canvas_mut(), 10, 5);
        seq.transition_slide(SlideDirection::Right).unwrap();
        let frames = &seq.canvas().frames;
        assert!(frames[1].get(Point::new(18, 5)));
        assert!(frames[16].is_blank());
    }

    #[test]
    fn test_zoom_ends_blank() {
        let mut seq = sequencer();
        icons::draw_gear(seq.canvas_mut()).unwrap();
        let before = seq.canvas().buffer().clone();
        let report = seq.transition_zoom().unwrap();
        assert_eq!(report.frames, 12);

        let frames = &seq.canvas().frames;
        assert_eq!(frames[0], before, "100% frame is the snapshot");
        assert!(frames[11].is_blank());
        assert_eq!(seq.into_parts().1.waits_ms.len(), 11);
    }

    #[test]
    fn test_fade_ramps_contrast() {
        let mut seq = with_contrast();
        icons::draw_clock(seq.canvas_mut()).unwrap();
        let report = seq.transition_fade().unwrap();
        assert_eq!(report.frames, 104);

        let (canvas, delay) = seq.into_parts();
        assert_eq!(canvas.contrast_log[0], 255);
        assert_eq!(canvas.contrast_log[51], 0);
        assert_eq!(canvas.contrast_log[52], 0);
        assert_eq!(canvas.contrast_log[103], 255);
        assert_eq!(canvas.dim_log, [true, false]);
        assert!(!canvas.frames[51].is_blank(), "content stays until fully dark");
        assert!(canvas.frames[52].is_blank());
        assert!(delay.waits_ms.iter().all(|&ms| ms == TRANSITION_DELAY_MS / 4));
    }

    #[test]
    fn test_fade_without_contrast_reports_gap() {
        let mut seq = sequencer();
        icons::draw_clock(seq.canvas_mut()).unwrap();
        let before = seq.canvas().buffer().clone();

        assert_eq!(seq.transition_fade(), Err(DisplayError::ContrastUnavailable));
        assert_eq!(seq.transition_fade(), Err(DisplayError::ContrastUnavailable));
        assert!(seq.canvas().frames.is_empty());
        assert_eq!(seq.canvas().buffer(), &before, "buffer untouched");
    }

    #[test]
    fn test_power_on_with_contrast() {
        let mut seq = with_contrast();
        let report = seq.animate_power_on().unwrap();
        assert_eq!(report.frames, 48);

        let canvas = seq.canvas();
        assert_eq!(canvas.contrast_log.first(), Some(&0));
        assert_eq!(canvas.contrast_log[15], 255);
        assert!(canvas.contrast_log.windows(2).take(15).all(|w| w[0] <= w[1]), "brightness ramps up");
        assert_eq!(canvas.contrast(), Some(255));
        assert!(!canvas.is_dimmed());
    }

    #[test]
    fn test_power_on_without_contrast_skips_glyph_stage() {
        let mut seq = sequencer();
        let report = seq.animate_power_on().unwrap();
        assert_eq!(report.frames, 32);
        let last = seq.canvas().last_frame().unwrap();
        assert!(last.get(Point::new(64, 1)), "largest disc reaches the top rows");
    }

    #[test]
    fn test_power_off_ends_blank() {
        let mut seq = with_contrast();
        let report = seq.animate_power_off().unwrap();
        assert_eq!(report.frames, 49);

        let canvas = seq.canvas();
        assert_eq!(canvas.contrast_log[0], 255);
        assert_eq!(canvas.contrast_log[15], 0);
        assert_eq!(canvas.contrast_log.len(), 17, "16 fade steps and one restore");
        assert!(canvas.last_frame().unwrap().is_blank());
        assert_eq!(canvas.contrast(), Some(255), "brightness restored for the next screen");
        assert!(!canvas.is_dimmed());

        let mut plain = sequencer();
        assert_eq!(plain.animate_power_off().unwrap().frames, 33);
    }

    #[test]
    fn test_power_off_disc_shown_at_full_contrast() {
        let mut seq = with_contrast();
        seq.animate_power_off().unwrap();
        let canvas = seq.canvas();
        // 16 glyph frames precede the largest disc
        assert!(canvas.frames[16].get(Point::new(64, 1)), "largest disc first");
        assert_eq!(canvas.dim_log, [true, false], "dim released before the disc stage");
    }

    #[test]
    fn test_power_off_failed_present_keeps_brightness() {
        let mut seq = Sequencer::new(RecordingCanvas::failing_after(16), RecordingDelay::new());
        assert_eq!(seq.animate_power_off(), Err(DisplayError::Communication));
        assert_eq!(seq.canvas().frames.len(), 16, "glyph stage presented");
        assert_eq!(seq.canvas().contrast(), Some(255));
        assert!(!seq.canvas().is_dimmed());
    }

    #[test]
    fn test_power_off_failed_glyph_restores_brightness() {
        let mut seq = Sequencer::new(RecordingCanvas::failing_after(4), RecordingDelay::new());
        assert_eq!(seq.animate_power_off(), Err(DisplayError::Communication));
        assert_eq!(seq.canvas().contrast(), Some(255));
        assert!(!seq.canvas().is_dimmed());
    }

    #[test]
    fn test_offline_panel_fails_fast() {
        let mut seq = Sequencer::new(RecordingCanvas::offline(), RecordingDelay::new());
        assert_eq!(seq.animate_success(), Err(DisplayError::NotInitialized));
        assert_eq!(seq.animate_processing(LoadingStyle::Dots), Err(DisplayError::NotInitialized));
        assert_eq!(seq.transition_zoom(), Err(DisplayError::NotInitialized));
        assert!(seq.canvas().buffer().is_blank(), "nothing drawn");
        assert_eq!(seq.processing_frame(), 0);
        assert!(seq.into_parts().1.waits_ms.is_empty());
    }

    #[test]
    fn test_cancel_stops_bounded_sequence() {
        let flag = AtomicBool::new(false);
        let mut seq = Sequencer::new(RecordingCanvas::new(), CancelAfter::new(&flag, 5)).with_cancel(&flag);
        let report = seq.animate_card_swipe(Detail::Basic).unwrap();
        assert_eq!(report, SequenceReport { frames: 5, cancelled: true });
        assert_eq!(seq.canvas().frames.len(), 5);
    }

    #[test]
    fn test_cancel_before_start() {
        let flag = AtomicBool::new(true);
        let mut seq = sequencer().with_cancel(&flag);
        let report = seq.animate_sync(Detail::Basic).unwrap();
        assert_eq!(report, SequenceReport { frames: 0, cancelled: true });

        let report = seq.animate_success().unwrap();
        assert!(report.cancelled);
        assert!(seq.canvas().frames.is_empty(), "no final frame after cancel");
    }

    #[test]
    fn test_cancelled_fade_restores_brightness() {
        let flag = AtomicBool::new(false);
        let mut seq = Sequencer::new(RecordingCanvas::with_contrast(), CancelAfter::new(&flag, 10)).with_cancel(&flag);
        let report = seq.transition_fade().unwrap();
        assert!(report.cancelled);
        assert_eq!(report.frames, 10);
        assert_eq!(seq.canvas().contrast(), Some(255));
        assert!(!seq.canvas().is_dimmed());
    }
}
