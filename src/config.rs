//! Display geometry and timing configuration.
//!
//! # Pre-computed Layout Constants
//!
//! Panel geometry is fixed for the lifetime of the firmware, so the derived
//! values (`CENTER_X`, `BUFFER_LEN`, ...) are computed at compile time as
//! `const` instead of being recalculated in every draw routine.
//!
//! # Timing
//!
//! The delay constants are the defaults for [`Timing`]. The Frame Sequencer
//! only ever reads its waits from a `Timing` value, so a board can slow down
//! or speed up every animation without touching the drawing code:
//!
//! ```ignore
//! let timing = Timing { frame_delay_ms: 60, ..Timing::default() };
//! let mut sequencer = Sequencer::new(canvas, delay).with_timing(timing);
//! ```

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x64 OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// I2C address of the SSD1306 panel on the terminal board.
pub const SCREEN_ADDRESS: u8 = 0x3C;

/// Size of a packed 1-bit frame in bytes (8 vertical pixels per byte).
pub const BUFFER_LEN: usize = (SCREEN_WIDTH * SCREEN_HEIGHT / 8) as usize;

/// Screen center X coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Nominal glyph size for face expressions.
pub const EMOJI_SIZE: u32 = 24;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay between animation frames in milliseconds.
pub const FRAME_DELAY_MS: u32 = 100;

/// Delay between buffer transition steps in milliseconds.
pub const TRANSITION_DELAY_MS: u32 = 50;

/// On/off period of the success and error blink animations.
pub const BLINK_DELAY_MS: u32 = 200;

/// Read-only timing shared by every animation and transition routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Wait after each presented animation frame.
    pub frame_delay_ms: u32,
    /// Wait after each presented transition step.
    pub transition_delay_ms: u32,
}

impl Timing {
    /// Timing with the firmware defaults.
    pub const fn new() -> Self {
        Self {
            frame_delay_ms: FRAME_DELAY_MS,
            transition_delay_ms: TRANSITION_DELAY_MS,
        }
    }

    /// Half a frame. Used by power on/off and the embellished swipe and heartbeat.
    #[inline]
    pub const fn half_frame_ms(&self) -> u32 { self.frame_delay_ms / 2 }

    /// Quarter of a frame. Used by the basic card swipe.
    #[inline]
    pub const fn quarter_frame_ms(&self) -> u32 { self.frame_delay_ms / 4 }

    /// Quarter of a transition step. Used by the contrast fade ramp.
    #[inline]
    pub const fn fade_step_ms(&self) -> u32 { self.transition_delay_ms / 4 }
}

impl Default for Timing {
    fn default() -> Self { Self::new() }
}
