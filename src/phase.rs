//! Animation phase counters.
//!
//! Every continuous animation owns its own counter. A counter starts at zero,
//! advances by a fixed increment each time its animation draws a frame and
//! wraps modulo a period, so repeated calls produce continuous motion.
//! Counters live in the [`Sequencer`](crate::sequencer::Sequencer) that owns
//! the canvas, never in statics, so two sequencers (or two tests) never share
//! motion state.

use core::f32::consts::TAU;

/// Integer phase wrapping modulo `period`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase {
    value: u16,
    step: u16,
    period: u16,
}

impl Phase {
    /// Phase at zero advancing by `step` modulo `period`.
    ///
    /// A zero `period` is treated as 1 (the phase never leaves zero).
    pub const fn new(
        step: u16,
        period: u16,
    ) -> Self {
        Self {
            value: 0,
            step,
            period: if period == 0 { 1 } else { period },
        }
    }

    /// Phase counting 0, 1, .., `period - 1`.
    #[inline]
    pub const fn counter(period: u16) -> Self { Self::new(1, period) }

    /// Current value.
    #[inline]
    pub const fn value(&self) -> u16 { self.value }

    /// Wrap period.
    #[inline]
    pub const fn period(&self) -> u16 { self.period }

    /// Advance by one increment and return the new value.
    pub fn advance(&mut self) -> u16 {
        self.value = ((u32::from(self.value) + u32::from(self.step)) % u32::from(self.period)) as u16;
        self.value
    }

    /// Back to zero.
    #[inline]
    pub fn reset(&mut self) { self.value = 0; }
}

/// Floating-point phase wrapping modulo `period`.
///
/// Used for rotation angles and wave offsets, where wrapping at the curve's
/// own period keeps the value small without a visible jump.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularPhase {
    value: f32,
    step: f32,
    period: f32,
}

impl AngularPhase {
    /// Phase at zero advancing by `step` modulo `period`.
    pub const fn new(
        step: f32,
        period: f32,
    ) -> Self {
        Self {
            value: 0.0,
            step,
            period,
        }
    }

    /// Rotation angle in radians, wrapping at a full turn.
    #[inline]
    pub const fn radians(step: f32) -> Self { Self::new(step, TAU) }

    /// Current value.
    #[inline]
    pub const fn value(&self) -> f32 { self.value }

    /// Advance by one increment and return the new value.
    pub fn advance(&mut self) -> f32 {
        let next = self.value + self.step;
        self.value = if self.period > 0.0 && next >= self.period {
            next - self.period
        } else {
            next
        };
        self.value
    }

    /// Back to zero.
    #[inline]
    pub fn reset(&mut self) { self.value = 0.0; }
}
