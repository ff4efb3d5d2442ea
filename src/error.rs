//! Display error type.

use core::fmt;

/// Errors reported by the canvas, the sequencer and the screen composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The panel did not come up (or was never initialized).
    NotInitialized,
    /// Pushing the buffer to the panel failed.
    Communication,
    /// A primitive draw call was rejected by the canvas.
    Draw,
    /// The canvas has no contrast/dim control.
    ContrastUnavailable,
    /// A loading-style selector that names no style.
    UnsupportedStyle(u8),
}

impl DisplayError {
    /// Map any canvas draw error to [`DisplayError::Draw`].
    ///
    /// Used as `.map_err(DisplayError::draw)` since the canvas error type is generic.
    #[inline]
    pub fn draw<E>(_: E) -> Self { Self::Draw }
}

impl fmt::Display for DisplayError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NotInitialized => f.write_str("display not initialized"),
            Self::Communication => f.write_str("display communication failed"),
            Self::Draw => f.write_str("draw call failed"),
            Self::ContrastUnavailable => f.write_str("contrast control unavailable"),
            Self::UnsupportedStyle(raw) => write!(f, "unsupported loading style {raw}"),
        }
    }
}

impl core::error::Error for DisplayError {}
