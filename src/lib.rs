//! Frame rendering and transition engine for the attendance terminal's
//! 128x64 monochrome OLED.
//!
//! The crate draws through any `embedded-graphics` [`DrawTarget`] with
//! [`BinaryColor`] pixels that also implements [`canvas::Canvas`] (present,
//! read-back and optional contrast control). On the terminal that is the
//! buffered SSD1306 driver; on the host it is [`canvas::MemoryCanvas`], which
//! the simulator mirrors into a window.
//!
//! # Layers
//!
//! - [`shapes`]: faces, status icons, gauges, loading and motion glyphs
//! - [`screens`]: named full-screen layouts, one present each
//! - [`sequencer`]: timed animations, single-step indicators and transitions
//! - [`transition`]: slide/zoom frame synthesis from a buffer snapshot
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p attendance-display --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware build stays `no_std`.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
//! [`BinaryColor`]: embedded_graphics::pixelcolor::BinaryColor

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Logging macros first so every module below can use them
#[macro_use]
mod fmt;

// Configuration and errors
pub mod config;
pub mod error;

// Canvas Surface
pub mod canvas;
pub mod styles;

// Drawing
pub mod phase;
pub mod screens;
pub mod sequencer;
pub mod shapes;
pub mod transition;

#[cfg(test)]
mod testing;

pub use canvas::{Canvas, MemoryCanvas, Snapshot};
pub use config::Timing;
pub use error::DisplayError;
pub use sequencer::{SequenceReport, Sequencer};
pub use shapes::Detail;
pub use shapes::loading::LoadingStyle;
pub use transition::SlideDirection;
