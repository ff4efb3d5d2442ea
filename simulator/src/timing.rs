//! Wall-clock waiting for the simulator.
//!
//! `std::thread::sleep` is not available on the terminal, so the waiter the
//! sequencer gets on the desktop lives here rather than in the library.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Pause between two demos.
pub const DEMO_PAUSE: Duration = Duration::from_millis(1200);

/// Pause between single-step frames, standing in for one polling cycle.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Number of single-step frames each indicator demo draws.
pub const POLL_STEPS: u16 = 40;

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
