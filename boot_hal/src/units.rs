//! Tick and time-unit conversion
//!
//! Conversions multiply before they divide so that slow timers keep their
//! precision. The multiply wraps on overflow rather than trapping; with the
//! tick rates and delays seen during boot the products stay far below
//! `u64::MAX`.

use crate::div64::do_div;

/// Microseconds per second
pub const USEC_PER_SEC: u32 = 1_000_000;

/// Converts a tick count into units of `unit_hz` (e.g. 1000 for milliseconds)
pub fn ticks_to_time(ticks: u64, timer_rate_hz: u32, unit_hz: u32) -> u64 {
    let mut scaled = ticks.wrapping_mul(unit_hz as u64);
    do_div(&mut scaled, timer_rate_hz);
    scaled
}

/// Converts microseconds into a tick count, rounding down
pub fn usec_to_ticks(usec: u64, timer_rate_hz: u32) -> u64 {
    let mut scaled = usec.wrapping_mul(timer_rate_hz as u64);
    do_div(&mut scaled, USEC_PER_SEC);
    scaled
}

/// Converter bound to one timer rate and one configured time unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConverter {
    timer_rate_hz: u32,
    unit_hz: u32,
}

impl TickConverter {
    /// Creates a converter
    ///
    /// Both frequencies must be non-zero; callers validate this at
    /// initialization time.
    pub const fn new(timer_rate_hz: u32, unit_hz: u32) -> Self {
        Self {
            timer_rate_hz,
            unit_hz,
        }
    }

    /// Effective tick frequency of the timer
    pub const fn timer_rate_hz(&self) -> u32 {
        self.timer_rate_hz
    }

    /// Frequency of the configured time unit
    pub const fn unit_hz(&self) -> u32 {
        self.unit_hz
    }

    /// Ticks to configured time units
    pub fn ticks_to_time(&self, ticks: u64) -> u64 {
        ticks_to_time(ticks, self.timer_rate_hz, self.unit_hz)
    }

    /// Microseconds to ticks
    pub fn usec_to_ticks(&self, usec: u64) -> u64 {
        usec_to_ticks(usec, self.timer_rate_hz)
    }
}
