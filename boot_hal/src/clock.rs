//! Peripheral clock abstraction

/// Source of the peripheral clock frequency that feeds the timer blocks
///
/// On the S3C24x0 this is PCLK, derived from the PLL and the clock divider
/// registers. Working that out is the board's job; the timer only needs
/// the resulting frequency.
pub trait ClockSource {
    /// Returns the peripheral clock frequency in Hz
    fn peripheral_clock_hz(&self) -> u32;
}

/// Clock source with a frequency fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    hz: u32,
}

impl FixedClock {
    /// Creates a clock source that always reports `hz`
    pub const fn new(hz: u32) -> Self {
        Self { hz }
    }
}

impl ClockSource for FixedClock {
    fn peripheral_clock_hz(&self) -> u32 {
        self.hz
    }
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn peripheral_clock_hz(&self) -> u32 {
        (**self).peripheral_clock_hz()
    }
}
