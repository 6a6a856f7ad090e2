//! Tick extension for the 16-bit timer
//!
//! Timer 4 only offers a 16-bit "ticks since reload" sample. The extender
//! keeps the last 32-bit value it produced and a count of 32-bit rollovers,
//! and widens each new sample by comparing it with what came before.
//!
//! ## Polling discipline
//!
//! A wrap is inferred when the new sample is below the previous low 16 bits,
//! so at most one 16-bit wrap may happen between two polls (650 ms at the
//! default 10 µs tick). The same holds one level up for the 32-bit rollover.
//! Longer gaps, for example a debugger halt, silently lose whole windows.
//! Nothing here detects that.

/// Widens 16-bit samples into a 64-bit monotonic tick count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickExtender {
    /// Last 32-bit extended value
    tbl: u32,
    /// 32-bit rollovers seen so far
    tbu: u32,
}

impl TickExtender {
    /// Creates an extender with zeroed state
    pub const fn new() -> Self {
        Self { tbl: 0, tbu: 0 }
    }

    /// Extends a 16-bit sample against the stored low word without storing it
    pub fn extend32(&self, sample: u32) -> u32 {
        let now = sample & 0xFFFF;
        let base = self.tbl & 0xFFFF_0000;

        if now >= (self.tbl & 0xFFFF) {
            base | now
        } else {
            (base | now).wrapping_add(0x0001_0000)
        }
    }

    /// Folds a new 16-bit sample into the state and returns the 64-bit count
    pub fn update(&mut self, sample: u32) -> u64 {
        let now = self.extend32(sample);

        // The low word itself rolled over.
        if now < self.tbl {
            self.tbu = self.tbu.wrapping_add(1);
        }
        self.tbl = now;
        self.ticks()
    }

    /// The 64-bit count as of the last update
    pub fn ticks(&self) -> u64 {
        ((self.tbu as u64) << 32) | self.tbl as u64
    }

    /// Low word (`tbl`)
    pub fn low(&self) -> u32 {
        self.tbl
    }

    /// High word (`tbu`)
    pub fn high(&self) -> u32 {
        self.tbu
    }

    /// Clears the state back to zero
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[cfg(test)]
    fn with_state(tbl: u32, tbu: u32) -> Self {
        Self { tbl, tbu }
    }
}
