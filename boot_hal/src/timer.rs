//! # Timer Device
//!
//! Hardware abstraction for monotonic tick measurement during boot.
//!
//! ## Philosophy
//!
//! **Time is a value you poll, not a global variable.**
//!
//! This trait provides access to a monotonic tick counter. It does NOT:
//! - Provide wall-clock time (no UTC, no timezones)
//! - Rely on interrupts (polling only)
//! - Yield to a scheduler (there is none during boot)
//!
//! ## Design Principles
//!
//! 1. **Monotonic**: Ticks never go backwards while the caller polls often enough
//! 2. **Non-blocking**: A poll always returns immediately
//! 3. **Cumulative**: Returns total ticks since the timer was initialized
//! 4. **Rate-aware**: The tick frequency is published separately through [`TickRate`]
//!
//! ## Polling Discipline
//!
//! Narrow hardware counters are widened in software by comparing each sample
//! against the previous one. A device backed by such a counter is only
//! monotonic if it is polled at least once per hardware wrap period. This is a
//! contract on the caller and is not checked.

/// Hardware timer device trait
///
/// Provides access to a monotonic tick counter. Ticks are cumulative
/// and never decrease under the polling discipline described above.
///
/// # Implementation Notes
///
/// - Polling may update internal extension state, hence `&mut self`
/// - Must not block
/// - Tick frequency is reported by [`TickRate`]
///
/// # Examples
///
/// ```
/// use boot_hal::TimerDevice;
///
/// fn measure_operation<T: TimerDevice>(timer: &mut T) -> u64 {
///     let start = timer.poll_ticks();
///     // ... do work ...
///     let end = timer.poll_ticks();
///     end - start
/// }
/// ```
pub trait TimerDevice {
    /// Returns the current extended tick count
    ///
    /// This value is:
    /// - Monotonic (never decreases, given the polling discipline)
    /// - Cumulative (total ticks since timer initialization)
    /// - Non-blocking (returns immediately)
    fn poll_ticks(&mut self) -> u64;
}

/// Tick frequency of a [`TimerDevice`]
///
/// The rate is fixed once the device has been initialized.
pub trait TickRate {
    /// Returns the number of ticks per second (always > 0)
    fn ticks_per_second(&self) -> u32;
}
