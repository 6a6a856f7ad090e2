//! System reset abstraction

/// Whole-system reset
///
/// Implementations arm whatever hardware mechanism resets the SoC
/// (a watchdog, a reset controller) and then wait for it. Control never
/// returns to the caller.
pub trait ResetHal {
    /// Resets the system
    fn reset_system(&mut self) -> !;
}
