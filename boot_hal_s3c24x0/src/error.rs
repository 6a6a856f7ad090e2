//! Timer initialization errors

use thiserror::Error;

/// Errors reported while bringing up the boot timer
///
/// All of these are configuration defects. Once a `BootTimer` exists none
/// of its operations can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Prescaler does not fit the 8-bit TCFG0 field
    #[error("Prescaler {0} out of range (1..=256)")]
    InvalidPrescaler(u16),

    /// Peripheral clock too slow for the chosen divider
    #[error("Timer rate is zero: PCLK {pclk_hz} Hz / divisor {divisor}")]
    ZeroRate { pclk_hz: u32, divisor: u32 },

    /// Configured time-unit frequency is zero
    #[error("Time-unit frequency must be non-zero")]
    ZeroUnitHz,
}
