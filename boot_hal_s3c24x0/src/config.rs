//! Boot timer configuration
//!
//! Timer 4 has a 16-bit counter, so the divider settles a trade between
//! resolution and how long software may go between polls. With the usual
//! 66 MHz PCLK:
//!
//! | Divider      | Tick rate  | Resolution | Counter wraps after |
//! |--------------|------------|------------|---------------------|
//! | 33 × ÷2      | 1 MHz      | 1 µs       | 65 ms               |
//! | 165 × ÷4     | 100 kHz    | 10 µs      | 650 ms              |
//! | 165 × ÷16    | 25 kHz     | 40 µs      | 2.6 s               |
//!
//! The default is 165 × ÷4.

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Timer 4 clock mux setting (the predivider after the prescaler)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediv {
    Div2 = 0,
    Div4 = 1,
    Div8 = 2,
    Div16 = 3,
}

impl Prediv {
    /// Raw value of the TCFG1 mux field
    pub const fn mux_bits(self) -> u32 {
        self as u32
    }

    /// Division factor, `2^(mux + 1)`
    pub const fn divisor(self) -> u32 {
        1 << (self.mux_bits() + 1)
    }
}

/// Static configuration of the boot timer
///
/// Fixed for the whole boot session; there is no reconfiguration once the
/// timer runs. Fields missing from a serialized profile take their
/// [`TimerConfig::DEFAULT`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Prescaler divisor, 1..=256 (stored as `prescaler - 1`)
    pub prescaler: u16,
    /// Predivider following the prescaler
    pub prediv: Prediv,
    /// Frequency of the caller-facing time unit (1000 = milliseconds)
    pub unit_hz: u32,
}

impl TimerConfig {
    /// Reload value of the countdown; the tick extender assumes a full 16-bit window
    pub const RELOAD: u32 = 0xFFFF;

    /// 10 µs ticks from a 66 MHz PCLK, time reported in milliseconds
    pub const DEFAULT: Self = Self {
        prescaler: 165,
        prediv: Prediv::Div4,
        unit_hz: 1000,
    };

    /// Checks that the configuration can be programmed into the hardware
    pub fn validate(&self) -> Result<(), TimerError> {
        if self.prescaler == 0 || self.prescaler > 256 {
            return Err(TimerError::InvalidPrescaler(self.prescaler));
        }
        if self.unit_hz == 0 {
            return Err(TimerError::ZeroUnitHz);
        }
        Ok(())
    }

    /// Total division from PCLK to timer ticks
    pub const fn divisor(&self) -> u32 {
        self.prescaler as u32 * self.prediv.divisor()
    }

    /// Calibrates the effective tick rate for a given PCLK
    ///
    /// `pclk_hz / (prescaler * 2^(prediv + 1))`. Pure: the same clock
    /// always gives the same rate.
    pub fn timer_rate_hz(&self, pclk_hz: u32) -> Result<u32, TimerError> {
        self.validate()?;

        let divisor = self.divisor();
        match pclk_hz / divisor {
            0 => Err(TimerError::ZeroRate { pclk_hz, divisor }),
            rate => Ok(rate),
        }
    }

    /// TCFG0 value: the same prescaler for both prescaler fields
    pub const fn tcfg0(&self) -> u32 {
        let field = (self.prescaler as u32).saturating_sub(1) & 0xFF;
        (field << crate::regs::TCFG0_PRESCALER1_SHIFT) | (field << crate::regs::TCFG0_PRESCALER0_SHIFT)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
