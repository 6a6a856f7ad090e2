//! S3C24x0 register map (PWM timers and watchdog)
//!
//! Only the registers the boot timer and the reset path touch are listed.
//! Offsets are relative to each block's base address.

/// PWM timer block base on S3C2410/S3C2440
pub const TIMER_BASE: usize = 0x5100_0000;

/// Watchdog block base on S3C2410/S3C2440
pub const WATCHDOG_BASE: usize = 0x5300_0000;

/// Timer configuration 0: prescaler 0 (timers 0/1) and prescaler 1 (timers 2/3/4)
pub const TCFG0: usize = 0x00;
/// Timer configuration 1: per-timer clock mux (predivider) select
pub const TCFG1: usize = 0x04;
/// Timer control
pub const TCON: usize = 0x08;
/// Timer 4 count buffer (reload value)
pub const TCNTB4: usize = 0x3C;
/// Timer 4 count observation (read-only current countdown value)
pub const TCNTO4: usize = 0x40;

/// Prescaler 0 field shift in TCFG0
pub const TCFG0_PRESCALER0_SHIFT: u32 = 0;
/// Prescaler 1 field shift in TCFG0
pub const TCFG0_PRESCALER1_SHIFT: u32 = 8;

/// Timer 4 mux field shift in TCFG1
pub const TCFG1_MUX4_SHIFT: u32 = 16;
/// Timer 4 mux field mask in TCFG1
pub const TCFG1_MUX4_MASK: u32 = 0xF << TCFG1_MUX4_SHIFT;

/// Timer 4 start/stop
pub const TCON_T4_START: u32 = 1 << 20;
/// Timer 4 manual update (load TCNTB4 into the counter)
pub const TCON_T4_MANUAL_UPDATE: u32 = 1 << 21;
/// Timer 4 auto-reload
pub const TCON_T4_AUTO_RELOAD: u32 = 1 << 22;
/// All timer 4 control bits
pub const TCON_T4_MASK: u32 = TCON_T4_START | TCON_T4_MANUAL_UPDATE | TCON_T4_AUTO_RELOAD;

/// Watchdog control
pub const WTCON: usize = 0x00;
/// Watchdog reload data
pub const WTDAT: usize = 0x04;
/// Watchdog current count
pub const WTCNT: usize = 0x08;

/// Assert system reset when the watchdog count reaches zero
pub const WTCON_RESET_ENABLE: u32 = 1 << 0;
/// Watchdog timer enable
pub const WTCON_ENABLE: u32 = 1 << 5;

/// Location of a PWM timer register block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerBlock {
    base: usize,
}

impl TimerBlock {
    /// The on-chip PWM timer block
    pub const S3C24X0: Self = Self::at(TIMER_BASE);

    /// A timer block at an arbitrary base address
    pub const fn at(base: usize) -> Self {
        Self { base }
    }

    pub const fn tcfg0(&self) -> usize {
        self.base + TCFG0
    }

    pub const fn tcfg1(&self) -> usize {
        self.base + TCFG1
    }

    pub const fn tcon(&self) -> usize {
        self.base + TCON
    }

    pub const fn tcntb4(&self) -> usize {
        self.base + TCNTB4
    }

    pub const fn tcnto4(&self) -> usize {
        self.base + TCNTO4
    }
}

/// Location of a watchdog register block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogBlock {
    base: usize,
}

impl WatchdogBlock {
    /// The on-chip watchdog
    pub const S3C24X0: Self = Self::at(WATCHDOG_BASE);

    /// A watchdog block at an arbitrary base address
    pub const fn at(base: usize) -> Self {
        Self { base }
    }

    pub const fn wtcon(&self) -> usize {
        self.base + WTCON
    }

    pub const fn wtdat(&self) -> usize {
        self.base + WTDAT
    }

    pub const fn wtcnt(&self) -> usize {
        self.base + WTCNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_block_addresses() {
        let block = TimerBlock::S3C24X0;
        assert_eq!(block.tcfg0(), 0x5100_0000);
        assert_eq!(block.tcon(), 0x5100_0008);
        assert_eq!(block.tcntb4(), 0x5100_003C);
        assert_eq!(block.tcnto4(), 0x5100_0040);
    }

    #[test]
    fn test_watchdog_block_addresses() {
        let block = WatchdogBlock::at(0x1000);
        assert_eq!(block.wtcon(), 0x1000);
        assert_eq!(block.wtdat(), 0x1004);
        assert_eq!(block.wtcnt(), 0x1008);
    }

    #[test]
    fn test_control_bits() {
        assert_eq!(TCON_T4_MASK, 0x0070_0000);
        assert_eq!(TCON_T4_AUTO_RELOAD | TCON_T4_MANUAL_UPDATE, 0x0060_0000);
        assert_eq!(TCON_T4_AUTO_RELOAD | TCON_T4_START, 0x0050_0000);
        assert_eq!(WTCON_ENABLE | WTCON_RESET_ENABLE, 0x21);
    }
}
