//! # S3C24x0 PWM Timer 4
//!
//! Timer 4 is the one PWM channel without an output pin, which makes it
//! free for timekeeping.
//!
//! ## Hardware Details
//!
//! - Clocked from PCLK through prescaler 1 and the TCFG1 mux
//! - Counts down from TCNTB4 (0xFFFF) to 0, then auto-reloads
//! - TCNTO4 exposes the live count
//!
//! ## Implementation Notes
//!
//! - Sampling is a single register read with no side effects
//! - Only timer 4's bits in TCFG1 and TCON are modified

use crate::config::TimerConfig;
use crate::mmio::RegisterIo;
use crate::regs::{
    TimerBlock, TCFG1_MUX4_MASK, TCFG1_MUX4_SHIFT, TCON_T4_AUTO_RELOAD, TCON_T4_MANUAL_UPDATE,
    TCON_T4_MASK, TCON_T4_START,
};

/// PWM timer 4 driven through a register bus
#[derive(Debug)]
pub struct PwmTimer<R: RegisterIo> {
    io: R,
    block: TimerBlock,
}

impl<R: RegisterIo> PwmTimer<R> {
    /// Creates a driver for the timer block at `block`
    ///
    /// Does not touch the hardware; call [`PwmTimer::configure`] to start it.
    pub fn new(io: R, block: TimerBlock) -> Self {
        Self { io, block }
    }

    /// Programs prescaler, mux and reload value and starts timer 4 in
    /// auto-reload mode
    pub fn configure(&mut self, config: &TimerConfig) {
        let tcfg0 = config.tcfg0();
        self.io.write32(self.block.tcfg0(), tcfg0);

        let tcfg1 = (self.io.read32(self.block.tcfg1()) & !TCFG1_MUX4_MASK)
            | (config.prediv.mux_bits() << TCFG1_MUX4_SHIFT);
        self.io.write32(self.block.tcfg1(), tcfg1);

        self.io.write32(self.block.tcntb4(), TimerConfig::RELOAD);

        // Load TCNTB4 into the counter first, then drop manual update and start.
        let tcon = (self.io.read32(self.block.tcon()) & !TCON_T4_MASK)
            | TCON_T4_AUTO_RELOAD
            | TCON_T4_MANUAL_UPDATE;
        self.io.write32(self.block.tcon(), tcon);

        let tcon = (tcon & !TCON_T4_MASK) | TCON_T4_AUTO_RELOAD | TCON_T4_START;
        self.io.write32(self.block.tcon(), tcon);

        log::debug!(
            "timer4: tcfg0={:#06x} tcfg1={:#010x} tcon={:#010x}",
            tcfg0,
            tcfg1,
            tcon
        );
    }

    /// Ticks elapsed since the last reload, in `0..=0xFFFF`
    #[inline]
    pub fn read_timer16(&mut self) -> u32 {
        let remaining = self.io.read32(self.block.tcnto4()) & 0xFFFF;
        TimerConfig::RELOAD - remaining
    }

    /// Returns the register bus
    pub fn release(self) -> R {
        self.io
    }
}
