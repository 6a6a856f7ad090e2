//! Watchdog-driven system reset
//!
//! The S3C24x0 has no software reset bit. Arming the watchdog with the
//! smallest possible count and waiting is the reset path.

use core::hint::spin_loop;

use boot_hal::ResetHal;

use crate::mmio::RegisterIo;
use crate::regs::{WatchdogBlock, WTCON_ENABLE, WTCON_RESET_ENABLE};

/// Watchdog timer used as a reset trigger
#[derive(Debug)]
pub struct Watchdog<R: RegisterIo> {
    io: R,
    block: WatchdogBlock,
}

impl<R: RegisterIo> Watchdog<R> {
    /// The on-chip watchdog
    pub fn new(io: R) -> Self {
        Self::at(io, WatchdogBlock::S3C24X0)
    }

    /// A watchdog block at a non-default address
    pub fn at(io: R, block: WatchdogBlock) -> Self {
        Self { io, block }
    }

    /// Programs the watchdog to reset the SoC on its next count
    ///
    /// Disables the watchdog, sets the count to 1, then enables it with
    /// reset-on-timeout.
    pub fn arm_reset(&mut self) {
        self.io.write32(self.block.wtcon(), 0);
        self.io.write32(self.block.wtcnt(), 1);
        self.io.write32(self.block.wtcon(), WTCON_ENABLE | WTCON_RESET_ENABLE);
    }

    /// Arms the watchdog and waits for the reset
    pub fn reset_cpu(&mut self) -> ! {
        log::warn!("resetting via watchdog");
        self.arm_reset();
        loop {
            spin_loop();
        }
    }
}

impl<R: RegisterIo> ResetHal for Watchdog<R> {
    fn reset_system(&mut self) -> ! {
        self.reset_cpu()
    }
}
