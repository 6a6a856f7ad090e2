//! Boot timer session
//!
//! [`BootTimer`] owns timer 4, the tick extension state and the calibrated
//! rate. It is created once during early boot and then borrowed by
//! everything that needs time: timeouts, pacing, busy-wait delays.
//!
//! Every call that reads the time also advances the extension state, so the
//! timer needs `&mut self` and a single owner. Code that shares it across
//! threads of execution must put it behind a lock.
//!
//! ```rust,ignore
//! let mut timer = BootTimer::init(unsafe { RealMmio::new() }, &FixedClock::new(66_000_000),
//!     TimerConfig::DEFAULT)?;
//!
//! let start = timer.current_time_units();
//! while !nand_ready() {
//!     if timer.elapsed_time_units(start) >= 100 {
//!         return Err(Timeout);
//!     }
//! }
//! timer.delay_us(500);
//! ```

use boot_hal::{delay, ClockSource, TickConverter, TickRate, TimerDevice};

use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::mmio::RegisterIo;
use crate::regs::TimerBlock;
use crate::tick::TickExtender;
use crate::timer::PwmTimer;

/// Monotonic time and delays built on PWM timer 4
#[derive(Debug)]
pub struct BootTimer<R: RegisterIo> {
    timer: PwmTimer<R>,
    ticks: TickExtender,
    conv: TickConverter,
}

impl<R: RegisterIo> BootTimer<R> {
    /// Calibrates the rate, starts timer 4 and zeroes the tick state
    ///
    /// Must run exactly once, before any other timing call. The
    /// configuration is validated before the hardware is touched.
    pub fn init<C: ClockSource>(io: R, clock: &C, config: TimerConfig) -> Result<Self, TimerError> {
        Self::init_at(io, TimerBlock::S3C24X0, clock, config)
    }

    /// [`BootTimer::init`] for a timer block at a non-default address
    pub fn init_at<C: ClockSource>(
        io: R,
        block: TimerBlock,
        clock: &C,
        config: TimerConfig,
    ) -> Result<Self, TimerError> {
        let pclk_hz = clock.peripheral_clock_hz();
        let rate_hz = config.timer_rate_hz(pclk_hz)?;

        let mut timer = PwmTimer::new(io, block);
        timer.configure(&config);

        log::info!(
            "boot timer: PCLK {} Hz / {} = {} ticks/s, time unit {} Hz",
            pclk_hz,
            config.divisor(),
            rate_hz,
            config.unit_hz
        );

        Ok(Self {
            timer,
            ticks: TickExtender::new(),
            conv: TickConverter::new(rate_hz, config.unit_hz),
        })
    }

    /// Samples the hardware and returns the 64-bit tick count
    ///
    /// Callers must poll at least once per 16-bit hardware window (see
    /// [`crate::tick`]); delay loops do so by construction.
    pub fn current_ticks(&mut self) -> u64 {
        let sample = self.timer.read_timer16();
        self.ticks.update(sample)
    }

    /// Current time in configured units, truncated to 32 bits
    pub fn current_time_units(&mut self) -> u32 {
        let ticks = self.current_ticks();
        self.conv.ticks_to_time(ticks) as u32
    }

    /// Time units elapsed since `base`, a value from [`BootTimer::current_time_units`]
    ///
    /// `elapsed_time_units(0)` is the current time.
    pub fn elapsed_time_units(&mut self, base: u32) -> u32 {
        self.current_time_units().wrapping_sub(base)
    }

    /// Calibrated tick rate
    pub fn ticks_per_second(&self) -> u32 {
        self.conv.timer_rate_hz()
    }

    /// The converter bound to this timer's rate and time unit
    pub fn converter(&self) -> &TickConverter {
        &self.conv
    }

    /// Spins for at least `usec` microseconds (at least one tick)
    pub fn delay_us(&mut self, usec: u32) {
        delay::delay_us(self, usec);
    }

    /// Spins for `usec` microseconds using a wrap-safe signed comparison
    /// on the low 32 bits of the tick count
    pub fn delay_us_masked(&mut self, usec: u32) {
        delay::delay_us_masked(self, usec);
    }

    /// Spins for at least `msec` milliseconds
    pub fn delay_ms(&mut self, msec: u32) {
        delay::delay_ms(self, msec);
    }

    /// Stops using the timer and returns the register bus
    ///
    /// The hardware keeps running.
    pub fn release(self) -> R {
        self.timer.release()
    }
}

impl<R: RegisterIo> TimerDevice for BootTimer<R> {
    fn poll_ticks(&mut self) -> u64 {
        self.current_ticks()
    }
}

impl<R: RegisterIo> TickRate for BootTimer<R> {
    fn ticks_per_second(&self) -> u32 {
        self.conv.timer_rate_hz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Prediv;
    use crate::mmio::FakeMmio;
    use boot_hal::FixedClock;

    const BLOCK: TimerBlock = TimerBlock::S3C24X0;
    const PCLK: FixedClock = FixedClock::new(66_000_000);

    fn usec_config() -> TimerConfig {
        TimerConfig {
            unit_hz: 1_000_000,
            ..TimerConfig::DEFAULT
        }
    }

    /// Countdown register value for a given elapsed sample
    fn countdown(elapsed: u32) -> u32 {
        0xFFFF - elapsed
    }

    #[test]
    fn test_init_calibrates_and_starts_timer() {
        let mut io = FakeMmio::new();
        let timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        assert_eq!(timer.ticks_per_second(), 100_000);
        assert_eq!(timer.converter().unit_hz(), 1000);
        drop(timer);

        let writes = io.writes();
        assert_eq!(writes.len(), 5);
        assert_eq!(writes[0], (BLOCK.tcfg0(), 0xA4A4));
        assert_eq!(writes[2], (BLOCK.tcntb4(), 0xFFFF));
        assert_eq!(io.register(BLOCK.tcon()) & 0x0070_0000, 0x0050_0000);
    }

    #[test]
    fn test_init_rejects_bad_config_without_touching_hardware() {
        let mut io = FakeMmio::new();
        let config = TimerConfig {
            prescaler: 0,
            ..TimerConfig::DEFAULT
        };
        let err = BootTimer::init(&mut io, &PCLK, config).unwrap_err();
        assert_eq!(err, TimerError::InvalidPrescaler(0));
        assert!(io.writes().is_empty());

        let err = BootTimer::init(&mut io, &FixedClock::new(100), TimerConfig::DEFAULT).unwrap_err();
        assert_eq!(
            err,
            TimerError::ZeroRate {
                pclk_hz: 100,
                divisor: 660
            }
        );
        assert!(io.writes().is_empty());
    }

    #[test]
    fn test_init_at_custom_block() {
        let block = TimerBlock::at(0x1000);
        let mut io = FakeMmio::new();
        BootTimer::init_at(&mut io, block, &PCLK, TimerConfig::DEFAULT).unwrap();
        assert_eq!(io.writes()[0].0, 0x1000);
    }

    #[test]
    fn test_tick_state_starts_at_zero() {
        let mut io = FakeMmio::new();
        io.script_reads(BLOCK.tcnto4(), &[countdown(0)]);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();
        assert_eq!(timer.current_ticks(), 0);
    }

    #[test]
    fn test_current_ticks_across_hardware_wrap() {
        let mut io = FakeMmio::new();
        io.script_reads(BLOCK.tcnto4(), &[countdown(100), countdown(50), countdown(60)]);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        let first = timer.current_ticks();
        let second = timer.current_ticks();
        let third = timer.current_ticks();

        assert_eq!(first, 100);
        assert_eq!(second - first, 65_486);
        assert_eq!(third, 0x1_0000 + 60);
    }

    #[test]
    fn test_current_ticks_monotonic_over_free_running_counter() {
        let mut io = FakeMmio::new();
        io.free_running(BLOCK.tcnto4(), 0xFFFF, 997);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        let mut last = timer.current_ticks();
        for _ in 0..5000 {
            let now = timer.current_ticks();
            assert!(now >= last);
            assert_eq!(now - last, 997);
            last = now;
        }
    }

    #[test]
    fn test_time_units_scenario() {
        let mut io = FakeMmio::new();
        io.script_reads(BLOCK.tcnto4(), &[countdown(50)]);
        let mut timer = BootTimer::init(&mut io, &PCLK, usec_config()).unwrap();

        assert_eq!(timer.converter().usec_to_ticks(500), 50);
        assert_eq!(timer.current_time_units(), 500);
    }

    #[test]
    fn test_elapsed_time_units() {
        let mut io = FakeMmio::new();
        // 100 ticks per read is 1 ms at 100 kHz.
        io.free_running(BLOCK.tcnto4(), 0xFFFF, 100);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        let start = timer.current_time_units();
        assert_eq!(start, 0);
        assert_eq!(timer.elapsed_time_units(start), 1);
        assert_eq!(timer.elapsed_time_units(start), 2);
        assert_eq!(timer.elapsed_time_units(0), 3);
    }

    #[test]
    fn test_elapsed_time_units_wraps() {
        let mut io = FakeMmio::new();
        io.script_reads(BLOCK.tcnto4(), &[countdown(500)]);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        // 500 ticks = 5 ms; a base "in the future" wraps instead of panicking.
        assert_eq!(timer.elapsed_time_units(10), 5u32.wrapping_sub(10));
    }

    #[test]
    fn test_delay_us_spins_until_deadline() {
        let mut io = FakeMmio::new();
        io.free_running(BLOCK.tcnto4(), 0xFFFF, 1);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        let start = timer.current_ticks();
        timer.delay_us(500);
        let end = timer.current_ticks();
        // 50 ticks of delay plus the sample taken after it.
        assert!(end - start >= 50);
        assert!(end - start <= 53);
    }

    #[test]
    fn test_delay_us_one_waits_a_full_tick() {
        let mut io = FakeMmio::new();
        io.free_running(BLOCK.tcnto4(), 0xFFFF, 1);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        let samples = samples_taken_by(&mut timer, |t| t.delay_us(1));
        assert!(samples >= 2, "delay must sample the timer at least twice");
    }

    #[test]
    fn test_delay_us_masked_spans_hardware_wrap() {
        let mut io = FakeMmio::new();
        // Start just before the 16-bit reload.
        io.free_running(BLOCK.tcnto4(), 0x0010, 1);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();

        let start = timer.current_ticks();
        timer.delay_us_masked(500);
        let end = timer.current_ticks();
        assert!(end - start >= 51);
        assert!(end - start <= 53);
    }

    #[test]
    fn test_delay_ms() {
        let mut io = FakeMmio::new();
        io.free_running(BLOCK.tcnto4(), 0xFFFF, 7);
        let config = TimerConfig {
            prescaler: 33,
            prediv: Prediv::Div2,
            ..TimerConfig::DEFAULT
        };
        let mut timer = BootTimer::init(&mut io, &PCLK, config).unwrap();
        assert_eq!(timer.ticks_per_second(), 1_000_000);

        let start = timer.current_ticks();
        timer.delay_ms(2);
        assert!(timer.current_ticks() - start >= 2000);
    }

    #[test]
    fn test_usable_as_timer_device() {
        fn measure<T: TimerDevice + TickRate>(timer: &mut T) -> (u64, u32) {
            let a = timer.poll_ticks();
            let b = timer.poll_ticks();
            (b - a, timer.ticks_per_second())
        }

        let mut io = FakeMmio::new();
        io.free_running(BLOCK.tcnto4(), 0xFFFF, 25);
        let mut timer = BootTimer::init(&mut io, &PCLK, TimerConfig::DEFAULT).unwrap();
        assert_eq!(measure(&mut timer), (25, 100_000));
    }

    #[test]
    fn test_release_returns_bus() {
        let io = FakeMmio::new();
        let timer = BootTimer::init(io, &PCLK, TimerConfig::DEFAULT).unwrap();
        let io = timer.release();
        assert_eq!(io.writes().len(), 5);
    }

    /// Runs `f` on a unit-step counter and returns how many samples it took
    fn samples_taken_by<R: RegisterIo>(timer: &mut BootTimer<R>, f: impl FnOnce(&mut BootTimer<R>)) -> u64 {
        let before = timer.current_ticks();
        f(timer);
        timer.current_ticks() - before - 1
    }
}
