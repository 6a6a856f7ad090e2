//! Busy-wait delays over any [`TimerDevice`]
//!
//! These loops spin on the timer until the deadline passes. They never
//! sleep or yield and cannot be cancelled. Polling in a tight loop also
//! keeps a narrow hardware counter inside its single-wrap polling window.

use core::hint::spin_loop;

use crate::timer::{TickRate, TimerDevice};
use crate::units::usec_to_ticks;

/// Spins for at least `usec` microseconds
///
/// The deadline is measured against a start sample. A delay shorter than
/// one tick is stretched to one tick so the loop always waits for the
/// counter to move past the start sample.
pub fn delay_us<T: TimerDevice + TickRate + ?Sized>(timer: &mut T, usec: u32) {
    let start = timer.poll_ticks();
    let mut tmo = usec_to_ticks(usec as u64, timer.ticks_per_second());
    if tmo == 0 {
        tmo = 1;
    }
    while timer.poll_ticks().wrapping_sub(start) < tmo {
        spin_loop();
    }
}

/// Spins for `usec` microseconds using a signed 32-bit deadline comparison
///
/// Only the low 32 bits of the tick count take part, and the loop runs
/// until `deadline - now` turns negative, so it survives the low word
/// wrapping mid-delay. Delays must stay below 2^31 ticks. There is no
/// one-tick floor; the loop exits one tick after the deadline.
pub fn delay_us_masked<T: TimerDevice + TickRate + ?Sized>(timer: &mut T, usec: u32) {
    let tmo = usec_to_ticks(usec as u64, timer.ticks_per_second()) as u32;
    let end = (timer.poll_ticks() as u32).wrapping_add(tmo);

    loop {
        let now = timer.poll_ticks() as u32;
        let diff = end.wrapping_sub(now) as i32;
        if diff < 0 {
            break;
        }
        spin_loop();
    }
}

/// Spins for at least `msec` milliseconds
///
/// Waits one millisecond at a time so long delays neither overflow the
/// microsecond argument nor outlast a single polling window.
pub fn delay_ms<T: TimerDevice + TickRate + ?Sized>(timer: &mut T, msec: u32) {
    for _ in 0..msec {
        delay_us(timer, 1000);
    }
}
