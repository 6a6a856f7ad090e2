//! # Boot-time Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits used by boot code,
//! plus the timing arithmetic that does not depend on any particular SoC.
//!
//! ## Philosophy
//!
//! **Boot code polls; it does not wait for interrupts.**
//!
//! Everything here runs before an interrupt controller or scheduler exists.
//! Timers are polled, delays spin, and the only way out of a reset is
//! through the hardware.
//!
//! ## Design Principles
//!
//! 1. **No SoC-specific assumptions**: register maps live in the platform crates
//! 2. **Trait-based**: timer, clock and reset access go through traits
//! 3. **No wide division**: conversions use [`div64::do_div`]
//! 4. **Testable**: every trait can be implemented by a test double

#![no_std]

pub mod clock;
pub mod delay;
pub mod div64;
pub mod reset;
pub mod timer;
pub mod units;

pub use clock::{ClockSource, FixedClock};
pub use reset::ResetHal;
pub use timer::{TickRate, TimerDevice};
pub use units::TickConverter;
