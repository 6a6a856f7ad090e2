//! # S3C24x0 Boot Hardware Abstraction Layer
//!
//! This crate implements the `boot_hal` traits for Samsung S3C24x0 SoCs
//! (ARM920T), using PWM timer 4 as the only time source.
//!
//! ## Scope
//!
//! - [`BootTimer`]: monotonic 64-bit ticks, time units and busy-wait delays
//!   synthesized from a 16-bit countdown timer by polling
//! - [`Watchdog`]: system reset
//!
//! Register access goes through [`RegisterIo`], so everything except the
//! volatile accessors in [`RealMmio`] runs on the host under test.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

pub mod boot_timer;
pub mod config;
pub mod error;
pub mod mmio;
pub mod regs;
pub mod tick;
pub mod timer;
pub mod watchdog;

pub use boot_timer::BootTimer;
pub use config::{Prediv, TimerConfig};
pub use error::TimerError;
#[cfg(any(test, feature = "alloc"))]
pub use mmio::FakeMmio;
pub use mmio::{RealMmio, RegisterIo};
pub use tick::TickExtender;
pub use timer::PwmTimer;
pub use watchdog::Watchdog;
