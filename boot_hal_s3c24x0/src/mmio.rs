//! Memory-mapped register access
//!
//! This module provides a trait-based abstraction for 32-bit MMIO register
//! access, allowing for both real hardware access and fake implementations
//! for testing.
//!
//! ## Safety
//!
//! Register access is inherently unsafe as it directly interacts with
//! hardware. Care must be taken to:
//! - Only access registers that exist on the running SoC
//! - Keep accesses in program order (no merging or elision)
//!
//! The `RealMmio` implementation isolates all unsafe code to two volatile
//! accessors.

/// 32-bit register bus
///
/// Abstracts plain ordered loads and stores to absolute register addresses.
///
/// ## Implementation Notes
///
/// Implementations must guarantee:
/// - `read32` performs exactly one 32-bit load from `addr`
/// - `write32` performs exactly one 32-bit store to `addr`
/// - Accesses complete in program order
pub trait RegisterIo {
    /// Reads a 32-bit register
    fn read32(&mut self, addr: usize) -> u32;

    /// Writes a 32-bit register
    fn write32(&mut self, addr: usize, value: u32);
}

impl<R: RegisterIo + ?Sized> RegisterIo for &mut R {
    #[inline]
    fn read32(&mut self, addr: usize) -> u32 {
        (**self).read32(addr)
    }

    #[inline]
    fn write32(&mut self, addr: usize, value: u32) {
        (**self).write32(addr, value)
    }
}

/// Real hardware register access
///
/// Uses volatile loads and stores on the physical register addresses. The
/// boot environment runs with the MMU off, so physical and virtual
/// addresses coincide.
///
/// ## Example
///
/// ```rust,ignore
/// let mut io = unsafe { RealMmio::new() };
/// let tcon = io.read32(0x5100_0008);
/// ```
#[derive(Debug)]
pub struct RealMmio {
    _private: (),
}

impl RealMmio {
    /// Creates a real register bus
    ///
    /// # Safety
    ///
    /// The caller must be running on the SoC whose register addresses will
    /// be passed to this bus, with those addresses mapped and accessible.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterIo for RealMmio {
    #[inline]
    fn read32(&mut self, addr: usize) -> u32 {
        // SAFETY: `RealMmio::new` requires the caller to vouch that register
        // addresses are valid device memory for this SoC.
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    #[inline]
    fn write32(&mut self, addr: usize, value: u32) {
        // SAFETY: see `read32`.
        unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
    }
}

#[cfg(any(test, feature = "alloc"))]
pub use fake::FakeMmio;

#[cfg(any(test, feature = "alloc"))]
mod fake {
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::vec::Vec;

    use super::RegisterIo;

    /// A 16-bit countdown register that decrements on every read
    #[derive(Debug)]
    struct Countdown {
        addr: usize,
        value: u32,
        step: u32,
    }

    /// Fake register bus for testing
    ///
    /// Behaves like a register file: writes are stored and logged, reads
    /// return the stored value. On top of that a read can be scripted per
    /// address, and one address can be made to count down freely like a
    /// running timer.
    ///
    /// Read priority is scripted values first, then the free-running
    /// counter, then the stored register value (0 if never written).
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use boot_hal_s3c24x0::mmio::{FakeMmio, RegisterIo};
    ///
    /// let mut io = FakeMmio::new();
    /// io.script_reads(0x5100_0040, &[0xFF00, 0xFE00]);
    ///
    /// assert_eq!(io.read32(0x5100_0040), 0xFF00);
    /// assert_eq!(io.read32(0x5100_0040), 0xFE00);
    ///
    /// io.write32(0x5100_0008, 0x0050_0000);
    /// assert_eq!(io.writes(), &[(0x5100_0008, 0x0050_0000)]);
    /// ```
    #[derive(Debug, Default)]
    pub struct FakeMmio {
        registers: BTreeMap<usize, u32>,
        scripted: BTreeMap<usize, VecDeque<u32>>,
        countdown: Option<Countdown>,
        writes: Vec<(usize, u32)>,
        reads: usize,
    }

    impl FakeMmio {
        /// Creates an empty register file
        pub fn new() -> Self {
            Self::default()
        }

        /// Presets a register without logging a write
        pub fn set_register(&mut self, addr: usize, value: u32) {
            self.registers.insert(addr, value);
        }

        /// Returns the stored value of a register
        pub fn register(&self, addr: usize) -> u32 {
            self.registers.get(&addr).copied().unwrap_or(0)
        }

        /// Queues values to be returned by the next reads of `addr`
        pub fn script_reads(&mut self, addr: usize, values: &[u32]) {
            self.scripted
                .entry(addr)
                .or_default()
                .extend(values.iter().copied());
        }

        /// Returns the number of scripted reads left for `addr`
        pub fn remaining_reads(&self, addr: usize) -> usize {
            self.scripted.get(&addr).map_or(0, VecDeque::len)
        }

        /// Makes `addr` behave like a running 16-bit countdown
        ///
        /// Each read returns the current value and then moves it down by
        /// `step`, reloading through 0xFFFF.
        pub fn free_running(&mut self, addr: usize, start: u32, step: u32) {
            self.countdown = Some(Countdown {
                addr,
                value: start & 0xFFFF,
                step,
            });
        }

        /// Returns all captured writes, oldest first
        pub fn writes(&self) -> &[(usize, u32)] {
            &self.writes
        }

        /// Clears the captured writes
        pub fn clear_writes(&mut self) {
            self.writes.clear();
        }

        /// Returns the total number of reads served
        pub fn read_count(&self) -> usize {
            self.reads
        }
    }

    impl RegisterIo for FakeMmio {
        fn read32(&mut self, addr: usize) -> u32 {
            self.reads += 1;

            if let Some(value) = self.scripted.get_mut(&addr).and_then(VecDeque::pop_front) {
                return value;
            }

            if let Some(countdown) = self.countdown.as_mut().filter(|c| c.addr == addr) {
                let value = countdown.value;
                countdown.value = value.wrapping_sub(countdown.step) & 0xFFFF;
                return value;
            }

            self.register(addr)
        }

        fn write32(&mut self, addr: usize, value: u32) {
            self.registers.insert(addr, value);
            self.writes.push((addr, value));
        }
    }
}
