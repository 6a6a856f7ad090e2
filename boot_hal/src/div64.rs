//! Unsigned 64-by-32 division
//!
//! ARMv4T cores (ARM920T and friends) have no divide instruction, and a
//! general 64-bit division pulls a large helper into the boot image. Every
//! divisor used by the timing code fits in 32 bits, so a shift-and-subtract
//! loop that only needs a 32-bit divide for its first step is enough.
//!
//! The interface follows the classic `do_div` shape: the dividend is
//! replaced by the quotient and the remainder is returned.

/// Divides `*n` by `base` in place and returns the remainder
///
/// # Panics
///
/// Panics if `base` is zero.
///
/// # Examples
///
/// ```
/// use boot_hal::div64::do_div;
///
/// let mut ticks: u64 = 50 * 1_000_000;
/// let rem = do_div(&mut ticks, 100_000);
/// assert_eq!(ticks, 500);
/// assert_eq!(rem, 0);
/// ```
pub fn do_div(n: &mut u64, base: u32) -> u32 {
    let mut rem = *n;
    let mut b = base as u64;
    let mut d: u64 = 1;
    let mut res: u64 = 0;

    // Take the upper word out with a 32-bit divide first. Also rejects base 0.
    let high = (rem >> 32) as u32;
    if high >= base {
        let q = high / base;
        res = (q as u64) << 32;
        rem -= ((q * base) as u64) << 32;
    }

    while (b as i64) > 0 && b < rem {
        b += b;
        d += d;
    }

    loop {
        if rem >= b {
            rem -= b;
            res += d;
        }
        b >>= 1;
        d >>= 1;
        if d == 0 {
            break;
        }
    }

    *n = res;
    rem as u32
}

/// Returns `(n / base, n % base)`
pub fn div_u64_rem(n: u64, base: u32) -> (u64, u32) {
    let mut quotient = n;
    let rem = do_div(&mut quotient, base);
    (quotient, rem)
}
