//! Conversion of little-endian digit slices between power-of-ten radixes
//!
//! Both radixes must fit a bigdigit in a u32; the accumulator holds at
//! most `From::DIGITS + To::DIGITS` decimal digits, which fits in a u64
//! for every radix defined in [`super::radix`].
//!

use crate::stdlib::Vec;
use crate::arithmetic::ten_to_the_u64;

use super::radix::RadixPowerOfTen;


/// Re-express little-endian digits of radix `F` as digits of radix `T`
///
/// Digits are accumulated into a mixed-radix buffer, and each time at
/// least `T::DIGITS` decimal digits have been collected the low chunk is
/// emitted. Trailing (most significant) zero digits are removed.
///
pub(crate) fn convert_radix<F, T>(digits: &[u32]) -> Vec<u32>
where
    F: RadixPowerOfTen<Base = u32>,
    T: RadixPowerOfTen<Base = u32>,
{
    debug_assert!(F::DIGITS + T::DIGITS < 20);

    let new_radix = ten_to_the_u64(T::DIGITS as u8);

    let mut result = Vec::with_capacity(digits.len() * F::DIGITS / T::DIGITS + 2);
    let mut acc: u64 = 0;
    let mut acc_digits = 0;

    for &d in digits {
        acc += d as u64 * ten_to_the_u64(acc_digits as u8);
        acc_digits += F::DIGITS;
        while acc_digits >= T::DIGITS {
            result.push((acc % new_radix) as u32);
            acc /= new_radix;
            acc_digits -= T::DIGITS;
        }
    }
    result.push(acc as u32);

    let nonzero = result.iter().rposition(|&d| d != 0).map(|idx| idx + 1).unwrap_or(0);
    result.truncate(nonzero);
    result
}
