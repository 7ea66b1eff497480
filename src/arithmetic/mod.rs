//! arithmetic routines
//!
//! Routines here operate on magnitudes: little-endian slices of
//! bigdigits in the storage radix, without sign.
//!

use crate::stdlib::cmp::Ordering;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod division;


/// Return 10^{pow} as u64
pub(crate) fn ten_to_the_u64(pow: u8) -> u64 {
    debug_assert!(pow < 20);
    10u64.pow(pow as u32)
}

/// Compare two magnitudes
///
/// Neither slice may have significant (trailing) zero digits: more
/// digits implies a larger value.
///
pub(crate) fn cmp_digit_slices(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}
