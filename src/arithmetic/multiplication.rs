//! Multiplication algorithms for BigDigit slices
//!
//! Large products use Karatsuba's method over six-digit limbs, small
//! ones fall back to quadratic convolution.
//!

use crate::stdlib::Vec;
use crate::bigdigit::{
    BigDigitVec, RadixType, StorageRadix, MultiplicationRadix,
};
use crate::bigdigit::convert::convert_radix;

// const KARATSUBA_CUTOFF: usize = ${RUST_DECIMAL_BIGINT_KARATSUBA_CUTOFF} or 96;
include!(concat!(env!("OUT_DIR"), "/karatsuba_cutoff.rs"));


/// Multiply two magnitudes using the Karatsuba algorithm
///
/// Digits are rebased to the multiplication radix, padded to a common
/// power-of-two length, multiplied, carried, and rebased back.
///
pub(crate) fn multiply_digit_slices(a: &[u32], b: &[u32]) -> BigDigitVec {
    if a.is_empty() || b.is_empty() {
        return BigDigitVec::new();
    }

    let mut a6: Vec<i64> = convert_radix::<StorageRadix, MultiplicationRadix>(a)
                            .into_iter()
                            .map(i64::from)
                            .collect();
    let mut b6: Vec<i64> = convert_radix::<StorageRadix, MultiplicationRadix>(b)
                            .into_iter()
                            .map(i64::from)
                            .collect();

    let n = a6.len().max(b6.len()).next_power_of_two();
    a6.resize(n, 0);
    b6.resize(n, 0);

    let product = karatsuba_multiply(&a6, &b6);

    let radix = MultiplicationRadix::RADIX as i64;
    let mut digits = Vec::with_capacity(product.len() + 1);
    let mut carry = 0i64;
    for p in product {
        let cur = p + carry;
        debug_assert!(cur >= 0);
        digits.push((cur % radix) as u32);
        carry = cur / radix;
    }
    while carry != 0 {
        digits.push((carry % radix) as u32);
        carry /= radix;
    }

    BigDigitVec::from_vec(convert_radix::<MultiplicationRadix, StorageRadix>(&digits))
}

/// Karatsuba multiplication of equal length, power-of-two sized slices
///
/// The result has twice the length of the inputs, and its digits are
/// NOT carried: each may exceed the radix.
///
/// Deep recursion grows the `lo + hi` sums until the leaf convolutions
/// no longer fit in an i64, so everything is computed modulo 2^64.
/// Each final coefficient is a sum of at most `n` products of six-digit
/// limbs, which stays below 2^63 for any `n` under nine million, so the
/// wrapped result is exact.
///
pub(crate) fn karatsuba_multiply(a: &[i64], b: &[i64]) -> Vec<i64> {
    let n = a.len();
    debug_assert_eq!(n, b.len());
    debug_assert!(n == 0 || n.is_power_of_two());

    let mut result = vec![0i64; n + n];

    if n <= KARATSUBA_CUTOFF {
        for (i, &a_digit) in a.iter().enumerate() {
            if a_digit == 0 {
                continue;
            }
            for (j, &b_digit) in b.iter().enumerate() {
                result[i + j] = result[i + j].wrapping_add(a_digit.wrapping_mul(b_digit));
            }
        }
        return result;
    }

    let k = n >> 1;
    let (a_lo, a_hi) = a.split_at(k);
    let (b_lo, b_hi) = b.split_at(k);

    let lo_product = karatsuba_multiply(a_lo, b_lo);
    let hi_product = karatsuba_multiply(a_hi, b_hi);

    let a_sum: Vec<i64> = a_lo.iter().zip(a_hi).map(|(&x, &y)| x.wrapping_add(y)).collect();
    let b_sum: Vec<i64> = b_lo.iter().zip(b_hi).map(|(&x, &y)| x.wrapping_add(y)).collect();

    // (lo + hi)(lo + hi) - lo*lo - hi*hi leaves the cross term
    let mut cross = karatsuba_multiply(&a_sum, &b_sum);
    for (c, (&lo, &hi)) in cross.iter_mut().zip(lo_product.iter().zip(hi_product.iter())) {
        *c = c.wrapping_sub(lo.wrapping_add(hi));
    }

    for (i, c) in cross.into_iter().enumerate() {
        result[i + k] = result[i + k].wrapping_add(c);
    }
    for (i, p) in lo_product.into_iter().enumerate() {
        result[i] = result[i].wrapping_add(p);
    }
    for (i, p) in hi_product.into_iter().enumerate() {
        result[i + n] = result[i + n].wrapping_add(p);
    }

    result
}

/// Multiply two magnitudes with the quadratic "schoolbook" algorithm
///
/// Digits are carried as they are produced, so this works directly in
/// the storage radix.
///
pub(crate) fn multiply_digit_slices_schoolbook(a: &[u32], b: &[u32]) -> BigDigitVec {
    let mut result = BigDigitVec::from_zero_count(a.len() + b.len());
    for (ia, &digit_a) in a.iter().enumerate() {
        if digit_a == 0 {
            continue;
        }

        let mut carry = 0;
        for (ib, &digit_b) in b.iter().enumerate() {
            StorageRadix::carrying_mul_add_inplace(
                digit_a, digit_b, &mut result.digits[ia + ib], &mut carry
            );
        }
        StorageRadix::add_carry_into_slice(&mut result.digits[ia + b.len()..], &mut carry);
        debug_assert_eq!(carry, 0);
    }

    result.strip_significant_zeros();
    result
}


#[cfg(test)]
#[path = "multiplication.tests.rs"]
mod test;
