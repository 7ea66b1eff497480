//! Long division of BigDigit slices
//!

use crate::stdlib::cmp::Ordering;
use crate::bigdigit::{BigDigitVec, BIG_DIGIT_RADIX};

use super::cmp_digit_slices;
use super::subtraction::sub_assign_digit_slice;


/// Divide magnitude 'a' by non-zero magnitude 'b', returning (quotient, remainder)
///
/// Both operands are first scaled by `RADIX / (leading_digit(b) + 1)`,
/// so the leading digit of the divisor is large enough for the
/// two-digit quotient estimate to overshoot by at most a small amount.
/// The quotient is unaffected by the scaling; the remainder is divided
/// by the same factor before being returned.
///
pub(crate) fn divrem_digit_slices(a: &[u32], b: &[u32]) -> (BigDigitVec, BigDigitVec) {
    debug_assert!(!b.is_empty());
    debug_assert!(b.last() != Some(&0));

    let norm = (BIG_DIGIT_RADIX / (b[b.len() - 1] as u64 + 1)) as u32;

    let mut a = BigDigitVec::from_vec(a.to_vec());
    a.mul_value(norm);
    let mut b = BigDigitVec::from_vec(b.to_vec());
    b.mul_value(norm);

    let b_len = b.len();
    let b_lead = b.most_significant_digit() as u64;

    let mut quotient = BigDigitVec::from_zero_count(a.len());
    let mut remainder = BigDigitVec::with_capacity(b_len + 1);

    for i in (0..a.len()).rev() {
        remainder.push_insignificant_digit(a.digits[i]);

        let s1 = remainder.digits.get(b_len).copied().unwrap_or(0) as u64;
        let s2 = remainder.digits.get(b_len - 1).copied().unwrap_or(0) as u64;
        let mut d = ((BIG_DIGIT_RADIX * s1 + s2) / b_lead).min(BIG_DIGIT_RADIX - 1);

        let mut product = b.clone();
        product.mul_value(d as u32);
        while cmp_digit_slices(product.as_slice(), remainder.as_slice()) == Ordering::Greater {
            sub_assign_digit_slice(&mut product, b.as_slice());
            d -= 1;
        }
        sub_assign_digit_slice(&mut remainder, product.as_slice());

        quotient.digits[i] = d as u32;
    }

    quotient.strip_significant_zeros();
    let rem = remainder.divrem_value(norm);
    debug_assert_eq!(rem, 0);

    (quotient, remainder)
}
