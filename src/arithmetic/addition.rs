//!
//! Addition algorithms for BigDigit slices
//!

use crate::bigdigit::{BigDigitVec, RadixType, StorageRadix};


/// Add digits of 'b' into 'a', growing 'a' if needed
#[inline]
pub(crate) fn add_assign_digit_slice(a: &mut BigDigitVec, b: &[u32]) {
    if a.len() < b.len() {
        a.resize(b.len());
    }

    let mut carry = 0;
    let (lo, hi) = a.digits.split_at_mut(b.len());
    for (dest, &b_digit) in lo.iter_mut().zip(b.iter()) {
        let (overflow, sum) = StorageRadix::expanding_add(*dest, b_digit);
        let (overflow2, sum) = StorageRadix::expanding_add(sum, carry);
        *dest = sum;
        carry = overflow + overflow2;
    }
    StorageRadix::add_carry_into_slice(hi, &mut carry);

    if carry != 0 {
        a.push_significant_digit(carry);
    }
}
