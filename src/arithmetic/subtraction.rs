//!
//! Subtraction algorithms for BigDigit slices
//!

use crate::bigdigit::{BigDigitVec, BIG_DIGIT_RADIX};

use super::cmp_digit_slices;


/// Return a - b, requires |a| >= |b|
#[inline]
pub(crate) fn sub_digit_slices(a: &[u32], b: &[u32]) -> BigDigitVec {
    let mut result = BigDigitVec::from_vec(a.to_vec());
    sub_assign_digit_slice(&mut result, b);
    return result;
}

/// Subtract digits of 'b' from 'a' in place, requires |a| >= |b|
///
/// Significant zeros are stripped from the result.
///
#[inline]
pub(crate) fn sub_assign_digit_slice(a: &mut BigDigitVec, b: &[u32]) {
    debug_assert!(cmp_digit_slices(a.as_slice(), b).is_ge());

    let mut borrow = 0i64;
    let (lo, hi) = a.digits.split_at_mut(b.len());
    for (dest, &b_digit) in lo.iter_mut().zip(b.iter()) {
        let diff = *dest as i64 - b_digit as i64 - borrow;
        if diff < 0 {
            *dest = (diff + BIG_DIGIT_RADIX as i64) as u32;
            borrow = 1;
        } else {
            *dest = diff as u32;
            borrow = 0;
        }
    }

    for dest in hi.iter_mut() {
        if borrow == 0 {
            break;
        }
        if *dest == 0 {
            *dest = BIG_DIGIT_RADIX as u32 - 1;
        } else {
            *dest -= 1;
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);

    a.strip_significant_zeros();
}


#[cfg(test)]
mod test_sub_digit_slices {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($a:literal),* ] - [ $($b:literal),* ] == [ $($c:literal),* ]) => {
            #[test]
            fn $name() {
                let a: &[u32] = &[ $($a),* ];
                let b: &[u32] = &[ $($b),* ];
                let expected: &[u32] = &[ $($c),* ];

                let diff = sub_digit_slices(a, b);
                assert_eq!(diff.as_slice(), expected);
            }
        };
    }

    impl_case!(case_0_0: [] - [] == []);
    impl_case!(case_10_0: [10] - [] == [10]);
    impl_case!(case_10_3: [10] - [3] == [7]);
    impl_case!(case_equal_is_empty: [5, 7, 9] - [5, 7, 9] == []);
    impl_case!(case_borrow: [0, 1] - [1] == [999999999]);
    impl_case!(case_borrow_ripples: [0, 0, 0, 1] - [1] == [999999999, 999999999, 999999999]);
    impl_case!(case_strips: [4, 0, 2] - [3, 0, 2] == [1]);
    impl_case!(case_borrow_middle: [3, 0, 5] - [4, 1] == [999999999, 999999998, 4]);
}
