//! Addition operator trait implementation
//!

use crate::*;
use crate::arithmetic::addition::add_assign_digit_slice;
use crate::arithmetic::subtraction::{sub_assign_digit_slice, sub_digit_slices};


/// Add the signed magnitude (rhs_sign, rhs) into lhs
///
/// Shared by addition and subtraction, which passes the negated sign.
///
pub(crate) fn add_assign_signed(lhs: &mut BigInt, rhs: &[u32], rhs_sign: Sign) {
    if rhs.is_empty() {
        return;
    }
    if lhs.digits.is_empty() {
        lhs.digits = BigDigitVec::from_vec(rhs.to_vec());
        lhs.sign = rhs_sign;
        return;
    }

    if lhs.sign == rhs_sign {
        add_assign_digit_slice(&mut lhs.digits, rhs);
        return;
    }

    match cmp_digit_slices(lhs.digits.as_slice(), rhs) {
        Ordering::Less => {
            lhs.digits = sub_digit_slices(rhs, lhs.digits.as_slice());
            lhs.sign = rhs_sign;
        }
        Ordering::Equal | Ordering::Greater => {
            sub_assign_digit_slice(&mut lhs.digits, rhs);
        }
    }
    lhs.trim();
}


impl<'a> AddAssign<&'a BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        add_assign_signed(self, rhs.digits.as_slice(), rhs.sign);
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        // keep the larger allocation
        if self.digits.len() < rhs.digits.len() {
            let lhs = stdlib::mem::replace(self, rhs);
            *self += &lhs;
        } else {
            *self += &rhs;
        }
    }
}

impl<'a> Add<&'a BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: &BigInt) -> BigInt {
        self += rhs;
        self
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: BigInt) -> BigInt {
        self += rhs;
        self
    }
}

impl<'a> Add<BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        rhs + self
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        if self.digits.len() >= rhs.digits.len() {
            self.clone() + rhs
        } else {
            rhs.clone() + self
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(a.clone() + b.clone(), c);
                    assert_eq!(a.clone() + &b, c);
                    assert_eq!(&a + b.clone(), c);
                    assert_eq!(&a + &b, c);

                    let mut n = a.clone();
                    n += &b;
                    assert_eq!(n, c);

                    let mut n = a.clone();
                    n += b.clone();
                    assert_eq!(n, c);

                    // commutative
                    assert_eq!(&b + &a, c);
                }

                #[test]
                fn [< $name _neg >]() {
                    let a = -$a.parse::<BigInt>().unwrap();
                    let b = -$b.parse::<BigInt>().unwrap();
                    let c = -$c.parse::<BigInt>().unwrap();

                    assert_eq!(&a + &b, c);
                    assert_eq!(&b + &a, c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" + "0" => "0");
    impl_case!(case_1_0: "1" + "0" => "1");
    impl_case!(case_12_34: "12" + "34" => "46");
    impl_case!(case_n12_34: "-12" + "34" => "22");
    impl_case!(case_12_n34: "12" + "-34" => "-22");
    impl_case!(case_n1_1: "-1" + "1" => "0");
    impl_case!(case_carry_into_new_digit: "999999999" + "1" => "1000000000");
    impl_case!(case_carry_ripples: "999999999999999999999999999" + "1" => "1000000000000000000000000000");
    impl_case!(case_borrow_shrinks: "-1000000000000000000" + "999999999999999999" => "-1");
    impl_case!(case_large_mixed: "-123456789012345678901234567890" + "987654321098765432109876543210" => "864197532086419753208641975320");
}
