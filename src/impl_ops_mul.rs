//! Multiplication operator trait implementation
//!

use crate::*;
use crate::arithmetic::multiplication::{multiply_digit_slices, multiply_digit_slices_schoolbook};


/// Product of two magnitudes
///
/// Single-bigdigit operands skip the rebasing required by Karatsuba.
///
fn multiply_magnitudes(a: &[u32], b: &[u32]) -> BigDigitVec {
    if a.len() == 1 || b.len() == 1 {
        multiply_digit_slices_schoolbook(a, b)
    } else {
        multiply_digit_slices(a, b)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }

        let digits = multiply_magnitudes(self.digits.as_slice(), rhs.digits.as_slice());
        BigInt::from_parts(digits, self.sign * rhs.sign)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl<'a> MulAssign<&'a BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

forward_val_assignop!(impl MulAssign for BigInt, mul_assign);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(a.clone() * b.clone(), c);
                    assert_eq!(a.clone() * &b, c);
                    assert_eq!(&a * b.clone(), c);
                    assert_eq!(&a * &b, c);
                    assert_eq!(&b * &a, c);

                    let mut n = a.clone();
                    n *= &b;
                    assert_eq!(n, c);

                    let mut n = a.clone();
                    n *= b.clone();
                    assert_eq!(n, c);
                }

                #[test]
                fn [< $name _signs >]() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(-&a * &b, -c.clone());
                    assert_eq!(&a * -&b, -c.clone());
                    assert_eq!(-&a * -&b, c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" * "0" => "0");
    impl_case!(case_0_12: "0" * "12" => "0");
    impl_case!(case_1_12: "1" * "12" => "12");
    impl_case!(case_7_22: "7" * "22" => "154");
    impl_case!(case_ten_to_nine_squared: "1000000000" * "1000000000" => "1000000000000000000");
    impl_case!(case_two_bigdigits: "209504545595" * "605739580991" => "126905195664425154784645");
    impl_case!(case_max_u64_squared: "18446744073709551615" * "18446744073709551615" => "340282366920938463426481119284349108225");
    impl_case!(case_repunits: "111111111111111111111" * "111111111111111111111" => "12345679012345679012320987654320987654321");

    #[test]
    fn square_of_many_nines_matches_num_bigint() {
        // deep enough that the inner lo + hi sums overflow an i64 leaf
        let m = 196608;
        let nines = "9".repeat(m);
        let x: BigInt = nines.parse().unwrap();
        let square = &x * &x;

        let oracle: num_bigint::BigInt = nines.parse().unwrap();
        assert_eq!(square.to_string(), (&oracle * &oracle).to_string());

        // (10^m - 1)^2 = 10^2m - 2*10^m + 1
        let expected = format!("{}8{}1", "9".repeat(m - 1), "0".repeat(m - 1));
        assert_eq!(square.to_string(), expected);
    }

    #[test]
    fn zero_product_is_positive() {
        let z = BigInt::from(-5) * BigInt::zero();
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::Plus);
    }
}
