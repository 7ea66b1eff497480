//! Remainder implementations
//!
//! The remainder takes the sign of the dividend, matching truncating
//! division.

use crate::*;


impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            panic!("Division by zero");
        }
        if self.cmp_abs(other) == Ordering::Less {
            return self.clone();
        }

        self.divmod_nonzero(other).1
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl<'a> RemAssign<&'a BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

forward_val_assignop!(impl RemAssign for BigInt, rem_assign);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal % $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(a.clone() % b.clone(), c);
                    assert_eq!(a.clone() % &b, c);
                    assert_eq!(&a % b.clone(), c);
                    assert_eq!(&a % &b, c);

                    let mut n = a.clone();
                    n %= &b;
                    assert_eq!(n, c);
                }
            }
        };
    }

    impl_case!(case_7_3: "7" % "3" => "1");
    impl_case!(case_n7_3: "-7" % "3" => "-1");
    impl_case!(case_7_n3: "7" % "-3" => "1");
    impl_case!(case_n7_n3: "-7" % "-3" => "-1");
    impl_case!(case_3_7: "3" % "7" => "3");
    impl_case!(case_n3_7: "-3" % "7" => "-3");
    impl_case!(case_exact: "-1000000000000000000" % "1000000000" => "0");
    impl_case!(case_large: "123456789012345678901234567890" % "9876543210" => "1562499990");

    #[test]
    fn exact_negative_remainder_is_positive_zero() {
        let r = BigInt::from(-9) % BigInt::from(3);
        assert!(r.is_zero());
        assert_eq!(r.sign(), Sign::Plus);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn rem_by_zero_panics() {
        let mut n = BigInt::from(5);
        n %= BigInt::zero();
    }
}
