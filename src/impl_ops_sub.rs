//! Subtraction operator trait implementation
//!

use crate::*;
use crate::impl_ops_add::add_assign_signed;


impl<'a> SubAssign<&'a BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        add_assign_signed(self, rhs.digits.as_slice(), -rhs.sign);
    }
}

forward_val_assignop!(impl SubAssign for BigInt, sub_assign);

impl<'a> Sub<&'a BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self -= rhs;
        self
    }
}

forward_val_val_binop!(impl Sub for BigInt, sub);

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: BigInt) -> BigInt {
        // a - b == -(b - a), reusing storage of rhs
        -(rhs - self)
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self.clone() - rhs
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal - $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(a.clone() - b.clone(), c);
                    assert_eq!(a.clone() - &b, c);
                    assert_eq!(&a - b.clone(), c);
                    assert_eq!(&a - &b, c);

                    let mut n = a.clone();
                    n -= &b;
                    assert_eq!(n, c);

                    let mut n = a.clone();
                    n -= b.clone();
                    assert_eq!(n, c);
                }

                #[test]
                fn [< $name _swapped >]() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(&b - &a, -c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" - "0" => "0");
    impl_case!(case_5_5: "5" - "5" => "0");
    impl_case!(case_34_12: "34" - "12" => "22");
    impl_case!(case_12_34: "12" - "34" => "-22");
    impl_case!(case_n12_34: "-12" - "34" => "-46");
    impl_case!(case_12_n34: "12" - "-34" => "46");
    impl_case!(case_n12_n34: "-12" - "-34" => "22");
    impl_case!(case_borrow: "1000000000" - "1" => "999999999");
    impl_case!(case_borrow_ripples: "1000000000000000000000000000" - "1" => "999999999999999999999999999");
    impl_case!(case_cancel_high_digits: "1000000000000000000000000001" - "1000000000000000000000000000" => "1");

    #[test]
    fn sub_from_self_is_zero() {
        let a: BigInt = "-98765432109876543210".parse().unwrap();
        let z = &a - &a;
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::Plus);
        assert_eq!(z.digits(), &[] as &[u32]);
    }
}
