//! Implementation of comparison operations
//!
//! Values are kept normalized, so equality is a direct comparison of
//! sign and bigdigits. Ordering compares signs first, then magnitudes,
//! with the magnitude ordering reversed for negative numbers.
//!

use crate::*;


impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, rhs: &BigInt) -> bool {
        self.sign == rhs.sign && self.digits == rhs.digits
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Complete ordering implementation for BigInt
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// let a = BigInt::from(-1000000000);
    /// let b = BigInt::from(-999999999);
    /// let c = BigInt::from(0);
    /// let d: BigInt = "1000000000000000000000".parse().unwrap();
    ///
    /// assert!(a < b);
    /// assert!(b < c);
    /// assert!(c < d);
    /// ```
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.cmp_abs(other),
            (Sign::Minus, Sign::Minus) => self.cmp_abs(other).reverse(),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod ord {
        use super::*;
        use paste::paste;

        macro_rules! impl_test {
            ($name:ident: $a:literal > $b:literal) => {
                impl_test!($name: $a Greater $b);
            };
            ($name:ident: $a:literal < $b:literal) => {
                impl_test!($name: $a Less $b);
            };
            ($name:ident: $a:literal = $b:literal) => {
                impl_test!($name: $a Equal $b);
            };
            ($name:ident: $a:literal $o:ident $b:literal) => {
                paste! {
                    #[test]
                    fn $name() {
                        let a: BigInt = $a.parse().unwrap();
                        let b: BigInt = $b.parse().unwrap();
                        assert_eq!(a.cmp(&b), Ordering::$o);
                        assert_eq!(b.cmp(&a), Ordering::$o.reverse());
                    }

                    #[test]
                    fn [< $name _difference_sign >]() {
                        let a: BigInt = $a.parse().unwrap();
                        let b: BigInt = $b.parse().unwrap();
                        let diff = &a - &b;
                        assert_eq!(diff.cmp(&BigInt::zero()), Ordering::$o);
                    }
                }
            };
        }

        impl_test!(case_0_0: "0" = "0");
        impl_test!(case_0_neg0: "0" = "-0");
        impl_test!(case_1_0: "1" > "0");
        impl_test!(case_n1_0: "-1" < "0");
        impl_test!(case_n1_1: "-1" < "1");
        impl_test!(case_5_12: "5" < "12");
        impl_test!(case_n5_n12: "-5" > "-12");
        impl_test!(case_longer_is_larger: "1000000000" > "999999999");
        impl_test!(case_longer_negative_is_smaller: "-1000000000" < "-999999999");
        impl_test!(case_high_digit_decides: "2000000000000000001" > "1999999999999999999");
        impl_test!(case_low_digit_decides: "-1000000000000000001" < "-1000000000000000000");
    }

    #[test]
    fn test_eq_ignores_construction_path() {
        let a = BigInt::from(10) - BigInt::from(10);
        let b = -BigInt::zero();
        let c: BigInt = "-000".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, BigInt::zero());
    }

    #[test]
    fn test_sort() {
        let mut v: Vec<BigInt> = ["3", "-1000000000000", "0", "-7", "999999999999"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        v.sort();
        let sorted: Vec<String> = v.iter().map(|n| n.to_string()).collect();
        assert_eq!(sorted, ["-1000000000000", "-7", "0", "3", "999999999999"]);
    }
}
