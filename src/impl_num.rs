//! Code for num_traits & num_integer

use crate::*;
use num_traits::{CheckedDiv, CheckedRem};


impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.digits.clear();
        self.sign = Sign::Plus;
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from_parts(BigDigitVec::from_vec(vec![1]), Sign::Plus)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.digits.as_slice() == [1]
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a BigInt.
    ///
    /// Only radix 10 is supported.
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if radix != 10 {
            return Err(ParseBigIntError::Other(String::from(
                "The radix for BigInt MUST be 10",
            )));
        }
        BigInt::parse(s)
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        BigInt::abs(self)
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        match (self.sign, self.is_zero()) {
            (_, true) => Zero::zero(),
            (Sign::Plus, false) => One::one(),
            (Sign::Minus, false) => -BigInt::one(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, other: &BigInt) -> Option<BigInt> {
        self.divmod(other).ok().map(|(q, _)| q)
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, other: &BigInt) -> Option<BigInt> {
        self.divmod(other).ok().map(|(_, r)| r)
    }
}

impl Integer for BigInt {
    /// Truncating division, remainder takes the sign of self
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.divmod(other) {
            Ok(qr) => qr,
            Err(_) => panic!("Division by zero"),
        }
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (d, _) = self.div_mod_floor(other);
        d
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let (_, m) = self.div_mod_floor(other);
        m
    }

    /// Floored division, remainder takes the sign of other
    fn div_mod_floor(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (d, m) = self.div_rem(other);
        if !m.is_zero() && m.sign != other.sign {
            (d - 1i64, m + other)
        } else {
            (d, m)
        }
    }

    /// Greatest Common Divisor, always non-negative
    #[inline]
    fn gcd(&self, other: &BigInt) -> BigInt {
        crate::gcd(self.clone(), other.clone())
    }

    /// Lowest Common Multiple, always non-negative
    #[inline]
    fn lcm(&self, other: &BigInt) -> BigInt {
        crate::lcm(self.clone(), other.clone())
    }

    /// Deprecated, use `is_multiple_of` instead.
    #[inline]
    fn divides(&self, other: &BigInt) -> bool {
        self.is_multiple_of(other)
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        self.digits.as_slice().first().map_or(true, |d| d % 2 == 0)
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| n.to_i64())
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| n.to_u64())
    }

    fn to_i128(&self) -> Option<i128> {
        let m = self.magnitude_u128()?;
        match self.sign {
            Sign::Plus => i128::try_from(m).ok(),
            Sign::Minus if m <= i128::MAX as u128 => Some(-(m as i128)),
            Sign::Minus if m == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Minus => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::Plus => self.magnitude_u128(),
            Sign::Minus => None,
        }
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert!(BigInt::zero().is_zero());
        assert!(BigInt::one().is_one());
        assert!(!(-BigInt::one()).is_one());

        let mut n = BigInt::from(-123);
        n.set_zero();
        assert_eq!(n, BigInt::zero());
        assert_eq!(n.sign(), Sign::Plus);
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(BigInt::from_str_radix("-123", 10), Ok(BigInt::from(-123)));
        assert!(matches!(BigInt::from_str_radix("ff", 16), Err(ParseBigIntError::Other(_))));
    }

    #[test]
    fn test_signed() {
        let n = BigInt::from(-15);
        assert_eq!(Signed::abs(&n), BigInt::from(15));
        assert_eq!(n.signum(), BigInt::from(-1));
        assert_eq!(BigInt::zero().signum(), BigInt::zero());
        assert_eq!(BigInt::from(7).signum(), BigInt::one());
        assert!(n.is_negative());
        assert!(!n.is_positive());
        assert!(!BigInt::zero().is_negative());
        assert!(!BigInt::zero().is_positive());
        assert_eq!(BigInt::from(5).abs_sub(&BigInt::from(7)), BigInt::zero());
        assert_eq!(BigInt::from(7).abs_sub(&BigInt::from(5)), BigInt::from(2));
    }

    #[test]
    fn test_checked_div_rem() {
        let a = BigInt::from(-7);
        assert_eq!(a.checked_div(&BigInt::from(2)), Some(BigInt::from(-3)));
        assert_eq!(a.checked_rem(&BigInt::from(2)), Some(BigInt::from(-1)));
        assert_eq!(a.checked_div(&BigInt::zero()), None);
        assert_eq!(a.checked_rem(&BigInt::zero()), None);
    }

    mod floor {
        use super::*;
        use paste::paste;

        macro_rules! impl_case {
            ($name:ident: $a:literal, $b:literal => $d:literal, $m:literal) => {
                paste! {
                    #[test]
                    fn $name() {
                        let a = BigInt::from($a);
                        let b = BigInt::from($b);
                        assert_eq!(a.div_floor(&b), BigInt::from($d));
                        assert_eq!(a.mod_floor(&b), BigInt::from($m));
                    }
                }
            };
        }

        impl_case!(case_7_3: 7, 3 => 2, 1);
        impl_case!(case_n7_3: -7, 3 => -3, 2);
        impl_case!(case_7_n3: 7, -3 => -3, -2);
        impl_case!(case_n7_n3: -7, -3 => 2, -1);
        impl_case!(case_n6_3: -6, 3 => -2, 0);
        impl_case!(case_6_n3: 6, -3 => -2, 0);
    }

    #[test]
    fn test_integer_predicates() {
        assert!(BigInt::zero().is_even());
        assert!(BigInt::from(-1_000_000_000).is_even());
        assert!(BigInt::from(1_000_000_001).is_odd());
        assert!(BigInt::from(-21).is_multiple_of(&BigInt::from(7)));
        assert!(!BigInt::from(22).is_multiple_of(&BigInt::from(7)));
        assert!(BigInt::zero().is_multiple_of(&BigInt::zero()));
        assert!(!BigInt::from(1).is_multiple_of(&BigInt::zero()));
    }

    #[test]
    fn test_integer_gcd_lcm() {
        let a = BigInt::from(-12);
        let b = BigInt::from(18);
        assert_eq!(Integer::gcd(&a, &b), BigInt::from(6));
        assert_eq!(Integer::lcm(&a, &b), BigInt::from(36));
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(BigInt::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(BigInt::from(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(BigInt::from(u128::MAX).to_i128(), None);
        assert_eq!((BigInt::from(u128::MAX) + 1i64).to_u128(), None);
        assert_eq!(BigInt::from(-1).to_u64(), None);
        assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!((BigInt::from(i64::MIN) - 1i64).to_i64(), None);
        assert_eq!(BigInt::from_u64(u64::MAX), Some(BigInt::from(u64::MAX)));
    }
}
