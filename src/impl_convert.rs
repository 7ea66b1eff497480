//! Code for implementing From/To BigInts

use crate::*;
use crate::stdlib::convert::TryFrom;
use num_bigint::BigUint;


impl BigInt {
    /// Build from sign and magnitude of a primitive integer
    fn from_u128_magnitude(sign: Sign, mut n: u128) -> BigInt {
        let mut digits = BigDigitVec::with_capacity(5);
        while n != 0 {
            digits.push_significant_digit((n % BIG_DIGIT_RADIX as u128) as u32);
            n /= BIG_DIGIT_RADIX as u128;
        }
        BigInt::from_parts(digits, sign)
    }
}

macro_rules! impl_from_int_primitive {
    (unsigned $t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                BigInt::from_u128_magnitude(Sign::Plus, n as u128)
            }
        }

        impl_from_int_primitive!(REF $t);
    };
    (signed $t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
                BigInt::from_u128_magnitude(sign, n.unsigned_abs() as u128)
            }
        }

        impl_from_int_primitive!(REF $t);
    };
    (REF $t:ty) => {
        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_int_primitive!(unsigned u8);
impl_from_int_primitive!(unsigned u16);
impl_from_int_primitive!(unsigned u32);
impl_from_int_primitive!(unsigned u64);
impl_from_int_primitive!(unsigned u128);
impl_from_int_primitive!(unsigned usize);
impl_from_int_primitive!(signed i8);
impl_from_int_primitive!(signed i16);
impl_from_int_primitive!(signed i32);
impl_from_int_primitive!(signed i64);
impl_from_int_primitive!(signed i128);
impl_from_int_primitive!(signed isize);


impl TryFrom<&BigInt> for i64 {
    type Error = ArithmeticError;

    fn try_from(n: &BigInt) -> Result<i64, ArithmeticError> {
        n.long_value()
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = ArithmeticError;

    fn try_from(n: BigInt) -> Result<i64, ArithmeticError> {
        n.long_value()
    }
}


impl From<&num_bigint::BigInt> for BigInt {
    /// Rebase the binary u32 digits of num_bigint's magnitude into
    /// decimal bigdigits, sixteen bits at a time
    fn from(n: &num_bigint::BigInt) -> Self {
        let mut digits = BigDigitVec::new();
        for d in n.magnitude().iter_u32_digits().rev() {
            digits.mul_value(1 << 16);
            digits.add_value(d >> 16);
            digits.mul_value(1 << 16);
            digits.add_value(d & 0xFFFF);
        }

        let sign = match n.sign() {
            num_bigint::Sign::Minus => Sign::Minus,
            num_bigint::Sign::NoSign | num_bigint::Sign::Plus => Sign::Plus,
        };
        BigInt::from_parts(digits, sign)
    }
}

impl From<num_bigint::BigInt> for BigInt {
    fn from(n: num_bigint::BigInt) -> Self {
        BigInt::from(&n)
    }
}

impl From<&BigInt> for num_bigint::BigInt {
    fn from(n: &BigInt) -> Self {
        let mut magnitude = BigUint::default();
        for &d in n.digits().iter().rev() {
            magnitude *= BIG_DIGIT_RADIX as u32;
            magnitude += d;
        }

        let sign = match n.sign() {
            Sign::Minus => num_bigint::Sign::Minus,
            Sign::Plus => num_bigint::Sign::Plus,
        };
        num_bigint::BigInt::from_biguint(sign, magnitude)
    }
}

impl From<BigInt> for num_bigint::BigInt {
    fn from(n: BigInt) -> Self {
        num_bigint::BigInt::from(&n)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($t:ident: $n:expr => $digits:literal) => {
            paste! {
                #[test]
                fn [< from_ $t _ $digits >]() {
                    let n: $t = $n;
                    let b = BigInt::from(n);
                    assert_eq!(b.to_string(), n.to_string());
                    assert_eq!(BigInt::from(&n), b);
                    assert_eq!(b.digits().len(), $digits);
                }
            }
        };
    }

    impl_case!(u8: u8::MAX => 1);
    impl_case!(i8: i8::MIN => 1);
    impl_case!(u32: u32::MAX => 2);
    impl_case!(i32: 0 => 0);
    impl_case!(i64: i64::MIN => 3);
    impl_case!(u64: u64::MAX => 3);
    impl_case!(i128: i128::MIN => 5);
    impl_case!(u128: u128::MAX => 5);

    #[test]
    fn try_into_i64() {
        let n = BigInt::from(i64::MIN);
        assert_eq!(i64::try_from(&n), Ok(i64::MIN));

        let n = BigInt::from(i64::MAX) + 1i64;
        assert_eq!(i64::try_from(n), Err(ArithmeticError::Overflow));
    }

    mod num_bigint_interop {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $s:literal) => {
                #[test]
                fn $name() {
                    let ours: BigInt = $s.parse().unwrap();
                    let theirs: num_bigint::BigInt = $s.parse().unwrap();

                    assert_eq!(num_bigint::BigInt::from(&ours), theirs);
                    assert_eq!(BigInt::from(&theirs), ours);
                    assert_eq!(BigInt::from(theirs.clone()), ours);
                    assert_eq!(num_bigint::BigInt::from(ours), theirs);
                }
            };
        }

        impl_case!(case_0: "0");
        impl_case!(case_1: "1");
        impl_case!(case_n1: "-1");
        impl_case!(case_radix: "1000000000");
        impl_case!(case_u32_boundary: "4294967296");
        impl_case!(case_65536: "65536");
        impl_case!(case_large: "-31415926535897932384626433832795028841971693993751058209749445923");
    }
}
