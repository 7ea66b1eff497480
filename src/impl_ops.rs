//! Implement math operations against primitive integers
//!
//! `+` and `-` accept i64; `*`, `/` and `%` accept i32 and work
//! directly on the bigdigits, without promoting the scalar to a BigInt.

use crate::*;


macro_rules! impl_add_sub_for_primitive {
    ($t:ty) => {
        impl_add_sub_for_primitive!(IMPL:ADD $t);
        impl_add_sub_for_primitive!(IMPL:SUB $t);
        impl_add_sub_for_primitive!(IMPL:ASSIGN $t);
    };
    (IMPL:ADD $t:ty) => {
        impl Add<$t> for BigInt {
            type Output = BigInt;

            fn add(mut self, rhs: $t) -> BigInt {
                self += rhs;
                self
            }
        }

        impl Add<$t> for &BigInt {
            type Output = BigInt;

            fn add(self, rhs: $t) -> BigInt {
                BigInt::from(rhs) + self
            }
        }

        impl Add<BigInt> for $t {
            type Output = BigInt;

            fn add(self, rhs: BigInt) -> BigInt {
                rhs + self
            }
        }

        impl Add<&BigInt> for $t {
            type Output = BigInt;

            fn add(self, rhs: &BigInt) -> BigInt {
                rhs + self
            }
        }
    };
    (IMPL:SUB $t:ty) => {
        impl Sub<$t> for BigInt {
            type Output = BigInt;

            fn sub(mut self, rhs: $t) -> BigInt {
                self -= rhs;
                self
            }
        }

        impl Sub<$t> for &BigInt {
            type Output = BigInt;

            fn sub(self, rhs: $t) -> BigInt {
                BigInt::from(rhs).neg() + self
            }
        }

        impl Sub<BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: BigInt) -> BigInt {
                rhs.neg() + self
            }
        }

        impl Sub<&BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: &BigInt) -> BigInt {
                rhs.neg() + self
            }
        }
    };
    (IMPL:ASSIGN $t:ty) => {
        impl AddAssign<$t> for BigInt {
            fn add_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    *self += &BigInt::from(rhs);
                }
            }
        }

        impl SubAssign<$t> for BigInt {
            fn sub_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    *self -= &BigInt::from(rhs);
                }
            }
        }

        impl AddAssign<&$t> for BigInt {
            fn add_assign(&mut self, rhs: &$t) {
                *self += *rhs;
            }
        }

        impl SubAssign<&$t> for BigInt {
            fn sub_assign(&mut self, rhs: &$t) {
                *self -= *rhs;
            }
        }
    };
}

impl_add_sub_for_primitive!(i64);


impl MulAssign<i32> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        self.digits.mul_value(rhs.unsigned_abs());
        if rhs < 0 {
            self.sign = -self.sign;
        }
        self.trim();
    }
}

impl Mul<i32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(mut self, rhs: i32) -> BigInt {
        self *= rhs;
        self
    }
}

impl Mul<i32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: i32) -> BigInt {
        self.clone() * rhs
    }
}

forward_communative_binop!(impl Mul<BigInt>::mul for i32);

impl Mul<&BigInt> for i32 {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        rhs * self
    }
}


impl Div<i32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, rhs: i32) -> BigInt {
        match self.div_rem_i32(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("Division by zero"),
        }
    }
}

impl Div<i32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, rhs: i32) -> BigInt {
        &self / rhs
    }
}

impl DivAssign<i32> for BigInt {
    #[inline]
    fn div_assign(&mut self, rhs: i32) {
        *self = &*self / rhs;
    }
}


impl Rem<i32> for &BigInt {
    type Output = i32;

    /// Remainder with the sign of the dividend
    #[inline]
    fn rem(self, rhs: i32) -> i32 {
        match self.div_rem_i32(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("Division by zero"),
        }
    }
}

impl Rem<i32> for BigInt {
    type Output = i32;

    #[inline]
    fn rem(self, rhs: i32) -> i32 {
        &self % rhs
    }
}
