//! Radix definitions
//!
//! Empty structs used to make generic algorithms over kind of radix
//!
#![allow(non_camel_case_types)]

use crate::stdlib::fmt;


/// All the information needed to specify a limb radix, and methods operating on integers
pub trait RadixType : Copy + Clone + Default + fmt::Debug {
    /// the inner type of values
    type Base
        : 'static
        + Copy
        + num_integer::Integer
        + num_traits::PrimInt
        + num_traits::FromPrimitive
        + num_traits::Zero
        + num_traits::One;

    /// double wide unsigned type (capable of storing product of two BigDigits)
    type BaseDouble
        : 'static
        + Copy
        + num_integer::Integer
        + num_traits::PrimInt
        + num_traits::FromPrimitive
        + num_traits::Zero
        + num_traits::One
        + num_traits::AsPrimitive<Self::Base>
        + From<u8>
        + From<Self::Base>;

    /// Value of the RADIX
    const RADIX: Self::BaseDouble;

    /// Check contents of iterable contains values less than the radix
    fn validate_digits<'a, I: IntoIterator<Item=&'a Self::Base>>(i: I) -> bool {
        use num_traits::Zero;
        i.into_iter().map(|&d| d.into()).all(|d| Self::BaseDouble::zero() <= d && d < Self::RADIX)
    }

    /// Split double-wide value into (high, low) digits
    fn split_wide_digit(n: Self::BaseDouble) -> (Self::Base, Self::Base) {
        use num_traits::AsPrimitive;

        let (hi, lo) = num_integer::div_rem(n, Self::RADIX);
        return (hi.as_(), lo.as_());
    }

    /// Perform n += carry, returning overflow in carry
    fn addassign_carry(n: &mut Self::Base, carry: &mut Self::Base) {
        let (hi, lo) = Self::expanding_add(*n, *carry);
        *carry = hi;
        *n = lo;
    }

    fn expanding_add(a: Self::Base, b: Self::Base) -> (Self::Base, Self::Base) {
        let a: Self::BaseDouble = a.into();
        let b: Self::BaseDouble = b.into();
        Self::split_wide_digit(a + b)
    }

    /// Perform n = n * b + carry, returning overflow in carry
    fn mulassign_carry(n: &mut Self::Base, b: Self::Base, carry: &mut Self::Base) {
        let n_wide: Self::BaseDouble = (*n).into();
        let b: Self::BaseDouble = b.into();
        let (hi, lo) = Self::split_wide_digit(n_wide * b + (*carry).into());
        *carry = hi;
        *n = lo;
    }

    /// Perform c += a * b + carry, returning overflow in carry
    fn carrying_mul_add_inplace(a: Self::Base, b: Self::Base, c: &mut Self::Base, carry: &mut Self::Base) {
        let a: Self::BaseDouble = a.into();
        let b: Self::BaseDouble = b.into();
        let (hi, lo) = Self::split_wide_digit(a * b + (*c).into() + (*carry).into());
        *c = lo;
        *carry = hi;
    }

    fn add_carry_into_slice(dest: &mut [Self::Base], c: &mut Self::Base) {
        use num_traits::Zero;

        for d in dest.iter_mut() {
            if c.is_zero() {
                return;
            }

            let (overflow, sum) = Self::expanding_add(*c, *d);
            *d = sum;
            *c = overflow;
        }
    }
}

/// Radix=*1,000,000* storage=*u32*
///
/// Used while multiplying: limb products are small enough that long
/// sums of them can be carried in an i64.
#[derive(Copy,Clone,Debug,Default)]
pub struct RADIX_10p6_u32;

/// Radix=*1,000,000,000* storage=*u32*
#[derive(Copy,Clone,Debug,Default)]
pub struct RADIX_10p9_u32;


/// Radix which is an exact power of ten
pub(crate) trait RadixPowerOfTen : RadixType {
    /// Number of decimal digits stored in each bigdigit
    const DIGITS: usize;
}

impl RadixPowerOfTen for RADIX_10p9_u32 {
    const DIGITS: usize = 9;
}
impl RadixPowerOfTen for RADIX_10p6_u32 {
    const DIGITS: usize = 6;
}


impl RadixType for RADIX_10p6_u32 {
    type Base = u32;
    type BaseDouble = u64;

    const RADIX: Self::BaseDouble = 1_000_000;
}


impl RadixType for RADIX_10p9_u32 {
    type Base = u32;
    type BaseDouble = u64;

    const RADIX: Self::BaseDouble = 1_000_000_000;
}


#[cfg(test)]
mod test_validate {
    use super::*;

    macro_rules! impl_case {
        (valid $name:ident : $radix:ident ~ $values:expr) => {
            #[test]
            fn $name() {
                assert!($radix::validate_digits($values.iter()));
            }
        };
        (invalid $name:ident : $radix:ident ~ $values:expr) => {
            #[test]
            fn $name() {
                assert!(!$radix::validate_digits($values.iter()));
            }
        };
    }

    impl_case!(valid case_valid: RADIX_10p6_u32 ~ [1u32, 2, 3, 4, 5, 600]);
    impl_case!(valid case_p6_max: RADIX_10p6_u32 ~ [999999u32]);
    impl_case!(invalid case_p6_toobig: RADIX_10p6_u32 ~ [10000u32, 1000000, 2, 3]);
    impl_case!(valid case_p9_max: RADIX_10p9_u32 ~ [999999999u32, 0]);
    impl_case!(invalid case_p9_toobig: RADIX_10p9_u32 ~ [3330199352u32]);
}


#[cfg(test)]
#[path = "radix.tests.rs"]
mod tests;
