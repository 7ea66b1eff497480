// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Big Integer
//!
//! `BigInt` stores a signed integer of any size as a vector of
//! base-10<sup>9</sup> "bigdigits" (limbs), least significant first.
//! Storing decimal limbs makes parsing and printing cheap, and lets the
//! value be rebased into smaller decimal limbs for Karatsuba
//! multiplication.
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers.
//!
//! # Example
//!
//! ```
//! use decimal_bigint::BigInt;
//! use std::str::FromStr;
//!
//! let a = BigInt::from_str("123456789012345678901234567890").unwrap();
//! let b = BigInt::from(-987654321);
//!
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "-121932631124828532112482853211126352690");
//! assert_eq!(&product / &b, a);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::default::Default;
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use self::stdlib::iter::{Product, Sum};
use self::stdlib::str::FromStr;
use self::stdlib::string::String;
use self::stdlib::fmt;

pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
pub use num_integer::Integer;

#[macro_use]
mod macros;

// "bigdigit" storage & radix conversion
mod bigdigit;
// magnitude algorithms
mod arithmetic;

// From<T>, To<T>, TryFrom<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialEq, Ord
mod impl_cmp;

// Implementations of num_traits, num_integer
mod impl_num;

// Display & Debug
mod impl_fmt;

// FromStr
mod impl_trait_from_str;

mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;

use bigdigit::{BigDigitVec, BIG_DIGIT_RADIX, MAX_DIGITS_PER_BIGDIGIT};
use arithmetic::cmp_digit_slices;


/// Sign of a BigInt
///
/// Zero is always `Plus`.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    /// The sign as a multiplier: -1 or +1
    #[inline]
    pub fn as_i32(self) -> i32 {
        match self {
            Sign::Minus => -1,
            Sign::Plus => 1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}


/// An arbitrary precision signed integer
///
/// Digits are stored little-endian in base 10<sup>9</sup>; the digit
/// vector never has a most-significant zero, and zero (the empty
/// vector) always has `Sign::Plus`.
///
#[derive(Clone)]
pub struct BigInt {
    digits: BigDigitVec,
    sign: Sign,
}

impl BigInt {
    /// Creates a `BigInt` with value zero
    #[inline]
    pub fn new() -> BigInt {
        BigInt {
            digits: BigDigitVec::new(),
            sign: Sign::Plus,
        }
    }

    /// Build from parts, restoring the invariants on digits and sign
    #[inline]
    pub(crate) fn from_parts(digits: BigDigitVec, sign: Sign) -> BigInt {
        let mut result = BigInt {
            digits: digits,
            sign: sign,
        };
        result.trim();
        result
    }

    /// Build from little-endian base-10<sup>9</sup> digits
    ///
    /// Returns None if any digit is not less than 10<sup>9</sup>.
    ///
    /// ```
    /// use decimal_bigint::{BigInt, Sign};
    ///
    /// let n = BigInt::from_digits(Sign::Minus, vec![5, 1]).unwrap();
    /// assert_eq!(n.to_string(), "-1000000005");
    /// assert!(BigInt::from_digits(Sign::Plus, vec![1_000_000_000]).is_none());
    /// ```
    pub fn from_digits(sign: Sign, digits: stdlib::Vec<u32>) -> Option<BigInt> {
        if digits.iter().any(|&d| d as u64 >= BIG_DIGIT_RADIX) {
            return None;
        }
        Some(BigInt::from_parts(BigDigitVec::from_vec(digits), sign))
    }

    /// Parse a decimal string
    ///
    /// Any run of leading `+` and `-` characters is accepted, each `-`
    /// flipping the sign; the rest must be ASCII digits.
    ///
    #[inline]
    pub fn parse(s: &str) -> Result<BigInt, ParseBigIntError> {
        let (sign, digits) = parsing::parse_decimal_digits(s)?;
        Ok(BigInt::from_parts(digits, sign))
    }

    /// Sign of the number (`Plus` for zero)
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Little-endian base-10<sup>9</sup> digits of the magnitude
    #[inline]
    pub fn digits(&self) -> &[u32] {
        self.digits.as_slice()
    }

    /// Remove significant zero digits, fixing the sign of zero
    #[inline]
    fn trim(&mut self) {
        self.digits.strip_significant_zeros();
        if self.digits.is_empty() {
            self.sign = Sign::Plus;
        }
    }

    /// Absolute value
    #[inline]
    pub fn abs(&self) -> BigInt {
        BigInt {
            digits: self.digits.clone(),
            sign: Sign::Plus,
        }
    }

    /// Compare absolute values
    #[inline]
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        cmp_digit_slices(self.digits.as_slice(), other.digits.as_slice())
    }

    /// Convert to i64
    ///
    /// Returns `ArithmeticError::Overflow` if the value is out of range.
    ///
    /// ```
    /// use decimal_bigint::{ArithmeticError, BigInt};
    ///
    /// let n: BigInt = "-9223372036854775808".parse().unwrap();
    /// assert_eq!(n.long_value(), Ok(i64::MIN));
    ///
    /// let n: BigInt = "9223372036854775808".parse().unwrap();
    /// assert_eq!(n.long_value(), Err(ArithmeticError::Overflow));
    /// ```
    pub fn long_value(&self) -> Result<i64, ArithmeticError> {
        self.to_i64().ok_or(ArithmeticError::Overflow)
    }

    /// Magnitude as u128, None if too large
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        let mut result: u128 = 0;
        for &d in self.digits.as_slice().iter().rev() {
            result = result.checked_mul(BIG_DIGIT_RADIX as u128)?.checked_add(d as u128)?;
        }
        Some(result)
    }

    /// Replace value with the number parsed from string
    ///
    /// On error the value is left unchanged.
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// let mut n = BigInt::from(12);
    /// n.read("--5").unwrap();
    /// assert_eq!(n, BigInt::from(5));
    ///
    /// assert!(n.read("5x").is_err());
    /// assert_eq!(n, BigInt::from(5));
    /// ```
    pub fn read(&mut self, s: &str) -> Result<(), ParseBigIntError> {
        *self = BigInt::parse(s)?;
        Ok(())
    }

    /// Read the next whitespace-delimited token from a stream, and
    /// replace value with the number it contains
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// let mut input = "  -42 1000000000000\n".as_bytes();
    /// let mut n = BigInt::new();
    ///
    /// n.read_token(&mut input).unwrap();
    /// assert_eq!(n, BigInt::from(-42));
    /// n.read_token(&mut input).unwrap();
    /// assert_eq!(n, BigInt::from(1_000_000_000_000i64));
    /// ```
    #[cfg(feature = "std")]
    pub fn read_token<R: std::io::BufRead>(&mut self, reader: &mut R) -> Result<(), ParseBigIntError> {
        let token = parsing::read_whitespace_delimited_token(reader)?;
        self.read(&token)
    }

    /// Divide by other, returning (quotient, remainder)
    ///
    /// Division truncates toward zero, and the remainder has the sign
    /// of the dividend (or is zero).
    ///
    /// ```
    /// use decimal_bigint::{ArithmeticError, BigInt};
    ///
    /// let (q, r) = BigInt::from(-7).divmod(&BigInt::from(3)).unwrap();
    /// assert_eq!(q, BigInt::from(-2));
    /// assert_eq!(r, BigInt::from(-1));
    ///
    /// let err = BigInt::from(1).divmod(&BigInt::new());
    /// assert_eq!(err, Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn divmod(&self, other: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.divmod_nonzero(other))
    }

    /// divmod with divisor known to be non-zero
    pub(crate) fn divmod_nonzero(&self, other: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(!other.is_zero());

        let (q, r) = arithmetic::division::divrem_digit_slices(
            self.digits.as_slice(), other.digits.as_slice()
        );
        let quotient = BigInt::from_parts(q, self.sign * other.sign);
        let remainder = BigInt::from_parts(r, self.sign);
        (quotient, remainder)
    }

    /// Divide by a small integer, returning (quotient, remainder)
    ///
    /// The remainder has the sign of the dividend.
    ///
    pub fn div_rem_i32(&self, other: i32) -> Result<(BigInt, i32), ArithmeticError> {
        if other == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        let mut digits = self.digits.clone();
        let rem = digits.divrem_value(other.unsigned_abs()) as i64;
        let sign = if other < 0 { -self.sign } else { self.sign };

        let rem = (rem * self.sign.as_i32() as i64) as i32;
        Ok((BigInt::from_parts(digits, sign), rem))
    }

    /// Number of characters in the decimal representation, including
    /// the minus sign of negative numbers
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(0).number_of_digits(), 1);
    /// assert_eq!(BigInt::from(1000000000).number_of_digits(), 10);
    /// assert_eq!(BigInt::from(-12345).number_of_digits(), 6);
    /// ```
    pub fn number_of_digits(&self) -> usize {
        let sign_len = match self.sign {
            Sign::Minus => 1,
            Sign::Plus => 0,
        };

        let mut leading = self.digits.most_significant_digit() / 10;
        let mut leading_len = 1;
        while leading != 0 {
            leading /= 10;
            leading_len += 1;
        }

        let rest_len = self.digits.len().saturating_sub(1) * MAX_DIGITS_PER_BIGDIGIT;
        sign_len + leading_len + rest_len
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::new()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.digits.is_empty() {
            self.sign = -self.sign;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.clone().neg()
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits.as_slice().hash(state);
    }
}

impl Sum for BigInt {
    #[inline]
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    #[inline]
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl Product for BigInt {
    #[inline]
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(One::one(), |a, b| a * b)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    #[inline]
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(One::one(), |a, b| a * b)
    }
}


/// Greatest common divisor, always non-negative
///
/// ```
/// use decimal_bigint::{gcd, BigInt};
///
/// assert_eq!(gcd(BigInt::from(4), BigInt::from(-6)), BigInt::from(2));
/// assert_eq!(gcd(BigInt::from(0), BigInt::from(-6)), BigInt::from(6));
/// ```
pub fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let r = a.divmod_nonzero(&b).1;
        a = stdlib::mem::replace(&mut b, r);
    }
    a.sign = Sign::Plus;
    a
}

/// Least common multiple, always non-negative
///
/// Zero if either argument is zero.
///
/// ```
/// use decimal_bigint::{lcm, BigInt};
///
/// assert_eq!(lcm(BigInt::from(4), BigInt::from(-6)), BigInt::from(12));
/// ```
pub fn lcm(a: BigInt, b: BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(a.clone(), b.clone());
    (a / g * b).abs()
}


/// Errors from arithmetic operations with a checked result
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Divisor (or modulus) was zero
    DivisionByZero,
    /// Value does not fit in the requested type
    Overflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            DivisionByZero => "Division by zero".fmt(f),
            Overflow => "Value out of range".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}


/// Errors from parsing a BigInt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// No digits were found
    Empty,
    /// A character other than an ASCII digit followed the sign
    InvalidDigit,
    /// Stream could not be read
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
    Other(String),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            Empty => "Failed to parse empty string".fmt(f),
            InvalidDigit => "Invalid digit found in string".fmt(f),
            #[cfg(feature = "std")]
            Io(ref kind) => write!(f, "Failed to read input: {:?}", kind),
            Other(ref reason) => reason[..].fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigIntError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ParseBigIntError {
    fn from(err: std::io::Error) -> ParseBigIntError {
        ParseBigIntError::Io(err.kind())
    }
}
