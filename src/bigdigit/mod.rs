//! Structs and traits describing radix-dependant bigdigits
//!
//! A bigdigit (limb) is one component of a BigInt, holding a fixed
//! number of decimal digits. Canonical storage uses nine digits per
//! limb; multiplication temporarily works with six.
//!

pub(crate) mod radix;
pub(crate) mod digitvec;
pub(crate) mod convert;

pub(crate) use self::radix::{RadixType, RADIX_10p6_u32, RADIX_10p9_u32};
pub(crate) use self::digitvec::DigitVec;

/// Radix used to store the digits of a BigInt
pub(crate) type StorageRadix = RADIX_10p9_u32;

/// Radix used by the Karatsuba multiplier
pub(crate) type MultiplicationRadix = RADIX_10p6_u32;

/// Little-endian storage vector of a BigInt
pub(crate) type BigDigitVec = DigitVec<StorageRadix>;

/// Radix of the stored bigdigits
pub const BIG_DIGIT_RADIX: u64 = 1_000_000_000;

/// Number of decimal digits stored in each bigdigit
pub const MAX_DIGITS_PER_BIGDIGIT: usize = 9;
