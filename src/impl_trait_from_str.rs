use crate::*;
use crate::stdlib::convert::TryFrom;

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::parse(s)
    }
}

impl<'a> TryFrom<&'a str> for BigInt {
    type Error = ParseBigIntError;

    #[inline]
    fn try_from(s: &'a str) -> Result<BigInt, ParseBigIntError> {
        BigInt::parse(s)
    }
}
