//!
//! Support for serde implementations
//!
use crate::*;
use serde::{de, ser};


impl ser::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigInt
struct BigIntVisitor;

impl<'de> de::Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted decimal integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::from_str(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }
}

impl<'de> de::Deserialize<'de> for BigInt {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigIntVisitor)
    }
}
