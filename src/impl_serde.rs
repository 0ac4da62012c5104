//!
//! Support for serde implementations
//!
//! A list serializes as its decimal string. Deserialization accepts a
//! decimal string or a non-negative integer and yields a ternary list.
//!
use std::fmt;
use std::str::FromStr;

use serde_crate::{de, ser};

use crate::DigitList;

impl ser::Serialize for DigitList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self.to_decimal_string())
    }
}

/// Used by SerDe to construct a DigitList
struct DigitListVisitor;

impl<'de> de::Visitor<'de> for DigitListVisitor {
    type Value = DigitList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        // empty lists serialize as ""
        if value.is_empty() {
            return Ok(DigitList::new());
        }
        DigitList::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        Ok(DigitList::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        Ok(DigitList::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        match u64::try_from(value) {
            Ok(n) => Ok(DigitList::from(n)),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }
}

impl<'de> de::Deserialize<'de> for DigitList {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DigitListVisitor)
    }
}
