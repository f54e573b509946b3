//! Serde helpers for flexible deserialization.
//!
//! The Steam Web API is inconsistent about numeric encoding: 64-bit
//! identifiers arrive as JSON strings in some payloads (`"gid": "103582..."`)
//! and as bare integers in others. The adapter here accepts both.

use std::fmt;

use serde::de::{self, Visitor};

/// A `serde_as` type that deserializes a `u64` from either a JSON number or
/// a decimal string.
///
/// Use with `#[serde_as(as = "U64FromAny")]`. Values serialize back as
/// strings, matching how the API itself encodes 64-bit ids.
pub(crate) struct U64FromAny;

impl<'de> serde_with::DeserializeAs<'de, u64> for U64FromAny {
    fn deserialize_as<D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NumberOrStringVisitor;

        impl Visitor<'_> for NumberOrStringVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("unsigned integer or decimal string")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(v).map_err(|_| E::custom("negative value for 64-bit id"))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(NumberOrStringVisitor)
    }
}

impl serde_with::SerializeAs<u64> for U64FromAny {
    fn serialize_as<S>(source: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_with::serde_as;

    #[serde_as]
    #[derive(serde::Deserialize)]
    struct Probe(#[serde_as(as = "super::U64FromAny")] u64);

    #[test]
    fn accepts_number() {
        let Probe(v) = serde_json::from_str("76561197961279983").unwrap();
        assert_eq!(v, 76_561_197_961_279_983, "bare integer should parse");
    }

    #[test]
    fn accepts_string() {
        let Probe(v) = serde_json::from_str("\"76561197961279983\"").unwrap();
        assert_eq!(v, 76_561_197_961_279_983, "quoted integer should parse");
    }

    #[test]
    fn rejects_garbage_string() {
        assert!(serde_json::from_str::<Probe>("\"not-an-id\"").is_err());
    }
}
