//! Integer fields that also accept their decimal string form.
//!
//! Ids, bounds and timestamps arrive either as JSON numbers or as strings
//! like `"1700000000"`. Both deserialize to the same `i64`; any other string
//! is still a type error.
//!
//! Use with `#[serde(deserialize_with = "...")]`:
//!
//! ```ignore
//! #[serde(deserialize_with = "lenient::int")]
//! pub id: i64,
//! ```

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// An `i64` read from a JSON integer or a string holding one.
struct LenientI64(i64);

struct LenientI64Visitor;

impl Visitor<'_> for LenientI64Visitor {
    type Value = LenientI64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LenientI64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(LenientI64)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse()
            .map(LenientI64)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for LenientI64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientI64Visitor)
    }
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    LenientI64::deserialize(deserializer).map(|v| v.0)
}

/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn option_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Option::<LenientI64>::deserialize(deserializer).map(|v| v.map(|v| v.0))
}

pub fn vec_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    Vec::<LenientI64>::deserialize(deserializer).map(|v| v.into_iter().map(|v| v.0).collect())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "super::int")]
        id: i64,
        #[serde(default, deserialize_with = "super::option_int")]
        min: Option<i64>,
        #[serde(default, deserialize_with = "super::vec_int")]
        tags: Vec<i64>,
    }

    #[test]
    fn numbers_and_numeric_strings_are_equivalent() {
        let a: Sample =
            serde_json::from_value(json!({ "id": 5, "min": -3, "tags": [1, 2] })).unwrap();
        let b: Sample =
            serde_json::from_value(json!({ "id": "5", "min": "-3", "tags": ["1", 2] })).unwrap();

        assert_eq!((a.id, a.min, a.tags), (5, Some(-3), vec![1, 2]));
        assert_eq!((b.id, b.min, b.tags), (5, Some(-3), vec![1, 2]));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let s: Sample = serde_json::from_value(json!({ "id": " 42 " })).unwrap();
        assert_eq!(s.id, 42);
    }

    #[test]
    fn optional_field_may_be_absent_or_null() {
        let absent: Sample = serde_json::from_value(json!({ "id": 1 })).unwrap();
        let null: Sample = serde_json::from_value(json!({ "id": 1, "min": null })).unwrap();

        assert_eq!(absent.min, None);
        assert_eq!(null.min, None);
        assert!(absent.tags.is_empty());
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        let err = serde_json::from_value::<Sample>(json!({ "id": "five" })).unwrap_err();
        assert!(err.to_string().contains("five"), "got: {err}");
    }

    #[test]
    fn fractional_and_boolean_values_are_rejected() {
        assert!(serde_json::from_value::<Sample>(json!({ "id": "5.5" })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "id": 5.5 })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "id": true })).is_err());
    }

    #[test]
    fn values_beyond_i64_are_rejected() {
        let too_big = u64::MAX;
        assert!(serde_json::from_value::<Sample>(json!({ "id": too_big })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "id": "9223372036854775808" })).is_err());
    }
}
