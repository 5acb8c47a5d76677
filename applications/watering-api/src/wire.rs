//! Serde adapters for the encodings used by the mobile app and the device.

/// Booleans travel as `0`/`1` integers; input also accepts `true`/`false`
/// and the textual forms `"0"`/`"1"`.
pub mod flag {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(b),
            Raw::Int(0) => Ok(false),
            Raw::Int(1) => Ok(true),
            Raw::Text(s) if s.trim() == "0" => Ok(false),
            Raw::Text(s) if s.trim() == "1" => Ok(true),
            _ => Err(serde::de::Error::custom("expected 0 or 1")),
        }
    }
}

/// Numbers that the device firmware may send either as JSON numbers or as
/// numeric strings.
pub mod lenient {
    use serde::{self, Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Deserialize<'de>,
        T::Err: Display,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Number(T),
            Text(String),
        }

        match Raw::<T>::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Flagged {
        #[serde(with = "super::flag")]
        on: bool,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reading {
        #[serde(deserialize_with = "super::lenient::deserialize")]
        id: i64,
        #[serde(deserialize_with = "super::lenient::deserialize")]
        value: f64,
    }

    #[test]
    fn test_flag_serializes_as_integer() {
        assert_eq!(serde_json::to_value(Flagged { on: true }).unwrap(), json!({ "on": 1 }));
        assert_eq!(serde_json::to_value(Flagged { on: false }).unwrap(), json!({ "on": 0 }));
    }

    #[test]
    fn test_flag_accepts_integer_text_and_bool() {
        for (raw, expected) in [
            (json!(1), true),
            (json!("1"), true),
            (json!(true), true),
            (json!(0), false),
            (json!("0"), false),
            (json!(false), false),
        ] {
            let parsed: Flagged = serde_json::from_value(json!({ "on": raw })).unwrap();
            assert_eq!(parsed.on, expected);
        }
    }

    #[test]
    fn test_flag_rejects_other_values() {
        assert!(serde_json::from_value::<Flagged>(json!({ "on": 2 })).is_err());
        assert!(serde_json::from_value::<Flagged>(json!({ "on": "yes" })).is_err());
    }

    #[test]
    fn test_lenient_accepts_numbers_and_numeric_strings() {
        let from_numbers: Reading = serde_json::from_value(json!({ "id": 2, "value": 41.5 })).unwrap();
        let from_strings: Reading =
            serde_json::from_value(json!({ "id": "2", "value": " 41.5" })).unwrap();

        assert_eq!(from_numbers, Reading { id: 2, value: 41.5 });
        assert_eq!(from_strings, from_numbers);
    }

    #[test]
    fn test_lenient_rejects_garbage() {
        assert!(serde_json::from_value::<Reading>(json!({ "id": "two", "value": 1.0 })).is_err());
        assert!(serde_json::from_value::<Reading>(json!({ "id": 1 })).is_err());
    }
}
