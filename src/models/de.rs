//! Serde helpers for loosely-typed tabular cells.

use serde::de;

// Deserialize a string, number or bool as Option<String>. Unlike an absent or
// null cell, an empty string stays `Some("")`: the cell is present.
pub(crate) fn optional_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct CellVisitor;

    impl<'de> de::Visitor<'de> for CellVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(CellVisitor)
        }
    }

    deserializer.deserialize_any(CellVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Cell {
        #[serde(default, deserialize_with = "super::optional_cell")]
        value: Option<String>,
    }

    fn parse(json: &str) -> Result<Option<String>, serde_json::Error> {
        serde_json::from_str::<Cell>(json).map(|c| c.value)
    }

    #[test]
    fn test_strings_and_numbers_become_text() {
        assert_eq!(parse(r#"{"value": "abc"}"#).unwrap(), Some("abc".to_string()));
        assert_eq!(parse(r#"{"value": 42}"#).unwrap(), Some("42".to_string()));
        assert_eq!(parse(r#"{"value": -7}"#).unwrap(), Some("-7".to_string()));
        assert_eq!(parse(r#"{"value": 1.5}"#).unwrap(), Some("1.5".to_string()));
    }

    #[test]
    fn test_empty_string_is_present() {
        assert_eq!(parse(r#"{"value": ""}"#).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_null_and_absent_are_none() {
        assert_eq!(parse(r#"{"value": null}"#).unwrap(), None);
        assert_eq!(parse(r#"{}"#).unwrap(), None);
    }

    #[test]
    fn test_arrays_are_rejected() {
        assert!(parse(r#"{"value": [1]}"#).is_err());
    }
}
